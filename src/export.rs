//! Parameter table export.
//!
//! Writes [`Params`] records as CSV (one row per model, header from the
//! field names) or as a JSON array, for use by external model generators.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ExportError;
use crate::jst_xh::Params;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// JSON array of records.
    Json,
}

impl ExportFormat {
    /// File extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown export format '{other}'. Must be one of: csv, json")),
        }
    }
}

/// Writes records as CSV.
///
/// # Errors
///
/// Returns an error if serialisation or the underlying writer fails.
pub fn write_csv<'a, W, I>(writer: W, records: I) -> Result<(), ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a Params>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes records as a JSON array.
///
/// # Errors
///
/// Returns an error if serialisation or the underlying writer fails.
pub fn write_json<'a, W, I>(writer: W, records: I, pretty: bool) -> Result<(), ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a Params>,
{
    let records: Vec<&Params> = records.into_iter().collect();
    if pretty {
        serde_json::to_writer_pretty(writer, &records)?;
    } else {
        serde_json::to_writer(writer, &records)?;
    }
    Ok(())
}

/// Writes records in the given format.
///
/// # Errors
///
/// Returns an error if serialisation or the underlying writer fails.
pub fn write_records<'a, W, I>(
    writer: W,
    records: I,
    format: ExportFormat,
    pretty: bool,
) -> Result<(), ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a Params>,
{
    match format {
        ExportFormat::Csv => write_csv(writer, records),
        ExportFormat::Json => write_json(writer, records, pretty),
    }
}

/// Writes records to `<dir>/<stem>.<ext>`, creating `dir` if needed.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created, or if
/// serialisation fails.
pub fn export_to_dir<'a, I>(
    dir: &Path,
    stem: &str,
    records: I,
    format: ExportFormat,
    pretty: bool,
) -> Result<PathBuf, ExportError>
where
    I: IntoIterator<Item = &'a Params>,
{
    fs::create_dir_all(dir).map_err(|e| ExportError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let path = dir.join(format!("{stem}.{}", format.extension()));
    let file = File::create(&path).map_err(|e| ExportError::Io {
        path: path.clone(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records, format, pretty)?;
    writer.flush().map_err(|e| ExportError::Io {
        path: path.clone(),
        source: e,
    })?;

    debug!(path = %path.display(), %format, "Wrote parameter export");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jst_xh::Catalog;

    #[test]
    fn csv_has_header_and_rows() {
        let catalog = Catalog::standard();
        let mut out = Vec::new();
        write_csv(&mut out, catalog.angled_compact().values()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(
                "file_name,angled,num_pins,model_name,pin_angle_distance,pin_angle_length,\
                 body_width,body_height,body_length,zdistance"
            )
        );
        assert_eq!(lines.count(), 13);
    }

    #[test]
    fn json_is_an_array_of_records() {
        let catalog = Catalog::standard();
        let mut out = Vec::new();
        write_json(&mut out, catalog.straight().values().take(2), false).unwrap();

        let parsed: Vec<Params> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].model_name, "B02B_XH_A");
    }

    #[test]
    fn format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }
}
