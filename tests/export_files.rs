//! File export tests.
//!
//! These tests write parameter tables to a temporary directory and read them
//! back with the same crates a downstream generator would use.

use jst_xh_models::export::{export_to_dir, ExportFormat};
use jst_xh_models::jst_xh::{Catalog, Params};
use tempfile::tempdir;

#[test]
fn test_csv_export_reads_back() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let catalog = Catalog::standard();

    let path = export_to_dir(
        temp_dir.path(),
        "straight",
        catalog.straight().values(),
        ExportFormat::Csv,
        false,
    )
    .expect("Failed to export");

    assert_eq!(path, temp_dir.path().join("straight.csv"));

    let mut reader = csv::Reader::from_path(&path).expect("Failed to open CSV");
    let records: Vec<Params> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("Failed to parse CSV");

    assert_eq!(records.len(), 16);
    assert_eq!(records[3].model_name, "B05B_XH_A");
    assert_eq!(records[3].file_name, "JST_XH_B05B-XH-A_05x2.50mm_Straight");
    assert!((records[15].body_length - 52.4).abs() < 1e-9);
}

#[test]
fn test_json_export_reads_back() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let catalog = Catalog::standard();
    let all: Vec<&Params> = catalog.iter().map(|(_, p)| p).collect();

    let path = export_to_dir(temp_dir.path(), "all", all, ExportFormat::Json, true)
        .expect("Failed to export");

    let text = std::fs::read_to_string(&path).expect("Failed to read export");
    let records: Vec<Params> = serde_json::from_str(&text).expect("Failed to parse JSON");

    assert_eq!(records.len(), catalog.len());
    for record in &records {
        let (_, original) = catalog.find(&record.model_name).expect("Unknown model");
        assert_eq!(record.file_name, original.file_name);
        assert_eq!(record.num_pins, original.num_pins);
        assert_eq!(record.angled, original.angled);
        assert!((record.body_length - original.body_length).abs() < 1e-9);
        assert!((record.pin_angle_distance - original.pin_angle_distance).abs() < 1e-9);
    }
}

#[test]
fn test_export_creates_missing_directories() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let nested = temp_dir.path().join("a").join("b");

    let path = export_to_dir(
        &nested,
        "compact",
        Catalog::standard().angled_compact().values(),
        ExportFormat::Json,
        false,
    )
    .expect("Failed to export");

    assert!(path.exists());
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
}
