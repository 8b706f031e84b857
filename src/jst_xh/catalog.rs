//! The published JST XH variant catalog.
//!
//! One ordered table per family, keyed by model name. Tables are built once
//! and never modified; [`Catalog::standard`] memoizes the XH catalog on first
//! access so it can be shared freely across threads.

use std::sync::OnceLock;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{CatalogError, CatalogResult};
use crate::jst_xh::constants::SeriesConstants;
use crate::jst_xh::family::Family;
use crate::jst_xh::params::Params;

/// Model key to parameter record, in ascending pin count order.
pub type ParamsTable = IndexMap<String, Params>;

/// Lookup tables for every family.
#[derive(Debug, Clone)]
pub struct Catalog {
    constants: SeriesConstants,
    straight: ParamsTable,
    angled: ParamsTable,
    angled_compact: ParamsTable,
}

impl Catalog {
    /// Builds the catalog from the given series constants.
    ///
    /// Every family is populated over its published pin counts.
    #[must_use]
    pub fn build(constants: SeriesConstants) -> Self {
        let table = |family: Family| -> ParamsTable {
            let table: ParamsTable = family
                .descriptor()
                .pin_counts
                .iter()
                .map(|&num_pins| {
                    let name = family.model_name(num_pins);
                    let params = family.build(num_pins, &name, &constants);
                    trace!(model = %name, file_name = %params.file_name, "Built model parameters");
                    (name, params)
                })
                .collect();
            debug!(family = %family, models = table.len(), "Built catalog family");
            table
        };

        Self {
            straight: table(Family::Straight),
            angled: table(Family::Angled),
            angled_compact: table(Family::AngledCompact),
            constants,
        }
    }

    /// Returns the shared XH catalog, building it on first use.
    #[must_use]
    pub fn standard() -> &'static Self {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Self::build(SeriesConstants::XH))
    }

    /// Returns the constants the catalog was built from.
    #[must_use]
    pub const fn constants(&self) -> &SeriesConstants {
        &self.constants
    }

    /// Returns the table of one family.
    #[must_use]
    pub const fn family(&self, family: Family) -> &ParamsTable {
        match family {
            Family::Straight => &self.straight,
            Family::Angled => &self.angled,
            Family::AngledCompact => &self.angled_compact,
        }
    }

    /// Straight (`BxxB-XH-A`) variants.
    #[must_use]
    pub const fn straight(&self) -> &ParamsTable {
        &self.straight
    }

    /// Angled (`SxxB-XH-A`) variants.
    #[must_use]
    pub const fn angled(&self) -> &ParamsTable {
        &self.angled
    }

    /// Angled compact (`SxxB-XH-A-1`) variants.
    #[must_use]
    pub const fn angled_compact(&self) -> &ParamsTable {
        &self.angled_compact
    }

    /// Looks up a model in one family's table.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ModelNotFound`] if the key is not in that table.
    pub fn get(&self, family: Family, model: &str) -> CatalogResult<&Params> {
        self.family(family)
            .get(model)
            .ok_or_else(|| CatalogError::ModelNotFound {
                model: model.to_string(),
            })
    }

    /// Looks up a model in every family.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ModelNotFound`] if no family has the key.
    pub fn find(&self, model: &str) -> CatalogResult<(Family, &Params)> {
        Family::ALL
            .into_iter()
            .find_map(|family| self.family(family).get(model).map(|p| (family, p)))
            .ok_or_else(|| CatalogError::ModelNotFound {
                model: model.to_string(),
            })
    }

    /// Iterates over every record, family by family.
    pub fn iter(&self) -> impl Iterator<Item = (Family, &Params)> {
        Family::ALL
            .into_iter()
            .flat_map(move |family| self.family(family).values().map(move |p| (family, p)))
    }

    /// Total number of models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.straight.len() + self.angled.len() + self.angled_compact.len()
    }

    /// Returns `true` if the catalog holds no models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::build(SeriesConstants::XH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_sizes() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.straight().len(), 16);
        assert_eq!(catalog.angled().len(), 15);
        assert_eq!(catalog.angled_compact().len(), 13);
        assert_eq!(catalog.len(), 44);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn straight_gap_between_16_and_20() {
        let catalog = Catalog::standard();
        assert!(catalog.get(Family::Straight, "B16B_XH_A").is_ok());
        assert!(catalog.get(Family::Straight, "B17B_XH_A").is_err());
        assert!(catalog.get(Family::Straight, "B20B_XH_A").is_ok());
    }

    #[test]
    fn table_order_follows_pin_count() {
        let pins: Vec<u32> = Catalog::standard()
            .angled_compact()
            .values()
            .map(|p| p.num_pins)
            .collect();
        assert_eq!(pins, (3..=15).collect::<Vec<_>>());
    }

    #[test]
    fn get_checks_the_requested_family_only() {
        let catalog = Catalog::standard();
        let result = catalog.get(Family::Angled, "B05B_XH_A");
        assert_eq!(
            result.unwrap_err(),
            CatalogError::ModelNotFound {
                model: "B05B_XH_A".to_string()
            }
        );
    }

    #[test]
    fn find_searches_all_families() {
        let (family, params) = Catalog::standard().find("S07B_XH_A_1").unwrap();
        assert_eq!(family, Family::AngledCompact);
        assert_eq!(params.num_pins, 7);
        assert!(Catalog::standard().find("S02B_XH_A_1").is_err());
    }

    #[test]
    fn standard_is_memoized() {
        assert!(std::ptr::eq(Catalog::standard(), Catalog::standard()));
    }

    #[test]
    fn iter_visits_every_record() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.iter().count(), catalog.len());
        let first = catalog.iter().next().unwrap();
        assert_eq!(first.0, Family::Straight);
        assert_eq!(first.1.model_name, "B02B_XH_A");
    }
}
