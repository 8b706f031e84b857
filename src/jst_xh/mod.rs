//! JST XH connector model parameters.
//!
//! This module holds the variant catalog of the JST XH series (2.50 mm
//! pitch wire-to-board headers). Each catalog entry is a [`Params`] record
//! with the dimensions a 3D model generator needs to build the housing and
//! pins, plus the base name of the exported model files.
//!
//! # Families
//!
//! - [`Family::Straight`] - `BxxB-XH-A`, vertical through-hole
//! - [`Family::Angled`] - `SxxB-XH-A`, side entry
//! - [`Family::AngledCompact`] - `SxxB-XH-A-1`, side entry with short pin bend
//!
//! # Example
//!
//! ```
//! use jst_xh_models::jst_xh::{Catalog, Family};
//!
//! let catalog = Catalog::standard();
//! let params = catalog.get(Family::Straight, "B05B_XH_A").unwrap();
//!
//! assert_eq!(params.num_pins, 5);
//! assert_eq!(params.file_name, "JST_XH_B05B-XH-A_05x2.50mm_Straight");
//! ```

pub mod catalog;
pub mod constants;
pub mod family;
pub mod naming;
pub mod params;

pub use catalog::{Catalog, ParamsTable};
pub use constants::{PinGeometry, SeriesConstants};
pub use family::{make_angled, make_angled_short, make_straight, Family, FamilyDescriptor};
pub use params::Params;
