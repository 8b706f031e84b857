//! jst-xh-models: parameter catalog for JST XH connector 3D models
//!
//! This library supplies the numbers and outlines that a 3D modeling engine
//! needs to generate VRML/STEP models of the JST XH pin header series.
//!
//! # Architecture
//!
//! The crate computes parameters. The modeling engine builds solids:
//!
//! - **Variant Catalog**: body dimensions, pin bend geometry and file names
//!   for every straight, angled and angled compact XH part
//! - **Outline Helpers**: 2D point arithmetic and point chains, drawn onto
//!   the engine's sketch plane
//!
//! The engine (not this crate) handles extrusion, fillets, booleans and
//! file export.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Error types
//! - [`export`] — CSV/JSON export of parameter tables
//! - [`geometry`] — Points, chains and the sketch interface
//! - [`jst_xh`] — The variant catalog

pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod jst_xh;
