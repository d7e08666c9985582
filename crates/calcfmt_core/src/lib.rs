//! Pure calculation and formatting logic behind the calcfmt HTTP API.
//!
//! Everything here is synchronous and deterministic: the HTTP crate checks
//! ranges at the boundary and hands already-typed values to these modules.

pub mod aggregate;
pub mod bmi;
pub mod catalog;
pub mod cellphone;
pub mod classify;
pub mod validation;

pub use bmi::{BmiCategory, BmiReport};
pub use catalog::{Product, ProductCatalog, StaticCatalog};
pub use cellphone::{CellphoneError, CellphoneInput};
pub use classify::ThresholdTable;
pub use validation::Issues;
