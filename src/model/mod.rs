//! The configuration model exposed to presentation and persistence layers.
//!
//! - [`FieldId`] - Stable identifiers and persistence keys for every field
//! - [`SdkConfigModel`] - Field values, cascade and validation for one session

pub mod field;
pub mod sdk;

pub use field::FieldId;
pub use sdk::SdkConfigModel;
