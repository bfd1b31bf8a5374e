//! gosdk - Validated, cascading configuration for a Go SDK installation.
//!
//! The model validates a GOROOT directory, derives the `go`, `gofmt` and
//! `godoc` locations from it whenever it changes, defaults GOPATH from the
//! environment, and reduces every field's validation to one overall status
//! that gates applying the configuration.
//!
//! # Modules
//!
//! - [`cli`] - Command-line front-end
//! - [`config`] - Settings loading
//! - [`environment`] - Environment snapshots and the GOPATH field
//! - [`error`] - Error types and result aliases
//! - [`location`] - Path existence checks
//! - [`model`] - The configuration model
//! - [`toolchain`] - Target selectors, derived tools and the root cascade
//! - [`validation`] - Field validators and status aggregation
//!
//! # Example
//!
//! ```
//! use gosdk::config::Settings;
//! use gosdk::environment::EnvSnapshot;
//! use gosdk::model::{FieldId, SdkConfigModel};
//! use gosdk::validation::Level;
//!
//! let mut model = SdkConfigModel::new(EnvSnapshot::empty(), &Settings::default());
//! model.edit(FieldId::Root, "").unwrap();
//!
//! assert_eq!(model.field_value(FieldId::Compiler), "");
//! assert_eq!(model.overall_status(), Level::Error);
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod location;
pub mod model;
pub mod toolchain;
pub mod validation;

pub use error::{Result, SdkError};
