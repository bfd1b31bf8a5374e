//! Field validation.
//!
//! This module provides:
//!
//! - [`FieldValidator`] - The capability every validator implements
//! - [`SdkLocationValidator`] and [`LocationValidator`] - The concrete validators
//! - [`ValidationAggregator`] - Per-field states reduced to one overall [`Level`]
//!
//! # Example
//!
//! ```
//! use gosdk::validation::{Level, LocationValidator, ValidationAggregator};
//!
//! let mut aggregator = ValidationAggregator::new();
//! aggregator.register("gofmt", LocationValidator::file("gofmt"), false);
//! aggregator.revalidate("gofmt", "");
//! assert_eq!(aggregator.overall_status(), Level::Ok);
//!
//! aggregator.revalidate("gofmt", "/definitely/not/here/gofmt");
//! assert_eq!(aggregator.overall_status(), Level::Error);
//! assert!(!aggregator.can_apply());
//! ```

pub mod aggregator;
pub mod level;
pub mod validator;

pub use aggregator::{FieldValidationState, ValidationAggregator};
pub use level::{Level, ValidationResult};
pub use validator::{FieldValidator, LocationValidator, SdkLocationValidator};
