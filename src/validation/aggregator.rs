//! Aggregation of per-field validation states.
//!
//! The [`ValidationAggregator`] stores one registration per field, each
//! pairing a [`FieldValidator`] with a required flag and the latest computed
//! [`FieldValidationState`]. Its [`overall_status`](ValidationAggregator::overall_status)
//! is the worst level across all computed states and gates apply/save.

use serde::Serialize;
use tracing::trace;

use super::level::{Level, ValidationResult};
use super::validator::FieldValidator;

/// The latest validation outcome for one registered field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationState<K> {
    /// The field this state belongs to.
    pub field: K,
    /// Outcome of the last validation.
    #[serde(flatten)]
    pub result: ValidationResult,
}

impl<K: Copy> FieldValidationState<K> {
    /// Severity of the last validation.
    pub fn level(&self) -> Level {
        self.result.level
    }

    /// Message of the last validation.
    pub fn message(&self) -> &str {
        &self.result.message
    }
}

struct Registration<K> {
    field: K,
    validator: Box<dyn FieldValidator>,
    required: bool,
    state: Option<FieldValidationState<K>>,
}

/// Registry of field validators keyed by a stable field identifier.
///
/// Registrations keep their insertion order. Registering the same field
/// twice replaces the earlier registration and drops its state.
pub struct ValidationAggregator<K> {
    registrations: Vec<Registration<K>>,
}

impl<K> ValidationAggregator<K>
where
    K: Copy + Eq + std::fmt::Debug,
{
    /// Create an aggregator with no registrations.
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
        }
    }

    /// Register `validator` for `field`. No state is computed until the
    /// field is first revalidated.
    pub fn register(&mut self, field: K, validator: impl FieldValidator + 'static, required: bool) {
        let registration = Registration {
            field,
            validator: Box::new(validator),
            required,
            state: None,
        };

        match self.registrations.iter_mut().find(|r| r.field == field) {
            Some(existing) => *existing = registration,
            None => self.registrations.push(registration),
        }
    }

    /// Whether `field` has a registered validator.
    pub fn is_registered(&self, field: K) -> bool {
        self.registrations.iter().any(|r| r.field == field)
    }

    /// Recompute the state of `field` from its current raw `value`.
    ///
    /// Returns `None` if the field has no registered validator.
    pub fn revalidate(&mut self, field: K, value: &str) -> Option<&FieldValidationState<K>> {
        let registration = self.registrations.iter_mut().find(|r| r.field == field)?;
        let result = registration
            .validator
            .validate(value, registration.required);
        trace!(?field, level = %result.level, "revalidated field");

        registration.state = Some(FieldValidationState { field, result });
        registration.state.as_ref()
    }

    /// The last computed state of `field`, if any.
    pub fn state(&self, field: K) -> Option<&FieldValidationState<K>> {
        self.registrations
            .iter()
            .find(|r| r.field == field)
            .and_then(|r| r.state.as_ref())
    }

    /// All computed states, in registration order.
    pub fn states(&self) -> impl Iterator<Item = &FieldValidationState<K>> {
        self.registrations.iter().filter_map(|r| r.state.as_ref())
    }

    /// Registered fields, in registration order.
    pub fn fields(&self) -> impl Iterator<Item = K> + '_ {
        self.registrations.iter().map(|r| r.field)
    }

    /// The worst level across all computed states. An aggregator with no
    /// computed states reports [`Level::Ok`].
    pub fn overall_status(&self) -> Level {
        self.states()
            .map(|s| s.result.level)
            .max()
            .unwrap_or(Level::Ok)
    }

    /// Whether downstream apply/save actions are permitted.
    pub fn can_apply(&self) -> bool {
        self.overall_status().permits_apply()
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Check if the aggregator has no registrations.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl<K> Default for ValidationAggregator<K>
where
    K: Copy + Eq + std::fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    enum Field {
        A,
        B,
        C,
    }

    fn by_value(value: &str, required: bool) -> ValidationResult {
        match value {
            "" if required => ValidationResult::error("required"),
            "warn" => ValidationResult::warning("advisory"),
            "err" => ValidationResult::error("broken"),
            _ => ValidationResult::ok(),
        }
    }

    #[test]
    fn empty_aggregator_is_ok() {
        let agg: ValidationAggregator<Field> = ValidationAggregator::new();
        assert!(agg.is_empty());
        assert_eq!(agg.overall_status(), Level::Ok);
        assert!(agg.can_apply());
    }

    #[test]
    fn registration_has_no_state_until_revalidated() {
        let mut agg = ValidationAggregator::new();
        agg.register(Field::A, by_value, true);

        assert!(agg.is_registered(Field::A));
        assert!(agg.state(Field::A).is_none());
        assert_eq!(agg.overall_status(), Level::Ok);

        agg.revalidate(Field::A, "");
        assert_eq!(agg.state(Field::A).unwrap().level(), Level::Error);
    }

    #[test]
    fn required_flag_is_passed_to_validator() {
        let mut agg = ValidationAggregator::new();
        agg.register(Field::A, by_value, true);
        agg.register(Field::B, by_value, false);

        assert_eq!(agg.revalidate(Field::A, "").unwrap().level(), Level::Error);
        assert_eq!(agg.revalidate(Field::B, "").unwrap().level(), Level::Ok);
    }

    #[test]
    fn unregistered_field_revalidates_to_none() {
        let mut agg = ValidationAggregator::new();
        agg.register(Field::A, by_value, false);
        assert!(agg.revalidate(Field::C, "err").is_none());
        assert_eq!(agg.overall_status(), Level::Ok);
    }

    #[test]
    fn overall_status_is_worst_level() {
        let mut agg = ValidationAggregator::new();
        agg.register(Field::A, by_value, false);
        agg.register(Field::B, by_value, false);
        agg.register(Field::C, by_value, false);

        agg.revalidate(Field::A, "fine");
        agg.revalidate(Field::B, "fine");
        agg.revalidate(Field::C, "fine");
        assert_eq!(agg.overall_status(), Level::Ok);

        agg.revalidate(Field::B, "warn");
        assert_eq!(agg.overall_status(), Level::Warning);
        assert!(agg.can_apply());

        agg.revalidate(Field::C, "err");
        assert_eq!(agg.overall_status(), Level::Error);
        assert!(!agg.can_apply());

        agg.revalidate(Field::C, "fine");
        assert_eq!(agg.overall_status(), Level::Warning);
    }

    #[test]
    fn revalidation_is_idempotent() {
        let mut agg = ValidationAggregator::new();
        agg.register(Field::A, by_value, false);

        let first = agg.revalidate(Field::A, "warn").cloned();
        let second = agg.revalidate(Field::A, "warn").cloned();
        assert_eq!(first, second);
    }

    #[test]
    fn states_follow_registration_order() {
        let mut agg = ValidationAggregator::new();
        agg.register(Field::C, by_value, false);
        agg.register(Field::A, by_value, false);
        agg.revalidate(Field::A, "x");
        agg.revalidate(Field::C, "x");

        let order: Vec<_> = agg.states().map(|s| s.field).collect();
        assert_eq!(order, vec![Field::C, Field::A]);
        assert_eq!(agg.fields().collect::<Vec<_>>(), vec![Field::C, Field::A]);
    }

    #[test]
    fn re_registering_replaces_state() {
        let mut agg = ValidationAggregator::new();
        agg.register(Field::A, by_value, false);
        agg.revalidate(Field::A, "err");
        assert_eq!(agg.overall_status(), Level::Error);

        agg.register(Field::A, by_value, false);
        assert_eq!(agg.len(), 1);
        assert!(agg.state(Field::A).is_none());
        assert_eq!(agg.overall_status(), Level::Ok);
    }
}
