//! The Go SDK configuration model.
//!
//! [`SdkConfigModel`] owns every field value and validator registration for
//! one configuration session. A presentation layer drives it through
//! [`set_field_value`](SdkConfigModel::set_field_value) and
//! [`on_field_changed`](SdkConfigModel::on_field_changed) and reads back
//! values, per-field states and the overall status. Each call runs to
//! completion, cascade and revalidation included, before it returns.
//!
//! # Example
//!
//! ```
//! use gosdk::config::Settings;
//! use gosdk::environment::EnvSnapshot;
//! use gosdk::model::{FieldId, SdkConfigModel};
//! use gosdk::validation::Level;
//!
//! let env = EnvSnapshot::from_iter([("GOPATH", "/home/me/go")]);
//! let mut model = SdkConfigModel::new(env, &Settings::default());
//!
//! // GOROOT is required and still empty
//! assert_eq!(model.overall_status(), Level::Error);
//! assert_eq!(model.field_value(FieldId::SearchPath), "/home/me/go");
//!
//! model.edit(FieldId::Root, "/does/not/exist").unwrap();
//! assert_eq!(model.field_value(FieldId::Compiler), "");
//! assert!(!model.can_apply());
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use super::field::FieldId;
use crate::config::Settings;
use crate::environment::{EnvSnapshot, SearchPathField};
use crate::error::Result;
use crate::toolchain::{
    format_selector, parse_selector, CascadeEngine, DerivedTool, GoArch, GoOs, TargetPlatform,
    ToolPaths,
};
use crate::validation::{
    FieldValidationState, Level, LocationValidator, SdkLocationValidator, ValidationAggregator,
};

/// Validated, cascading configuration of a Go SDK installation.
pub struct SdkConfigModel {
    env: EnvSnapshot,
    root: String,
    target: TargetPlatform,
    tools: ToolPaths,
    search_path: SearchPathField,
    cascade: CascadeEngine,
    validation: ValidationAggregator<FieldId>,
}

impl SdkConfigModel {
    /// Create a model with empty fields and computed initial states.
    pub fn new(env: EnvSnapshot, settings: &Settings) -> Self {
        let mut validation = ValidationAggregator::new();
        validation.register(
            FieldId::Root,
            SdkLocationValidator::new(FieldId::Root.label(), settings.candidates.compiler.clone()),
            settings.root_required,
        );
        for tool in DerivedTool::ALL {
            let field = FieldId::from(tool);
            validation.register(
                field,
                LocationValidator::file(field.label()),
                settings.tool_required(tool),
            );
        }

        let mut model = Self {
            env,
            root: String::new(),
            target: TargetPlatform::default(),
            tools: ToolPaths::default(),
            search_path: SearchPathField::new(settings.search_path_var.clone()),
            cascade: CascadeEngine::new(settings.candidates.clone()),
            validation,
        };
        model.revalidate_all();
        model
    }

    /// Use `separator` for the search-path list instead of the host one.
    pub fn with_list_separator(mut self, separator: char) -> Self {
        self.search_path = self.search_path.with_separator(separator);
        self
    }

    /// The environment snapshot the model was built with.
    pub fn env(&self) -> &EnvSnapshot {
        &self.env
    }

    /// Current GOROOT.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Current GOOS / GOARCH selectors.
    pub fn target(&self) -> TargetPlatform {
        self.target
    }

    /// Current derived tool locations.
    pub fn tools(&self) -> &ToolPaths {
        &self.tools
    }

    /// The search-path field.
    pub fn search_path(&self) -> &SearchPathField {
        &self.search_path
    }

    /// Current value of `field` as a string.
    ///
    /// Unset selectors read as the empty string; the search path reads as
    /// its effective value.
    pub fn field_value(&self, field: FieldId) -> String {
        match field {
            FieldId::Root => self.root.clone(),
            FieldId::Os => format_selector(self.target.os),
            FieldId::Arch => format_selector(self.target.arch),
            FieldId::Compiler => self.tools.compiler.clone(),
            FieldId::Formatter => self.tools.formatter.clone(),
            FieldId::Documentor => self.tools.documentor.clone(),
            FieldId::SearchPath => self.search_path.value(&self.env),
        }
    }

    /// Store `value` in `field` without cascading or revalidating.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFieldValue` if a selector value is not one of its
    /// choices; the field is left unchanged.
    pub fn set_field_value(&mut self, field: FieldId, value: &str) -> Result<()> {
        match field {
            FieldId::Root => self.root = value.to_string(),
            FieldId::Os => self.target.os = parse_selector::<GoOs>(value)?,
            FieldId::Arch => self.target.arch = parse_selector::<GoArch>(value)?,
            FieldId::Compiler | FieldId::Formatter | FieldId::Documentor => {
                if let Some(tool) = field.tool() {
                    self.tools.set(tool, value);
                }
            }
            FieldId::SearchPath => self.search_path.set(value),
        }
        Ok(())
    }

    /// React to an edit of `field`.
    ///
    /// A GOROOT change runs the cascade and revalidates every field it
    /// wrote; any other field is just revalidated.
    pub fn on_field_changed(&mut self, field: FieldId) {
        if field != FieldId::Root {
            self.revalidate(field);
            return;
        }

        let usable = self
            .revalidate(FieldId::Root)
            .map(|state| state.result.is_usable())
            .unwrap_or(true);
        debug!(root = %self.root, usable, "GOROOT changed, running cascade");

        let written = self
            .cascade
            .run(&self.root, usable, &mut self.target, &mut self.tools);
        for tool in written {
            self.revalidate(FieldId::from(tool));
        }
    }

    /// Set `field` to `value` and handle the change.
    pub fn edit(&mut self, field: FieldId, value: &str) -> Result<()> {
        self.set_field_value(field, value)?;
        self.on_field_changed(field);
        Ok(())
    }

    /// Append `entry` to the search path and return the new value.
    ///
    /// The entry is appended unconditionally; callers must suppress blank
    /// entries themselves. See [`SearchPathField::append_entry`].
    pub fn append_search_path(&mut self, entry: &str) -> &str {
        self.search_path.append_entry(&self.env, entry)
    }

    /// Drop the search-path override and use the environment default again.
    pub fn reset_search_path(&mut self) {
        self.search_path.reset();
    }

    /// Recompute the state of `field` from its current value.
    ///
    /// Returns `None` for fields without a validator.
    pub fn revalidate(&mut self, field: FieldId) -> Option<&FieldValidationState<FieldId>> {
        let value = self.field_value(field);
        self.validation.revalidate(field, &value)
    }

    /// Recompute the state of every validated field.
    pub fn revalidate_all(&mut self) {
        let fields: Vec<_> = self.validation.fields().collect();
        for field in fields {
            self.revalidate(field);
        }
    }

    /// The last computed state of `field`.
    pub fn field_state(&self, field: FieldId) -> Option<&FieldValidationState<FieldId>> {
        self.validation.state(field)
    }

    /// All computed states, in registration order.
    pub fn field_states(&self) -> Vec<&FieldValidationState<FieldId>> {
        self.validation.states().collect()
    }

    /// The worst level across all validated fields.
    pub fn overall_status(&self) -> Level {
        self.validation.overall_status()
    }

    /// Whether apply/save may proceed.
    pub fn can_apply(&self) -> bool {
        self.validation.can_apply()
    }

    /// Every field's current value, keyed by its persistence key.
    pub fn to_field_map(&self) -> BTreeMap<String, String> {
        FieldId::ALL
            .into_iter()
            .map(|field| (field.key().to_string(), self.field_value(field)))
            .collect()
    }

    /// Load persisted values without cascading, then revalidate.
    ///
    /// Keys missing from `map` keep their current value. A present search
    /// path entry becomes an explicit override.
    ///
    /// # Errors
    ///
    /// Returns `UnknownField` or `InvalidFieldValue` before any value is
    /// applied, so a bad map leaves the model untouched.
    pub fn load_field_map(&mut self, map: &BTreeMap<String, String>) -> Result<()> {
        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            let field: FieldId = key.parse()?;
            match field {
                FieldId::Os => {
                    parse_selector::<GoOs>(value)?;
                }
                FieldId::Arch => {
                    parse_selector::<GoArch>(value)?;
                }
                _ => {}
            }
            entries.push((field, value.as_str()));
        }

        for (field, value) in entries {
            self.set_field_value(field, value)?;
        }
        debug!(fields = map.len(), "loaded field map");
        self.revalidate_all();
        Ok(())
    }
}

impl std::fmt::Debug for SdkConfigModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkConfigModel")
            .field("root", &self.root)
            .field("target", &self.target)
            .field("tools", &self.tools)
            .field("search_path", &self.search_path)
            .field("overall_status", &self.overall_status())
            .finish()
    }
}
