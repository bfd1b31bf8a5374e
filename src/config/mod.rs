//! Settings loading for gosdk.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use gosdk::config::load_settings;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".gosdk")).unwrap();
//! fs::write(temp.path().join(".gosdk/config.yml"), "root_required: false").unwrap();
//!
//! let settings = load_settings(None, temp.path()).unwrap();
//! assert!(!settings.root_required);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_settings_file, load_settings, load_settings_file, parse_settings, CONFIG_DIR, CONFIG_FILE,
};
pub use schema::Settings;
