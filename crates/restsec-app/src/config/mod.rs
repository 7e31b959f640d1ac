//! Simulator settings
//!
//! Supports:
//! - `restsec.toml` - optional timing overrides for the headless runner

pub mod settings;
pub mod types;

pub use settings::{
    init_settings_file, load_settings, load_settings_strict, settings_path, SETTINGS_FILENAME,
};
pub use types::*;
