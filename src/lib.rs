//! Settings for the Web Query dashboard widget: the search engine catalog,
//! normalization of persisted settings, the editor transitions and storage.

pub mod app_config;
pub mod config;
pub mod engine;
pub mod error;
pub mod settings;
pub mod store;

pub use settings::{create_settings_state, Settings, SettingsMode};
