//! Per-widget settings persistence.
//!
//! Each widget instance keeps its settings in `<data_dir>/widgets/<id>.json`.
//! Loading always yields valid settings: a missing or unreadable blob is
//! replaced with the defaults so the widget can still open.

use crate::config;
use crate::error::StoreError;
use crate::settings::editor::SettingsApi;
use crate::settings::{create_settings_state, Settings};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of a settings file while it is being written
const TEMP_FILE_EXT: &str = "json.tmp";

/// Widget settings files on disk
#[derive(Debug, Clone)]
pub struct SettingsStore {
    widgets_dir: PathBuf,
}

fn validate_widget_id(widget_id: &str) -> Result<(), StoreError> {
    let valid = !widget_id.is_empty()
        && widget_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidWidgetId(widget_id.to_string()))
    }
}

impl SettingsStore {
    /// Open the store under a data directory, creating it if needed
    pub fn new(data_dir: &Path) -> Result<Self, StoreError> {
        let widgets_dir = data_dir.join(config::WIDGETS_DIR);
        fs::create_dir_all(&widgets_dir)?;
        log::debug!("Widget settings directory: {:?}", widgets_dir);
        Ok(Self { widgets_dir })
    }

    fn widget_path(&self, widget_id: &str) -> Result<PathBuf, StoreError> {
        validate_widget_id(widget_id)?;
        Ok(self
            .widgets_dir
            .join(widget_id)
            .with_extension(config::WIDGET_FILE_EXT))
    }

    /// Load and normalize a widget's settings
    pub fn load(&self, widget_id: &str) -> Result<Settings, StoreError> {
        let path = self.widget_path(widget_id)?;

        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(&path)?;
        let raw = match serde_json::from_str::<Value>(&contents) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Corrupt settings for widget '{}' ({}), using defaults", widget_id, e);
                Value::Null
            }
        };

        Ok(create_settings_state(&raw))
    }

    /// Save a widget's settings
    ///
    /// Writes to a temp file first, then renames it over the settings file.
    pub fn save(&self, widget_id: &str, settings: &Settings) -> Result<(), StoreError> {
        let path = self.widget_path(widget_id)?;
        let temp = path.with_extension(TEMP_FILE_EXT);
        let contents = serde_json::to_string_pretty(settings)?;
        fs::write(&temp, contents)?;
        fs::rename(&temp, &path)?;
        log::debug!("Settings for widget '{}' saved to {:?}", widget_id, path);
        Ok(())
    }

    /// Ids of all widgets with stored settings, sorted
    pub fn widget_ids(&self) -> Result<Vec<String>, StoreError> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.widgets_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(config::WIDGET_FILE_EXT) {
                continue;
            }
            if let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) {
                if validate_widget_id(id).is_ok() {
                    ids.push(id.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Load a widget's settings for editing
    pub fn open(&self, widget_id: &str) -> Result<WidgetSettings<'_>, StoreError> {
        let settings = self.load(widget_id)?;
        Ok(WidgetSettings {
            store: self,
            widget_id: widget_id.to_string(),
            settings,
            dirty: false,
        })
    }
}

/// Settings owned by one widget instance, replaced wholesale by editor updates
#[derive(Debug)]
pub struct WidgetSettings<'s> {
    store: &'s SettingsStore,
    widget_id: String,
    settings: Settings,
    dirty: bool,
}

impl WidgetSettings<'_> {
    pub fn widget_id(&self) -> &str {
        &self.widget_id
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether there are updates not yet saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Save pending updates. Returns whether anything was written.
    pub fn commit(&mut self) -> Result<bool, StoreError> {
        if !self.dirty {
            return Ok(false);
        }
        self.store.save(&self.widget_id, &self.settings)?;
        self.dirty = false;
        Ok(true)
    }
}

impl SettingsApi for WidgetSettings<'_> {
    fn update_settings(&mut self, next: Settings) {
        if next != self.settings {
            self.settings = next;
            self.dirty = true;
        }
    }
}
