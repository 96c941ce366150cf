//! Web Query widget settings and their normalization.
//!
//! Persisted settings are untrusted: they may come from an older schema, a
//! hand-edited file or a corrupted blob. [`create_settings_state`] parses
//! them into a [`RawSettings`] record and maps that onto [`Settings`],
//! replacing anything malformed with a safe default. It never fails.

pub mod editor;
pub mod view;

use crate::config;
use crate::engine::{self, SettingsEngine};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Where queries typed into the widget are sent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SettingsMode {
    /// Open the query URL in an external browser app
    #[default]
    Browser = 1,
    /// Run the query in webpage widgets of the same workflow
    Webpages = 2,
}

impl SettingsMode {
    /// All modes in display order
    pub const ALL: [SettingsMode; 2] = [SettingsMode::Browser, SettingsMode::Webpages];

    /// Numeric tag used in persisted settings
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Mode for a numeric tag, if it names one
    pub fn from_tag(tag: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| i64::from(mode.tag()) == tag)
    }

    /// Label shown in the mode picker
    pub fn label(self) -> &'static str {
        match self {
            SettingsMode::Browser => "Browser App",
            SettingsMode::Webpages => "Webpage Widgets",
        }
    }

    /// A raw field is a mode only if it is a number equal to one of the tags.
    fn from_raw(field: Option<&RawField>) -> Option<Self> {
        let Some(RawField::Number(number)) = field else {
            return None;
        };
        let value = number.as_f64()?;
        Self::ALL
            .into_iter()
            .find(|mode| f64::from(mode.tag()) == value)
    }
}

impl Serialize for SettingsMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.tag())
    }
}

/// Normalized settings of one Web Query widget instance
///
/// Only ever produced by the normalizer, so the following always hold:
/// - in Webpages mode `engine` and `url` are empty
/// - in Browser mode with a catalog engine, `descr` and `url` are empty
///   (the catalog entry provides them)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Settings {
    pub mode: SettingsMode,
    /// Catalog engine id, or empty for a custom engine
    pub engine: String,
    pub descr: String,
    pub url: String,
    /// Query template, may contain `QUERY`
    pub query: String,
}

impl Default for Settings {
    fn default() -> Self {
        RawSettings::default().normalize()
    }
}

impl Settings {
    /// The catalog engine named by `engine`, if any
    pub fn resolved_engine(&self) -> Option<&'static SettingsEngine> {
        engine::engine_by_id(&self.engine)
    }

    /// Catalog engine in effect: only in Browser mode
    fn browser_engine(&self) -> Option<&'static SettingsEngine> {
        match self.mode {
            SettingsMode::Browser => self.resolved_engine(),
            SettingsMode::Webpages => None,
        }
    }

    /// Description to display, looked up live from the catalog when an engine is selected
    pub fn effective_descr(&self) -> &str {
        self.browser_engine().map_or(self.descr.as_str(), |e| e.descr)
    }

    /// URL template to display, looked up live from the catalog when an engine is selected
    pub fn effective_url(&self) -> &str {
        self.browser_engine().map_or(self.url.as_str(), |e| e.url)
    }

    /// Run these settings through the normalizer again.
    pub fn normalized(&self) -> Settings {
        RawSettings::from(self).normalize()
    }
}

/// A settings field of unknown type as found in persisted data
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Text(String),
    Number(serde_json::Number),
    Other(Value),
}

impl RawField {
    fn as_text(&self) -> Option<&str> {
        match self {
            RawField::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Settings as read from storage, before any validation
///
/// Missing keys and `null` values are `None`; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    pub mode: Option<RawField>,
    pub engine: Option<RawField>,
    pub descr: Option<RawField>,
    pub url: Option<RawField>,
    pub query: Option<RawField>,
}

impl RawSettings {
    /// Parse an arbitrary JSON value. Anything that is not an object yields an empty record.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            log::debug!("Settings are not an object, using defaults");
            return Self::default();
        }

        match RawSettings::deserialize(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::debug!("Unreadable settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    fn text(field: &Option<RawField>) -> Option<&str> {
        field.as_ref().and_then(RawField::as_text)
    }

    /// Map the untrusted record onto valid settings.
    pub fn normalize(&self) -> Settings {
        let mode = SettingsMode::from_raw(self.mode.as_ref()).unwrap_or_else(|| {
            if self.mode.is_some() {
                log::debug!("Invalid settings mode {:?}, using Browser", self.mode);
            }
            SettingsMode::Browser
        });

        let (engine, descr, url) = match mode {
            SettingsMode::Browser => {
                let selected = match Self::text(&self.engine) {
                    Some("") => None,
                    Some(id) => Some(engine::engine_by_id(id).unwrap_or_else(|| {
                        log::debug!("Unknown search engine '{}', using default", id);
                        engine::default_engine()
                    })),
                    None => Some(engine::default_engine()),
                };

                match selected {
                    Some(selected) => (selected.id.to_string(), String::new(), String::new()),
                    None => (
                        String::new(),
                        Self::text(&self.descr).unwrap_or_default().to_string(),
                        Self::text(&self.url).unwrap_or_default().to_string(),
                    ),
                }
            }
            SettingsMode::Webpages => (
                String::new(),
                Self::text(&self.descr)
                    .unwrap_or(config::DEFAULT_WEBPAGES_DESCR)
                    .to_string(),
                String::new(),
            ),
        };

        Settings {
            mode,
            engine,
            descr,
            url,
            query: Self::text(&self.query).unwrap_or_default().to_string(),
        }
    }
}

impl From<&Settings> for RawSettings {
    fn from(settings: &Settings) -> Self {
        Self {
            mode: Some(RawField::Number(settings.mode.tag().into())),
            engine: Some(RawField::Text(settings.engine.clone())),
            descr: Some(RawField::Text(settings.descr.clone())),
            url: Some(RawField::Text(settings.url.clone())),
            query: Some(RawField::Text(settings.query.clone())),
        }
    }
}

impl From<Value> for Settings {
    fn from(raw: Value) -> Self {
        create_settings_state(&raw)
    }
}

/// Build widget settings from persisted (or default) data.
pub fn create_settings_state(raw: &Value) -> Settings {
    RawSettings::from_value(raw).normalize()
}
