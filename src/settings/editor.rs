//! Update transitions of the Web Query settings editor.
//!
//! Every transition builds a complete new [`Settings`] from the current one
//! and hands it to [`SettingsApi::update_settings`]. The result is always
//! run through the normalizer, so the value passed on is valid even when a
//! transition leaves fields that the new mode or engine makes irrelevant.

use super::{Settings, SettingsMode};

/// Receiver of settings replacements requested by the editor
pub trait SettingsApi {
    fn update_settings(&mut self, next: Settings);
}

impl<F: FnMut(Settings)> SettingsApi for F {
    fn update_settings(&mut self, next: Settings) {
        self(next)
    }
}

/// Parse a leading integer the way a form `<select>` value is usually read:
/// whitespace is skipped, an optional sign and `0x` prefix are accepted, and
/// parsing stops at the first character that is not a digit.
fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    let value = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}

/// Switch mode. A Browser-mode catalog engine's description is kept as the new `descr`.
pub fn with_mode(settings: &Settings, new_mode: &str) -> Settings {
    let carried_descr = match settings.mode {
        SettingsMode::Browser => settings
            .resolved_engine()
            .map(|e| e.descr)
            .filter(|descr| !descr.is_empty()),
        SettingsMode::Webpages => None,
    };
    let mode = parse_int_prefix(new_mode)
        .and_then(SettingsMode::from_tag)
        .unwrap_or(SettingsMode::Browser);

    Settings {
        mode,
        descr: carried_descr.map_or_else(|| settings.descr.clone(), str::to_string),
        ..settings.clone()
    }
    .normalized()
}

/// Select an engine. Switching to the custom engine (`""`) starts from the
/// previously selected engine's description and URL.
pub fn with_engine(settings: &Settings, new_engine: &str) -> Settings {
    let next = match (new_engine, settings.resolved_engine()) {
        ("", Some(current)) => Settings {
            engine: String::new(),
            descr: current.descr.to_string(),
            url: current.url.to_string(),
            ..settings.clone()
        },
        _ => Settings {
            engine: new_engine.to_string(),
            ..settings.clone()
        },
    };
    next.normalized()
}

/// Whether the description can be edited (otherwise it mirrors the catalog engine)
pub fn descr_editable(settings: &Settings) -> bool {
    settings.mode != SettingsMode::Browser || settings.engine.is_empty()
}

/// Whether the URL template can be edited (custom engine in Browser mode only)
pub fn url_editable(settings: &Settings) -> bool {
    settings.mode == SettingsMode::Browser && settings.engine.is_empty()
}

/// Set the description, if editable.
pub fn with_descr(settings: &Settings, descr: &str) -> Option<Settings> {
    descr_editable(settings).then(|| {
        Settings {
            descr: descr.to_string(),
            ..settings.clone()
        }
        .normalized()
    })
}

/// Set the custom URL template, if editable.
pub fn with_url(settings: &Settings, url: &str) -> Option<Settings> {
    url_editable(settings).then(|| {
        Settings {
            url: url.to_string(),
            ..settings.clone()
        }
        .normalized()
    })
}

/// Set the query template.
pub fn with_query(settings: &Settings, query: &str) -> Settings {
    Settings {
        query: query.to_string(),
        ..settings.clone()
    }
    .normalized()
}

/// Event handlers of the settings form, bound to the current settings
pub struct SettingsEditor<'a, A: SettingsApi> {
    settings: &'a Settings,
    api: &'a mut A,
}

impl<'a, A: SettingsApi> SettingsEditor<'a, A> {
    pub fn new(settings: &'a Settings, api: &'a mut A) -> Self {
        Self { settings, api }
    }

    fn update(&mut self, next: Settings) -> bool {
        log::debug!("Updating web query settings: {:?}", next);
        self.api.update_settings(next);
        true
    }

    pub fn change_mode(&mut self, new_mode: &str) -> bool {
        let next = with_mode(self.settings, new_mode);
        self.update(next)
    }

    pub fn change_engine(&mut self, new_engine: &str) -> bool {
        let next = with_engine(self.settings, new_engine);
        self.update(next)
    }

    /// Returns false without updating when the description is read-only.
    pub fn change_descr(&mut self, descr: &str) -> bool {
        match with_descr(self.settings, descr) {
            Some(next) => self.update(next),
            None => false,
        }
    }

    /// Returns false without updating when the URL template is read-only.
    pub fn change_url(&mut self, url: &str) -> bool {
        match with_url(self.settings, url) {
            Some(next) => self.update(next),
            None => false,
        }
    }

    pub fn change_query(&mut self, query: &str) -> bool {
        let next = with_query(self.settings, query);
        self.update(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::tests::fixture_settings;

    fn browser(engine: &str) -> Settings {
        fixture_settings(|s| {
            s.engine = engine.to_string();
            s.descr = String::new();
        })
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("2"), Some(2));
        assert_eq!(parse_int_prefix("  1"), Some(1));
        assert_eq!(parse_int_prefix("2abc"), Some(2));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("0x2"), Some(2));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
    }

    #[test]
    fn test_mode_change_carries_engine_descr() {
        let next = with_mode(&browser("ddgo"), "2");
        assert_eq!(next.mode, SettingsMode::Webpages);
        assert_eq!(next.descr, "Search");
        assert_eq!(next.engine, "");
        assert_eq!(next.url, "");

        let next = with_mode(&browser("wfal"), "2");
        assert_eq!(next.descr, "Calculate / Know about");
    }

    #[test]
    fn test_mode_change_keeps_custom_descr() {
        let custom = fixture_settings(|s| {
            s.engine = String::new();
            s.descr = "Mine".to_string();
            s.url = "https://example.org/QUERY".to_string();
        });
        let next = with_mode(&custom, "2");
        assert_eq!(next.descr, "Mine");
        assert_eq!(next.url, "");
    }

    #[test]
    fn test_mode_change_invalid_falls_back_to_browser() {
        let webpages = fixture_settings(|s| {
            s.mode = SettingsMode::Webpages;
            s.engine = String::new();
        });
        for input in ["7", "", "browser"] {
            let next = with_mode(&webpages, input);
            assert_eq!(next.mode, SettingsMode::Browser);
        }
    }

    #[test]
    fn test_mode_change_back_to_browser_is_custom() {
        let webpages = with_mode(&browser("bing"), "2");
        let next = with_mode(&webpages, "1");
        assert_eq!(next.mode, SettingsMode::Browser);
        assert_eq!(next.engine, "");
        assert_eq!(next.descr, "Search");
    }

    #[test]
    fn test_engine_change_to_custom_seeds_fields() {
        let next = with_engine(&browser("bing"), "");
        assert_eq!(next.engine, "");
        assert_eq!(next.descr, "Search");
        assert_eq!(next.url, "https://www.bing.com/search?q=QUERY");
    }

    #[test]
    fn test_engine_change_custom_to_custom_keeps_fields() {
        let custom = fixture_settings(|s| {
            s.engine = String::new();
            s.url = "https://example.org/QUERY".to_string();
        });
        let next = with_engine(&custom, "");
        assert_eq!(next, custom);
    }

    #[test]
    fn test_engine_change_to_known_engine() {
        let custom = fixture_settings(|s| {
            s.engine = String::new();
            s.url = "https://example.org/QUERY".to_string();
        });
        let next = with_engine(&custom, "goog-maps");
        assert_eq!(next.engine, "goog-maps");
        assert_eq!(next.effective_url(), "https://www.google.com/maps/search/QUERY");
        assert_eq!(next.descr, "");
        assert_eq!(next.url, "");

        assert_eq!(with_engine(&custom, "unknown").engine, "ddgo");
    }

    #[test]
    fn test_descr_read_only_with_catalog_engine() {
        assert!(with_descr(&browser("goog"), "X").is_none());

        let custom = browser("");
        assert_eq!(with_descr(&custom, "X").map(|s| s.descr), Some("X".to_string()));

        let webpages = with_mode(&browser("goog"), "2");
        assert_eq!(with_descr(&webpages, "Y").map(|s| s.descr), Some("Y".to_string()));
    }

    #[test]
    fn test_url_only_editable_for_custom_engine() {
        assert!(with_url(&browser("goog"), "https://x/QUERY").is_none());

        let webpages = with_mode(&browser("goog"), "2");
        assert!(with_url(&webpages, "https://x/QUERY").is_none());

        let custom = browser("");
        let next = with_url(&custom, "https://x/QUERY").unwrap();
        assert_eq!(next.url, "https://x/QUERY");
    }

    #[test]
    fn test_query_always_editable() {
        for settings in [browser("ddgo"), browser(""), with_mode(&browser("ddgo"), "2")] {
            let next = with_query(&settings, "site:freeter.io QUERY");
            assert_eq!(next.query, "site:freeter.io QUERY");
        }
    }

    #[test]
    fn test_transitions_yield_normalized_settings() {
        let start = [browser("ddgo"), browser(""), with_mode(&browser("bing"), "2")];
        for settings in &start {
            let outputs = [
                with_mode(settings, "1"),
                with_mode(settings, "2"),
                with_engine(settings, ""),
                with_engine(settings, "wkpd"),
                with_query(settings, "q"),
            ];
            for next in outputs {
                assert_eq!(next.normalized(), next);
            }
        }
    }

    #[test]
    fn test_editor_calls_update_settings() {
        let settings = browser("bing");
        let mut updates = Vec::new();
        let mut record = |next: Settings| updates.push(next);

        let mut editor = SettingsEditor::new(&settings, &mut record);
        assert!(editor.change_engine(""));
        assert!(!editor.change_descr("nope"));
        assert!(!editor.change_url("nope"));
        assert!(editor.change_query("QUERY"));
        assert!(editor.change_mode("2"));

        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0].url, "https://www.bing.com/search?q=QUERY");
        assert_eq!(updates[1].query, "QUERY");
        assert_eq!(updates[2].mode, SettingsMode::Webpages);
        assert_eq!(updates[2].descr, "Search");
    }
}
