//! Search engine catalog used by the Web Query widget in Browser mode.

mod catalog;

use serde::Serialize;

pub use catalog::ENGINES;

/// Position of DuckDuckGo in [`ENGINES`]
const DEFAULT_ENGINE_INDEX: usize = 5;

/// A built-in search engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingsEngine {
    /// Short unique token stored in settings
    pub id: &'static str,
    /// Display name shown in the engine picker
    pub name: &'static str,
    /// Description shown in the query field
    pub descr: &'static str,
    /// URL template containing the `QUERY` placeholder
    pub url: &'static str,
}

/// All built-in engines in display order.
pub fn engines() -> &'static [SettingsEngine] {
    &ENGINES
}

/// Look up a built-in engine by id.
pub fn engine_by_id(id: &str) -> Option<&'static SettingsEngine> {
    catalog::ENGINES_BY_ID
        .get(id)
        .and_then(|&index| ENGINES.get(index))
}

/// The engine used when settings name no engine or an unknown one.
pub fn default_engine() -> &'static SettingsEngine {
    &ENGINES[DEFAULT_ENGINE_INDEX]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use std::collections::HashSet;

    #[test]
    fn test_default_engine_is_duckduckgo() {
        let engine = default_engine();
        assert_eq!(engine.id, config::DEFAULT_ENGINE_ID);
        assert_eq!(engine.name, "DuckDuckGo");
        assert_eq!(engine.descr, "Search");
        assert_eq!(engine.url, "https://duckduckgo.com/?q=QUERY");
    }

    #[test]
    fn test_ids_are_unique_and_indexed() {
        let mut seen = HashSet::new();
        for (index, engine) in engines().iter().enumerate() {
            assert!(!engine.id.is_empty());
            assert!(seen.insert(engine.id), "duplicate id {}", engine.id);
            assert_eq!(catalog::ENGINES_BY_ID.get(engine.id), Some(&index));
        }
        assert_eq!(catalog::ENGINES_BY_ID.len(), engines().len());
    }

    #[test]
    fn test_templates_contain_placeholder() {
        for engine in engines() {
            assert!(
                engine.url.contains(config::QUERY_PLACEHOLDER),
                "{} has no placeholder",
                engine.id
            );
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(engine_by_id("wfal").map(|e| e.name), Some("Wolfram|Alpha"));
        assert_eq!(engine_by_id("bing").map(|e| e.descr), Some("Search"));
        assert!(engine_by_id("").is_none());
        assert!(engine_by_id("not-a-real-id").is_none());
        assert!(engine_by_id("DDGO").is_none());
    }
}
