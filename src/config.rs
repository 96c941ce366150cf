/// Application qualifier, organization and name for `directories::ProjectDirs`
pub const APP_QUALIFIER: &str = "dev";
pub const APP_ORGANIZATION: &str = "myyc";
pub const APP_NAME: &str = "web-query";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder substituted with the user's query in URL and query templates
pub const QUERY_PLACEHOLDER: &str = "QUERY";

// ============================================================================
// Settings
// ============================================================================

/// Description used in Webpages mode when none is stored
pub const DEFAULT_WEBPAGES_DESCR: &str = "Search";

/// Maximum description length offered by the editor
pub const DESCR_MAX_LEN: usize = 100;

/// Maximum custom URL template length offered by the editor
pub const URL_MAX_LEN: usize = 2000;

/// Id of the default search engine
pub const DEFAULT_ENGINE_ID: &str = "ddgo";

// ============================================================================
// Files
// ============================================================================

/// Application config filename (inside the config dir)
pub const CONFIG_FILE: &str = "config.toml";

/// Directory holding one settings file per widget (inside the data dir)
pub const WIDGETS_DIR: &str = "widgets";

/// Extension of a widget settings file
pub const WIDGET_FILE_EXT: &str = "json";

/// Default log filter when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "info";
