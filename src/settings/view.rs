//! What the settings form shows for a given [`Settings`] value.
//!
//! Each control reflects one field and maps to one editor transition.

use super::editor::{descr_editable, url_editable};
use super::{Settings, SettingsMode};
use crate::config;
use crate::engine;
use serde::Serialize;

/// An entry of a select control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: &'static str,
}

/// A select control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectView {
    pub id: &'static str,
    pub title: &'static str,
    /// Help text shown next to the title
    pub more_info: &'static str,
    pub value: String,
    pub options: Vec<SelectOption>,
}

/// A text input control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub id: &'static str,
    pub title: &'static str,
    /// Help text shown next to the title
    pub more_info: &'static str,
    pub value: String,
    pub editable: bool,
    pub max_len: Option<usize>,
    pub placeholder: Option<&'static str>,
}

impl FieldView {
    fn new(
        id: &'static str,
        title: &'static str,
        more_info: &'static str,
        max_len: Option<usize>,
    ) -> Self {
        Self {
            id,
            title,
            more_info,
            value: String::new(),
            editable: true,
            max_len,
            placeholder: None,
        }
    }

    fn editable_with(mut self, value: &str, placeholder: &'static str) -> Self {
        self.value = value.to_string();
        self.placeholder = Some(placeholder);
        self
    }

    /// Disabled input mirroring a catalog value.
    fn read_only(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self.editable = false;
        self
    }
}

/// The full settings form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorView {
    pub mode: SelectView,
    /// Browser mode only
    pub engine: Option<SelectView>,
    pub descr: FieldView,
    /// Browser mode only
    pub url: Option<FieldView>,
    pub query: FieldView,
}

/// Value of the "Custom Engine" entry of the engine picker
pub const CUSTOM_ENGINE_VALUE: &str = "";

const MODE_INFO: &str = "By default, the widget performs queries using a Browser app.
To run queries within webpage widgets in the same workflow, switch to Webpages mode.

Make sure that any Webpage widget you want to use for queries includes the capitalized word QUERY in its URL setting. This acts as a placeholder and will be automatically replaced with the actual query entered in the Web Query widget.";

const ENGINE_INFO: &str = "Pick one of the common engines to perform your queries with, or select Custom Engine to define your own engine.";

const DESCR_INFO: &str = "A short description displayed in the query field.";

const URL_INFO: &str = "A template of a URL that will be opened to perform the query. Capitalized QUERY inside the url template is a placeholder that will be replaced with a query typed in the widget.";

const QUERY_INFO: &str = "If you need to retype similar queries, use this setting to specify a template for them. Capitalized QUERY inside the template is a placeholder that will be replaced with a query typed in the widget. Template examples: \"How to QUERY in Blender?\" to search for Blender tutorials, \"site:freeter.io QUERY\" to search on freeter.io website.";

fn mode_select(settings: &Settings) -> SelectView {
    SelectView {
        id: "web-query-mode",
        title: "Mode",
        more_info: MODE_INFO,
        value: settings.mode.tag().to_string(),
        options: SettingsMode::ALL
            .into_iter()
            .map(|mode| SelectOption {
                value: mode.tag().to_string(),
                label: mode.label(),
            })
            .collect(),
    }
}

fn engine_select(settings: &Settings) -> SelectView {
    let custom = SelectOption {
        value: CUSTOM_ENGINE_VALUE.to_string(),
        label: "Custom Engine",
    };
    let catalog = engine::engines().iter().map(|e| SelectOption {
        value: e.id.to_string(),
        label: e.name,
    });

    SelectView {
        id: "web-query-engine",
        title: "Query Engine",
        more_info: ENGINE_INFO,
        value: settings.engine.clone(),
        options: std::iter::once(custom).chain(catalog).collect(),
    }
}

impl EditorView {
    pub fn new(settings: &Settings) -> Self {
        let in_browser = settings.mode == SettingsMode::Browser;
        let catalog_engine = settings.resolved_engine();

        let descr = FieldView::new(
            "web-query-descr",
            "Description",
            DESCR_INFO,
            Some(config::DESCR_MAX_LEN),
        );
        let descr = if descr_editable(settings) {
            descr.editable_with(&settings.descr, "Type a description")
        } else {
            descr.read_only(catalog_engine.map_or("", |e| e.descr))
        };

        let url = in_browser.then(|| {
            let url = FieldView::new(
                "web-query-url",
                "URL Template",
                URL_INFO,
                Some(config::URL_MAX_LEN),
            );
            if url_editable(settings) {
                url.editable_with(&settings.url, "Type a URL template")
            } else {
                url.read_only(catalog_engine.map_or("", |e| e.url))
            }
        });

        let query = FieldView::new("web-query-query", "Query Template", QUERY_INFO, None)
            .editable_with(&settings.query, "Type a query template");

        Self {
            mode: mode_select(settings),
            engine: in_browser.then(|| engine_select(settings)),
            descr,
            url,
            query,
        }
    }
}
