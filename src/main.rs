use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use web_query::app_config::AppConfig;
use web_query::config;
use web_query::engine;
use web_query::settings::editor::SettingsEditor;
use web_query::settings::view::EditorView;
use web_query::store::SettingsStore;
use web_query::{create_settings_state, Settings};

#[derive(Parser, Debug)]
#[command(name = "web-query", version, about = "Manage Web Query widget settings")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in search engines
    Engines,
    /// Normalize a settings JSON blob (stdin when FILE is omitted)
    Normalize { file: Option<PathBuf> },
    /// List widgets with stored settings
    Widgets,
    /// Show a widget's settings form
    Show { widget: String },
    /// Edit one field of a widget's settings
    Set {
        widget: String,
        field: Field,
        value: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Field {
    Mode,
    Engine,
    Descr,
    Url,
    Query,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    widget: &'a str,
    settings: &'a Settings,
    form: EditorView,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli, app_config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Engines => {
            for engine in engine::engines() {
                println!("{:<10} {:<24} {}", engine.id, engine.name, engine.url);
            }
        }
        Command::Normalize { file } => {
            let contents = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let raw = serde_json::from_str(&contents).unwrap_or_else(|e| {
                log::warn!("Input is not valid JSON ({}), using defaults", e);
                serde_json::Value::Null
            });
            print_json(&create_settings_state(&raw))?;
        }
        Command::Widgets => {
            let store = SettingsStore::new(&app_config.data_dir())?;
            for id in store.widget_ids()? {
                println!("{}", id);
            }
        }
        Command::Show { widget } => {
            let store = SettingsStore::new(&app_config.data_dir())?;
            let settings = store.load(&widget)?;
            print_json(&ShowOutput {
                widget: &widget,
                settings: &settings,
                form: EditorView::new(&settings),
            })?;
        }
        Command::Set { widget, field, value } => {
            let store = SettingsStore::new(&app_config.data_dir())?;
            let mut widget_settings = store.open(&widget)?;
            let current = widget_settings.settings().clone();

            let mut editor = SettingsEditor::new(&current, &mut widget_settings);
            let applied = match field {
                Field::Mode => editor.change_mode(&value),
                Field::Engine => editor.change_engine(&value),
                Field::Descr => editor.change_descr(&value),
                Field::Url => editor.change_url(&value),
                Field::Query => editor.change_query(&value),
            };

            if !applied {
                log::warn!(
                    "{:?} is read-only for the current engine of widget '{}'",
                    field,
                    widget_settings.widget_id()
                );
            } else if widget_settings.commit()? {
                log::info!("Updated {:?} of widget '{}'", field, widget_settings.widget_id());
            }
            print_json(widget_settings.settings())?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => AppConfig::load(path),
        None => AppConfig::load_default(),
    };
    let filter = loaded
        .as_ref()
        .map(|c| c.log_filter().to_string())
        .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.to_string());

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    log::debug!("Starting {} v{}", config::APP_NAME, config::APP_VERSION);

    let app_config = match loaded {
        Ok(app_config) => app_config,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli, &app_config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
