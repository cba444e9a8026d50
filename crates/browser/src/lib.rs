//! Terminal front end for the biocat tool catalog.
//!
//! The main entry point is [`run`], which parses the command line, loads the
//! catalog when the command needs it, and dispatches to a handler. The
//! [`session`], [`debounce`] and [`render`] modules are public so the
//! browsing flow can be driven without a terminal.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

mod cli;
mod commands;
pub mod debounce;
pub mod render;
pub mod session;

use std::io::IsTerminal;

use anyhow::Result;
use biocat_catalog::CatalogSource;
use biocat_state::{
    resolve_data_source, debounce_delay, load_settings, JsonFilePreferences, Settings, Theme,
};
use clap::Parser;
use tokio::runtime::Runtime;

pub use cli::{Cli, Commands, OutputFormat};
pub use debounce::{run_debounced, Debouncer};
pub use render::Markers;
pub use session::BrowserSession;

use commands::Output;

/// Parses the command line and runs the selected command.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    execute(cli)
}

/// Runs an already parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let settings = load_settings().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable settings file");
        Settings::default()
    });
    let source = catalog_source(cli.data, &settings);
    let out = Output {
        format: cli.format,
        markers: Markers::for_output(stored_theme(), std::io::stdout().is_terminal()),
    };
    let settings_delay = || debounce_delay(&|| Ok::<_, anyhow::Error>(settings.clone()));
    let runtime = Runtime::new()?;
    let open_session = || runtime.block_on(BrowserSession::load(source.clone()));

    match cli.command {
        Commands::Search { query } => {
            commands::handle_search_command(&mut open_session(), &query, out)
        }
        Commands::Category { name } => {
            commands::handle_category_command(&mut open_session(), &name, out)
        }
        Commands::Categories => commands::handle_categories_command(&open_session(), out),
        Commands::Show { name } => commands::handle_show_command(&mut open_session(), &name, out),
        Commands::List => commands::handle_list_command(&open_session(), out),
        Commands::Goals { data_type } => commands::handle_goals_command(data_type, out),
        Commands::Recommend {
            data_type,
            goal,
            show_tools,
        } => {
            let mut session = show_tools.then(open_session);
            commands::handle_recommend_command(data_type, &goal, session.as_mut(), out)
        }
        Commands::Wizard => commands::handle_wizard_command(&mut open_session(), out),
        Commands::Live { debounce_ms } => {
            let delay = debounce_ms
                .map(std::time::Duration::from_millis)
                .unwrap_or_else(settings_delay);
            let mut session = open_session();
            runtime.block_on(commands::handle_live_command(&mut session, delay, out))
        }
        Commands::Theme { toggle } => commands::handle_theme_command(toggle, cli.format),
        Commands::Doctor => {
            commands::handle_doctor_command(&open_session(), settings_delay())
        }
    }
}

/// Resolves the catalog source: `--data`, then `BIOCAT_DATA`, then settings, then bundled.
pub fn catalog_source(cli_override: Option<String>, settings: &Settings) -> CatalogSource {
    resolve_data_source(cli_override, settings)
        .map(|raw| CatalogSource::parse(&raw))
        .unwrap_or_default()
}

fn stored_theme() -> Theme {
    match JsonFilePreferences::open_default() {
        Ok(store) => Theme::load(&store),
        Err(e) => {
            tracing::debug!(error = %e, "theme preference unavailable; using light");
            Theme::default()
        }
    }
}
