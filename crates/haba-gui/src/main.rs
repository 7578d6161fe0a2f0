mod app;
mod keyboard;
mod screen;
mod style;
mod subscription;
mod theme;
mod widgets;
mod window_state;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use haba_core::{AppConfig, DeviceTier, TokenTable};

/// Preview token tables and breakpoints at live window sizes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to load and save settings to
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Token table to open with, overriding the config
    #[arg(long, value_name = "NAME")]
    tokens: Option<String>,

    /// Validate a token table file and exit
    #[arg(long, value_name = "FILE")]
    check: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = cli.check {
        return check_tokens(&path);
    }

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = match AppConfig::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}: {e}", config_path.display());
            return ExitCode::FAILURE;
        }
    };

    let _guard = init_tracing(&config.logging.filter);
    tracing::info!("Using config {}", config_path.display());

    let launch = app::Launch {
        config,
        config_path,
        tokens: cli.tokens,
        window_state_path: window_state::state_path(),
    };

    match run(launch) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Application error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(launch: app::Launch) -> iced::Result {
    let ws = window_state::WindowState::load();

    let mut win = iced::window::Settings {
        size: ws.size(),
        min_size: Some(iced::Size::new(320.0, 480.0)),
        ..Default::default()
    };

    if let Some(pos) = ws.position() {
        win.position = iced::window::Position::Specific(pos);
    } else {
        win.position = iced::window::Position::Centered;
    }

    iced::application(
        move || app::Haba::new(launch.clone()),
        app::Haba::update,
        app::Haba::view,
    )
    .title(app::Haba::title)
    .subscription(app::Haba::subscription)
    .theme(app::Haba::theme)
    .font(lucide_icons::LUCIDE_FONT_BYTES)
    .window(win)
    .run()
}

/// Console output plus a daily log file under the data dir.
///
/// `RUST_LOG` wins over the configured filter when set.
fn init_tracing(filter: &str) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new("haba=info"));

    let (file_layer, guard) = match AppConfig::data_dir() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "haba.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

/// Parse and validate a token table, printing a short report.
fn check_tokens(path: &Path) -> ExitCode {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    };

    match TokenTable::from_toml(&content) {
        Ok(table) => {
            let count = table.names().count();
            println!(
                "{}: table `{}` ok, {} tiers, {count} tokens",
                path.display(),
                table.name(),
                DeviceTier::COUNT
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}: {e}", path.display());
            ExitCode::FAILURE
        }
    }
}
