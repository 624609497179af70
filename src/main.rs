//! Employee Editor - Desktop client for viewing and editing employee records
//! in the HR portal.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use employee_editor as app;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use app::config::{AppConfig, ConfigLoadResult};
use app::session::CurrentUser;
use app::ui::App;

/// Desktop client for viewing and editing employee records in the HR portal.
#[derive(Parser)]
#[command(name = "employee-editor")]
struct Cli {
    /// Employee ID to open immediately
    #[arg(long)]
    id: Option<i64>,

    /// Override the configured API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Keep the appender guard alive for the whole run.
    let _log_guard = init_logging();

    tracing::info!("Employee Editor starting...");

    // Determine config path based on mode
    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };
    tracing::info!("Config path: {:?}", config_path);

    let mut config = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            config
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, using defaults");
            let config = AppConfig::default();
            // Write a starter file so the operator has something to edit.
            if let Some(dir) = config_path.parent()
                && std::fs::create_dir_all(dir).is_ok()
                && let Err(e) = config.save(&config_path)
            {
                tracing::warn!("Could not write default config: {e}");
            }
            config
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::error!("Config invalid: {e}");
            std::process::exit(1);
        }
    };

    if let Some(base_url) = cli.base_url {
        tracing::info!("Overriding API base URL: {base_url}");
        config.api.base_url = base_url;
    }

    let user = CurrentUser::from_config(config.user.as_ref());
    match &user {
        Some(user) => tracing::info!("Signed in as {}", user.status_label()),
        None => tracing::info!("No signed-in user"),
    }

    run_app(config, user, cli.id)
}

/// Initialize logging: stdout plus a daily-rolling file next to the config.
///
/// Returns the appender guard; dropping it stops the background writer.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_dir = AppConfig::default_path()
        .parent()
        .map(|p| p.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));

    match std::fs::create_dir_all(&log_dir) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(&log_dir, "employee-editor.log");
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stdout))
                .with(fmt::layer().with_ansi(false).with_writer(file_writer))
                .init();

            Some(guard)
        }
        Err(e) => {
            // Stdout only when the log directory cannot be created.
            tracing_subscriber::fmt().with_env_filter(env_filter).init();
            tracing::warn!("Log directory unavailable ({e}), logging to stdout only");
            None
        }
    }
}

/// Run the editor.
fn run_app(config: AppConfig, user: Option<CurrentUser>, initial_id: Option<i64>) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Employee Editor")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    eframe::run_native(
        "Employee Editor",
        options,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(App::new(config, user, rt, initial_id)))
        }),
    )
}
