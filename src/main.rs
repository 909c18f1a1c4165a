//! Campus Admin - desktop admin console for student, teacher, and attendance management.

use std::path::PathBuf;
use std::sync::Arc;

use campus_admin as app;
use clap::Parser;
use eframe::egui;

use app::config::{AppConfig, ConfigLoadResult};
use app::session::SessionStore;
use app::ui::App;

/// Desktop admin console for student, teacher, and attendance management.
#[derive(Parser)]
#[command(name = "campus-admin")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Campus Admin starting...");

    // Determine config path based on mode
    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };
    tracing::info!("Config path: {:?}", config_path);

    let config = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded, backend: {}", config.api.base_url);
            config
        }
        ConfigLoadResult::Missing => {
            let config = AppConfig::default();
            tracing::info!("Config missing, using defaults, backend: {}", config.api.base_url);
            config
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::error!("Config invalid: {e}");
            std::process::exit(2);
        }
    };

    let session = Arc::new(SessionStore::open(SessionStore::default_path()));

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Campus Admin")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Campus Admin",
        options,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(App::new(&config, session, rt)?))
        }),
    )
}
