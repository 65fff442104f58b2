mod app;
mod config;
mod error;
mod io;
mod message;
mod model;
mod route;
mod state;
mod style;
mod view;

use app::DocuChat;
use clap::Parser;
use config::Config;
use eframe::egui;
use io::OfflineBackend;
use std::env;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docuchat")]
#[command(about = "Browse document collections and chat with them")]
#[command(version)]
struct Cli {
    /// Location to open, e.g. /collections or /chat/<id>
    #[arg(value_name = "PATH")]
    path: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn init_logging() {
    let debug_enabled = env::var("DOCUCHAT_DEBUG_LOG")
        .map(|value| matches!(value.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(false);
    let filter = if debug_enabled {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if cli.config.is_none() {
        if let Err(err) = Config::create_default() {
            warn!(error = %err, "Could not write default configuration");
        }
    }
    let config = Config::load(cli.config.as_deref());

    // A path on the command line plays the part of a reload or shared link
    let start = route::start_route(cli.path.as_deref().unwrap_or(&config.navigation.start_path));
    let backend = OfflineBackend::new(config.collections.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 420.0])
            .with_title("DocuChat"),
        ..Default::default()
    };

    eframe::run_native(
        "DocuChat",
        options,
        Box::new(move |cc| {
            Ok(Box::new(DocuChat::new(
                &cc.egui_ctx,
                &config,
                start,
                Box::new(backend),
            )))
        }),
    )
}
