mod app;
mod cli;
mod config;
mod state;
mod submission;
mod task;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::Config;
use crate::submission::HttpEndpoint;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Headless runs stay quiet unless asked; the window logs like any app
    let default_filter = if args.command.is_none() || args.output.verbose {
        "contact_me=debug,info"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Some(command) => cli::run(command, &args.output).await,
        None => run_gui(),
    }
}

fn run_gui() -> Result<()> {
    tracing::info!("Starting Contact Me");

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let endpoint = HttpEndpoint::from_config(&config.server)?;
    tracing::info!("Messages will be posted to {}", endpoint.url());

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([560.0, 780.0])
        .with_min_inner_size([420.0, 520.0])
        .with_title("Contact me");

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Contact Me",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::ContactApp::new(cc, config, endpoint)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
