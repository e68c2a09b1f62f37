use std::path::PathBuf;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::backend_bridge::runtime::{launch, BackendConfig};
use crate::config::{load_settings, LandingSettings};
use crate::controller::events::UiEvent;
use crate::ui::LandingApp;

#[derive(Debug, Parser)]
#[command(name = "sarathi-landing", about = "Sarathi landing page")]
struct Args {
    /// Settings file; defaults to ./landing.toml, then the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    site_url: Option<String>,
    #[arg(long)]
    contact_endpoint: Option<String>,
    #[arg(long)]
    request_timeout_secs: Option<u64>,
}

impl Args {
    fn apply(self, settings: &mut LandingSettings) {
        if let Some(site_url) = self.site_url {
            settings.site_url = site_url;
        }
        if let Some(endpoint) = self.contact_endpoint {
            settings.contact_endpoint = endpoint;
        }
        if let Some(secs) = self.request_timeout_secs {
            settings.request_timeout_secs = secs;
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    args.apply(&mut settings);
    let site_url = settings.site_url().context("invalid landing settings")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    launch(
        BackendConfig {
            site_url,
            contact_endpoint: settings.contact_endpoint.clone(),
            request_timeout: settings.request_timeout(),
        },
        cmd_rx,
        ui_tx,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sarathi - Field Management System")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sarathi",
        options,
        Box::new(move |_cc| Ok(Box::new(LandingApp::new(cmd_tx, ui_rx, settings)))),
    )
    .map_err(|err| anyhow::anyhow!("landing window failed: {err}"))
}
