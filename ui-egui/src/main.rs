// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main entry point for the Mancala egui client.

use anyhow::Result;
use clap::Parser;
use crossbeam_channel::unbounded;
use eframe::egui;
use flexi_logger::{FileSpec, Logger};

use mancala_client::ApiClient;
use mancala_ui_egui::app::App;
use mancala_ui_egui::msg::{NetToUi, UiToNet};
use mancala_ui_egui::worker;

#[derive(Parser)]
#[command(name = "mancala-ui-egui")]
#[command(about = "Desktop client for the Mancala game service")]
struct Args {
    /// Base URL of the game service
    #[arg(long, default_value = "http://localhost:8080")]
    server: String,

    /// Log at debug level to stderr instead of the log file
    #[arg(long)]
    debug: bool,
}

fn init_logging(debug: bool) -> Result<()> {
    if debug {
        Logger::try_with_str("debug")?.start()?;
    } else {
        Logger::try_with_str("info")?
            .log_to_file(
                FileSpec::default()
                    .directory("logs")
                    .basename("mancala")
                    .suffix("log"),
            )
            .start()?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = init_logging(args.debug) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    // Channels between the UI thread and the request worker
    let (ui_tx, net_rx) = unbounded::<UiToNet>();
    let (net_tx, ui_rx) = unbounded::<NetToUi>();

    let client = ApiClient::new(&args.server)?;
    let worker_handle = worker::spawn_worker(net_rx, net_tx, client);

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(900.0, 640.0)),
        centered: true,
        resizable: true,
        ..Default::default()
    };

    eframe::run_native(
        "Mancala",
        options,
        Box::new(move |_cc| {
            let mut app = App::new(ui_tx, ui_rx);
            app.set_worker_handle(worker_handle);
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {e}"))
}
