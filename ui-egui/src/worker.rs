// SPDX-License-Identifier: MIT OR Apache-2.0

//! Background worker with a tokio runtime for the service requests.
//!
//! The egui thread never blocks on the network: it sends [`UiToNet`]
//! messages here and drains [`NetToUi`] answers each frame. Requests are
//! served one at a time in submission order.

use crossbeam_channel::{Receiver, Sender};
use std::thread;
use tokio::runtime::Runtime;

use mancala_client::GameService;

use crate::msg::{NetToUi, UiToNet};

/// Spawn the background worker thread.
pub fn spawn_worker<S>(
    net_rx: Receiver<UiToNet>,
    ui_tx: Sender<NetToUi>,
    service: S,
) -> thread::JoinHandle<()>
where
    S: GameService + Send + 'static,
{
    thread::spawn(move || {
        if let Err(e) = run_worker(net_rx, ui_tx, service) {
            tracing::error!("worker thread error: {e:#}");
        }
    })
}

fn run_worker<S: GameService>(
    net_rx: Receiver<UiToNet>,
    ui_tx: Sender<NetToUi>,
    service: S,
) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    rt.block_on(async {
        // Exits when the UI asks for shutdown or drops its sender.
        while let Ok(msg) = net_rx.recv() {
            match msg {
                UiToNet::StartGame { seq } => {
                    let reply = match service.start().await {
                        Ok(status) => NetToUi::Status { seq, status },
                        Err(e) => {
                            tracing::warn!(seq, "start request failed: {e:#}");
                            NetToUi::RequestFailed {
                                seq,
                                message: format!("{e:#}"),
                            }
                        }
                    };
                    let _ = ui_tx.send(reply);
                }
                UiToNet::PlayMove { seq, player, pit } => {
                    let reply = match service.play_move(&player, pit).await {
                        Ok(status) => NetToUi::Status { seq, status },
                        Err(e) => {
                            tracing::warn!(seq, %player, pit, "move request failed: {e:#}");
                            NetToUi::RequestFailed {
                                seq,
                                message: format!("{e:#}"),
                            }
                        }
                    };
                    let _ = ui_tx.send(reply);
                }
                UiToNet::Shutdown => {
                    let _ = ui_tx.send(NetToUi::ShutdownAck);
                    break;
                }
            }
        }
    });

    Ok(())
}
