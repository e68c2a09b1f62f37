//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread, time::Duration};

use crossbeam_channel::{Receiver, Sender};
use page_core::{deliver, ContactTransport, HttpContactTransport};
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub site_url: Url,
    pub contact_endpoint: String,
    pub request_timeout: Duration,
}

pub fn launch(config: BackendConfig, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        let transport = match HttpContactTransport::for_site(
            &config.site_url,
            &config.contact_endpoint,
            config.request_timeout,
        ) {
            Ok(transport) => {
                tracing::info!(endpoint = %transport.endpoint(), "contact transport ready");
                Arc::new(transport)
            }
            Err(err) => {
                tracing::error!("failed to prepare contact transport: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(err.to_string()));
                return;
            }
        };

        run_command_loop(&runtime, transport, cmd_rx, ui_tx);
    });
}

/// Each command runs as its own task so a slow submission never holds up the
/// queue; outcomes are reported back in completion order.
pub fn run_command_loop<T: ContactTransport + 'static>(
    runtime: &tokio::runtime::Runtime,
    transport: Arc<T>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        tracing::debug!(command = cmd.name(), "backend command received");
        match cmd {
            BackendCommand::SubmitContact { record } => {
                let transport = transport.clone();
                let ui_tx = ui_tx.clone();
                runtime.spawn(async move {
                    let outcome = deliver(transport.as_ref(), &record).await;
                    if ui_tx.send(UiEvent::ContactSubmitted(outcome)).is_err() {
                        tracing::warn!("ui went away before contact outcome was delivered");
                    }
                });
            }
        }
    }
    tracing::info!("backend command queue closed; worker exiting");
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
