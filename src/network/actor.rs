//! Network actor - runs car-list fetches in the Tokio async runtime

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::config::Config;
use crate::messages::{FetchCommand, FetchResponse};
use crate::network::client::{create_client, fetch_cars};

/// Tracks the in-flight fetch for cancellation
struct ActiveFetch {
    id: u64,
    cancel_tx: oneshot::Sender<()>,
}

/// Network actor that processes fetch commands
///
/// At most one fetch is kept in flight: a newer fetch command aborts the
/// previous one, so the most recent request is the only one that can
/// still deliver a result.
pub struct NetworkActor {
    client: reqwest::Client,
    base_url: String,
    response_tx: mpsc::UnboundedSender<FetchResponse>,
    tasks: JoinSet<()>,
    active: Option<ActiveFetch>,
}

impl NetworkActor {
    pub fn new(config: &Config, response_tx: mpsc::UnboundedSender<FetchResponse>) -> Self {
        NetworkActor {
            client: create_client(),
            base_url: config.base_url.clone(),
            response_tx,
            tasks: JoinSet::new(),
            active: None,
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<FetchCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(FetchCommand::FetchCars { id, brand }) => {
                            if let Some(prev) = self.active.take() {
                                tracing::info!(id = prev.id, "Aborting superseded fetch");
                                let _ = prev.cancel_tx.send(());
                            }

                            let (cancel_tx, mut cancel_rx) = oneshot::channel();
                            self.active = Some(ActiveFetch { id, cancel_tx });

                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let base_url = self.base_url.clone();

                            self.tasks.spawn(async move {
                                tracing::info!(id, brand = brand.query_value(), "Fetching cars");
                                tokio::select! {
                                    _ = &mut cancel_rx => {
                                        // superseded or cancelled, result discarded
                                    }
                                    result = fetch_cars(&client, &base_url, brand, id) => {
                                        tracing::info!(id, "Fetch completed");
                                        let _ = response_tx.send(result);
                                    }
                                }
                            });
                        }

                        Some(FetchCommand::Cancel(id)) => {
                            if self.active.as_ref().map(|a| a.id) == Some(id) {
                                if let Some(active) = self.active.take() {
                                    tracing::info!(id, "Cancelling fetch");
                                    let _ = active.cancel_tx.send(());
                                    let _ = self.response_tx.send(FetchResponse::Cancelled { id });
                                }
                            }
                        }

                        Some(FetchCommand::Shutdown) => {
                            if let Some(active) = self.active.take() {
                                let _ = active.cancel_tx.send(());
                            }
                            break;
                        }

                        None => break,
                    }
                }

                // Reap finished fetch tasks
                Some(_result) = self.tasks.join_next() => {}
            }
        }
    }
}
