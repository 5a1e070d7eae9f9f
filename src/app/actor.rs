//! App actor - message loop processing UI events and fetch responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{FetchCommand, FetchResponse, RenderState, UiEvent};

/// App actor that processes UI events and fetch responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<FetchCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<FetchCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<FetchResponse>,
    ) {
        // The list fetch fires once at startup, like an effect on mount
        let _ = self.network_tx.send(self.state.initial_fetch());
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(FetchCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Brand selector
            UiEvent::NextBrand => {
                if let Some(cmd) = self.state.select_next_brand() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::PrevBrand => {
                if let Some(cmd) = self.state.select_prev_brand() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::SelectBrand(brand) => {
                if let Some(cmd) = self.state.select_brand(brand) {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Fetch actions
            UiEvent::Refresh => {
                if let Some(cmd) = self.state.refresh() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::CancelFetch => {
                if let Some(cmd) = self.state.cancel_fetch() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Card navigation
            UiEvent::NextCar => self.state.next_car(),
            UiEvent::PrevCar => self.state.prev_car(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),
            UiEvent::ToggleActivity => self.state.toggle_activity(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
