//! # Showroom TUI
//!
//! A terminal-based browser for car listings served by a backend HTTP
//! API: pick a brand filter, get the matching cars as a grid of cards.
//!
//! ## Features
//! - Brand filter (All cars, Fiat, Citroen, Renault, Opel, Toyota)
//! - One fetch per filter change; the most recent request wins
//! - Loading and error banners that track actual fetch completion
//! - Cancellation of in-flight and superseded requests
//! - Configurable backend base URL (`~/.showroom/config.yaml`)
//! - Recent-fetch activity log
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::state::FetchPhase;
pub use app::{AppActor, AppState};
pub use config::Config;
pub use messages::{FetchCommand, FetchResponse, RenderState, UiEvent};
pub use models::{Brand, Car, CarPage};
pub use network::NetworkActor;
