//! Messages passed between the UI, App, and Network layers

pub mod network;
pub mod render;
pub mod ui_events;

pub use network::{FetchCommand, FetchResponse};
pub use render::RenderState;
pub use ui_events::UiEvent;
