//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::FetchPhase;
use crate::models::{Brand, Car, FetchLogEntry};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Brand filter
    pub brand: Brand,

    // Car list
    pub cars: Vec<Car>,
    pub selected_car: usize,

    // Fetch state
    pub phase: FetchPhase,
    pub last_fetch_ms: Option<u64>,

    // Activity log
    pub fetch_log: Vec<FetchLogEntry>,

    // Popups
    pub show_help: bool,
    pub show_activity: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            brand: Brand::All,
            cars: Vec::new(),
            selected_car: 0,
            phase: FetchPhase::Loading,
            last_fetch_ms: None,
            fetch_log: Vec::new(),
            show_help: false,
            show_activity: false,
        }
    }
}
