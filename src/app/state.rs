//! App state - pure data structure with no I/O logic

use std::collections::VecDeque;

use crate::constants::MAX_FETCH_LOG;
use crate::messages::RenderState;
use crate::models::{Brand, Car, FetchLogEntry, FetchOutcome};

/// Where the current fetch stands
///
/// `Loading` is entered when a fetch command is dispatched and left only
/// when its response (success, failure, or cancellation) is processed.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Brand filter
    pub brand: Brand,

    // Car list, replaced wholesale on each successful fetch
    pub cars: Vec<Car>,
    pub selected_car: usize,

    // Fetch state
    pub phase: FetchPhase,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,
    pub last_fetch_ms: Option<u64>,

    // Activity log (most recent first)
    pub fetch_log: VecDeque<FetchLogEntry>,

    // Popups
    pub show_help: bool,
    pub show_activity: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            brand: Brand::All,
            cars: Vec::new(),
            selected_car: 0,
            phase: FetchPhase::Idle,
            next_request_id: 1,
            pending_request_id: None,
            last_fetch_ms: None,
            fetch_log: VecDeque::with_capacity(MAX_FETCH_LOG),
            show_help: false,
            show_activity: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    /// Record a completed fetch in the bounded activity log
    pub fn log_fetch(&mut self, outcome: FetchOutcome, time_ms: u64) {
        if self.fetch_log.len() >= MAX_FETCH_LOG {
            self.fetch_log.pop_back();
        }
        self.fetch_log.push_front(FetchLogEntry {
            brand: self.brand,
            outcome,
            time_ms,
            timestamp: chrono::Utc::now(),
        });
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            brand: self.brand,
            cars: self.cars.clone(),
            selected_car: self.selected_car,
            phase: self.phase.clone(),
            last_fetch_ms: self.last_fetch_ms,
            fetch_log: self.fetch_log.iter().cloned().collect(),
            show_help: self.show_help,
            show_activity: self.show_activity,
        }
    }
}
