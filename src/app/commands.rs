//! Command handlers - business logic for processing UI events

use crate::app::state::{AppState, FetchPhase};
use crate::messages::{FetchCommand, FetchResponse};
use crate::models::{Brand, FetchOutcome};

impl AppState {
    // ========================
    // Brand selection
    // ========================

    /// Switch the brand filter and dispatch a fetch for it
    ///
    /// Selecting the already-active brand is a no-op, matching a selector
    /// that only fires on change. The displayed list is cleared up front;
    /// a fetch already in flight is superseded by the new request id.
    pub fn select_brand(&mut self, brand: Brand) -> Option<FetchCommand> {
        if brand == self.brand {
            return None;
        }
        self.brand = brand;
        self.cars.clear();
        self.selected_car = 0;
        Some(self.dispatch_fetch())
    }

    pub fn select_next_brand(&mut self) -> Option<FetchCommand> {
        self.select_brand(self.brand.next())
    }

    pub fn select_prev_brand(&mut self) -> Option<FetchCommand> {
        self.select_brand(self.brand.prev())
    }

    // ========================
    // Fetch dispatch
    // ========================

    /// The fetch fired at startup for the default filter
    pub fn initial_fetch(&mut self) -> FetchCommand {
        self.dispatch_fetch()
    }

    /// Re-fetch the current brand, keeping the displayed list
    ///
    /// Refused while a fetch is already pending.
    pub fn refresh(&mut self) -> Option<FetchCommand> {
        if self.pending_request_id.is_some() {
            return None;
        }
        Some(self.dispatch_fetch())
    }

    /// Cancel the currently pending fetch, if any
    pub fn cancel_fetch(&self) -> Option<FetchCommand> {
        self.pending_request_id.map(FetchCommand::Cancel)
    }

    fn dispatch_fetch(&mut self) -> FetchCommand {
        let id = self.next_id();
        self.pending_request_id = Some(id);
        self.phase = FetchPhase::Loading;
        FetchCommand::FetchCars {
            id,
            brand: self.brand,
        }
    }

    // ========================
    // Response handling
    // ========================

    /// Apply a fetch response to the state
    ///
    /// Responses whose id is not the pending one are stale (a newer fetch
    /// superseded them, or the fetch already resolved) and are discarded,
    /// so the most recent request always wins.
    pub fn handle_response(&mut self, response: FetchResponse) {
        if self.pending_request_id != Some(response.id()) {
            tracing::debug!(id = response.id(), "Dropping stale fetch response");
            return;
        }

        match response {
            FetchResponse::Cars { cars, time_ms, .. } => {
                self.cars = cars;
                self.selected_car = 0;
                self.phase = FetchPhase::Idle;
                self.last_fetch_ms = Some(time_ms);
                self.log_fetch(FetchOutcome::Loaded(self.cars.len()), time_ms);
            }
            FetchResponse::Error { message, time_ms, .. } => {
                self.phase = FetchPhase::Failed(message.clone());
                self.last_fetch_ms = Some(time_ms);
                self.log_fetch(FetchOutcome::Failed(message), time_ms);
            }
            FetchResponse::Cancelled { .. } => {
                self.phase = FetchPhase::Idle;
                self.log_fetch(FetchOutcome::Cancelled, 0);
            }
        }
        self.pending_request_id = None;
    }

    // ========================
    // Card navigation
    // ========================

    pub fn next_car(&mut self) {
        if !self.cars.is_empty() && self.selected_car + 1 < self.cars.len() {
            self.selected_car += 1;
        }
    }

    pub fn prev_car(&mut self) {
        self.selected_car = self.selected_car.saturating_sub(1);
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    pub fn toggle_activity(&mut self) {
        self.show_activity = !self.show_activity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Car;

    fn car(id: &str) -> Car {
        Car {
            id: id.to_string(),
            brand: String::from("Fiat"),
            make: String::from("500"),
            year: 2019,
            price: 9500,
            km: 42000,
            cm3: 900,
        }
    }

    fn fetch_brand(cmd: FetchCommand) -> (u64, Brand) {
        match cmd {
            FetchCommand::FetchCars { id, brand } => (id, brand),
            other => panic!("expected FetchCars, got {other:?}"),
        }
    }

    #[test]
    fn each_brand_selection_issues_exactly_one_fetch() {
        for target in Brand::ALL {
            let mut state = AppState::new();
            // start from a different filter so the selection is a change
            state.brand = if target == Brand::Fiat {
                Brand::All
            } else {
                Brand::Fiat
            };
            let cmd = state.select_brand(target).expect("one fetch command");
            let (_, brand) = fetch_brand(cmd);
            assert_eq!(brand.query_value(), target.query_value());
            // no second command without another change
            assert_eq!(state.select_brand(target), None);
        }
    }

    #[test]
    fn selecting_active_brand_is_a_noop() {
        let mut state = AppState::new();
        assert_eq!(state.select_brand(Brand::All), None);
        assert_eq!(state.pending_request_id, None);
        assert_eq!(state.phase, FetchPhase::Idle);
    }

    #[test]
    fn brand_change_clears_list_and_enters_loading() {
        let mut state = AppState::new();
        state.cars = vec![car("1"), car("2")];
        state.selected_car = 1;

        let cmd = state.select_brand(Brand::Opel).unwrap();
        let (id, brand) = fetch_brand(cmd);
        assert_eq!(brand, Brand::Opel);
        assert!(state.cars.is_empty());
        assert_eq!(state.selected_car, 0);
        assert!(state.is_loading());
        assert_eq!(state.pending_request_id, Some(id));
    }

    #[test]
    fn successful_response_replaces_list_in_order() {
        let mut state = AppState::new();
        let (id, _) = fetch_brand(state.initial_fetch());

        state.handle_response(FetchResponse::Cars {
            id,
            cars: vec![car("1"), car("2")],
            time_ms: 12,
        });

        let ids: Vec<&str> = state.cars.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(state.phase, FetchPhase::Idle);
        assert_eq!(state.pending_request_id, None);
        assert_eq!(state.last_fetch_ms, Some(12));
    }

    #[test]
    fn most_recent_request_wins_when_responses_arrive_reversed() {
        let mut state = AppState::new();
        // mount fetch for All, then an immediate switch to Fiat
        let (all_id, _) = fetch_brand(state.initial_fetch());
        let (fiat_id, _) = fetch_brand(state.select_brand(Brand::Fiat).unwrap());
        assert_ne!(all_id, fiat_id);

        // Fiat's response lands first, the stale All response second
        state.handle_response(FetchResponse::Cars {
            id: fiat_id,
            cars: vec![car("fiat-1")],
            time_ms: 5,
        });
        state.handle_response(FetchResponse::Cars {
            id: all_id,
            cars: vec![car("all-1"), car("all-2")],
            time_ms: 80,
        });

        assert_eq!(state.cars.len(), 1);
        assert_eq!(state.cars[0].id, "fiat-1");
        assert_eq!(state.phase, FetchPhase::Idle);
    }

    #[test]
    fn loading_holds_from_dispatch_until_resolution() {
        let mut state = AppState::new();
        let (id, _) = fetch_brand(state.initial_fetch());
        assert!(state.is_loading());

        // still loading until the response is processed
        assert!(state.is_loading());
        state.handle_response(FetchResponse::Cars {
            id,
            cars: vec![],
            time_ms: 3,
        });
        assert!(!state.is_loading());
    }

    #[test]
    fn failure_surfaces_an_error_instead_of_silently_freezing() {
        let mut state = AppState::new();
        let (id, _) = fetch_brand(state.select_brand(Brand::Toyota).unwrap());

        state.handle_response(FetchResponse::Error {
            id,
            message: String::from("Connection failed: refused"),
            time_ms: 7,
        });

        assert_eq!(
            state.phase,
            FetchPhase::Failed(String::from("Connection failed: refused"))
        );
        assert!(state.cars.is_empty());
        assert_eq!(state.pending_request_id, None);
    }

    #[test]
    fn cancellation_returns_to_idle() {
        let mut state = AppState::new();
        let (id, _) = fetch_brand(state.initial_fetch());
        assert_eq!(state.cancel_fetch(), Some(FetchCommand::Cancel(id)));

        state.handle_response(FetchResponse::Cancelled { id });
        assert_eq!(state.phase, FetchPhase::Idle);
        assert_eq!(state.pending_request_id, None);
    }

    #[test]
    fn late_response_after_resolution_is_a_noop() {
        let mut state = AppState::new();
        let (id, _) = fetch_brand(state.initial_fetch());
        state.handle_response(FetchResponse::Cars {
            id,
            cars: vec![car("1")],
            time_ms: 4,
        });

        // a duplicate or post-shutdown straggler must change nothing
        state.handle_response(FetchResponse::Error {
            id,
            message: String::from("late"),
            time_ms: 99,
        });
        assert_eq!(state.phase, FetchPhase::Idle);
        assert_eq!(state.cars.len(), 1);
    }

    #[test]
    fn refresh_keeps_list_and_is_refused_while_pending() {
        let mut state = AppState::new();
        let (id, _) = fetch_brand(state.initial_fetch());
        state.handle_response(FetchResponse::Cars {
            id,
            cars: vec![car("1")],
            time_ms: 4,
        });

        let cmd = state.refresh().expect("refresh dispatches");
        assert_eq!(state.cars.len(), 1);
        assert!(state.is_loading());
        let (_, brand) = fetch_brand(cmd);
        assert_eq!(brand, Brand::All);

        assert_eq!(state.refresh(), None);
    }

    #[test]
    fn empty_list_renders_zero_cards_without_error() {
        let mut state = AppState::new();
        let (id, _) = fetch_brand(state.initial_fetch());
        state.handle_response(FetchResponse::Cars {
            id,
            cars: vec![],
            time_ms: 2,
        });

        let render = state.to_render_state();
        assert!(render.cars.is_empty());
        assert_eq!(render.phase, FetchPhase::Idle);
    }

    #[test]
    fn fetch_log_records_outcomes_most_recent_first() {
        let mut state = AppState::new();
        let (id, _) = fetch_brand(state.initial_fetch());
        state.handle_response(FetchResponse::Cars {
            id,
            cars: vec![car("1")],
            time_ms: 4,
        });
        let (id, _) = fetch_brand(state.select_brand(Brand::Renault).unwrap());
        state.handle_response(FetchResponse::Error {
            id,
            message: String::from("boom"),
            time_ms: 9,
        });

        assert_eq!(state.fetch_log.len(), 2);
        assert_eq!(
            state.fetch_log[0].outcome,
            crate::models::FetchOutcome::Failed(String::from("boom"))
        );
        assert_eq!(state.fetch_log[0].brand, Brand::Renault);
    }
}
