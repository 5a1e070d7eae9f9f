//! Network messages - communication between App and Network layers

use crate::models::{Brand, Car};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum FetchCommand {
    /// Fetch the car list for a brand filter
    FetchCars {
        id: u64,
        brand: Brand,
    },
    /// Cancel a pending fetch
    Cancel(u64),
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
///
/// Every variant carries the id of the request it answers; the App layer
/// discards responses whose id is not the currently pending one.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResponse {
    /// The car list arrived and decoded
    Cars {
        id: u64,
        cars: Vec<Car>,
        time_ms: u64,
    },
    /// Transport failure, non-success status, or malformed body
    Error {
        id: u64,
        message: String,
        time_ms: u64,
    },
    /// The fetch was cancelled before completing
    Cancelled {
        id: u64,
    },
}

impl FetchResponse {
    /// Get the request ID the response belongs to
    pub fn id(&self) -> u64 {
        match self {
            FetchResponse::Cars { id, .. } => *id,
            FetchResponse::Error { id, .. } => *id,
            FetchResponse::Cancelled { id } => *id,
        }
    }
}
