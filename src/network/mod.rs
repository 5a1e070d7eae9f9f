//! Network layer - async fetch execution on the Tokio runtime

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
