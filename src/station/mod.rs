//! Station registry and the multi-station coordinator.

mod coordinator;
mod id;

pub use coordinator::{StationCoordinator, TickReport};
pub use id::{StationId, MAX_STATIONS};
