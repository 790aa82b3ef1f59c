//! Parking domain models.

pub mod car;
pub mod slot;

pub use car::Car;
pub use slot::{SlotNumber, SlotStatus};
