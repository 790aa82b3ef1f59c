//! # Lotkeeper Core
//!
//! The parking lot manager and the use cases built on top of it.
//!
//! * [`lot`]: the [`ParkingLot`](lot::ParkingLot) itself.
//! * [`pool`]: lowest-first free slot allocation.
//! * [`index`]: color and registration lookups.
//! * [`service`]: runs lot operations and reports their outcomes.
//! * [`scenario`]: the fixed demo sequence.

pub mod index;
pub mod lot;
pub mod pool;
pub mod scenario;
pub mod service;
