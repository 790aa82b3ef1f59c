//! # Reporting Port
//!
//! Outbound boundary between the lot service and whatever presents its
//! results. The CLI renders to the terminal; tests record the calls.

use crate::error::LotError;
use crate::lot::{Car, SlotNumber, SlotStatus};

pub trait LotReporter {
    fn lot_created(&self, capacity: usize);
    fn parked(&self, slot: SlotNumber, car: &Car);
    fn left(&self, slot: SlotNumber, car: &Car);
    /// Receives the occupied slots in ascending order.
    fn status(&self, rows: &mut dyn Iterator<Item = SlotStatus<'_>>);
    fn registrations(&self, color: &str, registrations: &[&str]);
    fn slots(&self, color: &str, slots: &[SlotNumber]);
    fn slot_for_registration(&self, registration: &str, slot: SlotNumber);
    fn failure(&self, err: &LotError);
}
