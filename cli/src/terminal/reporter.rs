use colored::*;
use lotkeeper_common::error::LotError;
use lotkeeper_common::lot::{Car, SlotNumber, SlotStatus};
use lotkeeper_common::report::LotReporter;

use crate::terminal::{colors, format, print};

/// Renders lot outcomes to the terminal through the print log target.
pub struct TerminalReporter;

impl LotReporter for TerminalReporter {
    fn lot_created(&self, capacity: usize) {
        print::print_status(format!(
            "Created a parking lot with {} slots",
            capacity.to_string().color(colors::SLOT)
        ));
    }

    fn parked(&self, slot: SlotNumber, _car: &Car) {
        print::print_status(format!(
            "Allocated slot number: {}",
            slot.to_string().color(colors::SLOT)
        ));
    }

    fn left(&self, slot: SlotNumber, _car: &Car) {
        print::print_status(format!(
            "Slot number {} is free",
            slot.to_string().color(colors::SLOT)
        ));
    }

    fn status(&self, rows: &mut dyn Iterator<Item = SlotStatus<'_>>) {
        print::print(&format!("{}", format::STATUS_HEADER.color(colors::SECONDARY).bold()));
        for row in rows {
            print::print(&format::status_row(&row));
        }
    }

    fn registrations(&self, _color: &str, registrations: &[&str]) {
        print::print(&format!(
            "{}",
            registrations.join(", ").color(colors::REGISTRATION)
        ));
    }

    fn slots(&self, _color: &str, slots: &[SlotNumber]) {
        print::print(&format!("{}", format::join_slots(slots).color(colors::SLOT)));
    }

    fn slot_for_registration(&self, _registration: &str, slot: SlotNumber) {
        print::print(&format!("{}", slot.to_string().color(colors::SLOT)));
    }

    fn failure(&self, err: &LotError) {
        print::failure(format::failure_message(err));
    }
}
