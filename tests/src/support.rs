use std::cell::RefCell;
use std::rc::Rc;

use lotkeeper_common::error::LotError;
use lotkeeper_common::lot::{Car, SlotNumber, SlotStatus};
use lotkeeper_common::report::LotReporter;

/// One call received by a [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reported {
    Created(usize),
    Parked(SlotNumber, Car),
    Left(SlotNumber, Car),
    Status(Vec<(SlotNumber, String, String)>),
    Registrations(String, Vec<String>),
    Slots(String, Vec<SlotNumber>),
    SlotFor(String, SlotNumber),
    Failure(LotError),
}

/// Reporter that keeps every call. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    log: Rc<RefCell<Vec<Reported>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Reported> {
        self.log.borrow().clone()
    }

    pub fn failures(&self) -> Vec<LotError> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Reported::Failure(err) => Some(err.clone()),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Reported) {
        self.log.borrow_mut().push(event);
    }
}

impl LotReporter for RecordingReporter {
    fn lot_created(&self, capacity: usize) {
        self.push(Reported::Created(capacity));
    }

    fn parked(&self, slot: SlotNumber, car: &Car) {
        self.push(Reported::Parked(slot, car.clone()));
    }

    fn left(&self, slot: SlotNumber, car: &Car) {
        self.push(Reported::Left(slot, car.clone()));
    }

    fn status(&self, rows: &mut dyn Iterator<Item = SlotStatus<'_>>) {
        let rows = rows
            .map(|row| (row.slot, row.registration.to_string(), row.color.to_string()))
            .collect();
        self.push(Reported::Status(rows));
    }

    fn registrations(&self, color: &str, registrations: &[&str]) {
        let registrations = registrations.iter().map(|r| r.to_string()).collect();
        self.push(Reported::Registrations(color.to_string(), registrations));
    }

    fn slots(&self, color: &str, slots: &[SlotNumber]) {
        self.push(Reported::Slots(color.to_string(), slots.to_vec()));
    }

    fn slot_for_registration(&self, registration: &str, slot: SlotNumber) {
        self.push(Reported::SlotFor(registration.to_string(), slot));
    }

    fn failure(&self, err: &LotError) {
        self.push(Reported::Failure(err.clone()));
    }
}
