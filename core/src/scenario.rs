//! # Reference Scenario
//!
//! The fixed sequence of lot operations the demo driver runs.

use std::fmt;

use lotkeeper_common::lot::SlotNumber;
use tracing::debug;

use crate::service::LotService;

/// A single driver operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreateLot(usize),
    Park {
        registration: &'static str,
        color: &'static str,
    },
    Leave(SlotNumber),
    Status,
    RegistrationsForColor(&'static str),
    SlotsForColor(&'static str),
    SlotForRegistration(&'static str),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::CreateLot(capacity) => write!(f, "create_parking_lot {capacity}"),
            Step::Park {
                registration,
                color,
            } => write!(f, "park {registration} {color}"),
            Step::Leave(slot) => write!(f, "leave {slot}"),
            Step::Status => write!(f, "status"),
            Step::RegistrationsForColor(color) => {
                write!(f, "registration_numbers_for_cars_with_colour {color}")
            }
            Step::SlotsForColor(color) => write!(f, "slot_numbers_for_cars_with_colour {color}"),
            Step::SlotForRegistration(registration) => {
                write!(f, "slot_number_for_registration_number {registration}")
            }
        }
    }
}

const fn park(registration: &'static str, color: &'static str) -> Step {
    Step::Park {
        registration,
        color,
    }
}

pub const DEFAULT_CAPACITY: usize = 10;

/// Everything after lot creation; the capacity is prepended by [`reference_steps`].
const REFERENCE_OPERATIONS: &[Step] = &[
    park("KA-01-HH-1234", "White"),
    park("KA-01-HH-9999", "White"),
    park("KA-01-BB-0001", "Black"),
    park("KA-01-HH-7777", "Red"),
    park("KA-01-HH-2701", "Blue"),
    park("KA-01-HH-3141", "Black"),
    Step::Leave(4),
    Step::Status,
    park("KA-01-P-333", "White"),
    park("DL-12-AA-9999", "White"),
    Step::RegistrationsForColor("White"),
    Step::SlotsForColor("White"),
    Step::SlotForRegistration("KA-01-HH-3141"),
    Step::SlotForRegistration("MH-04-AY-1111"),
];

/// The reference driver sequence against a lot of `capacity` slots.
pub fn reference_steps(capacity: usize) -> Vec<Step> {
    let mut steps = Vec::with_capacity(REFERENCE_OPERATIONS.len() + 1);
    steps.push(Step::CreateLot(capacity));
    steps.extend_from_slice(REFERENCE_OPERATIONS);
    steps
}

/// Most cars the steps would have parked at once, assuming every park and
/// leave succeeds.
pub fn peak_occupancy(steps: &[Step]) -> usize {
    let mut parked: usize = 0;
    let mut peak = 0;

    for step in steps {
        match step {
            Step::CreateLot(_) => parked = 0,
            Step::Park { .. } => parked += 1,
            Step::Leave(_) => parked = parked.saturating_sub(1),
            _ => continue,
        }
        peak = peak.max(parked);
    }

    peak
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScenarioSummary {
    pub steps: usize,
    pub failures: usize,
}

/// Runs every step in order. Failed steps are counted and the run continues.
pub fn run(service: &mut LotService, steps: &[Step]) -> ScenarioSummary {
    let mut summary = ScenarioSummary::default();

    for step in steps {
        debug!(%step, "running step");
        summary.steps += 1;
        if !execute(service, step) {
            summary.failures += 1;
        }
    }

    summary
}

fn execute(service: &mut LotService, step: &Step) -> bool {
    match *step {
        Step::CreateLot(capacity) => service.create_lot(capacity).is_ok(),
        Step::Park {
            registration,
            color,
        } => service.park(registration, color).is_ok(),
        Step::Leave(slot) => service.leave(slot).is_ok(),
        Step::Status => service.status().is_ok(),
        Step::RegistrationsForColor(color) => service.registrations_for_color(color).is_ok(),
        Step::SlotsForColor(color) => service.slots_for_color(color).is_ok(),
        Step::SlotForRegistration(registration) => {
            service.slot_for_registration(registration).is_ok()
        }
    }
}
