use super::Car;

/// Slot numbers start at 1 and never exceed the lot's capacity.
pub type SlotNumber = usize;

/// One row of a lot's status: an occupied slot and the car parked in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotStatus<'a> {
    pub slot: SlotNumber,
    pub registration: &'a str,
    pub color: &'a str,
}

impl<'a> SlotStatus<'a> {
    pub fn new(slot: SlotNumber, car: &'a Car) -> Self {
        Self {
            slot,
            registration: &car.registration,
            color: &car.color,
        }
    }
}
