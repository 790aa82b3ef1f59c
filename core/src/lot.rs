//! # Parking Lot
//!
//! The lot manager. Owns the slot map, the free slot pool and the secondary
//! indexes, and updates all of them together on every park and leave.

use std::collections::BTreeMap;

use lotkeeper_common::error::LotError;
use lotkeeper_common::lot::{Car, SlotNumber, SlotStatus};
use tracing::debug;

use crate::index::LotIndex;
use crate::pool::FreeSlotPool;

/// A fixed-capacity parking lot.
///
/// Slots are numbered `1..=capacity`. Parking always takes the lowest free
/// slot, so a slot freed by [`leave`](Self::leave) is reused before any
/// higher one.
#[derive(Debug, Clone)]
pub struct ParkingLot {
    slots: BTreeMap<SlotNumber, Car>,
    free: FreeSlotPool,
    index: LotIndex,
}

impl ParkingLot {
    /// Creates an empty lot. Fails on a capacity of zero.
    pub fn new(capacity: usize) -> Result<Self, LotError> {
        if capacity == 0 {
            return Err(LotError::InvalidCapacity);
        }

        Ok(Self {
            slots: BTreeMap::new(),
            free: FreeSlotPool::new(capacity),
            index: LotIndex::new(),
        })
    }

    /// Replaces the whole lot with an empty one of the given capacity.
    ///
    /// On error the current lot is left untouched.
    pub fn reset(&mut self, capacity: usize) -> Result<(), LotError> {
        *self = Self::new(capacity)?;
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.free.capacity()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.len()
    }

    /// Number of free slots.
    pub fn available(&self) -> usize {
        self.free.available()
    }

    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    /// The slot the next successful [`park`](Self::park) would use.
    pub fn next_free(&self) -> Option<SlotNumber> {
        self.free.peek()
    }

    pub fn car_at(&self, slot: SlotNumber) -> Option<&Car> {
        self.slots.get(&slot)
    }

    /// Parks a car in the lowest free slot and returns that slot.
    ///
    /// A registration that is already parked is rejected and nothing changes.
    pub fn park(
        &mut self,
        registration: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<SlotNumber, LotError> {
        let car = Car::new(registration, color);

        if let Some(slot) = self.index.slot_for_registration(&car.registration) {
            return Err(LotError::DuplicateRegistration {
                registration: car.registration,
                slot,
            });
        }

        let slot = self.free.acquire().ok_or(LotError::LotFull)?;
        debug!(slot, registration = %car.registration, color = %car.color, "slot allocated");

        self.index.insert(slot, &car);
        self.slots.insert(slot, car);
        debug_assert_eq!(self.index.len(), self.slots.len());
        Ok(slot)
    }

    /// Frees an occupied slot and returns the car that was in it.
    pub fn leave(&mut self, slot: SlotNumber) -> Result<Car, LotError> {
        let car = self
            .slots
            .remove(&slot)
            .ok_or(LotError::SlotNotOccupied(slot))?;

        self.free.release(slot);
        self.index.remove(slot, &car);
        debug_assert_eq!(self.index.len(), self.slots.len());
        debug!(slot, registration = %car.registration, "slot released");

        Ok(car)
    }

    /// Occupied slots in ascending order. Each call walks the current state.
    pub fn status(&self) -> impl Iterator<Item = SlotStatus<'_>> + '_ {
        self.slots
            .iter()
            .map(|(slot, car)| SlotStatus::new(*slot, car))
    }

    /// Registrations of every car with `color`, in the order their slots were
    /// allocated.
    pub fn registrations_for_color(&self, color: &str) -> Result<Vec<&str>, LotError> {
        let slots = self.slots_for_color(color)?;

        Ok(slots
            .iter()
            .filter_map(|slot| self.slots.get(slot))
            .map(|car| car.registration.as_str())
            .collect())
    }

    /// Slots holding a car with `color`, in allocation order.
    pub fn slots_for_color(&self, color: &str) -> Result<&[SlotNumber], LotError> {
        self.index
            .slots_for_color(color)
            .ok_or_else(|| LotError::color_not_found(color))
    }

    pub fn slot_for_registration(&self, registration: &str) -> Result<SlotNumber, LotError> {
        self.index
            .slot_for_registration(registration)
            .ok_or_else(|| LotError::registration_not_found(registration))
    }

    /// Colors with at least one parked car, in no particular order.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.index.colors()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
