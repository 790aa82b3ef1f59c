//! # Secondary Indexes
//!
//! Color and registration lookups kept alongside the slot map. Color buckets
//! keep slots in the order they were inserted, not in slot order.

use std::collections::HashMap;

use lotkeeper_common::lot::{Car, SlotNumber};

#[derive(Debug, Clone, Default)]
pub struct LotIndex {
    by_color: HashMap<String, Vec<SlotNumber>>,
    by_registration: HashMap<String, SlotNumber>,
}

impl LotIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slot: SlotNumber, car: &Car) {
        self.by_color
            .entry(car.color.clone())
            .or_default()
            .push(slot);
        self.by_registration.insert(car.registration.clone(), slot);
    }

    /// Drops `slot` from both indexes. An emptied color bucket is deleted.
    pub fn remove(&mut self, slot: SlotNumber, car: &Car) {
        if let Some(slots) = self.by_color.get_mut(&car.color) {
            if let Some(pos) = slots.iter().position(|s| *s == slot) {
                slots.remove(pos);
            }
            if slots.is_empty() {
                self.by_color.remove(&car.color);
            }
        }

        if self.by_registration.get(&car.registration) == Some(&slot) {
            self.by_registration.remove(&car.registration);
        }
    }

    pub fn slots_for_color(&self, color: &str) -> Option<&[SlotNumber]> {
        self.by_color
            .get(color)
            .map(Vec::as_slice)
            .filter(|slots| !slots.is_empty())
    }

    pub fn slot_for_registration(&self, registration: &str) -> Option<SlotNumber> {
        self.by_registration.get(registration).copied()
    }

    /// Colors with at least one parked car, in no particular order.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.by_color.keys().map(String::as_str)
    }

    /// Number of registrations currently indexed.
    pub fn len(&self) -> usize {
        self.by_registration.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_registration.is_empty()
    }
}
