//! # Free Slot Pool
//!
//! Hands out the lowest free slot number first.
//!
//! Slots that have never been used are not stored: everything from
//! `next_slot` up to the capacity is implicitly free. Released slots go into a
//! min-heap and are always below `next_slot`, so the heap minimum (when there
//! is one) is the global minimum.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use lotkeeper_common::lot::SlotNumber;

#[derive(Debug, Clone)]
pub struct FreeSlotPool {
    capacity: usize,
    next_slot: SlotNumber,
    released: BinaryHeap<Reverse<SlotNumber>>,
}

impl FreeSlotPool {
    /// A pool where every slot in `1..=capacity` is free.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            next_slot: 1,
            released: BinaryHeap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Takes the minimum free slot out of the pool.
    pub fn acquire(&mut self) -> Option<SlotNumber> {
        if let Some(Reverse(slot)) = self.released.pop() {
            return Some(slot);
        }

        if self.next_slot <= self.capacity {
            let slot = self.next_slot;
            self.next_slot += 1;
            return Some(slot);
        }

        None
    }

    /// The slot the next [`acquire`](Self::acquire) would return.
    pub fn peek(&self) -> Option<SlotNumber> {
        match self.released.peek() {
            Some(Reverse(slot)) => Some(*slot),
            None if self.next_slot <= self.capacity => Some(self.next_slot),
            None => None,
        }
    }

    /// Returns a slot to the pool.
    ///
    /// Callers must only release slots they acquired and have not released yet.
    pub fn release(&mut self, slot: SlotNumber) {
        debug_assert!(slot >= 1 && slot < self.next_slot, "slot {slot} was never handed out");
        self.released.push(Reverse(slot));
    }

    /// Number of free slots left.
    pub fn available(&self) -> usize {
        // `next_slot` never exceeds `capacity + 1`.
        self.released.len() + (self.capacity - (self.next_slot - 1))
    }

    pub fn is_empty(&self) -> bool {
        self.available() == 0
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
