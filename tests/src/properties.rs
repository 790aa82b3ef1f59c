#![cfg(test)]
//! Property tests for allocation order and index consistency.

use std::collections::{BTreeMap, BTreeSet};

use lotkeeper_common::error::LotError;
use lotkeeper_common::lot::SlotNumber;
use lotkeeper_core::lot::ParkingLot;
use proptest::prelude::*;

const COLORS: &[&str] = &["White", "Black", "Red", "Blue"];

#[derive(Debug, Clone)]
enum Op {
    Park { registration: usize, color: usize },
    Leave(SlotNumber),
}

fn arb_op(capacity: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..24, 0..COLORS.len())
            .prop_map(|(registration, color)| Op::Park { registration, color }),
        2 => (0..=capacity + 2).prop_map(Op::Leave),
    ]
}

fn arb_run() -> impl Strategy<Value = (usize, Vec<Op>)> {
    (1usize..12).prop_flat_map(|capacity| {
        (Just(capacity), prop::collection::vec(arb_op(capacity), 0..60))
    })
}

fn registration(n: usize) -> String {
    format!("KA-01-HH-{n:04}")
}

fn occupied_slots(lot: &ParkingLot) -> Vec<SlotNumber> {
    lot.status().map(|row| row.slot).collect()
}

fn snapshot(lot: &ParkingLot) -> Vec<(SlotNumber, String, String)> {
    lot.status()
        .map(|row| (row.slot, row.registration.to_string(), row.color.to_string()))
        .collect()
}

/// Status, the color buckets and the registration lookups all describe the
/// same set of occupied slots.
fn assert_indexes_consistent(lot: &ParkingLot) {
    let from_status: BTreeSet<SlotNumber> = occupied_slots(lot).into_iter().collect();

    let mut from_colors = BTreeSet::new();
    for color in lot.colors() {
        let slots = lot.slots_for_color(color).unwrap();
        assert!(!slots.is_empty(), "empty bucket left for {color}");
        for slot in slots {
            assert_eq!(lot.car_at(*slot).map(|car| car.color.as_str()), Some(color));
            assert!(from_colors.insert(*slot), "slot {slot} in two color buckets");
        }
    }

    let from_registrations: BTreeSet<SlotNumber> = lot
        .status()
        .map(|row| lot.slot_for_registration(row.registration).unwrap())
        .collect();

    assert_eq!(from_status, from_colors);
    assert_eq!(from_status, from_registrations);
    assert_eq!(from_status.len(), lot.occupied());
    assert_eq!(lot.occupied() + lot.available(), lot.capacity());
}

proptest! {
    #[test]
    fn park_takes_minimum_free_slot((capacity, ops) in arb_run()) {
        let mut lot = ParkingLot::new(capacity).unwrap();
        let mut free: BTreeSet<SlotNumber> = (1..=capacity).collect();
        let mut parked: BTreeMap<String, SlotNumber> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Park { registration: n, color } => {
                    let reg = registration(n);
                    let result = lot.park(reg.clone(), COLORS[color]);

                    if let Some(slot) = parked.get(&reg) {
                        prop_assert_eq!(
                            result,
                            Err(LotError::DuplicateRegistration { registration: reg, slot: *slot })
                        );
                    } else if let Some(min) = free.pop_first() {
                        prop_assert_eq!(result, Ok(min));
                        parked.insert(reg, min);
                    } else {
                        prop_assert_eq!(result, Err(LotError::LotFull));
                    }
                }
                Op::Leave(slot) => {
                    let result = lot.leave(slot);
                    if let Some(reg) = parked.iter().find(|(_, s)| **s == slot).map(|(r, _)| r.clone()) {
                        prop_assert_eq!(result.map(|car| car.registration), Ok(reg.clone()));
                        parked.remove(&reg);
                        free.insert(slot);
                    } else {
                        prop_assert_eq!(result, Err(LotError::SlotNotOccupied(slot)));
                    }
                }
            }

            for slot in occupied_slots(&lot) {
                prop_assert!((1..=capacity).contains(&slot));
            }
            assert_indexes_consistent(&lot);
        }
    }

    #[test]
    fn leave_on_free_slot_changes_nothing((capacity, ops) in arb_run(), probe in 0usize..16) {
        let mut lot = ParkingLot::new(capacity).unwrap();
        for op in ops {
            match op {
                Op::Park { registration: n, color } => { let _ = lot.park(registration(n), COLORS[color]); }
                Op::Leave(slot) => { let _ = lot.leave(slot); }
            }
        }
        prop_assume!(lot.car_at(probe).is_none());

        let before = snapshot(&lot);
        let available = lot.available();

        prop_assert_eq!(lot.leave(probe), Err(LotError::SlotNotOccupied(probe)));
        prop_assert_eq!(snapshot(&lot), before);
        prop_assert_eq!(lot.available(), available);
        assert_indexes_consistent(&lot);
    }

    #[test]
    fn park_then_leave_round_trips((capacity, ops) in arb_run(), color in 0..COLORS.len()) {
        let mut lot = ParkingLot::new(capacity).unwrap();
        for op in ops {
            match op {
                Op::Park { registration: n, color } => { let _ = lot.park(registration(n), COLORS[color]); }
                Op::Leave(slot) => { let _ = lot.leave(slot); }
            }
        }
        prop_assume!(!lot.is_full());

        let before = lot.clone();
        let slot = lot.park("MH-04-AY-1111", COLORS[color]).unwrap();
        lot.leave(slot).unwrap();

        prop_assert_eq!(snapshot(&lot), snapshot(&before));
        prop_assert_eq!(lot.available(), before.available());
        for color in COLORS {
            prop_assert_eq!(lot.slots_for_color(color), before.slots_for_color(color));
        }

        // The freed slot is again the next one handed out.
        let mut replay = before.clone();
        prop_assert_eq!(lot.park("MH-04-AY-2222", "Green"), replay.park("MH-04-AY-2222", "Green"));
    }

    #[test]
    fn capacity_plus_one_park_is_rejected(capacity in 1usize..40) {
        let mut lot = ParkingLot::new(capacity).unwrap();
        for n in 0..capacity {
            prop_assert_eq!(lot.park(registration(n), "White"), Ok(n + 1));
        }
        prop_assert_eq!(lot.park(registration(capacity), "White"), Err(LotError::LotFull));
        prop_assert!(lot.is_full());
    }
}
