//! # Lot Service
//!
//! Implements the "run the lot" use case for drivers.
//!
//! Every operation forwards to the [`ParkingLot`], hands the outcome to the
//! [`LotReporter`] and returns it. Failures are reported like any other
//! result; nothing here aborts.

use lotkeeper_common::error::LotError;
use lotkeeper_common::lot::SlotNumber;
use lotkeeper_common::report::LotReporter;
use tracing::debug;

use crate::lot::ParkingLot;

pub struct LotService {
    lot: Option<ParkingLot>,
    reporter: Box<dyn LotReporter>,
}

impl LotService {
    /// A service with no lot yet. Call [`create_lot`](Self::create_lot) first.
    pub fn new(reporter: Box<dyn LotReporter>) -> Self {
        Self {
            lot: None,
            reporter,
        }
    }

    pub fn lot(&self) -> Option<&ParkingLot> {
        self.lot.as_ref()
    }

    /// Creates the lot, discarding any previous one.
    ///
    /// An invalid capacity is reported and keeps the previous lot.
    pub fn create_lot(&mut self, capacity: usize) -> Result<usize, LotError> {
        match ParkingLot::new(capacity) {
            Ok(lot) => {
                self.lot = Some(lot);
                debug!(capacity, "lot created");
                self.reporter.lot_created(capacity);
                Ok(capacity)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub fn park(&mut self, registration: &str, color: &str) -> Result<SlotNumber, LotError> {
        let Some(lot) = self.lot.as_mut() else {
            return Err(self.fail(LotError::NoLot));
        };

        match lot.park(registration, color) {
            Ok(slot) => {
                if let Some(car) = lot.car_at(slot) {
                    self.reporter.parked(slot, car);
                }
                Ok(slot)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub fn leave(&mut self, slot: SlotNumber) -> Result<(), LotError> {
        let Some(lot) = self.lot.as_mut() else {
            return Err(self.fail(LotError::NoLot));
        };

        match lot.leave(slot) {
            Ok(car) => {
                self.reporter.left(slot, &car);
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub fn status(&self) -> Result<(), LotError> {
        let lot = self.lot_ref()?;
        debug!(occupied = lot.occupied(), available = lot.available(), "status requested");
        self.reporter.status(&mut lot.status());
        Ok(())
    }

    pub fn registrations_for_color(&self, color: &str) -> Result<Vec<String>, LotError> {
        let lot = self.lot_ref()?;

        match lot.registrations_for_color(color) {
            Ok(registrations) => {
                self.reporter.registrations(color, &registrations);
                Ok(registrations.into_iter().map(String::from).collect())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub fn slots_for_color(&self, color: &str) -> Result<Vec<SlotNumber>, LotError> {
        let lot = self.lot_ref()?;

        match lot.slots_for_color(color) {
            Ok(slots) => {
                self.reporter.slots(color, slots);
                Ok(slots.to_vec())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub fn slot_for_registration(&self, registration: &str) -> Result<SlotNumber, LotError> {
        let lot = self.lot_ref()?;

        match lot.slot_for_registration(registration) {
            Ok(slot) => {
                self.reporter.slot_for_registration(registration, slot);
                Ok(slot)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    fn lot_ref(&self) -> Result<&ParkingLot, LotError> {
        match self.lot.as_ref() {
            Some(lot) => Ok(lot),
            None => Err(self.fail(LotError::NoLot)),
        }
    }

    fn fail(&self, err: LotError) -> LotError {
        debug!(%err, "operation failed");
        self.reporter.failure(&err);
        err
    }
}
