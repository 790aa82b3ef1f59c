//! # Lot Errors
//!
//! Every failure a parking lot can report. None of them are fatal: callers
//! report them and carry on with the next operation.

use std::fmt;

use thiserror::Error;

use crate::lot::SlotNumber;

/// The key a failed lookup was made with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Color(String),
    Registration(String),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Color(color) => write!(f, "color '{color}'"),
            Lookup::Registration(registration) => write!(f, "registration '{registration}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LotError {
    /// A lot needs at least one slot.
    #[error("capacity must be a positive number of slots")]
    InvalidCapacity,

    /// An operation was issued before any lot was created.
    #[error("no parking lot has been created yet")]
    NoLot,

    #[error("parking lot is full")]
    LotFull,

    /// Leave on a slot that is free, was never allocated or is out of range.
    #[error("slot {0} is not occupied")]
    SlotNotOccupied(SlotNumber),

    #[error("no parked car matches {0}")]
    NotFound(Lookup),

    /// The registration is already parked somewhere else in the lot.
    #[error("registration '{registration}' is already parked in slot {slot}")]
    DuplicateRegistration {
        registration: String,
        slot: SlotNumber,
    },
}

impl LotError {
    pub fn color_not_found(color: &str) -> Self {
        LotError::NotFound(Lookup::Color(color.to_string()))
    }

    pub fn registration_not_found(registration: &str) -> Self {
        LotError::NotFound(Lookup::Registration(registration.to_string()))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LotError::NotFound(_))
    }
}
