use lotkeeper_common::error::LotError;
use lotkeeper_common::lot::{SlotNumber, SlotStatus};

pub const STATUS_HEADER: &str = "Slot No. Registration No Colour";

const SLOT_COLUMN: usize = 9;
const REGISTRATION_COLUMN: usize = 16;

pub fn status_row(row: &SlotStatus<'_>) -> String {
    format!(
        "{:<slot_w$}{:<reg_w$}{}",
        row.slot,
        row.registration,
        row.color,
        slot_w = SLOT_COLUMN,
        reg_w = REGISTRATION_COLUMN,
    )
}

pub fn join_slots(slots: &[SlotNumber]) -> String {
    slots
        .iter()
        .map(SlotNumber::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}

/// The one-line message shown for a failed operation.
pub fn failure_message(err: &LotError) -> String {
    match err {
        LotError::LotFull => "Sorry, parking lot is full".to_string(),
        LotError::SlotNotOccupied(slot) => format!("Slot number {slot} is not occupied"),
        LotError::NotFound(_) => "Not found".to_string(),
        other => format!("Error: {other}"),
    }
}
