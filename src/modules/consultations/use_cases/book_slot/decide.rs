// Pure decision function for booking a grid cell.
//
// Purpose
// - Decide, from the ledger rows relevant to one request, whether the booking is accepted
//   and which row ends up holding it.
//
// Responsibilities
// - Reject when the attendee already holds a booking on the topic.
// - Reject when the cell's row is booked by anyone.
// - Reuse an unbooked row for the cell, or create one.
// - Never perform input or output. The caller runs this under the ledger's write lock.

use crate::modules::consultations::core::slot::Slot;
use crate::modules::consultations::use_cases::book_slot::command::BookSlot;
use crate::shared::core::primitives::SlotId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("attendee already holds a booking on this topic")]
    AlreadyBooked,

    #[error("slot is already booked")]
    SlotTaken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    Create(Slot),
    Reuse(Slot),
}

impl Placement {
    pub fn slot(&self) -> &Slot {
        match self {
            Placement::Create(slot) | Placement::Reuse(slot) => slot,
        }
    }
}

pub fn decide_book(
    existing: Option<&Slot>,
    attendee_holds_topic: bool,
    command: &BookSlot,
    now: DateTime<Utc>,
) -> Result<Placement, DecideError> {
    if attendee_holds_topic {
        return Err(DecideError::AlreadyBooked);
    }
    match existing {
        Some(slot) if slot.booked => Err(DecideError::SlotTaken),
        Some(slot) => Ok(Placement::Reuse(Slot {
            topic_id: command.topic_id,
            booked: true,
            booked_by: Some(command.attendee_id),
            ..slot.clone()
        })),
        None => Ok(Placement::Create(Slot {
            id: SlotId::new(),
            expert_id: command.expert_id,
            topic_id: command.topic_id,
            start: command.start,
            end: command.end,
            booked: true,
            booked_by: Some(command.attendee_id),
            created_at: now,
        })),
    }
}
