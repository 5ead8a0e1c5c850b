// Booking ledger port: the only mutator of slot rows.
//
// Implementations must run the check-and-write of `book` and `cancel` atomically,
// so that concurrent calls on one cell (or one attendee and topic) serialize.

use crate::modules::consultations::core::slot::{CellKey, Slot};
use crate::modules::consultations::use_cases::book_slot::command::BookSlot;
use crate::modules::consultations::use_cases::book_slot::decide::DecideError;
use crate::shared::core::primitives::{SlotId, UserId};
use async_trait::async_trait;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error("slot not found")]
    NotFound,

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait SlotLedger: Send + Sync {
    /// Books the cell for the attendee, creating or reusing the cell's row.
    async fn book(&self, command: &BookSlot) -> Result<Slot, LedgerError>;

    /// Deletes a row held by the attendee and returns it as it was.
    async fn cancel(&self, attendee_id: UserId, slot_id: SlotId) -> Result<Slot, LedgerError>;

    async fn booked_cells(&self, expert_ids: &[UserId]) -> Result<HashSet<CellKey>, LedgerError>;

    async fn list_by_attendee(&self, attendee_id: UserId) -> Result<Vec<Slot>, LedgerError>;

    async fn list_by_expert(&self, expert_id: UserId) -> Result<Vec<Slot>, LedgerError>;
}
