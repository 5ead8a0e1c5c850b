// In memory implementation of the SlotLedger port.
//
// Purpose
// - Hold the slot table for a single-process deployment and for tests.
//
// Responsibilities
// - Keep one row per (expert, start, end) through a cell index.
// - Serialize every mutation behind one write lock, so the decision and the write
//   of `book` can never interleave with another booking.

use crate::modules::consultations::adapters::outbound::ledger::{LedgerError, SlotLedger};
use crate::modules::consultations::core::slot::{CellKey, Slot};
use crate::modules::consultations::use_cases::book_slot::command::BookSlot;
use crate::modules::consultations::use_cases::book_slot::decide::{Placement, decide_book};
use crate::shared::core::primitives::{SlotId, UserId};
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
struct SlotTable {
    rows: HashMap<SlotId, Slot>,
    by_cell: HashMap<CellKey, SlotId>,
}

impl SlotTable {
    fn row_for_cell(&self, cell: &CellKey) -> Option<&Slot> {
        self.by_cell.get(cell).and_then(|id| self.rows.get(id))
    }

    fn holds_topic(&self, command: &BookSlot) -> bool {
        self.rows
            .values()
            .any(|s| s.topic_id == command.topic_id && s.is_held_by(command.attendee_id))
    }

    fn sorted(mut slots: Vec<Slot>) -> Vec<Slot> {
        slots.sort_by_key(|s| (s.start, s.expert_id));
        slots
    }
}

#[derive(Default)]
pub struct InMemorySlotLedger {
    table: RwLock<SlotTable>,
    delay_book_ms: AtomicU64,
    is_offline: bool,
}

impl InMemorySlotLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Holds the write lock this long between deciding and writing a booking.
    pub fn set_delay_book_ms(&self, delay_ms: u64) {
        self.delay_book_ms.store(delay_ms, Ordering::Relaxed);
    }

    /// Imports an existing row, e.g. a released one kept for reuse.
    pub async fn insert_row(&self, slot: Slot) -> Result<(), LedgerError> {
        self.ensure_online()?;
        let mut table = self.table.write().await;
        if table.by_cell.contains_key(&slot.cell()) {
            return Err(LedgerError::Backend(format!(
                "duplicate row for expert {} at {}",
                slot.expert_id, slot.start
            )));
        }
        table.by_cell.insert(slot.cell(), slot.id);
        table.rows.insert(slot.id, slot);
        Ok(())
    }

    pub async fn row_count(&self) -> usize {
        self.table.read().await.rows.len()
    }

    fn ensure_online(&self) -> Result<(), LedgerError> {
        if self.is_offline {
            return Err(LedgerError::Backend("Slot ledger offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl SlotLedger for InMemorySlotLedger {
    async fn book(&self, command: &BookSlot) -> Result<Slot, LedgerError> {
        self.ensure_online()?;
        let mut table = self.table.write().await;

        let cell = CellKey {
            expert_id: command.expert_id,
            start: command.start,
            end: command.end,
        };
        let placement = decide_book(
            table.row_for_cell(&cell),
            table.holds_topic(command),
            command,
            Utc::now(),
        )?;

        let delay_ms = self.delay_book_ms.load(Ordering::Relaxed);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        let slot = placement.slot().clone();
        if let Placement::Create(_) = placement {
            table.by_cell.insert(cell, slot.id);
        }
        table.rows.insert(slot.id, slot.clone());
        Ok(slot)
    }

    async fn cancel(&self, attendee_id: UserId, slot_id: SlotId) -> Result<Slot, LedgerError> {
        self.ensure_online()?;
        let mut table = self.table.write().await;
        let held = table
            .rows
            .get(&slot_id)
            .is_some_and(|s| s.is_held_by(attendee_id));
        if !held {
            return Err(LedgerError::NotFound);
        }
        let slot = table.rows.remove(&slot_id).ok_or(LedgerError::NotFound)?;
        table.by_cell.remove(&slot.cell());
        Ok(slot)
    }

    async fn booked_cells(&self, expert_ids: &[UserId]) -> Result<HashSet<CellKey>, LedgerError> {
        self.ensure_online()?;
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|s| s.booked && expert_ids.contains(&s.expert_id))
            .map(Slot::cell)
            .collect())
    }

    async fn list_by_attendee(&self, attendee_id: UserId) -> Result<Vec<Slot>, LedgerError> {
        self.ensure_online()?;
        let table = self.table.read().await;
        Ok(SlotTable::sorted(
            table
                .rows
                .values()
                .filter(|s| s.is_held_by(attendee_id))
                .cloned()
                .collect(),
        ))
    }

    async fn list_by_expert(&self, expert_id: UserId) -> Result<Vec<Slot>, LedgerError> {
        self.ensure_online()?;
        let table = self.table.read().await;
        Ok(SlotTable::sorted(
            table
                .rows
                .values()
                .filter(|s| s.booked && s.expert_id == expert_id)
                .cloned()
                .collect(),
        ))
    }
}
