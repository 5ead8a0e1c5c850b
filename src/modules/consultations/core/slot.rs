use crate::shared::core::primitives::{SlotId, TopicId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of a grid cell for one expert. At most one slot row exists per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub expert_id: UserId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: SlotId,
    pub expert_id: UserId,
    pub topic_id: TopicId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub booked: bool,
    pub booked_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Slot {
    pub fn cell(&self) -> CellKey {
        CellKey {
            expert_id: self.expert_id,
            start: self.start,
            end: self.end,
        }
    }

    pub fn is_held_by(&self, attendee_id: UserId) -> bool {
        self.booked && self.booked_by == Some(attendee_id)
    }
}
