use crate::shared::core::primitives::{TopicId, UserId};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// What the caller asks for: one candidate, passed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookSlotRequest {
    pub expert_id: UserId,
    pub topic_id: TopicId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A validated request bound to the attendee, as handed to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSlot {
    pub attendee_id: UserId,
    pub expert_id: UserId,
    pub topic_id: TopicId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BookSlot {
    pub fn new(attendee_id: UserId, request: BookSlotRequest) -> Self {
        Self {
            attendee_id,
            expert_id: request.expert_id,
            topic_id: request.topic_id,
            start: request.start,
            end: request.end,
        }
    }
}
