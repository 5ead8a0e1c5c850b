use crate::shared::core::primitives::{UserId, WorkshopId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workshop {
    pub id: WorkshopId,
    pub title: String,
    #[serde(default)]
    pub tag: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub user_id: UserId,
    pub workshop_id: WorkshopId,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkshopView {
    #[serde(flatten)]
    pub workshop: Workshop,
    pub registered_count: usize,
    pub is_registered: bool,
}
