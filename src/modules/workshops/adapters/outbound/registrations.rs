use crate::modules::workshops::core::errors::WorkshopError;
use crate::modules::workshops::core::workshop::{Registration, Workshop};
use crate::shared::core::primitives::{UserId, WorkshopId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

#[async_trait]
pub trait WorkshopRegistrations: Send + Sync {
    /// Workshops ordered by start time.
    async fn list_workshops(&self) -> Result<Vec<Workshop>, WorkshopError>;

    async fn registrations_of(&self, user_id: UserId) -> Result<Vec<Registration>, WorkshopError>;

    async fn registration_counts(&self) -> Result<HashMap<WorkshopId, usize>, WorkshopError>;

    /// Registers the user unless already registered or holding `limit` registrations.
    /// The checks and the insert are atomic.
    async fn register(
        &self,
        user_id: UserId,
        workshop_id: WorkshopId,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Result<Registration, WorkshopError>;

    async fn cancel(&self, user_id: UserId, workshop_id: WorkshopId) -> Result<(), WorkshopError>;
}
