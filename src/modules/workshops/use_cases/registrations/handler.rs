use crate::modules::directory::core::user::User;
use crate::modules::workshops::adapters::outbound::registrations::WorkshopRegistrations;
use crate::modules::workshops::core::errors::WorkshopError;
use crate::modules::workshops::core::workshop::{Registration, WorkshopView};
use crate::shared::core::primitives::WorkshopId;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;

pub struct WorkshopRegistrationsHandler<TRegistrations>
where
    TRegistrations: WorkshopRegistrations + 'static,
{
    registrations: Arc<TRegistrations>,
    max_per_user: usize,
}

impl<TRegistrations> WorkshopRegistrationsHandler<TRegistrations>
where
    TRegistrations: WorkshopRegistrations + 'static,
{
    pub fn new(registrations: Arc<TRegistrations>, max_per_user: usize) -> Self {
        Self {
            registrations,
            max_per_user,
        }
    }

    /// Every workshop with its sign-up count and whether the caller holds a seat.
    pub async fn list(&self, caller: &User) -> Result<Vec<WorkshopView>, WorkshopError> {
        let counts = self.registrations.registration_counts().await?;
        let held: HashSet<WorkshopId> = self
            .registrations
            .registrations_of(caller.id)
            .await?
            .into_iter()
            .map(|r| r.workshop_id)
            .collect();
        Ok(self
            .registrations
            .list_workshops()
            .await?
            .into_iter()
            .map(|workshop| WorkshopView {
                registered_count: counts.get(&workshop.id).copied().unwrap_or(0),
                is_registered: held.contains(&workshop.id),
                workshop,
            })
            .collect())
    }

    pub async fn my(&self, caller: &User) -> Result<Vec<WorkshopView>, WorkshopError> {
        Ok(self
            .list(caller)
            .await?
            .into_iter()
            .filter(|view| view.is_registered)
            .collect())
    }

    pub async fn register(
        &self,
        caller: &User,
        workshop_id: WorkshopId,
    ) -> Result<Registration, WorkshopError> {
        let registration = self
            .registrations
            .register(caller.id, workshop_id, self.max_per_user, Utc::now())
            .await?;
        tracing::info!(user_id = %caller.id, %workshop_id, "workshop registration added");
        Ok(registration)
    }

    pub async fn cancel(&self, caller: &User, workshop_id: WorkshopId) -> Result<(), WorkshopError> {
        self.registrations.cancel(caller.id, workshop_id).await?;
        tracing::info!(user_id = %caller.id, %workshop_id, "workshop registration cancelled");
        Ok(())
    }
}
