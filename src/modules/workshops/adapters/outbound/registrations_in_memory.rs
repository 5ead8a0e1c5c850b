// In memory implementation of the WorkshopRegistrations port.
//
// Purpose
// - Keep the workshop catalogue from the seed file and the sign-ups of this process.

use crate::modules::workshops::adapters::outbound::registrations::WorkshopRegistrations;
use crate::modules::workshops::core::errors::WorkshopError;
use crate::modules::workshops::core::workshop::{Registration, Workshop};
use crate::shared::core::primitives::{UserId, WorkshopId};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryWorkshopRegistrations {
    workshops: BTreeMap<WorkshopId, Workshop>,
    registrations: RwLock<Vec<Registration>>,
    is_offline: bool,
}

impl InMemoryWorkshopRegistrations {
    pub fn new(workshops: Vec<Workshop>) -> Self {
        Self {
            workshops: workshops.into_iter().map(|w| (w.id, w)).collect(),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), WorkshopError> {
        if self.is_offline {
            return Err(WorkshopError::Backend("Workshop repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl WorkshopRegistrations for InMemoryWorkshopRegistrations {
    async fn list_workshops(&self) -> Result<Vec<Workshop>, WorkshopError> {
        self.ensure_online()?;
        let mut workshops: Vec<Workshop> = self.workshops.values().cloned().collect();
        workshops.sort_by_key(|w| (w.start, w.id));
        Ok(workshops)
    }

    async fn registrations_of(&self, user_id: UserId) -> Result<Vec<Registration>, WorkshopError> {
        self.ensure_online()?;
        Ok(self
            .registrations
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn registration_counts(&self) -> Result<HashMap<WorkshopId, usize>, WorkshopError> {
        self.ensure_online()?;
        let mut counts = HashMap::new();
        for registration in self.registrations.read().await.iter() {
            *counts.entry(registration.workshop_id).or_insert(0) += 1;
        }
        Ok(counts)
    }

    async fn register(
        &self,
        user_id: UserId,
        workshop_id: WorkshopId,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Result<Registration, WorkshopError> {
        self.ensure_online()?;
        if !self.workshops.contains_key(&workshop_id) {
            return Err(WorkshopError::NotFound);
        }
        let mut registrations = self.registrations.write().await;
        let held: Vec<&Registration> = registrations
            .iter()
            .filter(|r| r.user_id == user_id)
            .collect();
        if held.iter().any(|r| r.workshop_id == workshop_id) {
            return Err(WorkshopError::AlreadyRegistered);
        }
        if held.len() >= limit {
            return Err(WorkshopError::LimitReached { limit });
        }
        let registration = Registration {
            user_id,
            workshop_id,
            registered_at: now,
        };
        registrations.push(registration.clone());
        Ok(registration)
    }

    async fn cancel(&self, user_id: UserId, workshop_id: WorkshopId) -> Result<(), WorkshopError> {
        self.ensure_online()?;
        let mut registrations = self.registrations.write().await;
        let before = registrations.len();
        registrations.retain(|r| !(r.user_id == user_id && r.workshop_id == workshop_id));
        if registrations.len() == before {
            return Err(WorkshopError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_workshop_registrations_tests {
    use super::*;
    use crate::test_support::fixtures::workshop;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repository() -> InMemoryWorkshopRegistrations {
        InMemoryWorkshopRegistrations::new(vec![workshop(2, 15), workshop(1, 12)])
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_workshops_by_start(repository: InMemoryWorkshopRegistrations) {
        let ids: Vec<WorkshopId> = repository
            .list_workshops()
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(ids, vec![WorkshopId(1), WorkshopId(2)]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_enforce_the_per_user_limit(repository: InMemoryWorkshopRegistrations) {
        let now = Utc::now();
        repository
            .register(UserId(1), WorkshopId(1), 1, now)
            .await
            .unwrap();
        assert_eq!(
            repository.register(UserId(1), WorkshopId(2), 1, now).await,
            Err(WorkshopError::LimitReached { limit: 1 })
        );
        assert!(
            repository
                .register(UserId(1), WorkshopId(2), 2, now)
                .await
                .is_ok()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_duplicate_and_unknown_registrations(
        repository: InMemoryWorkshopRegistrations,
    ) {
        let now = Utc::now();
        repository
            .register(UserId(1), WorkshopId(1), 3, now)
            .await
            .unwrap();
        assert_eq!(
            repository.register(UserId(1), WorkshopId(1), 3, now).await,
            Err(WorkshopError::AlreadyRegistered)
        );
        assert_eq!(
            repository.register(UserId(1), WorkshopId(9), 3, now).await,
            Err(WorkshopError::NotFound)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_cancel_only_existing_registrations(
        repository: InMemoryWorkshopRegistrations,
    ) {
        let now = Utc::now();
        repository
            .register(UserId(1), WorkshopId(1), 1, now)
            .await
            .unwrap();
        assert_eq!(repository.registration_counts().await.unwrap()[&WorkshopId(1)], 1);
        repository.cancel(UserId(1), WorkshopId(1)).await.unwrap();
        assert_eq!(
            repository.cancel(UserId(1), WorkshopId(1)).await,
            Err(WorkshopError::NotFound)
        );
        assert!(repository.registrations_of(UserId(1)).await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline(
        mut repository: InMemoryWorkshopRegistrations,
    ) {
        repository.toggle_offline();
        assert!(matches!(
            repository.list_workshops().await,
            Err(WorkshopError::Backend(_))
        ));
    }
}
