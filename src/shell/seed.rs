// Seed data for the in-memory stores: users, topics and workshops.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::modules::directory::core::user::{Topic, User};
use crate::modules::workshops::core::workshop::Workshop;

#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub workshops: Vec<Workshop>,
}

impl Seed {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("Seed file is not valid JSON")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        Self::from_json(&raw)
    }
}

#[cfg(test)]
mod seed_tests {
    use super::*;
    use crate::shared::core::primitives::{TopicId, UserId, WorkshopId};
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_users_topics_and_workshops() {
        let seed = Seed::from_json(
            r#"{
                "users": [{"id": 1, "telegram_id": 42, "first_name": "Ann", "is_expert": true}],
                "topics": [{"id": 7, "name": "BI", "expert_ids": [1]}],
                "workshops": [{"id": 3, "title": "SQL", "start": "2025-09-20T09:00:00Z", "end": "2025-09-20T10:00:00Z"}]
            }"#,
        )
        .unwrap();

        assert_eq!(seed.users[0].id, UserId(1));
        assert!(seed.users[0].is_expert);
        assert_eq!(seed.topics[0].id, TopicId(7));
        assert_eq!(seed.workshops[0].id, WorkshopId(3));
        assert_eq!(seed.workshops[0].tag, None);
    }

    #[rstest]
    fn it_should_accept_missing_sections() {
        let seed = Seed::from_json("{}").unwrap();
        assert!(seed.users.is_empty() && seed.topics.is_empty() && seed.workshops.is_empty());
    }

    #[rstest]
    fn it_should_reject_malformed_json() {
        assert!(Seed::from_json("[").is_err());
    }

    #[rstest]
    fn it_should_load_the_bundled_seed_file() {
        let seed = Seed::load(Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/seed/directory.json"
        )))
        .unwrap();
        assert!(!seed.topics.is_empty());
    }
}
