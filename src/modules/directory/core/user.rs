use crate::shared::core::primitives::{TopicId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub telegram_id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub workplace: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub is_expert: bool,
}

impl User {
    pub fn full_name(&self) -> String {
        let last_name = self.last_name.as_deref().unwrap_or_default();
        format!("{} {}", self.first_name.trim(), last_name.trim())
            .trim()
            .to_string()
    }

    pub fn handle(&self) -> Option<String> {
        self.username
            .as_deref()
            .filter(|u| !u.is_empty())
            .map(|u| format!("@{u}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    #[serde(default)]
    pub expert_ids: Vec<UserId>,
}

impl Topic {
    pub fn is_served_by(&self, expert_id: UserId) -> bool {
        self.expert_ids.contains(&expert_id)
    }
}
