use crate::modules::consultations::core::errors::BookingError;
use crate::modules::consultations::core::views::{PersonSummary, TopicView};
use crate::modules::directory::adapters::outbound::directory::Directory;
use crate::modules::directory::core::user::{Topic, User};
use std::sync::Arc;

pub struct ListTopicsHandler<TDirectory>
where
    TDirectory: Directory + 'static,
{
    directory: Arc<TDirectory>,
}

impl<TDirectory> ListTopicsHandler<TDirectory>
where
    TDirectory: Directory + 'static,
{
    pub fn new(directory: Arc<TDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self) -> Result<Vec<TopicView>, BookingError> {
        let topics = self.directory.list_topics().await?;
        let mut views = Vec::with_capacity(topics.len());
        for topic in topics {
            let experts = experts_of(&*self.directory, &topic).await?;
            views.push(TopicView {
                id: topic.id,
                name: topic.name,
                experts: experts.iter().map(PersonSummary::from).collect(),
            });
        }
        Ok(views)
    }
}

/// Resolves the topic's roster, keeping only ids that are experts in the directory.
pub async fn experts_of(
    directory: &dyn Directory,
    topic: &Topic,
) -> Result<Vec<User>, BookingError> {
    let mut experts = Vec::with_capacity(topic.expert_ids.len());
    for expert_id in &topic.expert_ids {
        if let Some(user) = directory.find_user(*expert_id).await?.filter(|u| u.is_expert) {
            experts.push(user);
        }
    }
    Ok(experts)
}
