use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::consultations::core::errors::BookingError;
use crate::modules::consultations::core::views::{BookingView, CandidateView, PersonSummary, TopicView};
use crate::modules::consultations::use_cases::book_slot::command::BookSlotRequest;
use crate::modules::directory::core::user::User;
use crate::modules::directory::use_cases::resolve_caller::handler::AuthError;
use crate::shared::core::primitives::{SlotId, TopicId, UserId};
use crate::shell::state::AppState;

/// Outcome of resolving the request's caller header, attached to every GraphQL request.
#[derive(Debug)]
pub struct CallerResolution(pub Result<User, AuthError>);

fn caller<'ctx>(context: &Context<'ctx>) -> GqlResult<&'ctx User> {
    match context.data::<CallerResolution>()? {
        CallerResolution(Ok(user)) => Ok(user),
        CallerResolution(Err(error)) => Err(async_graphql::Error::new(error.to_string())),
    }
}

fn gql_error(error: BookingError) -> async_graphql::Error {
    async_graphql::Error::new(error.to_string())
}

fn parse_instant(field: &str, value: &str) -> GqlResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|_| gql_error(BookingError::Validation(format!("{field} must be RFC 3339"))))
}

#[derive(SimpleObject, Clone)]
pub struct GqlPerson {
    pub id: i64,
    pub name: String,
    pub username: Option<String>,
}

impl From<PersonSummary> for GqlPerson {
    fn from(person: PersonSummary) -> Self {
        Self {
            id: person.id.0,
            name: person.name,
            username: person.username,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTopic {
    pub id: i64,
    pub name: String,
    pub experts: Vec<GqlPerson>,
}

impl From<TopicView> for GqlTopic {
    fn from(topic: TopicView) -> Self {
        Self {
            id: topic.id.0,
            name: topic.name,
            experts: topic.experts.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlCandidate {
    pub id: i64,
    pub expert: GqlPerson,
    pub topic_id: i64,
    pub topic_name: String,
    pub time: String,
    pub start: String,
    pub end: String,
}

impl From<CandidateView> for GqlCandidate {
    fn from(candidate: CandidateView) -> Self {
        Self {
            id: candidate.id,
            expert: candidate.expert.into(),
            topic_id: candidate.topic.id.0,
            topic_name: candidate.topic.name,
            time: candidate.time,
            start: candidate.start.to_rfc3339(),
            end: candidate.end.to_rfc3339(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlBooking {
    pub slot_id: ID,
    pub expert: Option<GqlPerson>,
    pub topic_name: Option<String>,
    pub date: String,
    pub time: String,
    pub start: String,
    pub end: String,
    pub meeting_location: String,
}

impl From<BookingView> for GqlBooking {
    fn from(booking: BookingView) -> Self {
        Self {
            slot_id: ID(booking.slot_id.0.to_string()),
            expert: booking.expert.map(Into::into),
            topic_name: booking.topic.map(|t| t.name),
            date: booking.date,
            time: booking.time,
            start: booking.start.to_rfc3339(),
            end: booking.end.to_rfc3339(),
            meeting_location: booking.meeting_location,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn topics(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTopic>> {
        caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let topics = state.list_topics.handle().await.map_err(gql_error)?;
        Ok(topics.into_iter().map(Into::into).collect())
    }

    async fn candidate_slots(
        &self,
        context: &Context<'_>,
        topic_id: i64,
    ) -> GqlResult<Vec<GqlCandidate>> {
        caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let candidates = state
            .list_candidates
            .handle(TopicId(topic_id))
            .await
            .map_err(gql_error)?;
        Ok(candidates.into_iter().map(Into::into).collect())
    }

    async fn my_bookings(&self, context: &Context<'_>) -> GqlResult<Vec<GqlBooking>> {
        let attendee = caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let bookings = state
            .list_bookings
            .my_bookings(attendee)
            .await
            .map_err(gql_error)?;
        Ok(bookings.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn book_slot(
        &self,
        context: &Context<'_>,
        expert_id: i64,
        topic_id: i64,
        start: String,
        end: String,
    ) -> GqlResult<ID> {
        let attendee = caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let request = BookSlotRequest {
            expert_id: UserId(expert_id),
            topic_id: TopicId(topic_id),
            start: parse_instant("start", &start)?,
            end: parse_instant("end", &end)?,
        };
        let slot_id = state
            .book_slot
            .handle(attendee, request)
            .await
            .map_err(gql_error)?;
        Ok(ID(slot_id.0.to_string()))
    }

    async fn cancel_booking(&self, context: &Context<'_>, slot_id: ID) -> GqlResult<bool> {
        let attendee = caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let slot_id = Uuid::parse_str(&slot_id)
            .map(SlotId)
            .map_err(|_| gql_error(BookingError::Validation("slot_id must be a UUID".into())))?;
        state
            .cancel_booking
            .handle(attendee, slot_id)
            .await
            .map_err(gql_error)?;
        Ok(true)
    }
}
