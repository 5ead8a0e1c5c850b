// Pure candidate generation.
//
// Purpose
// - Expand every (expert, grid cell) pair of a topic into a bookable candidate.
//
// Responsibilities
// - Skip cells the ledger reports as booked for that expert.
// - Derive the synthetic candidate id from (expert id, hour, minute).
// - Never perform input or output.

use crate::modules::consultations::core::slot::CellKey;
use crate::modules::consultations::core::views::{CandidateView, PersonSummary, TopicSummary};
use crate::modules::directory::core::user::{Topic, User};
use crate::shared::core::event_calendar::{EventCalendar, GridCell};
use crate::shared::core::primitives::UserId;
use std::collections::HashSet;

/// Saturates at `i64::MAX` for expert ids beyond the `i64::MAX / 10_000` range.
pub fn candidate_id(expert_id: UserId, cell: &GridCell) -> i64 {
    expert_id
        .0
        .saturating_mul(10_000)
        .saturating_add(i64::from(cell.hour) * 100 + i64::from(cell.minute))
}

pub fn generate_candidates(
    topic: &Topic,
    experts: &[User],
    cells: &[GridCell],
    booked: &HashSet<CellKey>,
    calendar: &EventCalendar,
) -> Vec<CandidateView> {
    let topic_summary = TopicSummary::from(topic);
    experts
        .iter()
        .flat_map(|expert| {
            let summary = PersonSummary::from(expert);
            let topic_summary = topic_summary.clone();
            cells
                .iter()
                .filter(move |cell| {
                    !booked.contains(&CellKey {
                        expert_id: expert.id,
                        start: cell.start,
                        end: cell.end,
                    })
                })
                .map(move |cell| CandidateView {
                    id: candidate_id(expert.id, cell),
                    expert: summary.clone(),
                    topic: topic_summary.clone(),
                    time: calendar.time_range(cell.start, cell.end),
                    start: cell.start,
                    end: cell.end,
                })
        })
        .collect()
}
