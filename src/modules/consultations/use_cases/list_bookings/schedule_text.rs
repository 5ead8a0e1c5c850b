use crate::modules::consultations::core::views::BookingView;

pub const EMPTY_SCHEDULE: &str = "No consultations booked for today.";

/// Chat rendering of an expert's schedule, one block per booking.
pub fn render_schedule(bookings: &[BookingView]) -> String {
    if bookings.is_empty() {
        return EMPTY_SCHEDULE.to_string();
    }
    let mut lines = vec!["Your booked consultations:".to_string(), String::new()];
    for booking in bookings {
        let (name, handle) = match &booking.attendee {
            Some(attendee) => (
                Some(attendee.name.as_str())
                    .filter(|n| !n.is_empty())
                    .unwrap_or("No name")
                    .to_string(),
                attendee
                    .username
                    .as_deref()
                    .filter(|u| !u.is_empty())
                    .map(|u| format!("@{u}"))
                    .unwrap_or_else(|| "no username".to_string()),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        let topic = booking.topic.as_ref().map_or("-", |t| t.name.as_str());
        lines.push(format!("{} • {}", booking.date, booking.time));
        lines.push(format!("{name} ({handle})"));
        lines.push(format!("Topic: {topic}"));
        lines.push(format!("Meeting place: {}", booking.meeting_location));
        lines.push("─".repeat(30));
    }
    lines.join("\n")
}
