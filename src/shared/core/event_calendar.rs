// Fixed appointment grid of the event day.
//
// Purpose
// - Define the single event day (in the venue's UTC offset) and its half-hour cells.
//
// Responsibilities
// - Enumerate the fourteen cells between opening and closing time.
// - Validate that a (start, end) pair is one of those cells.
// - Format instants in venue local time for messages and views.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};

pub const SLOT_MINUTES: i64 = 30;
pub const OPENS_AT_HOUR: u32 = 11;
pub const CLOSES_AT_HOUR: u32 = 18;
pub const CELLS_PER_DAY: usize = ((CLOSES_AT_HOUR - OPENS_AT_HOUR) * 60 / SLOT_MINUTES as u32) as usize;

pub const MEETING_LOCATION: &str = "Information desk at the Yandex stand, 1st floor";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub hour: u32,
    pub minute: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCalendar {
    offset: FixedOffset,
    event_day: Option<NaiveDate>,
}

impl EventCalendar {
    pub fn new(offset: FixedOffset) -> Self {
        Self {
            offset,
            event_day: None,
        }
    }

    /// Fixes the event day instead of following the venue's current date.
    pub fn pinned_to(mut self, day: NaiveDate) -> Self {
        self.event_day = Some(day);
        self
    }

    pub fn from_utc_offset_hours(hours: i32) -> Option<Self> {
        FixedOffset::east_opt(hours * 3600).map(Self::new)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn today(&self) -> NaiveDate {
        self.event_day
            .unwrap_or_else(|| Utc::now().with_timezone(&self.offset).date_naive())
    }

    pub fn cells(&self, day: NaiveDate) -> Vec<GridCell> {
        (0..CELLS_PER_DAY as u32)
            .filter_map(|index| {
                let minutes = OPENS_AT_HOUR * 60 + index * SLOT_MINUTES as u32;
                let (hour, minute) = (minutes / 60, minutes % 60);
                let start = day
                    .and_hms_opt(hour, minute, 0)?
                    .and_local_timezone(self.offset)
                    .single()?
                    .with_timezone(&Utc);
                Some(GridCell {
                    start,
                    end: start + Duration::minutes(SLOT_MINUTES),
                    hour,
                    minute,
                })
            })
            .collect()
    }

    /// Returns the cell of `day` spanning exactly `start..end`, if any.
    pub fn cell_at(
        &self,
        day: NaiveDate,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Option<GridCell> {
        self.cells(day)
            .into_iter()
            .find(|cell| cell.start == start && cell.end == end)
    }

    pub fn local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset)
    }

    pub fn time_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
        format!(
            "{} - {}",
            self.local(start).format("%H:%M"),
            self.local(end).format("%H:%M")
        )
    }

    pub fn date(&self, instant: DateTime<Utc>) -> String {
        self.local(instant).format("%d.%m.%Y").to_string()
    }
}
