use chrono::{DateTime, FixedOffset, Local, TimeZone};

/// Puzzles unlock at midnight US Eastern (UTC-5), the event's
/// canonical zone.
const EVENT_UTC_OFFSET_HOURS: i32 = -5;

pub fn local_date_yyyy_mm_dd() -> String {
    let now: DateTime<Local> = Local::now();
    now.format("%Y-%m-%d").to_string()
}

/// Unix timestamp of the instant `day` of December `year` unlocked.
pub fn puzzle_day_start(year: i32, day: usize) -> i64 {
    let event_zone =
        FixedOffset::east_opt(EVENT_UTC_OFFSET_HOURS * 3600).expect("valid event zone offset");

    event_zone
        .with_ymd_and_hms(year, 12, day as u32, 0, 0, 0)
        .single()
        .expect("valid puzzle day")
        .timestamp()
}
