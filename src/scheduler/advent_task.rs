use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use tracing::{info, warn};

use crate::api::advent_api;
use crate::discord::discord_helper;
use crate::leaderboard::member::ADVENT_DAYS;
use crate::leaderboard::message::{self, DisplayMode, DisplayParams};
use crate::leaderboard::metric::SortMetric;
use crate::scheduler::SchedulerContext;
use crate::{fmt, str, Error};

/// Posts the full leaderboard (and, from day 2 on, the previous day's
/// timing table) once per day during the event, at the configured
/// hour. `last_posted` guards against the check interval firing more
/// than once within that hour.
#[tracing::instrument(level = "info", skip(ctx, last_posted))]
pub async fn check_and_publish(
    ctx: &SchedulerContext,
    last_posted: &mut Option<NaiveDate>,
) -> Result<(), Error> {
    let config = &ctx.config.scheduler;
    let now = Utc::now();

    if now.month() != 12 || now.day() as usize > ADVENT_DAYS {
        return Ok(());
    }
    if now.hour() != config.daily_post_hour as u32 {
        return Ok(());
    }
    if *last_posted == Some(now.date_naive()) {
        return Ok(());
    }

    let channel_id = match config.channel_id {
        Some(id) => id,
        None => {
            warn!("Scheduler has no channel_id configured, skipping daily post");
            return Ok(());
        }
    };

    // A misconfigured metric must fail the run, not fall back.
    let sort: SortMetric = config.daily_sort.parse()?;

    info!(channel_id, "Daily leaderboard trigger matched, publishing");

    let payload = advent_api::get_leaderboard(
        now.year(),
        ctx.config.leaderboard_code,
        &ctx.config.session_cookie,
    )
    .await?;

    let board = message::build_leaderboard_message(
        &payload,
        &DisplayParams {
            year: now.year(),
            mode: DisplayMode::Full,
        },
    )?;

    let title = str!(":star: **Advent of Code Leaderboard** :trophy:");
    for content in
        discord_helper::code_block_messages(&title, &board, ctx.config.max_message_length)
    {
        discord_helper::send_channel_message(&ctx.http, channel_id, &content).await?;
    }

    if let Some(day) = previous_event_day(&now) {
        let day_board = message::build_leaderboard_message(
            &payload,
            &DisplayParams {
                year: now.year(),
                mode: DisplayMode::Day { day, sort },
            },
        )?;

        let day_title = fmt!(":star: **Advent of Code Leaderboard** :trophy: (Day {day})");
        for content in discord_helper::code_block_messages(
            &day_title,
            &day_board,
            ctx.config.max_message_length,
        ) {
            discord_helper::send_channel_message(&ctx.http, channel_id, &content).await?;
        }
    }

    *last_posted = Some(now.date_naive());
    Ok(())
}

/// The event day whose timing table accompanies today's post. Day 1
/// has nothing to look back on.
fn previous_event_day(now: &DateTime<Utc>) -> Option<usize> {
    if now.month() != 12 {
        return None;
    }

    let day = now.day() as usize;
    if (2..=ADVENT_DAYS).contains(&day) {
        Some(day - 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, month, day, 8, 0, 0).unwrap()
    }

    #[test]
    fn previous_day_exists_only_from_day_two() {
        assert_eq!(previous_event_day(&at(12, 1)), None);
        assert_eq!(previous_event_day(&at(12, 2)), Some(1));
        assert_eq!(previous_event_day(&at(12, 25)), Some(24));
    }

    #[test]
    fn no_previous_day_outside_the_event() {
        assert_eq!(previous_event_day(&at(11, 14)), None);
        assert_eq!(previous_event_day(&at(12, 26)), None);
    }

    #[test]
    fn configured_metric_text_parses_through_the_same_path() {
        assert_eq!("p2".parse::<SortMetric>().unwrap(), SortMetric::Part2);
        assert!("fastest".parse::<SortMetric>().is_err());
    }
}
