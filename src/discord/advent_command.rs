use chrono::{Datelike, Utc};
use tracing::warn;

use crate::api::advent_api;
use crate::discord::discord_helper;
use crate::leaderboard::message::{self, DisplayMode, DisplayParams};
use crate::leaderboard::metric::SortMetric;
use crate::{fmt, str, Context, Error};

const FETCH_ERROR_MESSAGE: &str =
    "Error fetching leaderboard data. Check the leaderboard code, year, and day.";

/// Prints the Advent of Code private leaderboard.
#[poise::command(slash_command)]
pub async fn advent(
    ctx: Context<'_>,
    #[description = "Show the leaderboard for a specific day (default: all days)"]
    #[min = 1]
    #[max = 25]
    day: Option<u32>,
    #[description = "Year of the leaderboard (default: current year)"]
    #[min = 2015]
    #[max = 9999]
    year: Option<i32>,
    #[description = "Leaderboard code (default: configured leaderboard)"] code: Option<u64>,
    #[description = "Sorting method when displaying one day (default: part 2 completion time)"]
    sort: Option<SortMetric>,
) -> Result<(), Error> {
    discord_helper::log_invocation(&ctx);

    let data = ctx.data();
    let config = &data.config;
    let year = year.unwrap_or_else(|| Utc::now().year());
    let code = code.unwrap_or(config.leaderboard_code);

    let payload = match advent_api::get_leaderboard(year, code, &config.session_cookie).await {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = ?e, year, code, "Failed to fetch leaderboard");
            discord_helper::private_reply(&ctx, str!(FETCH_ERROR_MESSAGE)).await?;
            return Ok(());
        }
    };

    let mode = match day {
        None => DisplayMode::Full,
        Some(day) => DisplayMode::Day {
            day: day as usize,
            sort: sort.unwrap_or(SortMetric::Part2),
        },
    };
    let board = message::build_leaderboard_message(&payload, &DisplayParams { year, mode })?;

    let mut title = str!(":star: **Advent of Code Leaderboard** :trophy:");
    if let Some(day) = day {
        title.push_str(&fmt!(" (Day {day})"));
    }

    for content in discord_helper::code_block_messages(&title, &board, config.max_message_length) {
        discord_helper::public_reply(&ctx, content).await?;
    }

    Ok(())
}
