use crate::leaderboard::error::LeaderboardError;
use crate::leaderboard::member::{Member, RawLeaderboard};
use crate::leaderboard::metric::SortMetric;
use crate::leaderboard::{formatter, ranking};

#[derive(Debug, Clone, Copy)]
pub enum DisplayMode {
    Full,
    Day { day: usize, sort: SortMetric },
}

#[derive(Debug, Clone, Copy)]
pub struct DisplayParams {
    pub year: i32,
    pub mode: DisplayMode,
}

/// Runs the whole pipeline: normalize every raw record, rank, format.
/// Returns the bare text block; the Discord layer owns the title line
/// and code fencing. A malformed record aborts the request rather than
/// silently dropping the member.
pub fn build_leaderboard_message(
    payload: &RawLeaderboard,
    params: &DisplayParams,
) -> Result<String, LeaderboardError> {
    let mut members = payload
        .members
        .iter()
        .map(|(id, record)| Member::from_raw_record(id, record))
        .collect::<Result<Vec<Member>, LeaderboardError>>()?;

    let text = match params.mode {
        DisplayMode::Full => {
            ranking::rank_full(&mut members);
            formatter::format_full(&members)
        }
        DisplayMode::Day { day, sort } => {
            let ranked = ranking::rank_by_day(members, day, sort);
            formatter::format_day(&ranked, params.year, day)
        }
    };

    Ok(text)
}
