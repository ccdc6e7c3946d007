use std::str::FromStr;

use poise::ChoiceParameter;

use crate::leaderboard::error::LeaderboardError;
use crate::leaderboard::member::Member;

/// Which per-day value a single-day leaderboard is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ChoiceParameter)]
pub enum SortMetric {
    #[name = "Part 1 completion time"]
    Part1,
    #[name = "Part 2 completion time"]
    Part2,
    #[name = "Delta between parts"]
    Delta,
}

impl SortMetric {
    pub(crate) fn value_for(self, member: &Member, day: usize) -> Option<i64> {
        match self {
            SortMetric::Part1 => member.part_time(day, 1),
            SortMetric::Part2 => member.part_time(day, 2),
            SortMetric::Delta => member.delta(day),
        }
    }
}

/// Config and scheduler paths carry the metric as text.
impl FromStr for SortMetric {
    type Err = LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p1" | "part1" => Ok(SortMetric::Part1),
            "p2" | "part2" => Ok(SortMetric::Part2),
            "delta" => Ok(SortMetric::Delta),
            other => Err(LeaderboardError::UnknownMetric {
                metric: other.to_string(),
            }),
        }
    }
}
