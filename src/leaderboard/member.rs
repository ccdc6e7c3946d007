use std::collections::HashMap;

use serde::Deserialize;

use crate::leaderboard::error::LeaderboardError;

pub const ADVENT_DAYS: usize = 25;
pub const PARTS_PER_DAY: usize = 2;

/// Decoded private leaderboard payload as served by adventofcode.com.
/// Only the members map is consumed; any other top-level fields the
/// site adds are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLeaderboard {
    pub members: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawMember {
    name: String,
    local_score: i64,
    stars: i64,
    completion_day_level: HashMap<String, HashMap<String, RawStar>>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawStar {
    get_star_ts: EpochSeconds,
}

/// The site has served star timestamps both as integers and as decimal
/// strings over the years.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum EpochSeconds {
    Int(i64),
    Text(String),
}

impl EpochSeconds {
    fn seconds(&self) -> Result<i64, std::num::ParseIntError> {
        match self {
            EpochSeconds::Int(v) => Ok(*v),
            EpochSeconds::Text(s) => s.trim().parse(),
        }
    }
}

/// One participant, normalized. Built fresh from the raw payload on
/// every request and immutable afterwards.
///
/// Per-day state lives in fixed-size arrays indexed by `day - 1`, so a
/// lookup for an unfinished day always succeeds and answers `None`.
#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    pub score: i64,
    pub stars: i64,
    day_times: [[Option<i64>; PARTS_PER_DAY]; ADVENT_DAYS],
    day_deltas: [Option<i64>; ADVENT_DAYS],
}

impl Member {
    /// Builds a member from one raw record. `member_id` is only used to
    /// label errors.
    pub fn from_raw_record(
        member_id: &str,
        record: &serde_json::Value,
    ) -> Result<Member, LeaderboardError> {
        let raw: RawMember = serde_json::from_value(record.clone())
            .map_err(|e| malformed(member_id, e.to_string()))?;

        let mut member = Member {
            name: raw.name,
            score: raw.local_score,
            stars: raw.stars,
            day_times: [[None; PARTS_PER_DAY]; ADVENT_DAYS],
            day_deltas: [None; ADVENT_DAYS],
        };

        for (day_key, day_data) in &raw.completion_day_level {
            let day = parse_index(member_id, "day", day_key, ADVENT_DAYS)?;

            for (star_key, star_data) in day_data {
                let star = parse_index(member_id, "star", star_key, PARTS_PER_DAY)?;
                let ts = star_data.get_star_ts.seconds().map_err(|_| {
                    malformed(
                        member_id,
                        format!("day {day} star {star} has a non-numeric timestamp"),
                    )
                })?;
                member.day_times[day - 1][star - 1] = Some(ts);
            }

            // Order-independent on purpose: a corrected timestamp could
            // put part 2 before part 1, and the delta must stay
            // non-negative.
            if let [Some(a), Some(b)] = member.day_times[day - 1] {
                member.day_deltas[day - 1] = Some(a.max(b) - a.min(b));
            }
        }

        Ok(member)
    }

    /// Completion timestamp for one part of one day. `day` is 1..=25
    /// and `part` is 1..=2; the command surface validates ranges before
    /// the pipeline runs.
    pub fn part_time(&self, day: usize, part: usize) -> Option<i64> {
        self.day_times[day - 1][part - 1]
    }

    /// Seconds between the two part completions of `day`, defined only
    /// when both parts are done.
    pub fn delta(&self, day: usize) -> Option<i64> {
        self.day_deltas[day - 1]
    }

    /// Stars earned on `day` (0..=2).
    pub fn stars_for_day(&self, day: usize) -> usize {
        self.day_times[day - 1].iter().flatten().count()
    }
}

fn malformed(member_id: &str, detail: String) -> LeaderboardError {
    LeaderboardError::MalformedRecord {
        member_id: member_id.to_string(),
        detail,
    }
}

fn parse_index(
    member_id: &str,
    label: &str,
    key: &str,
    max: usize,
) -> Result<usize, LeaderboardError> {
    let value: usize = key
        .parse()
        .map_err(|_| malformed(member_id, format!("{label} key {key:?} is not a number")))?;

    if value < 1 || value > max {
        return Err(malformed(
            member_id,
            format!("{label} key {value} is outside 1..={max}"),
        ));
    }

    Ok(value)
}
