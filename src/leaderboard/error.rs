use std::fmt;

/// Failures raised by the leaderboard pipeline itself. Network and
/// payload-decode failures belong to the fetch layer and never reach
/// this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardError {
    /// A member record was missing a required field or had the wrong
    /// shape. Carries the member id so the bad record can be found
    /// without re-running.
    MalformedRecord { member_id: String, detail: String },
    /// The requested single-day sort metric is not one of the
    /// recognized values. Never defaulted silently.
    UnknownMetric { metric: String },
}

impl fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaderboardError::MalformedRecord { member_id, detail } => {
                write!(f, "malformed record for member {member_id}: {detail}")
            }
            LeaderboardError::UnknownMetric { metric } => {
                write!(f, "unknown sort metric: {metric}")
            }
        }
    }
}

impl std::error::Error for LeaderboardError {}
