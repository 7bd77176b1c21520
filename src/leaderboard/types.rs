use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ranked submission on the leaderboard.
///
/// `date` is assigned by the server when the submission is accepted; a
/// client-supplied timestamp is never trusted. `shrimps` is a number rather
/// than an integer because the reference behavior accepts any value >= 1,
/// fractional or not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreEntry {
    pub name: String,
    pub shrimps: f64,
    pub date: DateTime<Utc>,
}

impl ScoreEntry {
    /// Builds an entry stamped with the current server time.
    pub fn new(name: String, shrimps: f64) -> Self {
        Self {
            name,
            shrimps,
            date: Utc::now(),
        }
    }
}
