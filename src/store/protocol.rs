//! Store Wire Protocol
//!
//! Defines the JSON envelopes exchanged with the external document store.

use serde::{Deserialize, Serialize};

use crate::leaderboard::types::ScoreEntry;

// --- Headers ---

/// Authorizes read/write access to the bin.
pub const HEADER_MASTER_KEY: &str = "X-Master-Key";
/// Set to "false" on writes so the store overwrites the latest state instead
/// of keeping a version history.
pub const HEADER_BIN_VERSIONING: &str = "X-Bin-Versioning";

// --- Envelopes ---

/// The leaderboard document as stored in the bin.
///
/// Doubles as the PUT request body. A document missing the `leaders` field
/// (for example a freshly created bin) deserializes to an empty board rather
/// than an error.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LeaderboardDocument {
    #[serde(default)]
    pub leaders: Vec<ScoreEntry>,
}

/// Envelope returned by the store's read endpoint.
///
/// The store wraps the stored document in a `record` field alongside
/// metadata we ignore.
#[derive(Debug, Default, Deserialize)]
pub struct ReadBinResponse {
    #[serde(default)]
    pub record: LeaderboardDocument,
}
