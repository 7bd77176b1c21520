//! Leaderboard Module
//!
//! The core ranking logic of the service, kept free of transport concerns.
//!
//! ## Workflow
//! 1. **Model**: `ScoreEntry` is the immutable record of one submission.
//! 2. **Merge**: `policy::merge` folds a new entry into the current board.
//! 3. **Invariant**: the board is always sorted descending by `shrimps` and
//!    never holds more than `MAX_ENTRIES` entries.

pub mod policy;
pub mod types;
