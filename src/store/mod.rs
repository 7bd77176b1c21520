//! Document Store Module
//!
//! Persistence for the leaderboard, delegated entirely to an external HTTP
//! key-value document store (jsonbin-style API).
//!
//! ## Core Concepts
//! - **Single document**: the whole leaderboard lives under one bin id; it is
//!   read in full and overwritten in full on every submission.
//! - **Master key**: a shared secret sent as the `X-Master-Key` header
//!   authorizes both operations.
//! - **No coordination**: read-then-write is not atomic; concurrent writers
//!   can race and the last write wins. The store offers no versioned
//!   conditional writes in the mode we use (versioning is disabled on write).

pub mod client;
pub mod protocol;

pub use client::{StoreClient, StoreError};
