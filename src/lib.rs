//! Shrimp Leaderboard Service Library
//!
//! This library crate defines the modules behind the score submission service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of four loosely coupled subsystems:
//!
//! - **`config`**: Startup configuration. Collects the document store credentials
//!   (master key, bin id) from the environment into an explicit struct that is
//!   passed into the store client, never read from ambient global state.
//! - **`leaderboard`**: The core ranking logic. Contains the `ScoreEntry` data
//!   model and the pure merge policy (append, sort descending, keep the top 10).
//! - **`store`**: The persistence layer. A thin HTTP client for the external
//!   document store that reads and overwrites the leaderboard as a single
//!   JSON document.
//! - **`submission`**: The inbound API. Validates raw score submissions and
//!   orchestrates the validate → fetch → merge → persist pipeline.
//!
//! The `error` module carries the request-level failure taxonomy shared by
//! the validator, the store client, and the handlers.

pub mod config;
pub mod error;
pub mod leaderboard;
pub mod store;
pub mod submission;
