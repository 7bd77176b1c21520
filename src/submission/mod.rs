//! Submission Module
//!
//! The inbound API of the service.
//!
//! ## Workflow
//! 1. **Decode**: the raw JSON body is checked by the validator, which
//!    produces a typed submission or a validation failure. The untyped value
//!    never travels past that step.
//! 2. **Orchestrate**: the handler fetches the current board, applies the
//!    merge policy, and persists the result.
//! 3. **Respond**: outcomes map to the fixed status codes of the API
//!    (200/400/405/500); store failures are logged but never echoed.

pub mod handlers;
pub mod types;
pub mod validator;
