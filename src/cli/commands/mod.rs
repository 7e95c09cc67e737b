//! CLI command implementations.
//!
//! Each subcommand lives in its own module and implements the
//! [`Command`](dispatcher::Command) trait.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod sync;
