//! Pipsync - reconciliation of declared pip requirements.
//!
//! Pipsync reads the set of packages a machine is supposed to have (a
//! requirements file), asks pip which packages are actually installed,
//! and installs the difference.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and command dispatch
//! - [`config`] - Settings resolution (flags, environment, defaults)
//! - [`error`] - Error types and result alias
//! - [`installer`] - Install loop for missing packages
//! - [`pip`] - The external pip collaborator
//! - [`requirements`] - Requirements parsing and missing-set computation
//! - [`shell`] - Process execution
//! - [`ui`] - Terminal output, spinners, and confirmation prompts
//!
//! # Example
//!
//! ```
//! use pipsync::requirements::{parse_requirements, SyncPlan};
//! use std::collections::BTreeSet;
//!
//! let required = parse_requirements("flask==2.0\n# pinned for prod\nrequests==2.31.0\n");
//! let installed: BTreeSet<String> = ["flask".to_string()].into_iter().collect();
//! let plan = SyncPlan::new(required, installed);
//! assert_eq!(plan.missing.iter().next().map(String::as_str), Some("requests"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod pip;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{PipsyncError, Result};
