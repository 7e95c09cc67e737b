//! Requirements parsing and reconciliation.
//!
//! Both input sources - the requirements file and pip's freeze output -
//! declare packages as `name==version` lines. Membership comparison always
//! happens on the bare name, so a version pin in either source never makes
//! a package look missing.
//!
//! # Modules
//!
//! - [`file`] - Requirements file loading and line parsing
//! - [`reconcile`] - The missing-set computation

pub mod file;
pub mod reconcile;

pub use file::{load_required, parse_requirements};
pub use reconcile::SyncPlan;

/// The package name portion of a requirement line: everything before the
/// first `==`, or the whole line if there is no `==`.
pub fn bare_name(line: &str) -> &str {
    match line.split_once("==") {
        Some((name, _version)) => name,
        None => line,
    }
}
