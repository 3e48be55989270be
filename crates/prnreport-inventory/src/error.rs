//! Error types for prnreport-inventory

use std::fmt;

use thiserror::Error;

/// Errors that abort a collection run
#[derive(Error, Debug, Clone)]
pub enum CollectError {
    /// Login failed, timed out or returned no token
    #[error("authentication failed: {0}")]
    Authentication(String),
}

/// Why a vendor contributed no records
///
/// These are recoverable: the run moves on to the next vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Host group does not exist or could not be looked up
    GroupNotFound,
    /// Group has no active hosts
    NoActiveHosts,
    /// No host follows the printer naming convention
    NoMatchingHosts,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::GroupNotFound => write!(f, "host group not found"),
            SkipReason::NoActiveHosts => write!(f, "no active hosts in group"),
            SkipReason::NoMatchingHosts => write!(f, "no hosts match the printer name pattern"),
        }
    }
}
