//! Coarse process-termination classes.
//!
//! [`ExitCategory`] is deliberately independent of [`crate::ErrorCode`]. Which
//! code lands in which category is policy owned by the process boundary (the
//! `cli` crate), not by the error type.

use std::fmt;
use std::process::ExitCode;

use serde::{Deserialize, Serialize};

/// How the process terminates.
///
/// The numeric status of each category is stable and documented in
/// `dspo --help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitCategory {
    /// No error occurred.
    Success,
    /// A failure with no more specific category.
    GenericError,
    /// Input (profiles, assets, arguments) failed validation.
    ValidationError,
    /// The host platform cannot run the requested operation.
    PlatformError,
}

impl ExitCategory {
    /// Returns the process exit status for this category.
    pub const fn status(self) -> u8 {
        match self {
            ExitCategory::Success => 0,
            ExitCategory::GenericError => 1,
            ExitCategory::ValidationError => 2,
            ExitCategory::PlatformError => 3,
        }
    }

    /// Returns `true` for [`ExitCategory::Success`].
    pub const fn is_success(self) -> bool {
        matches!(self, ExitCategory::Success)
    }
}

impl fmt::Display for ExitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExitCategory::Success => "success",
            ExitCategory::GenericError => "generic error",
            ExitCategory::ValidationError => "validation error",
            ExitCategory::PlatformError => "platform error",
        };
        f.write_str(name)
    }
}

impl From<ExitCategory> for ExitCode {
    fn from(category: ExitCategory) -> Self {
        ExitCode::from(category.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_distinct_and_success_is_zero() {
        let all = [
            ExitCategory::Success,
            ExitCategory::GenericError,
            ExitCategory::ValidationError,
            ExitCategory::PlatformError,
        ];
        let statuses: Vec<u8> = all.iter().map(|c| c.status()).collect();
        assert_eq!(statuses, [0, 1, 2, 3]);
        assert!(ExitCategory::Success.is_success());
        assert!(all[1..].iter().all(|c| !c.is_success()));
    }

    #[test]
    fn serialises_as_snake_case() {
        let json = serde_json::to_string(&ExitCategory::ValidationError).unwrap();
        assert_eq!(json, "\"validation_error\"");
    }
}
