//! Stable error-code taxonomy.
//!
//! Every [`crate::DomainError`] carries exactly one [`ErrorCode`]. The wire
//! string of each code (`UNSUPPORTED_PLATFORM`, `STATE_CORRUPT`, ...) is a
//! public contract: scripts match on it in `--json` output. New codes may be
//! added, but an existing wire string must never change spelling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Macro for the code table.
// Generates: enum, as_str(), ALL, Display, FromStr.
// ---------------------------------------------------------------------------
macro_rules! error_codes {
    (
        $(
            $(#[$attr:meta])*
            $variant:ident => $wire:literal,
        )+
    ) => {
        /// Symbolic identifier for a class of failure.
        ///
        /// Serialises as its SCREAMING_SNAKE_CASE wire string.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[non_exhaustive]
        pub enum ErrorCode {
            $(
                $(#[$attr])*
                $variant,
            )+
        }

        impl ErrorCode {
            /// Every defined code, in declaration order.
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$variant,)+];

            /// Returns the stable wire string for this code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => $wire,)+
                }
            }
        }

        impl FromStr for ErrorCode {
            type Err = ParseErrorCodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(ErrorCode::$variant),)+
                    other => Err(ParseErrorCodeError {
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

error_codes! {
    /// The host OS or distribution release is not supported.
    UnsupportedPlatform => "UNSUPPORTED_PLATFORM",
    /// A required tool or package is not installed.
    MissingPrereq => "MISSING_PREREQ",
    /// A profile document failed schema validation.
    InvalidProfileSchema => "INVALID_PROFILE_SCHEMA",
    /// Two profile sources disagree and cannot be merged automatically.
    MergeConflict => "MERGE_CONFLICT",
    /// Another dspo process holds the state lock.
    LockHeld => "LOCK_HELD",
    /// The operation requires elevated privileges.
    SudoRequired => "SUDO_REQUIRED",
    /// A replay step returned a failure.
    StepFailed => "STEP_FAILED",
    /// Persisted state could not be parsed or failed integrity checks.
    StateCorrupt => "STATE_CORRUPT",
    /// Persisted state could not be written.
    StateWriteFailed => "STATE_WRITE_FAILED",
    /// An asset has no recorded checksum.
    AssetChecksumMissing => "ASSET_CHECKSUM_MISSING",
    /// An asset's content does not match its recorded checksum.
    AssetChecksumMismatch => "ASSET_CHECKSUM_MISMATCH",
    /// The operation needs network access that is unavailable.
    NetworkRequired => "NETWORK_REQUIRED",
    /// The operation did not complete in time.
    Timeout => "TIMEOUT",
}

impl ErrorCode {
    /// Looks up a code by its wire string, returning `None` for unknown values.
    pub fn lookup(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Returned when a string is not the wire form of any [`ErrorCode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error code '{value}'")]
pub struct ParseErrorCodeError {
    value: String,
}

impl ParseErrorCodeError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}
