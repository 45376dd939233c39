//! Exit-status policy for the process boundary.
//!
//! | ErrorCode | ExitCategory |
//! |-----------|--------------|
//! | `INVALID_PROFILE_SCHEMA`, `ASSET_CHECKSUM_MISSING`, `ASSET_CHECKSUM_MISMATCH` | `ValidationError` |
//! | `UNSUPPORTED_PLATFORM`, `MISSING_PREREQ`, `SUDO_REQUIRED`, `NETWORK_REQUIRED` | `PlatformError` |
//! | anything else | `GenericError` |

use domain::{ErrorCode, ExitCategory};

/// Maps an error code to the category the process exits with.
pub fn category_for(code: ErrorCode) -> ExitCategory {
    match code {
        ErrorCode::InvalidProfileSchema
        | ErrorCode::AssetChecksumMissing
        | ErrorCode::AssetChecksumMismatch => ExitCategory::ValidationError,
        ErrorCode::UnsupportedPlatform
        | ErrorCode::MissingPrereq
        | ErrorCode::SudoRequired
        | ErrorCode::NetworkRequired => ExitCategory::PlatformError,
        _ => ExitCategory::GenericError,
    }
}
