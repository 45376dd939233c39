//! `Result` helpers for wrapping foreign errors at the failure site.

use std::error::Error as StdError;

use crate::{DomainError, ErrorCode};

/// Extension trait that turns any `Result<T, E>` into a
/// `Result<T, DomainError>` whose cause is the original error.
///
/// ```
/// use domain::{ErrorCode, ResultExt};
///
/// fn read_state(raw: &str) -> Result<u32, domain::DomainError> {
///     raw.parse::<u32>()
///         .wrap_err(ErrorCode::StateCorrupt, "state file is not a number")
/// }
///
/// let err = read_state("x").unwrap_err();
/// assert_eq!(err.to_string(), "STATE_CORRUPT: state file is not a number");
/// assert!(err.cause().is_some());
/// ```
pub trait ResultExt<T> {
    /// Wraps the error with `code` and `message`.
    fn wrap_err(self, code: ErrorCode, message: impl Into<String>) -> Result<T, DomainError>;

    /// Like [`ResultExt::wrap_err`], building the message only on failure.
    fn wrap_err_with<M, F>(self, code: ErrorCode, message: F) -> Result<T, DomainError>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn wrap_err(self, code: ErrorCode, message: impl Into<String>) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::wrap(code, message, e))
    }

    fn wrap_err_with<M, F>(self, code: ErrorCode, message: F) -> Result<T, DomainError>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        self.map_err(|e| DomainError::wrap(code, message(), e))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn wrap_err_keeps_original_as_cause() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = result
            .wrap_err(ErrorCode::StateWriteFailed, "failed to write state")
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::StateWriteFailed);
        let cause = err.cause().and_then(|c| c.downcast_ref::<io::Error>()).expect("io cause");
        assert_eq!(cause.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn wrap_err_nests_domain_errors() {
        let inner: Result<(), DomainError> = Err(DomainError::new(ErrorCode::StepFailed, "step 1 failed"));
        let err = inner
            .wrap_err(ErrorCode::StateWriteFailed, "failed to write state")
            .unwrap_err();

        let codes: Vec<ErrorCode> = crate::chain(&err).domain_errors().map(DomainError::code).collect();
        assert_eq!(codes, [ErrorCode::StateWriteFailed, ErrorCode::StepFailed]);
    }

    #[test]
    fn wrap_err_with_is_lazy_on_success() {
        let ok: Result<u8, io::Error> = Ok(7);
        let value = ok
            .wrap_err_with(ErrorCode::Timeout, || -> String { panic!("message built on success") })
            .unwrap();
        assert_eq!(value, 7);
    }
}
