//! The structured error record and its cause-chain helpers.
//!
//! A [`DomainError`] is created where a failure is detected, optionally
//! enriched with a hint and details, optionally wrapped by higher layers, and
//! rendered exactly once at the process boundary.
//!
//! Two renderings exist and neither includes the cause:
//!
//! - **Plain text** (`Display`): `"<code>: <message>"`.
//! - **JSON envelope** (`Serialize`): `code`, `message`, and, when present,
//!   `hint` and `details`.
//!
//! The cause is reachable only through [`DomainError::cause`] and
//! [`std::error::Error::source`], so callers can test root-cause identity
//! without it ever reaching a user.

use std::error::Error as StdError;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::ErrorCode;

/// Debug-level diagnostics attached to an error. Keys are kept sorted.
pub type Details = serde_json::Map<String, Value>;

/// Boxed underlying error stored as a [`DomainError`] cause.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

// ---------------------------------------------------------------------------
// DomainError
// ---------------------------------------------------------------------------

/// A structured, user-facing dspo error.
///
/// The `cause` is internal-only. It never appears in the `Display` output or
/// in the JSON envelope.
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct DomainError {
    code: ErrorCode,
    message: String,
    hint: Option<String>,
    details: Option<Details>,
    #[source]
    cause: Option<Cause>,
}

impl DomainError {
    /// Creates an error with no cause, hint, or details.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            hint: None,
            details: None,
            cause: None,
        }
    }

    /// Creates an error that wraps an underlying cause.
    ///
    /// `cause` may be another [`DomainError`], any foreign error, or a plain
    /// message (`&str` / `String`), which becomes an opaque error value.
    pub fn wrap(code: ErrorCode, message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            cause: Some(cause.into()),
            ..Self::new(code, message)
        }
    }

    /// Attaches a user-facing remediation hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Attaches structured diagnostic details, replacing any previous map.
    #[must_use]
    pub fn with_details(mut self, details: Details) -> Self {
        self.details = Some(details);
        self
    }

    /// Inserts a single detail entry, creating the details map if needed.
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(Details::new)
            .insert(key.into(), value.into());
        self
    }

    /// The stable code classifying this failure.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The human-readable description, without code or hint.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The remediation hint, if one was attached and is non-empty.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref().filter(|h| !h.is_empty())
    }

    /// The details map, if one was attached and is non-empty.
    pub fn details(&self) -> Option<&Details> {
        self.details.as_ref().filter(|d| !d.is_empty())
    }

    /// Returns the immediate cause, or `None` for an unwrapped error.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Consumes the error and returns its immediate cause.
    pub fn into_cause(self) -> Option<Cause> {
        self.cause
    }

    /// Finds the nearest [`DomainError`] in `err`'s chain, starting with `err`
    /// itself.
    pub fn find_in<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a DomainError> {
        chain(err).domain_errors().next()
    }

    /// Serialises the JSON envelope.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialises the JSON envelope with indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Converts the JSON envelope into a [`Value`].
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Writes the envelope field by field. The cause has no entry here.
impl Serialize for DomainError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let hint = self.hint();
        let details = self.details();
        let len = 2 + usize::from(hint.is_some()) + usize::from(details.is_some());

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("code", &self.code)?;
        map.serialize_entry("message", &self.message)?;
        if let Some(hint) = hint {
            map.serialize_entry("hint", hint)?;
        }
        if let Some(details) = details {
            map.serialize_entry("details", details)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Chain walking
// ---------------------------------------------------------------------------

/// Iterator over an error and each successive [`StdError::source`].
///
/// The first item is the error the walk started from; the last item is the
/// root cause.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    /// Restricts the walk to the [`DomainError`] links, outermost first.
    ///
    /// A cause passed in as `Box<DomainError>` is stored boxed twice; such
    /// links are matched through the inner box.
    pub fn domain_errors(self) -> impl Iterator<Item = &'a DomainError> {
        self.filter_map(|e| {
            e.downcast_ref::<DomainError>()
                .or_else(move || e.downcast_ref::<Box<DomainError>>().map(|b| &**b))
        })
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Walks `err` and every error it wraps, outermost first.
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Returns the terminal error of `err`'s chain (`err` itself if it has no source).
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current
}

/// Finds the nearest [`DomainError`] in the chain of an optional error.
///
/// Returns `None` when `err` is absent or when no link is a [`DomainError`].
pub fn as_domain_error<'a>(err: Option<&'a (dyn StdError + 'static)>) -> Option<&'a DomainError> {
    DomainError::find_in(err?)
}
