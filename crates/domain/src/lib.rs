//! Core domain model for dspo.
//!
//! This crate contains the structured error model shared by every dspo
//! component: the stable [`ErrorCode`] taxonomy, the [`DomainError`] record
//! with its user-safe JSON envelope, cause-chain helpers, and the coarse
//! [`ExitCategory`] used when the process terminates.
//!
//! ## Architectural Layer
//!
//! **Domain.** This crate has no I/O dependencies and never prints or logs.
//! Errors are constructed and returned here; the `cli` crate is the only
//! layer that renders them or decides the process exit status.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`codes`] | `ErrorCode` taxonomy and its wire strings |
//! | [`errors`] | `DomainError`, envelope serialisation, chain walking |
//! | [`exit`] | `ExitCategory` process-termination classes |
//! | [`ext`] | `ResultExt` for wrapping foreign errors at the failure site |

pub mod codes;
pub mod errors;
pub mod exit;
pub mod ext;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use codes::{ErrorCode, ParseErrorCodeError};
pub use errors::{as_domain_error, chain, root_cause, Cause, Chain, Details, DomainError};
pub use exit::ExitCategory;
pub use ext::ResultExt;
