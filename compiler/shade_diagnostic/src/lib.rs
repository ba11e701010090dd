//! Diagnostic system for the shade front end.
//!
//! Every phase reports problems as [`Diagnostic`] values through a shared
//! [`ErrorReporter`]:
//! - Error codes for searchability
//! - A message naming what went wrong
//! - A primary span pointing at where it went wrong
//! - Optional secondary labels, notes and suggestions
//!
//! Reporting never unwinds. Producers return `None` after reporting and
//! callers propagate it; the reporter's error count is the authority on
//! whether a unit compiled.

mod diagnostic;
mod error_code;
pub mod reporter;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use reporter::{ErrorReporter, ReporterMark};
