//! Error types for the Collabora integration crates

use std::fmt;

pub type CoResult<T> = std::result::Result<T, Error>;

/// Failures that cannot be expressed as a normal resolution outcome.
///
/// Expected conditions (an unrecognized extension, an unusable rights
/// answer) are values, not errors; only genuinely unexpected failures
/// surface here.
#[derive(Debug)]
pub enum Error {
	/// Caller-supplied input was unusable, e.g. a URL that does not parse.
	ValidationError(String),

	/// A remote document (JSON or XML) had an unexpected shape.
	Parse,

	/// A deadline imposed by the caller expired.
	Timeout,

	/// Transport-level failure talking to a remote endpoint.
	Internal(String),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::ValidationError(msg) => write!(f, "Validation error: {}", msg),
			Error::Parse => write!(f, "Parse error"),
			Error::Timeout => write!(f, "Timed out"),
			Error::Internal(msg) => write!(f, "Internal error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

// vim: ts=4
