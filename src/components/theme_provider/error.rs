//! Errors at the theme persistence boundary.

use thiserror::Error;

/// Failure to read or write the stored theme preference.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
	/// The browser exposes no local storage (private mode, sandboxed frame).
	#[error("local storage is unavailable")]
	StorageUnavailable,

	/// A storage call threw.
	#[error("local storage access failed: {0}")]
	Storage(String),

	/// The stored value is neither "light" nor "dark".
	#[error("unrecognised theme mode {0:?}")]
	InvalidMode(String),
}
