//! The two theme modes and their storage representation.

use std::fmt;
use std::str::FromStr;

use super::error::ThemeError;

/// Light or dark appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
	Light,
	#[default]
	Dark,
}

impl ThemeMode {
	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}

	/// Value stored in local storage and written to `data-theme`.
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}

	pub fn is_dark(self) -> bool {
		self == ThemeMode::Dark
	}
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ThemeMode {
	type Err = ThemeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"light" => Ok(ThemeMode::Light),
			"dark" => Ok(ThemeMode::Dark),
			other => Err(ThemeError::InvalidMode(other.to_string())),
		}
	}
}
