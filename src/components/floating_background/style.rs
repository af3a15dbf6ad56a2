//! Colors used by the particle field for each theme mode.

use crate::components::theme_provider::ThemeMode;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string. Alpha is written with two decimals, which is all
	/// the precision the proximity lines need.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Dot and line colors for one theme mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldPalette {
	/// Fill color of the particles.
	pub dot: Color,
	/// Proximity line color; its alpha is replaced per line.
	pub line: Color,
}

impl FieldPalette {
	pub const DARK: Self = Self {
		dot: Color::rgba(125, 211, 252, 0.7),
		line: Color::rgb(14, 165, 233),
	};

	pub const LIGHT: Self = Self {
		dot: Color::rgba(56, 189, 248, 0.5),
		line: Color::rgb(56, 189, 248),
	};

	pub fn for_mode(mode: ThemeMode) -> Self {
		match mode {
			ThemeMode::Dark => Self::DARK,
			ThemeMode::Light => Self::LIGHT,
		}
	}
}
