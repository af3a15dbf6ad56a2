//! CSS custom properties for each theme mode.
//!
//! The page stylesheet reads these variables from the document root, so
//! switching modes only rewrites the root's inline style.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::mode::ThemeMode;

/// A named set of style variables for one mode.
#[derive(Clone, Copy, Debug)]
pub struct StyleTokens {
	/// Value for the root `color-scheme` property.
	pub color_scheme: &'static str,
	/// `(custom property, value)` pairs.
	pub vars: &'static [(&'static str, &'static str)],
}

const DARK_VARS: &[(&str, &str)] = &[
	("--bg-primary", "#0A0A0A"),
	("--bg-secondary", "#141414"),
	("--bg-tertiary", "#1E1E1E"),
	("--bg-hover", "#1E1E1E"),
	("--text-primary", "#F5F5F5"),
	("--text-secondary", "#A0A0B0"),
	("--text-tertiary", "#6E6E80"),
	("--border-subtle", "#2A2A2A"),
	("--border-muted", "#1E1E1E"),
	("--accent-primary", "#A100FF"),
	("--accent-secondary", "#7B2FBE"),
	("--glow-primary", "rgba(161, 0, 255, 0.35)"),
	("--glow-secondary", "rgba(161, 0, 255, 0.15)"),
	("--shadow-sm", "0 1px 3px rgba(0,0,0,0.4), 0 0 8px rgba(161,0,255,0.05)"),
	("--shadow-md", "0 4px 12px rgba(0,0,0,0.5), 0 0 16px rgba(161,0,255,0.08)"),
	("--shadow-lg", "0 10px 25px rgba(0,0,0,0.6), 0 0 24px rgba(161,0,255,0.1)"),
];

const LIGHT_VARS: &[(&str, &str)] = &[
	("--bg-primary", "#ffffff"),
	("--bg-secondary", "#f5f3f7"),
	("--bg-tertiary", "#ece8f0"),
	("--bg-hover", "#f0ecf4"),
	("--text-primary", "#1a1a2e"),
	("--text-secondary", "#6b6b80"),
	("--text-tertiary", "#9090a7"),
	("--border-subtle", "#d6d0de"),
	("--border-muted", "#ece8f0"),
	("--accent-primary", "#A100FF"),
	("--accent-secondary", "#7B2FBE"),
	("--glow-primary", "rgba(161, 0, 255, 0.35)"),
	("--glow-secondary", "rgba(161, 0, 255, 0.15)"),
	("--shadow-sm", "0 1px 3px rgba(0,0,0,0.12), 0 0 6px rgba(161,0,255,0.04)"),
	("--shadow-md", "0 4px 12px rgba(0,0,0,0.2), 0 0 12px rgba(161,0,255,0.06)"),
	("--shadow-lg", "0 10px 25px rgba(0,0,0,0.3), 0 0 20px rgba(161,0,255,0.08)"),
];

impl StyleTokens {
	pub const DARK: Self = Self {
		color_scheme: "dark",
		vars: DARK_VARS,
	};

	pub const LIGHT: Self = Self {
		color_scheme: "light",
		vars: LIGHT_VARS,
	};

	pub fn for_mode(mode: ThemeMode) -> Self {
		match mode {
			ThemeMode::Dark => Self::DARK,
			ThemeMode::Light => Self::LIGHT,
		}
	}

	pub fn get(&self, name: &str) -> Option<&'static str> {
		self.vars.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
	}
}

/// Write the tokens of `mode` onto the document root, along with
/// `data-theme`.
pub fn apply_to_document(mode: ThemeMode) {
	let Some(root) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
	else {
		return;
	};
	let _ = root.set_attribute("data-theme", mode.as_str());

	let Ok(root) = root.dyn_into::<HtmlElement>() else {
		return;
	};
	let tokens = StyleTokens::for_mode(mode);
	let style = root.style();
	let properties = std::iter::once(("color-scheme", tokens.color_scheme)).chain(tokens.vars.iter().copied());
	for (name, value) in properties {
		if let Err(e) = style.set_property(name, value) {
			warn!("fedf-backdrop: could not set {name}: {e:?}");
		}
	}
}
