//! Leptos context exposing the active theme mode.

use leptos::prelude::*;
use log::info;

use super::mode::ThemeMode;
use super::storage::{self, LocalStore};
use super::tokens;

/// Handle to the process-wide theme mode.
///
/// Obtained with [`use_theme`] below a [`ThemeProvider`]. The handle is
/// `Copy`; every copy reads and writes the same value.
#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
	mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
	pub fn new(initial: ThemeMode) -> Self {
		Self {
			mode: RwSignal::new(initial),
		}
	}

	/// Current mode, tracked by the reactive system.
	pub fn mode(&self) -> ThemeMode {
		self.mode.get()
	}

	/// Current mode without subscribing the caller.
	pub fn mode_untracked(&self) -> ThemeMode {
		self.mode.get_untracked()
	}

	pub fn set(&self, mode: ThemeMode) {
		self.mode.set(mode);
	}

	/// Switch to the other mode.
	pub fn toggle(&self) {
		self.mode.update(|m| *m = m.toggled());
	}
}

/// Provides a [`ThemeContext`] to its children.
///
/// The initial mode is read from local storage. Every change is written back
/// and applied to the document root as CSS custom properties.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
	let store = LocalStore::default();
	let theme = ThemeContext::new(storage::load_mode(&store));
	info!("fedf-backdrop: theme mode {}", theme.mode_untracked());
	provide_context(theme);

	Effect::new(move |_| {
		let mode = theme.mode();
		storage::save_mode(&store, mode);
		tokens::apply_to_document(mode);
	});

	children()
}

/// The theme context of the nearest [`ThemeProvider`].
///
/// # Panics
///
/// Panics when called outside a [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
	use_context::<ThemeContext>().expect("use_theme must be called within a ThemeProvider")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_context_toggle_and_set() {
		let owner = Owner::new();
		owner.with(|| {
			let theme = ThemeContext::new(ThemeMode::Dark);
			assert_eq!(theme.mode_untracked(), ThemeMode::Dark);

			theme.toggle();
			assert_eq!(theme.mode_untracked(), ThemeMode::Light);

			let copy = theme;
			copy.toggle();
			assert_eq!(theme.mode_untracked(), ThemeMode::Dark);

			theme.set(ThemeMode::Light);
			assert_eq!(copy.mode_untracked(), ThemeMode::Light);
		});
	}

	#[test]
	fn test_use_theme_finds_provided_context() {
		let owner = Owner::new();
		owner.with(|| {
			provide_context(ThemeContext::new(ThemeMode::Light));
			assert_eq!(use_theme().mode_untracked(), ThemeMode::Light);
		});
	}

	#[test]
	#[should_panic(expected = "within a ThemeProvider")]
	fn test_use_theme_without_provider_panics() {
		let owner = Owner::new();
		owner.with(|| {
			use_theme();
		});
	}
}
