//! fedf-backdrop: Animated particle background and theme provider for the FEDF front-end.
//!
//! This crate provides WASM-based Leptos components: a full-viewport canvas of
//! drifting, interconnected particles, and a light/dark theme context that
//! persists the chosen mode and applies it as CSS custom properties.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::floating_background::{FieldConfig, FloatingBackground};
pub use components::theme_provider::{
	ThemeContext, ThemeMode, ThemeProvider, ThemeToggle, use_theme,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("fedf-backdrop: logging initialized");
}

/// Load the particle field configuration from a script element with
/// id="backdrop-config".
/// Expected format: JSON object with any subset of the [`FieldConfig`] fields.
pub fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("backdrop-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!(
				"fedf-backdrop: loaded config with {} particles",
				config.particle_count
			);
			Some(config)
		}
		Err(e) => {
			warn!("fedf-backdrop: failed to parse backdrop config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Mounts the theme provider, the particle background and a theme toggle.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="FEDF" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ThemeProvider>
			<FloatingBackground config=config />
			<div class="backdrop-overlay">
				<ThemeToggle />
			</div>
		</ThemeProvider>
	}
}
