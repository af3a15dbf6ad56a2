use leptos::prelude::*;

use super::provider::use_theme;

/// Button switching between light and dark mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let theme = use_theme();
	let label = move || format!("Switch to {} mode", theme.mode().toggled());

	view! {
		<button
			class="theme-toggle"
			type="button"
			title=label
			aria-label=label
			on:click=move |_| theme.toggle()
		>
			{move || if theme.mode().is_dark() { "☀" } else { "☾" }}
		</button>
	}
}
