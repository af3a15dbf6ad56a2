//! Light/dark theme state shared through Leptos context.
//!
//! The chosen mode is loaded from local storage when the provider mounts,
//! written back on every change, and applied to the document root as a set of
//! CSS custom properties.

mod error;
mod mode;
mod provider;
pub mod storage;
pub mod tokens;
mod toggle;

pub use error::ThemeError;
pub use mode::ThemeMode;
pub use provider::{ThemeContext, ThemeProvider, use_theme};
pub use storage::{LocalStore, PreferenceStore, THEME_STORAGE_KEY};
pub use tokens::StyleTokens;
pub use toggle::ThemeToggle;
