//! UI components.

pub mod floating_background;
pub mod theme_provider;
