//! Decorative particle background.
//!
//! Renders a full-viewport canvas behind the page with:
//! - Particles drifting at constant velocity and bouncing off the edges
//! - Faint lines between particles closer than the link distance
//! - Dot and line colors that follow the active theme mode
//!
//! The particle set is regenerated whenever the window is resized.
//!
//! # Example
//!
//! ```ignore
//! use fedf_backdrop::{FloatingBackground, ThemeProvider};
//!
//! view! {
//!     <ThemeProvider>
//!         <FloatingBackground particle_count=120 />
//!     </ThemeProvider>
//! }
//! ```

mod component;
pub mod config;
mod field;
mod frame_loop;
mod particles;
mod render;
pub mod style;

pub use component::FloatingBackground;
pub use config::{DEFAULT_PARTICLE_COUNT, FieldConfig};
pub use field::{FieldState, ParticleField};
pub use particles::{Particle, ParticleSet};
pub use render::Surface;
