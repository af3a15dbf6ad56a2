//! Particle field lifecycle: mount, per-frame update, resize and teardown.
//!
//! The field is either idle (no surface) or animating. Frames and resizes
//! that arrive while idle are ignored, so a late callback after teardown can
//! never draw or regenerate anything.

use fastrand::Rng;
use log::debug;

use super::config::FieldConfig;
use super::particles::ParticleSet;
use super::render::{self, Surface};
use super::style::FieldPalette;
use crate::components::theme_provider::ThemeMode;

/// Whether the field currently owns a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
	Idle,
	Animating,
}

/// A particle set bound to the surface it is drawn on.
pub struct ParticleField<S> {
	config: FieldConfig,
	rng: Rng,
	particles: ParticleSet,
	surface: Option<S>,
}

impl<S: Surface> ParticleField<S> {
	pub fn new(config: FieldConfig, rng: Rng) -> Self {
		Self {
			config,
			rng,
			particles: ParticleSet::default(),
			surface: None,
		}
	}

	pub fn state(&self) -> FieldState {
		if self.surface.is_some() {
			FieldState::Animating
		} else {
			FieldState::Idle
		}
	}

	pub fn particles(&self) -> &ParticleSet {
		&self.particles
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Attach a surface of the given size and scatter a fresh particle set.
	pub fn mount(&mut self, surface: S, width: f64, height: f64) {
		self.surface = Some(surface);
		self.scatter(width, height);
	}

	/// Replace the particle set for a new surface size. Ignored while idle.
	pub fn resize(&mut self, width: f64, height: f64) {
		if self.surface.is_none() {
			return;
		}
		self.scatter(width, height);
	}

	/// Advance and draw one frame in the colors of `mode`.
	///
	/// Returns `false` when the field is idle and nothing was drawn.
	pub fn frame(&mut self, mode: ThemeMode) -> bool {
		let Some(surface) = self.surface.as_mut() else {
			return false;
		};
		self.particles.update();
		render::render(
			surface,
			&self.particles,
			&self.config,
			&FieldPalette::for_mode(mode),
		);
		true
	}

	/// Detach the surface and return it. The field is idle afterwards.
	pub fn teardown(&mut self) -> Option<S> {
		debug!("fedf-backdrop: particle field torn down");
		self.surface.take()
	}

	fn scatter(&mut self, width: f64, height: f64) {
		self.particles = ParticleSet::scatter(&self.config, width, height, &mut self.rng);
		debug!(
			"fedf-backdrop: scattered {} particles over {}x{}",
			self.particles.len(),
			width,
			height
		);
	}
}
