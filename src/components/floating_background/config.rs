//! Tunable parameters for the particle field.

use serde::Deserialize;

/// Number of particles when nothing else is configured.
pub const DEFAULT_PARTICLE_COUNT: usize = 80;

/// Particle field configuration.
///
/// Every field is optional when deserializing; missing fields take the
/// values from [`FieldConfig::default`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles kept alive between resizes.
	pub particle_count: usize,
	/// Upper bound of the per-axis speed, in pixels per frame.
	pub max_speed: f64,
	/// Radius of each drawn particle.
	pub dot_radius: f64,
	/// Pairs closer than this are joined by a line.
	pub link_distance: f64,
	/// Line opacity for two coincident particles.
	pub max_link_alpha: f64,
	/// Stroke width of proximity lines.
	pub line_width: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particle_count: DEFAULT_PARTICLE_COUNT,
			max_speed: 0.2,
			dot_radius: 2.5,
			link_distance: 160.0,
			max_link_alpha: 0.18,
			line_width: 1.0,
		}
	}
}

impl FieldConfig {
	/// Opacity of the line joining two particles `distance` apart.
	///
	/// Falls linearly from `max_link_alpha` at zero to nothing at
	/// `link_distance`; returns `None` when no line should be drawn.
	pub fn link_alpha(&self, distance: f64) -> Option<f64> {
		if distance < self.link_distance {
			Some(self.max_link_alpha * (1.0 - distance / self.link_distance))
		} else {
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = FieldConfig::default();
		assert_eq!(config.particle_count, 80);
		assert_eq!(config.dot_radius, 2.5);
		assert_eq!(config.link_distance, 160.0);
	}

	#[test]
	fn test_partial_json_keeps_defaults() {
		let config: FieldConfig = serde_json::from_str(r#"{ "particle_count": 12 }"#).unwrap();
		assert_eq!(config.particle_count, 12);
		assert_eq!(config.max_speed, 0.2);
		assert_eq!(config.max_link_alpha, 0.18);
	}

	#[test]
	fn test_link_alpha_bounds() {
		let config = FieldConfig::default();
		assert_eq!(config.link_alpha(0.0), Some(0.18));
		assert_eq!(config.link_alpha(160.0), None);
		assert_eq!(config.link_alpha(500.0), None);
		let half = config.link_alpha(80.0).unwrap();
		assert!((half - 0.09).abs() < 1e-12);
	}

	#[test]
	fn test_link_alpha_decreases_with_distance() {
		let config = FieldConfig::default();
		let mut previous = f64::INFINITY;
		for step in 0..160 {
			let alpha = config.link_alpha(step as f64).unwrap();
			assert!(alpha < previous);
			assert!(alpha > 0.0);
			previous = alpha;
		}
	}
}
