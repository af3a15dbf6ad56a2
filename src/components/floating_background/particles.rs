//! Drifting particles that bounce off the surface edges.

use fastrand::Rng;

use super::config::FieldConfig;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
}

impl Particle {
	/// Advance one frame, reflecting off the edges of a `width` x `height`
	/// surface. A particle that crosses an edge is put back on it and its
	/// velocity on that axis is inverted.
	pub fn step(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
			self.x = self.x.clamp(0.0, width);
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
			self.y = self.y.clamp(0.0, height);
		}
	}
}

/// The particles of one surface size. Replaced wholesale on resize.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleSet {
	/// Scatter `config.particle_count` particles uniformly over the surface,
	/// each with a per-axis speed in `±config.max_speed`.
	pub fn scatter(config: &FieldConfig, width: f64, height: f64, rng: &mut Rng) -> Self {
		let width = width.max(0.0);
		let height = height.max(0.0);
		let spread = 2.0 * config.max_speed;

		let particles = (0..config.particle_count)
			.map(|_| Particle {
				x: rng.f64() * width,
				y: rng.f64() * height,
				vx: (rng.f64() - 0.5) * spread,
				vy: (rng.f64() - 0.5) * spread,
			})
			.collect();

		Self {
			particles,
			width,
			height,
		}
	}

	/// Build a set from explicit particles.
	pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
		Self {
			particles,
			width,
			height,
		}
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Advance every particle by one frame.
	pub fn update(&mut self) {
		for p in &mut self.particles {
			p.step(self.width, self.height);
		}
	}

	/// Visit every unordered pair closer than `max_distance`.
	///
	/// Checks all N(N-1)/2 pairs. Fine for the default 80 particles; a grid
	/// would be needed for counts in the thousands.
	pub fn visit_close_pairs(&self, max_distance: f64, mut f: impl FnMut(&Particle, &Particle, f64)) {
		for (i, a) in self.particles.iter().enumerate() {
			for b in &self.particles[i + 1..] {
				let (dx, dy) = (a.x - b.x, a.y - b.y);
				let dist = (dx * dx + dy * dy).sqrt();
				if dist < max_distance {
					f(a, b, dist);
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(count: usize) -> FieldConfig {
		FieldConfig {
			particle_count: count,
			..FieldConfig::default()
		}
	}

	fn in_bounds(set: &ParticleSet) -> bool {
		let (w, h) = set.size();
		set.particles
			.iter()
			.all(|p| (0.0..=w).contains(&p.x) && (0.0..=h).contains(&p.y))
	}

	#[test]
	fn test_scatter_count() {
		let mut rng = Rng::with_seed(7);
		for count in [0, 1, 2, 80, 250] {
			let set = ParticleSet::scatter(&config(count), 800.0, 600.0, &mut rng);
			assert_eq!(set.len(), count);
		}
	}

	#[test]
	fn test_scatter_ranges() {
		let mut rng = Rng::with_seed(42);
		let set = ParticleSet::scatter(&config(500), 800.0, 600.0, &mut rng);
		for p in &set.particles {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!(p.vx.abs() <= 0.2);
			assert!(p.vy.abs() <= 0.2);
		}
	}

	#[test]
	fn test_scatter_on_empty_surface() {
		let mut rng = Rng::with_seed(3);
		let set = ParticleSet::scatter(&config(10), 0.0, 0.0, &mut rng);
		assert_eq!(set.len(), 10);
		assert!(set.particles.iter().all(|p| p.x == 0.0 && p.y == 0.0));
	}

	#[test]
	fn test_bounce_on_both_sides() {
		let mut set = ParticleSet::from_particles(
			vec![
				Particle { x: 0.0, y: 300.0, vx: -0.1, vy: 0.0 },
				Particle { x: 799.95, y: 300.0, vx: 0.1, vy: 0.0 },
			],
			800.0,
			600.0,
		);
		set.update();

		assert_eq!(set.particles[0].vx, 0.1);
		assert_eq!(set.particles[1].vx, -0.1);
		assert!(in_bounds(&set));
	}

	#[test]
	fn test_no_bounce_inside() {
		let mut set = ParticleSet::from_particles(
			vec![Particle { x: 799.0, y: 300.0, vx: 0.1, vy: 0.1 }],
			800.0,
			600.0,
		);
		set.update();

		let p = &set.particles[0];
		assert_eq!(p.vx, 0.1);
		assert_eq!(p.vy, 0.1);
		assert!((p.x - 799.1).abs() < 1e-9);
	}

	#[test]
	fn test_axes_bounce_independently() {
		let mut p = Particle { x: 400.0, y: 599.9, vx: 0.2, vy: 0.2 };
		p.step(800.0, 600.0);
		assert_eq!(p.vx, 0.2);
		assert_eq!(p.vy, -0.2);
		assert_eq!(p.y, 600.0);

		let mut corner = Particle { x: 0.05, y: 0.05, vx: -0.1, vy: -0.1 };
		corner.step(800.0, 600.0);
		assert_eq!((corner.vx, corner.vy), (0.1, 0.1));
		assert_eq!((corner.x, corner.y), (0.0, 0.0));
	}

	#[test]
	fn test_single_flip_per_crossing() {
		let mut p = Particle { x: 0.05, y: 10.0, vx: -0.1, vy: 0.0 };
		let mut flips = 0;
		let mut last_sign = p.vx.signum();
		for _ in 0..50 {
			p.step(800.0, 600.0);
			if p.vx.signum() != last_sign {
				flips += 1;
				last_sign = p.vx.signum();
			}
		}
		assert_eq!(flips, 1);
		assert!(p.vx > 0.0);
	}

	#[test]
	fn test_stays_in_bounds_over_many_frames() {
		let mut rng = Rng::with_seed(99);
		let fast = FieldConfig {
			particle_count: 60,
			max_speed: 25.0,
			..FieldConfig::default()
		};
		let mut set = ParticleSet::scatter(&fast, 320.0, 240.0, &mut rng);
		for _ in 0..2_000 {
			set.update();
			assert!(in_bounds(&set));
		}
		assert_eq!(set.len(), 60);
	}

	#[test]
	fn test_close_pairs() {
		let set = ParticleSet::from_particles(
			vec![
				Particle { x: 0.0, y: 0.0, vx: 0.0, vy: 0.0 },
				Particle { x: 30.0, y: 40.0, vx: 0.0, vy: 0.0 },
				Particle { x: 500.0, y: 500.0, vx: 0.0, vy: 0.0 },
			],
			800.0,
			600.0,
		);
		let mut pairs = Vec::new();
		set.visit_close_pairs(160.0, |a, b, d| pairs.push((a.x, b.x, d)));
		assert_eq!(pairs, vec![(0.0, 30.0, 50.0)]);
	}

	#[test]
	fn test_close_pairs_counts_each_pair_once() {
		let particles = (0..5)
			.map(|i| Particle { x: i as f64, y: 0.0, vx: 0.0, vy: 0.0 })
			.collect();
		let set = ParticleSet::from_particles(particles, 100.0, 100.0);
		let mut count = 0;
		set.visit_close_pairs(160.0, |_, _, _| count += 1);
		assert_eq!(count, 10);
	}
}
