//! Drawing the particle field onto a 2D surface.
//!
//! Each frame is drawn in two passes: the particles as filled dots, then the
//! proximity lines between every pair closer than the link distance.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::FieldConfig;
use super::particles::ParticleSet;
use super::style::{Color, FieldPalette};

/// The drawing primitives the particle field needs.
pub trait Surface {
	/// Erase a `width` x `height` area starting at the origin.
	fn clear(&mut self, width: f64, height: f64);
	/// Fill a circle centred on (`x`, `y`).
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Stroke a straight line between two points.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Renders one complete frame of the field.
pub fn render<S: Surface + ?Sized>(
	surface: &mut S,
	particles: &ParticleSet,
	config: &FieldConfig,
	palette: &FieldPalette,
) {
	let (width, height) = particles.size();
	surface.clear(width, height);

	for p in &particles.particles {
		surface.fill_circle(p.x, p.y, config.dot_radius, palette.dot);
	}

	particles.visit_close_pairs(config.link_distance, |a, b, dist| {
		if let Some(alpha) = config.link_alpha(dist) {
			surface.stroke_line(
				(a.x, a.y),
				(b.x, b.y),
				config.line_width,
				palette.line.with_alpha(alpha),
			);
		}
	});
}
