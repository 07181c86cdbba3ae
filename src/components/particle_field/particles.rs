//! Ambient sparkle particles drifting behind the card.

use rand::Rng;

use super::theme::{Color, FieldStyle};

/// A single drifting particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub color: Color,
	pub opacity: f64,
}

impl Particle {
	/// Advance one frame and reflect off the bounds.
	///
	/// Reflection flips the velocity instead of clamping, so a particle can sit
	/// up to one step outside the bounds for a single frame.
	fn step(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x > width || self.x < 0.0 {
			self.vx = -self.vx;
		}
		if self.y > height || self.y < 0.0 {
			self.vy = -self.vy;
		}
	}
}

/// Owns the fixed particle population and the bounds it bounces within.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	pub fn new<R: Rng>(style: &FieldStyle, width: f64, height: f64, rng: &mut R) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle {
				x: rng.gen_range(0.0..width.max(f64::MIN_POSITIVE)),
				y: rng.gen_range(0.0..height.max(f64::MIN_POSITIVE)),
				vx: rng.gen_range(-style.speed..style.speed),
				vy: rng.gen_range(-style.speed..style.speed),
				radius: rng.gen_range(style.radius_min..style.radius_max),
				color: style.palette.get(rng.gen_range(0..style.palette.len())),
				opacity: rng.gen_range(style.opacity_min..style.opacity_max),
			})
			.collect();

		Self {
			particles,
			width,
			height,
		}
	}

	/// Advance every particle by one frame.
	pub fn step(&mut self) {
		let (w, h) = (self.width, self.height);
		for p in &mut self.particles {
			p.step(w, h);
		}
	}

	/// Update the bounds. Existing positions are left where they are.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn field(width: f64, height: f64) -> ParticleField {
		let mut rng = StdRng::seed_from_u64(14);
		ParticleField::new(&FieldStyle::default(), width, height, &mut rng)
	}

	fn lone(x: f64, y: f64, vx: f64, vy: f64) -> ParticleField {
		let mut f = field(100.0, 100.0);
		f.particles.truncate(1);
		let p = &mut f.particles[0];
		(p.x, p.y, p.vx, p.vy) = (x, y, vx, vy);
		f
	}

	#[test]
	fn initial_population_respects_style_ranges() {
		let style = FieldStyle::default();
		let f = field(800.0, 600.0);

		assert_eq!(f.particles.len(), 120);
		for p in &f.particles {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((1.0..5.0).contains(&p.radius));
			assert!((-1.0..1.0).contains(&p.vx));
			assert!((-1.0..1.0).contains(&p.vy));
			assert!((0.3..0.8).contains(&p.opacity));
			assert!(style.palette.colors.contains(&p.color));
		}
	}

	#[test]
	fn positions_stay_within_one_step_of_bounds() {
		let mut f = field(320.0, 240.0);
		for _ in 0..5_000 {
			f.step();
			for p in &f.particles {
				assert!(p.x >= -1.0 && p.x <= 321.0, "x escaped: {}", p.x);
				assert!(p.y >= -1.0 && p.y <= 241.0, "y escaped: {}", p.y);
			}
		}
	}

	#[test]
	fn crossing_right_edge_negates_vx_exactly() {
		let mut f = lone(99.5, 50.0, 0.75, 0.25);
		f.step();

		let p = &f.particles[0];
		assert_eq!(p.x, 100.25);
		assert_eq!(p.vx, -0.75);
		assert_eq!(p.vy, 0.25);
	}

	#[test]
	fn crossing_top_edge_negates_vy_exactly() {
		let mut f = lone(50.0, 0.25, 0.1, -0.5);
		f.step();

		let p = &f.particles[0];
		assert!(p.y < 0.0);
		assert_eq!(p.vy, 0.5);
		assert_eq!(p.vx, 0.1);

		f.step();
		assert!(f.particles[0].y >= 0.0);
	}

	#[test]
	fn resize_keeps_positions() {
		let mut f = field(800.0, 600.0);
		let before: Vec<(f64, f64)> = f.particles.iter().map(|p| (p.x, p.y)).collect();

		f.resize(200.0, 100.0);

		let after: Vec<(f64, f64)> = f.particles.iter().map(|p| (p.x, p.y)).collect();
		assert_eq!(before, after);
		assert_eq!((f.width(), f.height()), (200.0, 100.0));
	}
}
