//! Visual theming for the particle field.
//!
//! Provides the color type, the fixed sparkle palette and the population style.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// The fixed sparkle palette particles draw their color from.
#[derive(Clone, Debug)]
pub struct SparklePalette {
	pub colors: Vec<Color>,
}

impl SparklePalette {
	/// Rose and blush pinks (default)
	pub fn rose() -> Self {
		Self {
			colors: vec![
				Color::rgb(255, 107, 157), // Hot rose
				Color::rgb(255, 143, 163), // Flamingo
				Color::rgb(255, 179, 198), // Carnation
				Color::rgb(255, 194, 209), // Cotton candy
				Color::rgb(255, 229, 236), // Lavender blush
				Color::rgb(232, 180, 184), // Dusty pink
				Color::rgb(255, 182, 193), // Light pink
			],
		}
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// Population and motion parameters for the particle field.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Number of particles, fixed for the lifetime of the field
	pub count: usize,
	/// Radius range, `[min, max)`
	pub radius_min: f64,
	pub radius_max: f64,
	/// Maximum absolute speed per axis, in pixels per frame
	pub speed: f64,
	/// Opacity range, `[min, max)`
	pub opacity_min: f64,
	pub opacity_max: f64,
	/// Overlay painted every frame; low alpha leaves fading trails
	pub trail: Color,
	pub palette: SparklePalette,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			count: 120,
			radius_min: 1.0,
			radius_max: 5.0,
			speed: 1.0,
			opacity_min: 0.3,
			opacity_max: 0.8,
			trail: Color::rgba(255, 107, 157, 0.03),
			palette: SparklePalette::rose(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output_switches_on_alpha() {
		assert_eq!(Color::rgb(255, 107, 157).to_css(), "#FF6B9D");
		assert_eq!(
			Color::rgb(255, 107, 157).with_alpha(0.03).to_css(),
			"rgba(255, 107, 157, 0.03)"
		);
	}

	#[test]
	fn default_style_matches_card_look() {
		let style = FieldStyle::default();
		assert_eq!(style.count, 120);
		assert_eq!(style.palette.len(), 7);
		assert_eq!(style.palette.get(7), style.palette.get(0));
	}
}
