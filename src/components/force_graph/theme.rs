//! Colors for the force graph: categorical node palette and stroke styles.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
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

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Twenty categorical colors, the classic d3 category-20 scheme, indexed by
/// node group modulo the palette length.
const CATEGORY20: &[Color] = &[
	Color::rgb(0x1f, 0x77, 0xb4),
	Color::rgb(0xae, 0xc7, 0xe8),
	Color::rgb(0xff, 0x7f, 0x0e),
	Color::rgb(0xff, 0xbb, 0x78),
	Color::rgb(0x2c, 0xa0, 0x2c),
	Color::rgb(0x98, 0xdf, 0x8a),
	Color::rgb(0xd6, 0x27, 0x28),
	Color::rgb(0xff, 0x98, 0x96),
	Color::rgb(0x94, 0x67, 0xbd),
	Color::rgb(0xc5, 0xb0, 0xd5),
	Color::rgb(0x8c, 0x56, 0x4b),
	Color::rgb(0xc4, 0x9c, 0x94),
	Color::rgb(0xe3, 0x77, 0xc2),
	Color::rgb(0xf7, 0xb6, 0xd2),
	Color::rgb(0x7f, 0x7f, 0x7f),
	Color::rgb(0xc7, 0xc7, 0xc7),
	Color::rgb(0xbc, 0xbd, 0x22),
	Color::rgb(0xdb, 0xdb, 0x8d),
	Color::rgb(0x17, 0xbe, 0xcf),
	Color::rgb(0x9e, 0xda, 0xe5),
];

/// Categorical color for a node group.
pub fn group_color(group: u32) -> Color {
	CATEGORY20[group as usize % CATEGORY20.len()]
}

/// Stroke and fill styles for everything that is not group-colored.
#[derive(Clone, Debug)]
pub struct Theme {
	pub background: Color,
	pub link: Color,
	pub link_highlight: Color,
	pub node_border: Color,
	pub label: Color,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::rgb(0xff, 0xff, 0xff),
			link: Color::rgba(0x99, 0x99, 0x99, 0.6),
			link_highlight: Color::rgba(0xff, 0x6d, 0x00, 0.9),
			node_border: Color::rgb(0xff, 0xff, 0xff),
			label: Color::rgb(0x21, 0x21, 0x21),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn group_color_wraps_around_the_palette() {
		assert_eq!(group_color(0).to_css(), group_color(20).to_css());
		assert_ne!(group_color(0).to_css(), group_color(1).to_css());
	}

	#[test]
	fn css_formatting() {
		assert_eq!(Color::rgb(0x1f, 0x77, 0xb4).to_css(), "#1f77b4");
		assert_eq!(
			Color::rgba(153, 153, 153, 0.6).to_css(),
			"rgba(153, 153, 153, 0.6)"
		);
	}

	#[test]
	fn lerp_endpoints() {
		let a = Color::rgb(0, 0, 0);
		let b = Color::rgb(255, 255, 255);
		assert_eq!(a.lerp(b, 0.0).to_css(), "#000000");
		assert_eq!(a.lerp(b, 1.0).to_css(), "#ffffff");
	}
}
