use super::config::GraphConfig;

/// World-to-screen transform: `screen = world * scale + offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
	pub scale: f64,
	pub offset_x: f64,
	pub offset_y: f64,
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			scale: 1.0,
			offset_x: 0.0,
			offset_y: 0.0,
		}
	}
}

impl Viewport {
	pub fn centered(width: f64, height: f64) -> Self {
		Self {
			scale: 1.0,
			offset_x: width / 2.0,
			offset_y: height / 2.0,
		}
	}

	pub fn to_screen(&self, wx: f64, wy: f64) -> (f64, f64) {
		(
			wx * self.scale + self.offset_x,
			wy * self.scale + self.offset_y,
		)
	}

	/// Anchor to hand to [`Viewport::apply_pan`] for a drag starting at the
	/// given pointer position.
	pub fn pan_anchor(&self, px: f64, py: f64) -> (f64, f64) {
		(px - self.offset_x, py - self.offset_y)
	}

	/// Absolute: the offset ends up at `pointer - anchor` whatever it was.
	pub fn apply_pan(&mut self, px: f64, py: f64, anchor: (f64, f64)) {
		self.offset_x = px - anchor.0;
		self.offset_y = py - anchor.1;
	}

	/// Zooms around the world origin. The offset is left alone.
	pub fn apply_zoom(&mut self, delta_y: f64, config: &GraphConfig) {
		let factor = if delta_y > 0.0 {
			config.zoom_out
		} else {
			config.zoom_in
		};
		self.scale = (self.scale * factor).clamp(config.min_scale, config.max_scale);
	}

	/// Text shrinks slower than the geometry so labels stay readable.
	pub fn font_size(&self, base: f64, config: &GraphConfig) -> f64 {
		(base / self.scale.sqrt()).clamp(config.min_font_size, config.max_font_size)
	}

	/// World-space width that renders as `base` screen pixels.
	pub fn line_width(&self, base: f64) -> f64 {
		base / self.scale
	}
}
