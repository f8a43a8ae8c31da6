#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	pub link: &'static str,
	pub accent: &'static str,
	pub accent_dark: &'static str,
	pub node_fill: &'static str,
	pub label: &'static str,
	pub label_on_accent: &'static str,
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			link: "#94a3b8",
			accent: "#3b82f6",
			accent_dark: "#2563eb",
			node_fill: "white",
			label: "#374151",
			label_on_accent: "white",
		}
	}
}

/// Tunables for the learning path canvas. Lengths are in world units
/// unless noted.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
	pub node_radius: f64,
	pub button_radius: f64,
	pub button_distance: f64,
	/// Label size in px at scale 1.
	pub base_font_size: f64,
	pub min_font_size: f64,
	pub max_font_size: f64,
	pub hide_delay_ms: u32,
	pub min_scale: f64,
	pub max_scale: f64,
	pub zoom_in: f64,
	pub zoom_out: f64,
	pub link_width: f64,
	pub node_border_width: f64,
	pub arrow_length: f64,
	pub arrow_half_width: f64,
	pub palette: Palette,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			node_radius: 30.0,
			button_radius: 8.0,
			button_distance: 80.0,
			base_font_size: 14.0,
			min_font_size: 8.0,
			max_font_size: 20.0,
			hide_delay_ms: 1000,
			min_scale: 0.1,
			max_scale: 5.0,
			zoom_in: 1.1,
			zoom_out: 0.9,
			link_width: 2.0,
			node_border_width: 2.0,
			arrow_length: 10.0,
			arrow_half_width: 6.0,
			palette: Palette::default(),
		}
	}
}
