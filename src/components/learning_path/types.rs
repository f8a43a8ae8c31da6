use std::f64::consts::FRAC_PI_2;

/// A course in the learning path, placed at a fixed world position.
#[derive(Clone, Debug, PartialEq)]
pub struct Course {
	pub id: String,
	pub label: String,
	pub x: f64,
	pub y: f64,
}

impl Course {
	pub fn new(id: impl Into<String>, label: impl Into<String>, x: f64, y: f64) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			x,
			y,
		}
	}
}

/// Directed prerequisite link, drawn as an arrow from `from` to `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
	pub from: String,
	pub to: String,
}

impl Link {
	pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}
}

/// Radial positions where action buttons appear around the displayed course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonSlot {
	Top,
	TopRight,
	Right,
	BottomRight,
	Bottom,
}

impl ButtonSlot {
	pub fn name(self) -> &'static str {
		match self {
			ButtonSlot::Top => "top",
			ButtonSlot::TopRight => "topRight",
			ButtonSlot::Right => "right",
			ButtonSlot::BottomRight => "bottomRight",
			ButtonSlot::Bottom => "bottom",
		}
	}
}

/// How a slot's angle is obtained.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotRule {
	/// Angle in radians, screen convention (positive y points down).
	Fixed(f64),
	/// Angle of the vector from one named course to another, so the button
	/// lines up with a real branch of the graph.
	Toward { from: String, to: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlotLayout {
	pub rules: Vec<(ButtonSlot, SlotRule)>,
}

impl SlotLayout {
	/// Three fixed slots plus two diagonals that follow the branches leaving
	/// `hub` towards `upper` and `lower`.
	pub fn branching(hub: &str, upper: &str, lower: &str) -> Self {
		Self {
			rules: vec![
				(ButtonSlot::Top, SlotRule::Fixed(-FRAC_PI_2)),
				(
					ButtonSlot::TopRight,
					SlotRule::Toward {
						from: hub.to_string(),
						to: upper.to_string(),
					},
				),
				(ButtonSlot::Right, SlotRule::Fixed(0.0)),
				(
					ButtonSlot::BottomRight,
					SlotRule::Toward {
						from: hub.to_string(),
						to: lower.to_string(),
					},
				),
				(ButtonSlot::Bottom, SlotRule::Fixed(FRAC_PI_2)),
			],
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphData {
	pub courses: Vec<Course>,
	pub links: Vec<Link>,
	pub slots: SlotLayout,
}

impl Default for GraphData {
	fn default() -> Self {
		let courses = vec![
			Course::new("cli", "CLI", -300.0, 0.0),
			Course::new("html", "HTML", -150.0, 0.0),
			Course::new("css", "CSS", 0.0, 0.0),
			Course::new("js", "JavaScript", 150.0, -100.0),
			Course::new("react", "React", 300.0, -100.0),
			Course::new("node", "Node.js", 450.0, -100.0),
			Course::new("express", "Express", 600.0, -100.0),
			Course::new("php", "PHP", 150.0, 100.0),
			Course::new("symfony", "Symfony", 300.0, 100.0),
		];
		let links = [
			("cli", "html"),
			("html", "css"),
			("css", "js"),
			("css", "php"),
			("js", "react"),
			("react", "node"),
			("node", "express"),
			("php", "symfony"),
		]
		.into_iter()
		.map(|(from, to)| Link::new(from, to))
		.collect();

		Self {
			courses,
			links,
			slots: SlotLayout::branching("css", "js", "php"),
		}
	}
}
