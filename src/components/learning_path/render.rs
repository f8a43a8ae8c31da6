use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::LearningPathState;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	Clear {
		width: f64,
		height: f64,
	},
	Save,
	Restore,
	/// Translate by `(x, y)`, then scale by `k`.
	Transform {
		x: f64,
		y: f64,
		k: f64,
	},
	Line {
		from: (f64, f64),
		to: (f64, f64),
		color: &'static str,
		width: f64,
	},
	Triangle {
		points: [(f64, f64); 3],
		fill: &'static str,
	},
	Circle {
		center: (f64, f64),
		radius: f64,
		fill: &'static str,
		stroke: Option<(&'static str, f64)>,
	},
	/// Centred on `at` both ways.
	Text {
		text: String,
		at: (f64, f64),
		size: f64,
		color: &'static str,
	},
}

/// Full frame for the current state. Edges go first, then courses, then the
/// action buttons, so strokes never cover fills.
pub fn render(state: &LearningPathState) -> Vec<DrawCommand> {
	let mut out = vec![
		DrawCommand::Clear {
			width: state.width,
			height: state.height,
		},
		DrawCommand::Save,
		DrawCommand::Transform {
			x: state.viewport.offset_x,
			y: state.viewport.offset_y,
			k: state.viewport.scale,
		},
	];
	draw_edges(state, &mut out);
	draw_nodes(state, &mut out);
	draw_buttons(state, &mut out);
	out.push(DrawCommand::Restore);
	out
}

fn draw_edges(state: &LearningPathState, out: &mut Vec<DrawCommand>) {
	let (config, vp) = (&state.config, &state.viewport);
	let color = config.palette.link;
	let width = vp.line_width(config.link_width);
	let (len, half) = (
		vp.line_width(config.arrow_length),
		vp.line_width(config.arrow_half_width),
	);

	for &(from, to) in &state.scene.edges {
		let (Some(a), Some(b)) = (state.scene.courses.get(from), state.scene.courses.get(to))
		else {
			continue;
		};
		out.push(DrawCommand::Line {
			from: (a.x, a.y),
			to: (b.x, b.y),
			color,
			width,
		});

		let angle = (b.y - a.y).atan2(b.x - a.x);
		let (ux, uy) = (angle.cos(), angle.sin());
		let (px, py) = (-uy * half, ux * half);
		let (tip_x, tip_y) = (b.x - ux * config.node_radius, b.y - uy * config.node_radius);
		let (back_x, back_y) = (tip_x - ux * len, tip_y - uy * len);
		out.push(DrawCommand::Triangle {
			points: [
				(tip_x, tip_y),
				(back_x - px, back_y - py),
				(back_x + px, back_y + py),
			],
			fill: color,
		});
	}
}

fn draw_nodes(state: &LearningPathState, out: &mut Vec<DrawCommand>) {
	let (config, vp) = (&state.config, &state.viewport);
	let palette = &config.palette;
	let border = vp.line_width(config.node_border_width);
	let size = vp.font_size(config.base_font_size, config);

	for (idx, course) in state.scene.courses.iter().enumerate() {
		let lit = state.is_highlighted(idx);
		out.push(DrawCommand::Circle {
			center: (course.x, course.y),
			radius: config.node_radius,
			fill: if lit { palette.accent } else { palette.node_fill },
			stroke: Some((palette.accent, border)),
		});
		out.push(DrawCommand::Text {
			text: course.label.clone(),
			at: (course.x, course.y),
			size,
			color: if lit {
				palette.label_on_accent
			} else {
				palette.label
			},
		});
	}
}

fn draw_buttons(state: &LearningPathState, out: &mut Vec<DrawCommand>) {
	let Some(course) = state.displayed().and_then(|idx| state.scene.courses.get(idx)) else {
		return;
	};
	let (config, vp) = (&state.config, &state.viewport);
	let palette = &config.palette;
	let size = vp.font_size(config.base_font_size * 1.2, config);

	for &(slot, angle) in &state.scene.slot_angles {
		let center = (
			course.x + angle.cos() * config.button_distance,
			course.y + angle.sin() * config.button_distance,
		);
		let fill = if state.hover.button == Some(slot) {
			palette.accent_dark
		} else {
			palette.accent
		};
		out.push(DrawCommand::Circle {
			center,
			radius: config.button_radius,
			fill,
			stroke: None,
		});
		out.push(DrawCommand::Text {
			text: "+".to_string(),
			at: center,
			size,
			color: palette.label_on_accent,
		});
	}
}

pub fn paint(commands: &[DrawCommand], ctx: &CanvasRenderingContext2d) {
	for command in commands {
		match command {
			DrawCommand::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
			DrawCommand::Save => ctx.save(),
			DrawCommand::Restore => ctx.restore(),
			DrawCommand::Transform { x, y, k } => {
				let _ = ctx.translate(*x, *y);
				let _ = ctx.scale(*k, *k);
			}
			DrawCommand::Line {
				from,
				to,
				color,
				width,
			} => {
				ctx.begin_path();
				ctx.move_to(from.0, from.1);
				ctx.line_to(to.0, to.1);
				ctx.set_stroke_style_str(color);
				ctx.set_line_width(*width);
				ctx.stroke();
			}
			DrawCommand::Triangle { points, fill } => {
				ctx.begin_path();
				ctx.move_to(points[0].0, points[0].1);
				ctx.line_to(points[1].0, points[1].1);
				ctx.line_to(points[2].0, points[2].1);
				ctx.close_path();
				ctx.set_fill_style_str(fill);
				ctx.fill();
			}
			DrawCommand::Circle {
				center,
				radius,
				fill,
				stroke,
			} => {
				ctx.begin_path();
				let _ = ctx.arc(center.0, center.1, *radius, 0.0, 2.0 * PI);
				ctx.set_fill_style_str(fill);
				ctx.fill();
				if let Some((color, width)) = stroke {
					ctx.set_stroke_style_str(color);
					ctx.set_line_width(*width);
					ctx.stroke();
				}
			}
			DrawCommand::Text {
				text,
				at,
				size,
				color,
			} => {
				ctx.set_font(&format!("{size}px sans-serif"));
				ctx.set_text_align("center");
				ctx.set_text_baseline("middle");
				ctx.set_fill_style_str(color);
				let _ = ctx.fill_text(text, at.0, at.1);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::learning_path::config::GraphConfig;
	use crate::components::learning_path::reveal::ManualTimers;
	use crate::components::learning_path::types::{ButtonSlot, Course, GraphData, Link, SlotLayout};
	use crate::components::learning_path::viewport::Viewport;

	fn state_for(data: &GraphData) -> LearningPathState {
		let mut state = LearningPathState::new(data, GraphConfig::default(), 800.0, 600.0);
		state.viewport = Viewport::default();
		state
	}

	fn kind(command: &DrawCommand) -> &'static str {
		match command {
			DrawCommand::Clear { .. } => "clear",
			DrawCommand::Save => "save",
			DrawCommand::Restore => "restore",
			DrawCommand::Transform { .. } => "transform",
			DrawCommand::Line { .. } => "line",
			DrawCommand::Triangle { .. } => "triangle",
			DrawCommand::Circle { .. } => "circle",
			DrawCommand::Text { .. } => "text",
		}
	}

	#[test]
	fn frame_starts_clean_and_transformed() {
		let mut state = state_for(&GraphData::default());
		state.viewport = Viewport {
			scale: 2.0,
			offset_x: 10.0,
			offset_y: 20.0,
		};
		let frame = render(&state);
		assert_eq!(
			frame[..3],
			[
				DrawCommand::Clear {
					width: 800.0,
					height: 600.0
				},
				DrawCommand::Save,
				DrawCommand::Transform {
					x: 10.0,
					y: 20.0,
					k: 2.0
				},
			]
		);
		assert_eq!(frame.last(), Some(&DrawCommand::Restore));
	}

	#[test]
	fn edges_precede_nodes_precede_buttons() {
		let mut timers = ManualTimers::default();
		let mut state = state_for(&GraphData::default());
		let css = state.scene.index_of("css").unwrap();
		state.pointer_move(0.0, 0.0, &mut timers);
		assert_eq!(state.displayed(), Some(css));

		let frame = render(&state);
		let kinds: Vec<_> = frame.iter().map(kind).collect();
		let last_edge = kinds.iter().rposition(|k| *k == "triangle").unwrap();
		let first_circle = kinds.iter().position(|k| *k == "circle").unwrap();
		assert!(last_edge < first_circle);

		let circles = kinds.iter().filter(|k| **k == "circle").count();
		assert_eq!(circles, 9 + 5);
		let lines = kinds.iter().filter(|k| **k == "line").count();
		assert_eq!(lines, 8);

		let plus_signs = frame
			.iter()
			.filter(|c| matches!(c, DrawCommand::Text { text, .. } if text == "+"))
			.count();
		assert_eq!(plus_signs, 5);
	}

	#[test]
	fn arrowhead_touches_target_boundary() {
		let data = GraphData {
			courses: vec![
				Course::new("a", "A", 0.0, 0.0),
				Course::new("b", "B", 200.0, 0.0),
			],
			links: vec![Link::new("a", "b")],
			slots: SlotLayout { rules: vec![] },
		};
		let state = state_for(&data);
		let frame = render(&state);
		let points = frame
			.iter()
			.find_map(|c| match c {
				DrawCommand::Triangle { points, .. } => Some(*points),
				_ => None,
			})
			.unwrap();
		let eps = 1e-9;
		assert!((points[0].0 - 170.0).abs() < eps && points[0].1.abs() < eps);
		assert!((points[1].0 - 160.0).abs() < eps && (points[1].1 + 6.0).abs() < eps);
		assert!((points[2].0 - 160.0).abs() < eps && (points[2].1 - 6.0).abs() < eps);
	}

	#[test]
	fn dangling_edge_does_not_hide_others() {
		let data = GraphData {
			courses: vec![
				Course::new("a", "A", 0.0, 0.0),
				Course::new("b", "B", 150.0, -100.0),
			],
			links: vec![Link::new("a", "missing"), Link::new("a", "b")],
			slots: SlotLayout { rules: vec![] },
		};
		let frame = render(&state_for(&data));
		let lines: Vec<_> = frame
			.iter()
			.filter_map(|c| match c {
				DrawCommand::Line { from, to, .. } => Some((*from, *to)),
				_ => None,
			})
			.collect();
		assert_eq!(lines, vec![((0.0, 0.0), (150.0, -100.0))]);
	}

	#[test]
	fn highlight_and_hovered_button_colours() {
		let mut timers = ManualTimers::default();
		let mut state = state_for(&GraphData::default());
		let palette = state.config.palette.clone();
		state.pointer_move(0.0, 0.0, &mut timers);
		state.pointer_move(80.0, 0.0, &mut timers);
		assert_eq!(state.hover.button, Some(ButtonSlot::Right));

		let frame = render(&state);
		let fills: Vec<_> = frame
			.iter()
			.filter_map(|c| match c {
				DrawCommand::Circle { center, fill, .. } => Some((*center, *fill)),
				_ => None,
			})
			.collect();
		// css is the only lit course.
		let lit: Vec<_> = fills[..9].iter().filter(|(_, f)| *f == palette.accent).collect();
		assert_eq!(lit, vec![&((0.0, 0.0), palette.accent)]);
		// Buttons in slot order; Right is third.
		assert_eq!(fills[9 + 2].1, palette.accent_dark);
		assert_eq!(
			fills[9..].iter().filter(|(_, f)| *f == palette.accent_dark).count(),
			1
		);
	}

	#[test]
	fn strokes_thin_out_when_zoomed() {
		let mut state = state_for(&GraphData::default());
		state.viewport.scale = 4.0;
		let frame = render(&state);
		let line_width = frame.iter().find_map(|c| match c {
			DrawCommand::Line { width, .. } => Some(*width),
			_ => None,
		});
		assert_eq!(line_width, Some(0.5));
	}
}
