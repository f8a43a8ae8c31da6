use log::debug;

use super::config::GraphConfig;
use super::hit_test;
use super::reveal::{HideTimer, RevealMachine, TimerHandle};
use super::scene::{NodeIdx, Scene};
use super::types::{ButtonSlot, GraphData};
use super::viewport::Viewport;

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	/// Pointer position minus the offset at the moment the drag began.
	pub anchor: (f64, f64),
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<NodeIdx>,
	pub button: Option<ButtonSlot>,
}

pub struct LearningPathState {
	pub scene: Scene,
	pub config: GraphConfig,
	pub viewport: Viewport,
	pub drag: DragState,
	pub hover: HoverState,
	pub reveal: RevealMachine,
	pub width: f64,
	pub height: f64,
}

impl LearningPathState {
	pub fn new(data: &GraphData, config: GraphConfig, width: f64, height: f64) -> Self {
		Self {
			scene: Scene::new(data),
			reveal: RevealMachine::new(config.hide_delay_ms),
			config,
			viewport: Viewport::centered(width, height),
			drag: DragState::default(),
			hover: HoverState::default(),
			width,
			height,
		}
	}

	pub fn displayed(&self) -> Option<NodeIdx> {
		self.reveal.displayed()
	}

	#[cfg(test)]
	pub fn displayed_id(&self) -> Option<&str> {
		self.displayed()
			.and_then(|idx| self.scene.courses.get(idx))
			.map(|course| course.id.as_str())
	}

	pub fn is_highlighted(&self, idx: NodeIdx) -> bool {
		self.hover.node == Some(idx) || self.displayed() == Some(idx)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<NodeIdx> {
		hit_test::node_at(&self.scene, &self.viewport, &self.config, sx, sy)
	}

	pub fn button_at_position(&self, sx: f64, sy: f64) -> Option<ButtonSlot> {
		let displayed = self.displayed()?;
		hit_test::button_at(&self.scene, &self.viewport, &self.config, displayed, sx, sy)
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) {
		self.drag.active = true;
		self.drag.anchor = self.viewport.pan_anchor(x, y);
	}

	pub fn pointer_move(&mut self, x: f64, y: f64, timers: &mut impl HideTimer) {
		if self.drag.active {
			self.viewport.apply_pan(x, y, self.drag.anchor);
			return;
		}

		let found = self.node_at_position(x, y);
		match found {
			Some(idx) => {
				self.hover.node = Some(idx);
				self.reveal.enter(idx, timers);
			}
			None => self.reveal.leave(timers),
		}

		if self.displayed().is_some() {
			self.hover.button = self.button_at_position(x, y);
		}
	}

	pub fn pointer_up(&mut self) {
		self.drag.active = false;
	}

	pub fn pointer_leave(&mut self, timers: &mut impl HideTimer) {
		self.drag.active = false;
		self.reveal.leave(timers);
	}

	pub fn wheel(&mut self, delta_y: f64) {
		self.viewport.apply_zoom(delta_y, &self.config);
		debug!("zoom: scale {:.3}", self.viewport.scale);
	}

	/// Hide timer fired. Returns whether anything changed.
	pub fn hide_elapsed(&mut self, handle: TimerHandle) -> bool {
		if !self.reveal.hide_elapsed(handle) {
			return false;
		}
		self.hover = HoverState::default();
		true
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
