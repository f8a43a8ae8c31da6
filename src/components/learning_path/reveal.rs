use log::{debug, warn};

use super::scene::NodeIdx;

/// Opaque id of a scheduled one-shot timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle(pub i32);

/// One-shot timer service backing the delayed hide.
pub trait HideTimer {
	/// Returns `None` when the host could not schedule the timer.
	fn schedule(&mut self, delay_ms: u32) -> Option<TimerHandle>;
	fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Reveal {
	#[default]
	Idle,
	/// Buttons of this course are visible.
	Displayed(NodeIdx),
	/// The pointer left; the buttons stay until `timer` fires.
	PendingHide { node: NodeIdx, timer: TimerHandle },
}

impl Reveal {
	pub fn node(&self) -> Option<NodeIdx> {
		match *self {
			Reveal::Idle => None,
			Reveal::Displayed(node) | Reveal::PendingHide { node, .. } => Some(node),
		}
	}

	fn timer(&self) -> Option<TimerHandle> {
		match *self {
			Reveal::PendingHide { timer, .. } => Some(timer),
			_ => None,
		}
	}
}

/// Owns which course shows its action buttons, and the single pending hide
/// timer that may retract them.
#[derive(Clone, Debug, Default)]
pub struct RevealMachine {
	state: Reveal,
	hide_delay_ms: u32,
}

impl RevealMachine {
	pub fn new(hide_delay_ms: u32) -> Self {
		Self {
			state: Reveal::Idle,
			hide_delay_ms,
		}
	}

	#[cfg(test)]
	pub fn state(&self) -> Reveal {
		self.state
	}

	pub fn displayed(&self) -> Option<NodeIdx> {
		self.state.node()
	}

	#[cfg(test)]
	pub fn is_hide_pending(&self) -> bool {
		self.state.timer().is_some()
	}

	/// Pointer is over `node`: cancels a pending hide and shows its buttons.
	pub fn enter(&mut self, node: NodeIdx, timers: &mut impl HideTimer) {
		if let Some(timer) = self.state.timer() {
			timers.cancel(timer);
		}
		if self.state != Reveal::Displayed(node) {
			debug!("reveal: displaying course #{node}");
		}
		self.state = Reveal::Displayed(node);
	}

	/// Pointer is over no course, or left the canvas. Arms the hide once;
	/// an already pending hide keeps its original deadline.
	pub fn leave(&mut self, timers: &mut impl HideTimer) {
		if let Reveal::Displayed(_) = self.state {
			self.rearm_hide(timers);
		}
	}

	/// Cancel-then-schedule as one step, so at most one timer is ever live.
	pub fn rearm_hide(&mut self, timers: &mut impl HideTimer) {
		let Some(node) = self.state.node() else {
			return;
		};
		if let Some(timer) = self.state.timer() {
			timers.cancel(timer);
		}
		match timers.schedule(self.hide_delay_ms) {
			Some(timer) => {
				debug!("reveal: hiding course #{node} in {}ms", self.hide_delay_ms);
				self.state = Reveal::PendingHide { node, timer };
			}
			None => {
				warn!("reveal: could not schedule hide timer, keeping buttons visible");
				self.state = Reveal::Displayed(node);
			}
		}
	}

	/// Timer callback. Returns whether the buttons were hidden; a handle that
	/// is no longer the pending one is ignored.
	pub fn hide_elapsed(&mut self, handle: TimerHandle) -> bool {
		match self.state {
			Reveal::PendingHide { node, timer } if timer == handle => {
				debug!("reveal: hid course #{node}");
				self.state = Reveal::Idle;
				true
			}
			_ => false,
		}
	}

	/// Drops any pending timer, e.g. on unmount.
	pub fn cancel(&mut self, timers: &mut impl HideTimer) {
		if let Some(timer) = self.state.timer() {
			timers.cancel(timer);
		}
		self.state = Reveal::Idle;
	}
}

/// Manual clock timers for driving the machine in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualTimers {
	pub now_ms: u64,
	next_id: i32,
	pending: Vec<(TimerHandle, u64)>,
	pub scheduled: usize,
}

#[cfg(test)]
impl ManualTimers {
	pub fn live(&self) -> usize {
		self.pending.len()
	}

	/// Moves the clock forward and returns the handles that fired, in order.
	pub fn advance(&mut self, ms: u64) -> Vec<TimerHandle> {
		self.now_ms += ms;
		let now = self.now_ms;
		let (due, rest): (Vec<_>, Vec<_>) =
			self.pending.drain(..).partition(|&(_, at)| at <= now);
		self.pending = rest;
		due.into_iter().map(|(handle, _)| handle).collect()
	}
}

#[cfg(test)]
impl HideTimer for ManualTimers {
	fn schedule(&mut self, delay_ms: u32) -> Option<TimerHandle> {
		self.next_id += 1;
		self.scheduled += 1;
		let handle = TimerHandle(self.next_id);
		self.pending.push((handle, self.now_ms + delay_ms as u64));
		Some(handle)
	}

	fn cancel(&mut self, handle: TimerHandle) {
		self.pending.retain(|&(h, _)| h != handle);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct FailingTimers;

	impl HideTimer for FailingTimers {
		fn schedule(&mut self, _: u32) -> Option<TimerHandle> {
			None
		}
		fn cancel(&mut self, _: TimerHandle) {}
	}

	#[test]
	fn leave_in_idle_does_nothing() {
		let mut timers = ManualTimers::default();
		let mut machine = RevealMachine::new(1000);
		machine.leave(&mut timers);
		assert_eq!(machine.state(), Reveal::Idle);
		assert_eq!(timers.scheduled, 0);
	}

	#[test]
	fn leaving_twice_arms_one_timer() {
		let mut timers = ManualTimers::default();
		let mut machine = RevealMachine::new(1000);
		machine.enter(2, &mut timers);
		machine.leave(&mut timers);
		machine.leave(&mut timers);
		assert_eq!(timers.scheduled, 1);
		assert_eq!(timers.live(), 1);

		let fired = timers.advance(1000);
		assert_eq!(fired.len(), 1);
		assert!(machine.hide_elapsed(fired[0]));
		assert_eq!(machine.state(), Reveal::Idle);
	}

	#[test]
	fn reentering_cancels_the_hide() {
		let mut timers = ManualTimers::default();
		let mut machine = RevealMachine::new(1000);
		machine.enter(2, &mut timers);
		machine.leave(&mut timers);
		timers.advance(500);
		machine.enter(2, &mut timers);
		assert_eq!(machine.state(), Reveal::Displayed(2));
		assert_eq!(timers.live(), 0);
		assert!(timers.advance(2000).is_empty());
	}

	#[test]
	fn entering_another_course_switches_display() {
		let mut timers = ManualTimers::default();
		let mut machine = RevealMachine::new(1000);
		machine.enter(2, &mut timers);
		machine.leave(&mut timers);
		machine.enter(5, &mut timers);
		assert_eq!(machine.displayed(), Some(5));
		assert_eq!(timers.live(), 0);
	}

	#[test]
	fn rearm_replaces_the_pending_timer() {
		let mut timers = ManualTimers::default();
		let mut machine = RevealMachine::new(1000);
		machine.enter(1, &mut timers);
		machine.leave(&mut timers);
		let Reveal::PendingHide { timer: first, .. } = machine.state() else {
			panic!("expected pending hide");
		};
		timers.advance(600);
		machine.rearm_hide(&mut timers);
		assert_eq!(timers.live(), 1);
		assert!(!machine.hide_elapsed(first));
		assert!(timers.advance(600).is_empty());
		let fired = timers.advance(400);
		assert_eq!(fired.len(), 1);
		assert!(machine.hide_elapsed(fired[0]));
	}

	#[test]
	fn stale_fire_is_ignored() {
		let mut timers = ManualTimers::default();
		let mut machine = RevealMachine::new(1000);
		machine.enter(1, &mut timers);
		assert!(!machine.hide_elapsed(TimerHandle(42)));
		assert_eq!(machine.state(), Reveal::Displayed(1));
	}

	#[test]
	fn failed_schedule_keeps_buttons() {
		let mut machine = RevealMachine::new(1000);
		machine.enter(1, &mut FailingTimers);
		machine.leave(&mut FailingTimers);
		assert_eq!(machine.state(), Reveal::Displayed(1));
	}

	#[test]
	fn cancel_clears_everything() {
		let mut timers = ManualTimers::default();
		let mut machine = RevealMachine::new(1000);
		machine.enter(1, &mut timers);
		machine.leave(&mut timers);
		machine.cancel(&mut timers);
		assert_eq!(machine.state(), Reveal::Idle);
		assert_eq!(timers.live(), 0);
	}
}
