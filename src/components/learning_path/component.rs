use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::config::GraphConfig;
use super::render;
use super::reveal::{HideTimer, TimerHandle};
use super::state::LearningPathState;
use super::types::GraphData;

struct Surface {
	state: LearningPathState,
	ctx: CanvasRenderingContext2d,
}

impl Surface {
	fn redraw(&self) {
		render::paint(&render::render(&self.state), &self.ctx);
	}
}

type SharedSurface = Rc<RefCell<Option<Surface>>>;
type ResizeCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `setTimeout`-backed hide timer. The callback only holds a weak reference,
/// so a timer outliving the component is a no-op.
struct WindowTimers {
	surface: Weak<RefCell<Option<Surface>>>,
}

impl HideTimer for WindowTimers {
	fn schedule(&mut self, delay_ms: u32) -> Option<TimerHandle> {
		let window = web_sys::window()?;
		let own_handle = Rc::new(Cell::new(None::<TimerHandle>));
		let (surface, own_handle_cb) = (self.surface.clone(), own_handle.clone());
		let callback = Closure::once_into_js(move || {
			let (Some(surface), Some(handle)) = (surface.upgrade(), own_handle_cb.get()) else {
				return;
			};
			if let Some(ref mut s) = *surface.borrow_mut() {
				if s.state.hide_elapsed(handle) {
					s.redraw();
				}
			}
		});
		match window.set_timeout_with_callback_and_timeout_and_arguments_0(
			callback.unchecked_ref::<js_sys::Function>(),
			delay_ms as i32,
		) {
			Ok(id) => {
				let handle = TimerHandle(id);
				own_handle.set(Some(handle));
				Some(handle)
			}
			Err(err) => {
				warn!("setTimeout failed: {err:?}");
				None
			}
		}
	}

	fn cancel(&mut self, handle: TimerHandle) {
		if let Some(window) = web_sys::window() {
			window.clear_timeout_with_handle(handle.0);
		}
	}
}

/// Drops the current state, clearing its pending hide timer first.
fn retire_surface(surface: &SharedSurface) {
	let mut timers = WindowTimers {
		surface: Rc::downgrade(surface),
	};
	let old = surface.borrow_mut().take();
	if let Some(mut old) = old {
		old.state.reveal.cancel(&mut timers);
	}
}

/// Unmount: detaches the resize listener before its closure is dropped.
fn teardown(surface: &SharedSurface, resize_cb: &ResizeCallback) {
	let cb = resize_cb.borrow_mut().take();
	if let (Some(cb), Some(window)) = (cb, web_sys::window()) {
		let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
	}
	retire_surface(surface);
}

fn surface_size(window: &Window, canvas: &HtmlCanvasElement, fullscreen: bool) -> (f64, f64) {
	let inner = |v: Result<JsValue, JsValue>, fallback: f64| {
		v.ok().and_then(|v| v.as_f64()).unwrap_or(fallback)
	};
	if fullscreen {
		return (
			inner(window.inner_width(), 800.0),
			inner(window.inner_height(), 600.0),
		);
	}
	let parent = canvas.parent_element();
	(
		parent
			.as_ref()
			.map(|p| p.client_width() as f64)
			.unwrap_or(800.0),
		parent
			.as_ref()
			.map(|p| p.client_height() as f64)
			.unwrap_or(600.0),
	)
}

/// Sizes the backing store for the device pixel ratio and resets the base
/// transform, so drawing code works in CSS pixels.
fn fit_canvas(
	window: &Window,
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	w: f64,
	h: f64,
) {
	let dpr = window.device_pixel_ratio().max(1.0);
	canvas.set_width((w * dpr) as u32);
	canvas.set_height((h * dpr) as u32);
	let style = web_sys::HtmlElement::style(canvas);
	let _ = style.set_property("width", &format!("{w}px"));
	let _ = style.set_property("height", &format!("{h}px"));
	let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

fn set_cursor(canvas_ref: NodeRef<leptos::html::Canvas>, cursor: &str) {
	if let Some(canvas) = canvas_ref.get() {
		let canvas: HtmlCanvasElement = canvas.into();
		let _ = web_sys::HtmlElement::style(&canvas).set_property("cursor", cursor);
	}
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Pan/zoom canvas of the learning path. Hovering a course reveals its
/// action buttons, which linger briefly after the pointer moves away.
#[component]
pub fn LearningPathGraph(
	#[prop(into, default = Signal::stored(GraphData::default()))] data: Signal<GraphData>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let surface: SharedSurface = Rc::new(RefCell::new(None));
	let resize_cb: ResizeCallback = Rc::new(RefCell::new(None));
	let (surface_init, resize_cb_init) = (surface.clone(), resize_cb.clone());

	let owned = StoredValue::new_local((surface.clone(), resize_cb));
	on_cleanup(move || {
		owned.try_with_value(|(surface, resize_cb)| teardown(surface, resize_cb));
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("no window, learning path canvas disabled");
			return;
		};
		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					warn!("2d context has an unexpected type");
					return;
				}
			},
			_ => {
				warn!("canvas 2d context unavailable");
				return;
			}
		};

		let (w, h) = match (width, height) {
			(Some(w), Some(h)) if !fullscreen => (w, h),
			_ => {
				let (pw, ph) = surface_size(&window, &canvas, fullscreen);
				(width.unwrap_or(pw), height.unwrap_or(ph))
			}
		};
		fit_canvas(&window, &canvas, &ctx, w, h);

		let data = data.get();
		info!(
			"learning path mounted: {} courses, {} links, {w}x{h}",
			data.courses.len(),
			data.links.len()
		);
		retire_surface(&surface_init);
		let next = Surface {
			state: LearningPathState::new(&data, GraphConfig::default(), w, h),
			ctx,
		};
		next.redraw();
		*surface_init.borrow_mut() = Some(next);

		if fullscreen && resize_cb_init.borrow().is_none() {
			let (surface_resize, canvas_resize) = (surface_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = surface_size(&win, &canvas_resize, true);
				if let Some(ref mut s) = *surface_resize.borrow_mut() {
					fit_canvas(&win, &canvas_resize, &s.ctx, nw, nh);
					s.state.resize(nw, nh);
					s.redraw();
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});

	let surface_md = surface.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if ev.button() != 0 {
			return;
		}
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *surface_md.borrow_mut() {
			s.state.pointer_down(x, y);
		}
		set_cursor(canvas_ref, "grabbing");
	};

	let surface_mm = surface.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		let mut timers = WindowTimers {
			surface: Rc::downgrade(&surface_mm),
		};
		if let Some(ref mut s) = *surface_mm.borrow_mut() {
			s.state.pointer_move(x, y, &mut timers);
			s.redraw();
		}
	};

	let surface_mu = surface.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *surface_mu.borrow_mut() {
			s.state.pointer_up();
		}
		set_cursor(canvas_ref, "grab");
	};

	let surface_ml = surface.clone();
	let on_mouseleave = move |_: MouseEvent| {
		let mut timers = WindowTimers {
			surface: Rc::downgrade(&surface_ml),
		};
		if let Some(ref mut s) = *surface_ml.borrow_mut() {
			s.state.pointer_leave(&mut timers);
			s.redraw();
		}
		set_cursor(canvas_ref, "grab");
	};

	let surface_wh = surface.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some(ref mut s) = *surface_wh.borrow_mut() {
			s.state.wheel(ev.delta_y());
			s.redraw();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="learning-path-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
