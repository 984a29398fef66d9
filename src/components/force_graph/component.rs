//! Leptos component wrapping the force graph canvas.
//!
//! Creates the canvas element, owns the [`GraphSession`] behind an
//! `Rc<RefCell<_>>`, and wires mouse events to the interaction controller.
//! A `requestAnimationFrame` loop advances the simulation and redraws while
//! anything is in motion; one step, one frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::graph::NodeId;
use super::render;
use super::state::GraphSession;
use super::types::GraphDocument;

/// Pointer movement below this is a click, not a drag.
const CLICK_SLOP: f64 = 4.0;

/// Renders an interactive force-directed graph on a canvas element.
///
/// Pass the parsed input document via the reactive `data` signal; a change
/// replaces the graph atomically. The component sizes itself to its parent
/// container by default; set `fullscreen = true` to fill the viewport and
/// resize with the window. Explicit `width`/`height` override automatic
/// sizing.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphDocument>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let session: Rc<RefCell<Option<GraphSession>>> = Rc::new(RefCell::new(None));
	let press: Rc<RefCell<Option<(f64, f64, NodeId)>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (session_init, animate_init, resize_cb_init) =
		(session.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();
		let doc = data.get();

		{
			// A live session adopts the new document in place; the loop and
			// listeners below are already wired.
			let mut slot = session_init.borrow_mut();
			if let Some(live) = slot.as_mut() {
				if let Err(err) = live.replace_document(&doc) {
					log::error!("force-viz: replacement document rejected: {err}");
				}
				return;
			}
		}

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		match GraphSession::new(&doc, w, h) {
			Ok(s) => *session_init.borrow_mut() = Some(s),
			Err(err) => {
				// Fatal: the visualization cannot start from a bad document.
				log::error!("force-viz: cannot start: {err}");
				return;
			}
		}

		if fullscreen {
			let (session_resize, canvas_resize) = (session_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *session_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (session_anim, animate_inner) = (session_init.clone(), animate_init.clone());
		let mut last_frame = js_sys::Date::now();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let now = js_sys::Date::now();
			let dt = ((now - last_frame) / 1000.0).clamp(0.001, 0.1);
			last_frame = now;

			if let Some(ref mut s) = *session_anim.borrow_mut() {
				if s.tick(dt) {
					render::render(s, &ctx);
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let (session_md, press_md) = (session.clone(), press.clone());
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *session_md.borrow_mut() {
			if let Some(id) = s.node_at_position(x, y) {
				s.begin_drag(id);
				*press_md.borrow_mut() = Some((x, y, id));
			}
		}
	};

	let session_mm = session.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *session_mm.borrow_mut() {
			if s.drag.is_dragging() {
				s.drag_to(x, y);
			} else {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}
		}
	};

	let (session_mu, press_mu) = (session.clone(), press.clone());
	let on_mouseup = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *session_mu.borrow_mut() {
			if let Some((px, py, id)) = press_mu.borrow_mut().take() {
				let moved = ((x - px).powi(2) + (y - py).powi(2)).sqrt();
				if moved < CLICK_SLOP {
					if let Some(url) = s.node_url(id) {
						let _ = web_sys::window().unwrap().open_with_url(url);
					}
				}
			}
			s.end_drag();
		}
	};

	let (session_ml, press_ml) = (session.clone(), press.clone());
	let on_mouseleave = move |_: MouseEvent| {
		press_ml.borrow_mut().take();
		if let Some(ref mut s) = *session_ml.borrow_mut() {
			s.end_drag();
			s.set_hover(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		/>
	}
}
