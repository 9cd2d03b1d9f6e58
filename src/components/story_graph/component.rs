use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use super::controller::StoryGraphController;
use super::render;
use super::state::StoryGraphState;
use super::types::GraphData;

/// Key held to steer the canvas tilt with the pointer.
const TILT_MODIFIER: &str = "Control";

#[component]
pub fn StoryGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	controller: StoryGraphController,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let keydown_cb: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));
	let keyup_cb: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));
	let (animate_init, resize_cb_init, keydown_init, keyup_init) = (
		animate.clone(),
		resize_cb.clone(),
		keydown_cb.clone(),
		keyup_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let measure = {
			let canvas = canvas.clone();
			move || {
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
			}
		};
		let (w, h) = measure();
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		controller.install(StoryGraphState::new(&data.get(), w, h));

		{
			let canvas = canvas.clone();
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let (nw, nh) = measure();
				canvas.set_width(nw as u32);
				canvas.set_height(nh as u32);
				controller.with(|s| s.resize(nw, nh));
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		// The tilt modifier is tracked on the window so holding it works
		// wherever the pointer happens to be.
		*keydown_init.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			if ev.key() == TILT_MODIFIER {
				controller.with(|s| s.set_tilt_modifier(true));
			}
		}));
		if let Some(ref cb) = *keydown_init.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}
		*keyup_init.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			if ev.key() == TILT_MODIFIER {
				controller.with(|s| s.set_tilt_modifier(false));
			}
		}));
		if let Some(ref cb) = *keyup_init.borrow() {
			let _ = window.add_event_listener_with_callback("keyup", cb.as_ref().unchecked_ref());
		}

		let (canvas_anim, animate_inner) = (canvas.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			controller.with(|s| {
				render::render(s, &ctx);
				// Tilt and depth are CSS 3D on the canvas element itself;
				// pan and zoom are applied inside the 2d context.
				let t = s.focus.transform;
				let css = format!(
					"perspective({}px) rotateX({}deg) rotateY({}deg)",
					1000.0 - t.perspective * 20.0,
					t.perspective + t.rotate_x,
					t.rotate_y,
				);
				let _ = web_sys::HtmlElement::style(&canvas_anim).set_property("transform", &css);
			});
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

	let canvas_position = move |ev: &MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		)
	};

	let on_mousedown = move |ev: MouseEvent| {
		let (x, y) = canvas_position(&ev);
		controller.with(|s| s.pointer_down(x, y));
	};

	let on_mousemove = move |ev: MouseEvent| {
		let (x, y) = canvas_position(&ev);
		controller.with(|s| s.pointer_move(x, y));
	};

	let on_mouseup = move |ev: MouseEvent| {
		let (x, y) = canvas_position(&ev);
		controller.with(|s| s.pointer_up(x, y));
		controller.sync_selection();
	};

	let on_mouseleave = move |_: MouseEvent| {
		controller.with(|s| s.pointer_leave());
		controller.sync_selection();
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="story-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		/>
	}
}
