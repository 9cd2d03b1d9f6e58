use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::state::StoryGraphState;
use super::types::{NodeDraft, NodeId, NodePatch, StoryNode};
use super::viewport::PERSPECTIVE_RELAX_DELAY_MS;

/// Fire a callback once after `delay_ms`. Pending callbacks are never
/// cancelled; see DESIGN.md on stacked perspective-decay steps.
pub(crate) fn schedule_once(f: impl FnOnce() + 'static, delay_ms: i32) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let cb = Closure::once_into_js(f);
	let _ = window
		.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
}

/// Copyable imperative handle to one canvas instance. The host calls the
/// operation set; the canvas component fills in the state on mount. Every
/// operation is a no-op until then.
///
/// Selection is mirrored into a signal so the host can render the detail
/// overlay without reaching into canvas internals. The state cell lives in
/// local arena storage, which keeps the handle itself plain data.
#[derive(Clone, Copy)]
pub struct StoryGraphController {
	state: StoredValue<Rc<RefCell<Option<StoryGraphState>>>, LocalStorage>,
	selected: RwSignal<Option<StoryNode>>,
}

impl Default for StoryGraphController {
	fn default() -> Self {
		Self::new()
	}
}

impl StoryGraphController {
	pub fn new() -> Self {
		Self {
			state: StoredValue::new_local(Rc::new(RefCell::new(None))),
			selected: RwSignal::new(None),
		}
	}

	/// The currently selected story, if any. Cleared when the overlay
	/// closes.
	pub fn selected_story(&self) -> RwSignal<Option<StoryNode>> {
		self.selected
	}

	pub(crate) fn install(&self, state: StoryGraphState) {
		self.state.with_value(|cell| *cell.borrow_mut() = Some(state));
		self.sync_selection();
	}

	pub(crate) fn with<R>(&self, f: impl FnOnce(&mut StoryGraphState) -> R) -> Option<R> {
		self.state.with_value(|cell| cell.borrow_mut().as_mut().map(f))
	}

	/// Republish the canvas selection to the host-facing signal. Called
	/// after every operation or pointer event that can change it.
	pub(crate) fn sync_selection(&self) {
		let node = self.with(|s| s.selected_node().cloned()).flatten();
		self.selected.set(node);
	}

	/// Reference-triggered spotlight: predecessor highlight, focus, and the
	/// detail overlay. No-op for unknown ids.
	pub fn highlight_node_from_story(&self, id: NodeId) {
		self.with(|s| s.highlight_from_story(id));
		self.sync_selection();
	}

	pub fn zoom_in(&self) {
		self.with(|s| s.zoom_in());
	}

	/// Zoom out and schedule the one-shot perspective relax step. Rapid
	/// calls stack their steps rather than superseding each other.
	pub fn zoom_out(&self) {
		self.with(|s| s.zoom_out());
		let controller = *self;
		schedule_once(
			move || {
				controller.with(|s| s.relax_perspective());
			},
			PERSPECTIVE_RELAX_DELAY_MS,
		);
	}

	pub fn reset_map(&self) {
		self.with(|s| s.reset_map());
		self.sync_selection();
	}

	/// Drop the highlight set and close the detail overlay, as a background
	/// click would.
	pub fn clear_highlights(&self) {
		self.with(|s| s.clear_highlights());
		self.sync_selection();
	}

	/// Recolor a node. No authorship check happens here; the host decides
	/// who may recolor.
	pub fn change_node_color(&self, id: NodeId, color: &str) {
		self.with(|s| s.set_color(id, color));
		self.sync_selection();
	}

	/// Insert a node and return its id, or `None` before the canvas has
	/// mounted. The id is valid immediately, within the same turn.
	pub fn add_node(&self, draft: NodeDraft) -> Option<NodeId> {
		self.with(|s| s.add_node(draft))
	}

	pub fn remove_node(&self, id: NodeId) {
		self.with(|s| s.remove_node(id));
		self.sync_selection();
	}

	pub fn update_node(&self, id: NodeId, patch: NodePatch) {
		self.with(|s| s.update_node(id, patch));
		self.sync_selection();
	}

	/// Stories sharing an edge with `id`, for the overlay's connected list.
	pub fn connected_stories(&self, id: NodeId) -> Vec<StoryNode> {
		self.with(|s| s.connected_nodes(id).into_iter().cloned().collect())
			.unwrap_or_default()
	}
}
