use std::collections::HashSet;

use log::debug;

use super::highlight::{click_highlight, reference_highlight};
use super::interaction::PointerState;
use super::router::{self, RoutedEdge};
use super::store::NodeStore;
use super::types::{Connection, GraphData, NodeDraft, NodeId, NodePatch, StoryNode};
use super::viewport::FocusController;

/// The one canvas instance: node store, edge list, transform, highlight
/// set, selection, and the pointer state machine. Every mutation is a
/// synchronous reaction to a pointer/keyboard event or a host operation.
pub struct StoryGraphState {
	pub store: NodeStore,
	pub connections: Vec<Connection>,
	pub focus: FocusController,
	pub pointer: PointerState,
	pub highlight: HashSet<NodeId>,
	pub selected: Option<NodeId>,
	tilt_held: bool,
	pub width: f64,
	pub height: f64,
}

impl StoryGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let store = NodeStore::new(data.nodes.clone());
		let mut focus = FocusController::default();
		focus.capture_snapshot(store.nodes());
		Self {
			store,
			connections: data.connections.clone(),
			focus,
			pointer: PointerState::Idle,
			highlight: HashSet::new(),
			selected: None,
			tilt_held: false,
			width,
			height,
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Invert the render transform: screen = offset + center + scale·(p − center).
	pub fn screen_to_canvas(&self, sx: f64, sy: f64) -> (f64, f64) {
		let t = &self.focus.transform;
		let (cx, cy) = (self.width / 2.0, self.height / 2.0);
		(
			cx + (sx - t.offset.0 - cx) / t.scale,
			cy + (sy - t.offset.1 - cy) / t.scale,
		)
	}

	/// Node position as rendered right now: store position plus the live
	/// delta of an in-flight drag. The store itself only changes on commit.
	pub fn effective_position(&self, node: &StoryNode) -> (f64, f64) {
		if self.pointer.dragged_node() == Some(node.id)
			&& let Some((dx, dy)) = self.pointer.gesture_delta()
		{
			let scale = self.focus.transform.scale;
			return (node.x + dx / scale, node.y + dy / scale);
		}
		(node.x, node.y)
	}

	/// Pan offset as rendered right now, including an in-flight pan gesture.
	pub fn render_offset(&self) -> (f64, f64) {
		let offset = self.focus.transform.offset;
		if matches!(self.pointer, PointerState::PanningCanvas { .. })
			&& let Some((dx, dy)) = self.pointer.gesture_delta()
		{
			return (offset.0 + dx, offset.1 + dy);
		}
		offset
	}

	/// Topmost node under a screen position, if any.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<NodeId> {
		let (gx, gy) = self.screen_to_canvas(sx, sy);
		let mut found = None;
		for node in self.store.nodes() {
			let (nx, ny) = self.effective_position(node);
			let (dx, dy) = (nx - gx, ny - gy);
			if (dx * dx + dy * dy).sqrt() < node.size / 2.0 {
				found = Some(node.id);
			}
		}
		found
	}

	/// Edge geometry from committed node positions; recomputed per call.
	pub fn routed_edges(&self) -> Vec<RoutedEdge> {
		router::route_all(&self.store, &self.connections)
	}

	// --- pointer events -------------------------------------------------

	/// Hit-testing here is the mutual exclusion: a pointer-down lands on
	/// exactly one of node-drag or canvas-pan, never both.
	pub fn pointer_down(&mut self, x: f64, y: f64) {
		self.pointer = match self.node_at_position(x, y) {
			Some(id) => PointerState::begin_node_drag(id, (x, y)),
			None => PointerState::begin_pan((x, y)),
		};
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		if self.tilt_held {
			self.focus.apply_tilt((x, y), (self.width, self.height));
		}
		match self.pointer {
			PointerState::DraggingNode { .. } | PointerState::PanningCanvas { .. } => {
				self.pointer.track((x, y));
			}
			PointerState::Idle | PointerState::HoveringNode(_) => {
				self.pointer = match self.node_at_position(x, y) {
					Some(id) => PointerState::HoveringNode(id),
					None => PointerState::Idle,
				};
			}
		}
	}

	pub fn pointer_up(&mut self, x: f64, y: f64) {
		match self.pointer {
			PointerState::DraggingNode { id, moved, .. } => {
				if moved {
					self.commit_drag(id);
				} else {
					self.select_node(id);
				}
				// End the gesture before hit-testing, so the committed
				// position is not offset by the just-finished drag again.
				self.pointer = PointerState::Idle;
				self.pointer = match self.node_at_position(x, y) {
					Some(hit) => PointerState::HoveringNode(hit),
					None => PointerState::Idle,
				};
			}
			PointerState::PanningCanvas { moved, .. } => {
				if let Some((dx, dy)) = self.pointer.gesture_delta() {
					let offset = &mut self.focus.transform.offset;
					offset.0 += dx;
					offset.1 += dy;
				}
				if !moved && !self.highlight.is_empty() {
					self.clear_highlights();
				}
				self.pointer = PointerState::Idle;
			}
			PointerState::Idle | PointerState::HoveringNode(_) => {}
		}
	}

	/// The pointer left the canvas: end any gesture, keeping its delta, and
	/// drop the hover.
	pub fn pointer_leave(&mut self) {
		match self.pointer {
			PointerState::DraggingNode { id, moved: true, .. } => self.commit_drag(id),
			PointerState::PanningCanvas { moved: true, .. } => {
				if let Some((dx, dy)) = self.pointer.gesture_delta() {
					let offset = &mut self.focus.transform.offset;
					offset.0 += dx;
					offset.1 += dy;
				}
			}
			_ => {}
		}
		self.pointer = PointerState::Idle;
	}

	pub fn set_tilt_modifier(&mut self, held: bool) {
		self.tilt_held = held;
		if !held {
			self.focus.clear_tilt();
		}
	}

	fn commit_drag(&mut self, id: NodeId) {
		let Some((dx, dy)) = self.pointer.gesture_delta() else {
			return;
		};
		let scale = self.focus.transform.scale;
		let Some(node) = self.store.get(id) else {
			return;
		};
		let patch = NodePatch {
			x: Some(node.x + dx / scale),
			y: Some(node.y + dy / scale),
			..NodePatch::default()
		};
		self.store.update_node(id, patch);
	}

	// --- selection & highlight ------------------------------------------

	/// Click path: select, open the detail overlay, highlight the full
	/// undirected neighborhood.
	fn select_node(&mut self, id: NodeId) {
		self.selected = Some(id);
		self.highlight = click_highlight(id, &self.connections);
	}

	/// Background click while highlighted: drop the highlight set and close
	/// the overlay.
	pub fn clear_highlights(&mut self) {
		self.highlight.clear();
		self.selected = None;
	}

	/// Reference path, called from outside the canvas: select, highlight
	/// predecessors only, and center on the node. No-op on unknown ids.
	pub fn highlight_from_story(&mut self, id: NodeId) {
		let Some(node) = self.store.get(id) else {
			debug!("highlight_from_story: unknown id {}", id);
			return;
		};
		let viewport = (self.width, self.height);
		self.focus.focus_on(node, viewport);
		self.highlight = reference_highlight(id, &self.connections);
		self.selected = Some(id);
	}

	pub fn selected_node(&self) -> Option<&StoryNode> {
		self.selected.and_then(|id| self.store.get(id))
	}

	/// Nodes sharing an edge with `id`, for the overlay's connected list.
	pub fn connected_nodes(&self, id: NodeId) -> Vec<&StoryNode> {
		self.connections
			.iter()
			.filter_map(|conn| {
				if conn.source == id {
					self.store.get(conn.target)
				} else if conn.target == id {
					self.store.get(conn.source)
				} else {
					None
				}
			})
			.collect()
	}

	// --- host operations ------------------------------------------------

	/// Zoom toward the selected node if any, else the hovered node, else a
	/// plain scale step.
	pub fn zoom_in(&mut self) {
		let target = self.selected.or_else(|| self.pointer.hovered_node());
		if let Some(id) = target
			&& let Some(node) = self.store.get(id)
		{
			self.focus.focus_on(node, (self.width, self.height));
			return;
		}
		self.focus.zoom_step_in();
	}

	pub fn zoom_out(&mut self) {
		self.focus.zoom_out();
	}

	pub fn relax_perspective(&mut self) {
		self.focus.relax_perspective();
	}

	/// Full reset: transform, snapshotted node set, and all transient
	/// interaction state.
	pub fn reset_map(&mut self) {
		self.focus.reset_map(&mut self.store);
		self.pointer = PointerState::Idle;
		self.clear_highlights();
	}

	pub fn add_node(&mut self, draft: NodeDraft) -> NodeId {
		self.store.add_node(draft)
	}

	pub fn remove_node(&mut self, id: NodeId) {
		self.store.remove_node(id);
	}

	pub fn update_node(&mut self, id: NodeId, patch: NodePatch) {
		self.store.update_node(id, patch);
	}

	pub fn set_color(&mut self, id: NodeId, color: &str) {
		self.store.set_color(id, color);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::story_graph::router::EdgePath;
	use crate::components::story_graph::viewport::CanvasTransform;

	fn node(id: NodeId, x: f64, y: f64, connections: u32) -> StoryNode {
		StoryNode {
			id,
			x,
			y,
			size: 0.0,
			title: format!("Story {}", id),
			author: "@writer".into(),
			excerpt: String::new(),
			category: "Adventure".into(),
			color: "#6366f1".into(),
			border_color: None,
			connections,
			is_starting_point: false,
		}
	}

	/// 1000×600 container; every node sized to 80 (equal connection counts)
	/// unless stated otherwise.
	fn state() -> StoryGraphState {
		let data = GraphData {
			nodes: vec![
				node(1, 200.0, 150.0, 324),
				node(2, 500.0, 90.0, 256),
				node(3, 100.0, 100.0, 324),
			],
			connections: vec![Connection::new(2, 1), Connection::new(1, 3)],
		};
		StoryGraphState::new(&data, 1000.0, 600.0)
	}

	#[test]
	fn spotlight_scenario() {
		let mut s = state();
		s.highlight_from_story(1);
		assert_eq!(s.highlight, HashSet::from([1, 2]));
		assert_eq!(s.selected, Some(1));
		assert_eq!(s.focus.transform.scale, 1.5);
		assert_eq!(s.focus.transform.offset, (500.0 - 200.0, 300.0 - 150.0));
	}

	#[test]
	fn spotlight_unknown_id_is_a_no_op() {
		let mut s = state();
		s.highlight_from_story(99);
		assert!(s.highlight.is_empty());
		assert_eq!(s.selected, None);
		assert_eq!(s.focus.transform, CanvasTransform::default());
	}

	#[test]
	fn spotlight_works_for_a_node_added_this_turn() {
		let mut s = state();
		let id = s.add_node(NodeDraft {
			x: 40.0,
			y: 40.0,
			connections: 12,
			..NodeDraft::default()
		});
		s.highlight_from_story(id);
		assert!(s.highlight.contains(&id));
		assert_eq!(s.selected, Some(id));
	}

	#[test]
	fn drag_commits_on_release_and_leaves_transform_alone() {
		let mut s = state();
		s.pointer_down(100.0, 100.0);
		assert_eq!(s.pointer.dragged_node(), Some(3));
		s.pointer_move(120.0, 95.0);
		s.pointer_move(150.0, 80.0);
		// Store position is untouched while the gesture is live.
		assert_eq!(s.store.get(3).map(|n| (n.x, n.y)), Some((100.0, 100.0)));
		assert_eq!(
			s.effective_position(s.store.get(3).unwrap()),
			(150.0, 80.0)
		);
		s.pointer_up(150.0, 80.0);
		assert_eq!(s.store.get(3).map(|n| (n.x, n.y)), Some((150.0, 80.0)));
		assert_eq!(s.focus.transform, CanvasTransform::default());
		// Released over the node, so the pointer settles on hovering it.
		assert_eq!(s.pointer, PointerState::HoveringNode(3));
	}

	#[test]
	fn edges_follow_only_after_the_commit() {
		let mut s = state();
		s.pointer_down(100.0, 100.0);
		s.pointer_move(150.0, 80.0);
		let mid_drag = s.routed_edges();
		assert_eq!(
			mid_drag[1].path,
			EdgePath::Line {
				from: (200.0, 150.0),
				to: (100.0, 100.0),
			}
		);
		s.pointer_up(150.0, 80.0);
		assert_eq!(
			s.routed_edges()[1].path,
			EdgePath::Line {
				from: (200.0, 150.0),
				to: (150.0, 80.0),
			}
		);
	}

	#[test]
	fn node_drag_and_canvas_pan_are_mutually_exclusive() {
		let mut s = state();
		s.pointer_down(100.0, 100.0);
		assert!(matches!(s.pointer, PointerState::DraggingNode { .. }));
		s.pointer_up(100.0, 100.0);

		s.pointer_down(900.0, 500.0);
		assert!(matches!(s.pointer, PointerState::PanningCanvas { .. }));
		s.pointer_move(920.0, 530.0);
		s.pointer_up(920.0, 530.0);
		assert_eq!(s.focus.transform.offset, (20.0, 30.0));
		assert_eq!(s.pointer, PointerState::Idle);
	}

	#[test]
	fn click_selects_and_highlights_the_neighborhood() {
		let mut s = state();
		s.pointer_down(200.0, 150.0);
		s.pointer_up(200.0, 150.0);
		assert_eq!(s.selected, Some(1));
		// Click rule: undirected neighborhood of 1.
		assert_eq!(s.highlight, HashSet::from([1, 2, 3]));
	}

	#[test]
	fn click_and_reference_rules_differ_for_mixed_traffic() {
		let mut s = state();
		s.pointer_down(200.0, 150.0);
		s.pointer_up(200.0, 150.0);
		let clicked = s.highlight.clone();
		s.highlight_from_story(1);
		assert_ne!(clicked, s.highlight);
		assert_eq!(s.highlight, HashSet::from([1, 2]));
	}

	#[test]
	fn background_click_clears_highlight_and_selection() {
		let mut s = state();
		s.pointer_down(200.0, 150.0);
		s.pointer_up(200.0, 150.0);
		assert!(!s.highlight.is_empty());

		s.pointer_down(900.0, 500.0);
		s.pointer_up(900.0, 500.0);
		assert!(s.highlight.is_empty());
		assert_eq!(s.selected, None);
	}

	#[test]
	fn a_dragged_click_does_not_select() {
		let mut s = state();
		s.pointer_down(100.0, 100.0);
		s.pointer_move(150.0, 80.0);
		s.pointer_up(150.0, 80.0);
		assert_eq!(s.selected, None);
		assert!(s.highlight.is_empty());
	}

	#[test]
	fn hover_follows_the_pointer() {
		let mut s = state();
		s.pointer_move(200.0, 150.0);
		assert_eq!(s.pointer, PointerState::HoveringNode(1));
		s.pointer_move(600.0, 500.0);
		assert_eq!(s.pointer, PointerState::Idle);
	}

	#[test]
	fn zoom_in_prefers_selection_then_hover() {
		let mut s = state();
		s.pointer_move(200.0, 150.0);
		s.zoom_in();
		// Hovered node 1 gets focused.
		assert_eq!(s.focus.transform.scale, 1.5);
		assert_eq!(s.focus.transform.offset, (300.0, 150.0));

		let mut s = state();
		s.zoom_in();
		assert!((s.focus.transform.scale - 1.2).abs() < 1e-9);
		assert_eq!(s.focus.transform.offset, (0.0, 0.0));
	}

	#[test]
	fn scale_stays_clamped_over_any_zoom_sequence() {
		let mut s = state();
		for i in 0..50 {
			if i % 3 == 0 {
				s.zoom_out();
			} else {
				s.zoom_in();
			}
			let t = s.focus.transform;
			assert!((0.5..=2.0).contains(&t.scale), "scale {} out of range", t.scale);
			assert!((0.0..=30.0).contains(&t.perspective));
		}
	}

	#[test]
	fn tilt_modifier_drives_rotation_and_releases_clean() {
		let mut s = state();
		s.set_tilt_modifier(true);
		s.pointer_move(750.0, 150.0);
		assert!((s.focus.transform.rotate_y - 5.0).abs() < 1e-9);
		assert!((s.focus.transform.rotate_x - 5.0).abs() < 1e-9);
		s.set_tilt_modifier(false);
		assert_eq!(s.focus.transform.rotate_x, 0.0);
		assert_eq!(s.focus.transform.rotate_y, 0.0);
		assert_eq!(s.focus.transform.scale, 1.0);
	}

	#[test]
	fn add_then_remove_keeps_count_but_may_dangle_edges() {
		let mut s = state();
		let before = s.store.nodes().len();
		let id = s.add_node(NodeDraft {
			x: 700.0,
			y: 400.0,
			connections: 50,
			..NodeDraft::default()
		});
		s.connections.push(Connection::new(1, id));
		s.remove_node(id);
		assert_eq!(s.store.nodes().len(), before);
		// The edge list still carries the dangling reference; routing skips it.
		assert!(s.connections.iter().any(|c| c.target == id));
		assert_eq!(s.routed_edges().len(), 2);
	}

	#[test]
	fn reset_map_restores_everything() {
		let mut s = state();
		let snapshot = s.store.nodes().to_vec();

		s.pointer_down(100.0, 100.0);
		s.pointer_move(150.0, 80.0);
		s.pointer_up(150.0, 80.0);
		s.set_color(1, "#ef4444");
		s.zoom_out();
		s.highlight_from_story(2);

		s.reset_map();
		assert_eq!(s.store.nodes(), snapshot.as_slice());
		assert_eq!(s.focus.transform, CanvasTransform::default());
		assert_eq!(s.pointer, PointerState::Idle);
		assert_eq!(s.selected, None);
		assert!(s.highlight.is_empty());
	}

	#[test]
	fn hit_testing_respects_the_transform() {
		let mut s = state();
		s.focus.transform.scale = 2.0;
		s.focus.transform.offset = (50.0, -10.0);
		// Node 1 at (200, 150): screen = offset + center + 2·(p − center).
		let sx = 50.0 + 500.0 + 2.0 * (200.0 - 500.0);
		let sy = -10.0 + 300.0 + 2.0 * (150.0 - 300.0);
		assert_eq!(s.node_at_position(sx, sy), Some(1));
		assert_eq!(s.node_at_position(sx + 200.0, sy), None);
	}
}
