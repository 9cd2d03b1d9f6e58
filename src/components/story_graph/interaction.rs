use super::types::NodeId;

/// A down+up sequence moving less than this is a click, not a drag.
pub const CLICK_DRAG_TOLERANCE: f64 = 4.0;

/// One active state per pointer sequence. Hit-testing at pointer-down picks
/// exactly one of node-drag or canvas-pan, which is what keeps the two
/// gestures mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerState {
	Idle,
	HoveringNode(NodeId),
	DraggingNode {
		id: NodeId,
		start: (f64, f64),
		last: (f64, f64),
		moved: bool,
	},
	PanningCanvas {
		start: (f64, f64),
		last: (f64, f64),
		moved: bool,
	},
}

impl Default for PointerState {
	fn default() -> Self {
		Self::Idle
	}
}

impl PointerState {
	pub fn begin_node_drag(id: NodeId, at: (f64, f64)) -> Self {
		Self::DraggingNode {
			id,
			start: at,
			last: at,
			moved: false,
		}
	}

	pub fn begin_pan(at: (f64, f64)) -> Self {
		Self::PanningCanvas {
			start: at,
			last: at,
			moved: false,
		}
	}

	/// Track pointer movement inside an active gesture. The `moved` flag
	/// latches once the tolerance is exceeded, so a drag that wanders out
	/// and back does not read as a click.
	pub fn track(&mut self, at: (f64, f64)) {
		match self {
			Self::DraggingNode { start, last, moved, .. }
			| Self::PanningCanvas { start, last, moved } => {
				*last = at;
				if displacement(*start, at) > CLICK_DRAG_TOLERANCE {
					*moved = true;
				}
			}
			Self::Idle | Self::HoveringNode(_) => {}
		}
	}

	/// Screen-space delta accumulated over the active gesture.
	pub fn gesture_delta(&self) -> Option<(f64, f64)> {
		match self {
			Self::DraggingNode { start, last, .. } | Self::PanningCanvas { start, last, .. } => {
				Some((last.0 - start.0, last.1 - start.1))
			}
			Self::Idle | Self::HoveringNode(_) => None,
		}
	}

	pub fn dragged_node(&self) -> Option<NodeId> {
		match self {
			Self::DraggingNode { id, .. } => Some(*id),
			_ => None,
		}
	}

	pub fn hovered_node(&self) -> Option<NodeId> {
		match self {
			Self::HoveringNode(id) => Some(*id),
			_ => None,
		}
	}
}

fn displacement(from: (f64, f64), to: (f64, f64)) -> f64 {
	let (dx, dy) = (to.0 - from.0, to.1 - from.1);
	(dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn moved_flag_latches() {
		let mut state = PointerState::begin_node_drag(3, (100.0, 100.0));
		state.track((101.0, 100.0));
		assert!(matches!(state, PointerState::DraggingNode { moved: false, .. }));
		state.track((150.0, 80.0));
		state.track((100.0, 100.0));
		// Back at the start, but the gesture already counted as a drag.
		assert!(matches!(state, PointerState::DraggingNode { moved: true, .. }));
		assert_eq!(state.gesture_delta(), Some((0.0, 0.0)));
	}

	#[test]
	fn tracking_is_a_no_op_outside_gestures() {
		let mut state = PointerState::HoveringNode(2);
		state.track((500.0, 500.0));
		assert_eq!(state, PointerState::HoveringNode(2));
		assert_eq!(state.gesture_delta(), None);
	}

	#[test]
	fn pan_accumulates_screen_delta() {
		let mut state = PointerState::begin_pan((10.0, 10.0));
		state.track((25.0, 4.0));
		assert_eq!(state.gesture_delta(), Some((15.0, -6.0)));
		assert_eq!(state.dragged_node(), None);
	}
}
