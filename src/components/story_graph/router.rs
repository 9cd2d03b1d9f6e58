use super::store::NodeStore;
use super::types::{Anchor, Connection, NodeId, StoryNode};

/// Curve bend saturates at this many canvas units.
pub const CURVE_FACTOR_MAX: f64 = 50.0;

/// Rendered geometry for one connection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgePath {
	/// Direct segment between the two node centers.
	Line { from: (f64, f64), to: (f64, f64) },
	/// Cubic curve between two anchor points with one control point per end.
	Cubic {
		from: (f64, f64),
		c1: (f64, f64),
		c2: (f64, f64),
		to: (f64, f64),
	},
}

/// A connection resolved against current node positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoutedEdge {
	pub source: NodeId,
	pub target: NodeId,
	pub path: EdgePath,
}

fn anchor_point(node: &StoryNode, anchor: Option<Anchor>) -> (f64, f64) {
	let half = node.size / 2.0;
	match anchor {
		Some(Anchor::Top) => (node.x, node.y - half),
		Some(Anchor::Right) => (node.x + half, node.y),
		Some(Anchor::Bottom) => (node.x, node.y + half),
		Some(Anchor::Left) => (node.x - half, node.y),
		None => (node.x, node.y),
	}
}

fn curve_factor(from: (f64, f64), to: (f64, f64)) -> f64 {
	let (dx, dy) = (to.0 - from.0, to.1 - from.1);
	((dx * dx + dy * dy).sqrt() / 4.0).min(CURVE_FACTOR_MAX)
}

/// Control point offset from the anchor point along the anchor's outward
/// axis: vertical for top/bottom, horizontal for left/right, negative
/// toward top/left. Center endpoints get no offset.
fn control_point(point: (f64, f64), anchor: Option<Anchor>, factor: f64) -> (f64, f64) {
	match anchor {
		Some(Anchor::Top) => (point.0, point.1 - factor),
		Some(Anchor::Bottom) => (point.0, point.1 + factor),
		Some(Anchor::Left) => (point.0 - factor, point.1),
		Some(Anchor::Right) => (point.0 + factor, point.1),
		None => point,
	}
}

/// Route one connection from current positions. Geometry is re-derived on
/// every call; nothing is cached across position changes.
pub fn route(source: &StoryNode, target: &StoryNode, connection: &Connection) -> EdgePath {
	match connection.anchors {
		None => EdgePath::Line {
			from: (source.x, source.y),
			to: (target.x, target.y),
		},
		Some(anchors) => {
			let from = anchor_point(source, anchors.source);
			let to = anchor_point(target, anchors.target);
			let factor = curve_factor(from, to);
			EdgePath::Cubic {
				from,
				c1: control_point(from, anchors.source, factor),
				c2: control_point(to, anchors.target, factor),
				to,
			}
		}
	}
}

/// Route every connection whose endpoints are both live. Dangling edges are
/// silently skipped, not an error.
pub fn route_all(store: &NodeStore, connections: &[Connection]) -> Vec<RoutedEdge> {
	connections
		.iter()
		.filter_map(|conn| {
			let source = store.get(conn.source)?;
			let target = store.get(conn.target)?;
			Some(RoutedEdge {
				source: conn.source,
				target: conn.target,
				path: route(source, target, conn),
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::story_graph::types::{NodeDraft, NodePatch};

	fn node(id: NodeId, x: f64, y: f64, size: f64) -> StoryNode {
		StoryNode {
			id,
			x,
			y,
			size,
			title: String::new(),
			author: String::new(),
			excerpt: String::new(),
			category: String::new(),
			color: String::new(),
			border_color: None,
			connections: 0,
			is_starting_point: false,
		}
	}

	#[test]
	fn straight_mode_joins_centers() {
		let a = node(1, 10.0, 20.0, 40.0);
		let b = node(2, 110.0, 220.0, 40.0);
		let path = route(&a, &b, &Connection::new(1, 2));
		assert_eq!(
			path,
			EdgePath::Line {
				from: (10.0, 20.0),
				to: (110.0, 220.0),
			}
		);
	}

	#[test]
	fn anchors_resolve_on_the_bounding_box() {
		let a = node(1, 100.0, 100.0, 60.0);
		let b = node(2, 300.0, 100.0, 60.0);
		let path = route(&a, &b, &Connection::anchored(1, 2, "right", "left"));
		let EdgePath::Cubic { from, c1, c2, to } = path else {
			panic!("expected cubic path");
		};
		assert_eq!(from, (130.0, 100.0));
		assert_eq!(to, (270.0, 100.0));
		// 140 apart, factor = min(35, 50); right bends positive, left negative.
		assert_eq!(c1, (165.0, 100.0));
		assert_eq!(c2, (235.0, 100.0));
	}

	#[test]
	fn top_and_bottom_bend_vertically() {
		let a = node(1, 100.0, 200.0, 40.0);
		let b = node(2, 100.0, 400.0, 40.0);
		let path = route(&a, &b, &Connection::anchored(1, 2, "bottom", "top"));
		let EdgePath::Cubic { from, c1, c2, to } = path else {
			panic!("expected cubic path");
		};
		assert_eq!(from, (100.0, 220.0));
		assert_eq!(to, (100.0, 380.0));
		let factor = 40.0; // 160 / 4, below saturation
		assert_eq!(c1, (100.0, 220.0 + factor));
		assert_eq!(c2, (100.0, 380.0 - factor));
	}

	#[test]
	fn curve_factor_saturates() {
		let from = (0.0, 0.0);
		assert_eq!(curve_factor(from, (100.0, 0.0)), 25.0);
		assert_eq!(curve_factor(from, (200.0, 0.0)), 50.0);
		assert_eq!(curve_factor(from, (2000.0, 0.0)), CURVE_FACTOR_MAX);
	}

	#[test]
	fn unknown_anchor_falls_back_to_center() {
		let a = node(1, 100.0, 100.0, 60.0);
		let b = node(2, 300.0, 100.0, 60.0);
		let path = route(&a, &b, &Connection::anchored(1, 2, "middle", "left"));
		let EdgePath::Cubic { from, c1, .. } = path else {
			panic!("expected cubic path");
		};
		assert_eq!(from, (100.0, 100.0));
		assert_eq!(c1, from);
	}

	#[test]
	fn dangling_edges_are_skipped() {
		let mut store = NodeStore::default();
		store.add_node(NodeDraft {
			x: 0.0,
			y: 0.0,
			..NodeDraft::default()
		});
		let connections = vec![Connection::new(1, 7), Connection::new(1, 1)];
		let routed = route_all(&store, &connections);
		assert_eq!(routed.len(), 1);
		assert_eq!(routed[0].target, 1);
	}

	#[test]
	fn geometry_tracks_position_changes() {
		let mut store = NodeStore::default();
		let a = store.add_node(NodeDraft {
			x: 0.0,
			y: 0.0,
			..NodeDraft::default()
		});
		let b = store.add_node(NodeDraft {
			x: 100.0,
			y: 0.0,
			..NodeDraft::default()
		});
		let connections = vec![Connection::new(a, b)];
		let before = route_all(&store, &connections);
		store.update_node(
			b,
			NodePatch {
				x: Some(250.0),
				y: Some(40.0),
				..NodePatch::default()
			},
		);
		let after = route_all(&store, &connections);
		assert_ne!(before, after);
		assert_eq!(
			after[0].path,
			EdgePath::Line {
				from: (0.0, 0.0),
				to: (250.0, 40.0),
			}
		);
	}
}
