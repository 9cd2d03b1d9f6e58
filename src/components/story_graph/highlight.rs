use std::collections::HashSet;

use super::types::{Connection, NodeId};

/// Highlight set for a node the user clicked on the canvas: the node plus
/// every node sharing an edge with it, regardless of direction.
pub fn click_highlight(id: NodeId, connections: &[Connection]) -> HashSet<NodeId> {
	let mut set = HashSet::from([id]);
	for conn in connections {
		if conn.source == id {
			set.insert(conn.target);
		} else if conn.target == id {
			set.insert(conn.source);
		}
	}
	set
}

/// Highlight set for a node spotlighted from outside the canvas: the node
/// plus its predecessors only, the sources of edges pointing into it. This
/// is deliberately narrower than the click rule.
pub fn reference_highlight(id: NodeId, connections: &[Connection]) -> HashSet<NodeId> {
	let mut set = HashSet::from([id]);
	for conn in connections {
		if conn.target == id {
			set.insert(conn.source);
		}
	}
	set
}

#[cfg(test)]
mod tests {
	use super::*;

	fn edges() -> Vec<Connection> {
		vec![
			Connection::new(1, 2),
			Connection::new(3, 1),
			Connection::new(2, 4),
			Connection::new(5, 4),
		]
	}

	#[test]
	fn click_takes_the_undirected_neighborhood() {
		let set = click_highlight(1, &edges());
		assert_eq!(set, HashSet::from([1, 2, 3]));
	}

	#[test]
	fn click_highlight_is_symmetric() {
		let edges = edges();
		let ids = [1, 2, 3, 4, 5];
		for a in ids {
			for b in ids {
				if a != b && click_highlight(a, &edges).contains(&b) {
					assert!(
						click_highlight(b, &edges).contains(&a),
						"{} in highlight({}) but not the reverse",
						b,
						a
					);
				}
			}
		}
	}

	#[test]
	fn reference_takes_predecessors_only() {
		let set = reference_highlight(1, &edges());
		assert_eq!(set, HashSet::from([1, 3]));
	}

	#[test]
	fn rules_differ_when_node_has_traffic_both_ways() {
		// Node 1 has an outgoing edge to 2 and an incoming edge from 3.
		let edges = edges();
		assert_ne!(click_highlight(1, &edges), reference_highlight(1, &edges));
	}

	#[test]
	fn isolated_node_highlights_only_itself() {
		assert_eq!(click_highlight(9, &edges()), HashSet::from([9]));
		assert_eq!(reference_highlight(9, &edges()), HashSet::from([9]));
	}
}
