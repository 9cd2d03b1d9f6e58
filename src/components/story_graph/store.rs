use log::debug;

use super::types::{NodeDraft, NodeId, NodePatch, StoryNode};

pub const MIN_NODE_SIZE: f64 = 40.0;
pub const MAX_NODE_SIZE: f64 = 80.0;

/// Owns the node set. All mutations are synchronous and fail soft: unknown
/// ids are ignored, nothing here panics.
#[derive(Clone, Debug, Default)]
pub struct NodeStore {
	nodes: Vec<StoryNode>,
}

/// Size derived from a connection count against the set's current maximum.
/// The ratio is clamped so size always lands in `[MIN_NODE_SIZE, MAX_NODE_SIZE]`.
pub fn size_for(connections: u32, max_connections: u32) -> f64 {
	let max = max_connections.max(1);
	let ratio = (f64::from(connections) / f64::from(max)).clamp(0.0, 1.0);
	MIN_NODE_SIZE + ratio * (MAX_NODE_SIZE - MIN_NODE_SIZE)
}

impl NodeStore {
	/// Build a store from an initial node list, sizing every node against
	/// the whole set's maximum connection count.
	pub fn new(mut nodes: Vec<StoryNode>) -> Self {
		let max = nodes.iter().map(|n| n.connections).max().unwrap_or(0);
		for node in &mut nodes {
			node.size = size_for(node.connections, max);
		}
		Self { nodes }
	}

	pub fn nodes(&self) -> &[StoryNode] {
		&self.nodes
	}

	pub fn get(&self, id: NodeId) -> Option<&StoryNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	fn get_mut(&mut self, id: NodeId) -> Option<&mut StoryNode> {
		self.nodes.iter_mut().find(|n| n.id == id)
	}

	/// Insert a node, assigning the next id and a size computed against the
	/// *existing* set's maximum connection count. An empty set counts as a
	/// maximum of 1 so the first insertion cannot divide by zero.
	pub fn add_node(&mut self, draft: NodeDraft) -> NodeId {
		let id = self.nodes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
		let max = self.nodes.iter().map(|n| n.connections).max().unwrap_or(0);
		let node = StoryNode {
			id,
			x: draft.x,
			y: draft.y,
			size: size_for(draft.connections, max),
			title: draft.title,
			author: draft.author,
			excerpt: draft.excerpt,
			category: draft.category,
			color: draft.color,
			border_color: draft.border_color,
			connections: draft.connections,
			is_starting_point: draft.is_starting_point,
		};
		debug!("add_node: id={} size={}", id, node.size);
		self.nodes.push(node);
		id
	}

	/// Remove a node. Connections referencing it are left in place and
	/// become unrenderable; see DESIGN.md for the no-cascade decision.
	pub fn remove_node(&mut self, id: NodeId) {
		self.nodes.retain(|n| n.id != id);
	}

	/// Merge a partial update into the matching node. No-op on unknown ids.
	pub fn update_node(&mut self, id: NodeId, patch: NodePatch) {
		let Some(node) = self.get_mut(id) else {
			debug!("update_node: unknown id {}", id);
			return;
		};
		if let Some(x) = patch.x {
			node.x = x;
		}
		if let Some(y) = patch.y {
			node.y = y;
		}
		if let Some(title) = patch.title {
			node.title = title;
		}
		if let Some(author) = patch.author {
			node.author = author;
		}
		if let Some(excerpt) = patch.excerpt {
			node.excerpt = excerpt;
		}
		if let Some(category) = patch.category {
			node.category = category;
		}
		if let Some(color) = patch.color {
			node.color = color;
		}
		if let Some(border_color) = patch.border_color {
			node.border_color = Some(border_color);
		}
		if let Some(connections) = patch.connections {
			// Size is derived at insertion only; a later count change does
			// not resize the node.
			node.connections = connections;
		}
	}

	/// Recolor a node. Authorship is a trust boundary the caller enforces;
	/// the store accepts any recolor.
	pub fn set_color(&mut self, id: NodeId, color: &str) {
		if let Some(node) = self.get_mut(id) {
			node.color = color.to_owned();
		}
	}

	pub fn restore(&mut self, nodes: Vec<StoryNode>) {
		self.nodes = nodes;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn draft(connections: u32) -> NodeDraft {
		NodeDraft {
			x: 10.0,
			y: 20.0,
			title: "A Story".into(),
			author: "@writer".into(),
			connections,
			..NodeDraft::default()
		}
	}

	fn seeded_store() -> NodeStore {
		let mut store = NodeStore::default();
		store.add_node(draft(10));
		store.add_node(draft(20));
		store
	}

	#[test]
	fn size_is_monotonic_and_bounded() {
		let max = 324;
		let mut previous = 0.0;
		for connections in [0, 1, 50, 162, 324, 1000] {
			let size = size_for(connections, max);
			assert!((MIN_NODE_SIZE..=MAX_NODE_SIZE).contains(&size));
			assert!(size >= previous);
			previous = size;
		}
		assert_eq!(size_for(0, max), MIN_NODE_SIZE);
		assert_eq!(size_for(max, max), MAX_NODE_SIZE);
	}

	#[test]
	fn first_node_into_empty_store_guards_division() {
		let mut store = NodeStore::default();
		let id = store.add_node(draft(5));
		assert_eq!(id, 1);
		let size = store.get(id).unwrap().size;
		assert!((MIN_NODE_SIZE..=MAX_NODE_SIZE).contains(&size));
	}

	#[test]
	fn ids_grow_from_current_max() {
		let mut store = seeded_store();
		assert_eq!(store.add_node(draft(1)), 3);
		store.remove_node(2);
		// Holes are not reused below the max.
		assert_eq!(store.add_node(draft(1)), 4);
	}

	#[test]
	fn insertion_uses_existing_max_not_retroactively() {
		let mut store = NodeStore::default();
		let a = store.add_node(draft(10));
		// b exceeds the current max, so its ratio clamps to 1.
		let b = store.add_node(draft(20));
		assert_eq!(store.get(b).unwrap().size, MAX_NODE_SIZE);
		// c is sized against the new max of 20; a keeps its original size.
		let c = store.add_node(draft(10));
		assert_eq!(store.get(c).unwrap().size, 60.0);
		assert_eq!(store.get(a).unwrap().size, MAX_NODE_SIZE);
	}

	#[test]
	fn init_sizes_whole_set_against_shared_max() {
		let store = NodeStore::new(vec![
			StoryNode {
				id: 1,
				x: 0.0,
				y: 0.0,
				size: 0.0,
				title: String::new(),
				author: String::new(),
				excerpt: String::new(),
				category: String::new(),
				color: String::new(),
				border_color: None,
				connections: 324,
				is_starting_point: false,
			},
			StoryNode {
				id: 2,
				x: 0.0,
				y: 0.0,
				size: 0.0,
				title: String::new(),
				author: String::new(),
				excerpt: String::new(),
				category: String::new(),
				color: String::new(),
				border_color: None,
				connections: 162,
				is_starting_point: false,
			},
		]);
		assert_eq!(store.get(1).unwrap().size, MAX_NODE_SIZE);
		assert_eq!(store.get(2).unwrap().size, 60.0);
	}

	#[test]
	fn update_merges_and_ignores_unknown_ids() {
		let mut store = seeded_store();
		store.update_node(
			1,
			NodePatch {
				x: Some(99.0),
				color: Some("#10b981".into()),
				..NodePatch::default()
			},
		);
		let node = store.get(1).unwrap();
		assert_eq!(node.x, 99.0);
		assert_eq!(node.y, 20.0);
		assert_eq!(node.color, "#10b981");

		store.update_node(42, NodePatch::default());
		assert_eq!(store.nodes().len(), 2);
	}

	#[test]
	fn update_connections_does_not_resize() {
		let mut store = seeded_store();
		let before = store.get(1).unwrap().size;
		store.update_node(
			1,
			NodePatch {
				connections: Some(500),
				..NodePatch::default()
			},
		);
		assert_eq!(store.get(1).unwrap().size, before);
	}

	#[test]
	fn set_color_is_fail_soft() {
		let mut store = seeded_store();
		store.set_color(1, "#ef4444");
		assert_eq!(store.get(1).unwrap().color, "#ef4444");
		store.set_color(42, "#ef4444");
	}
}
