/// Integer node id, assigned by the store and referenced by connections.
pub type NodeId = u32;

#[derive(Clone, Debug, PartialEq)]
pub struct StoryNode {
	pub id: NodeId,
	pub x: f64,
	pub y: f64,
	/// Diameter in canvas units, derived from `connections` at insertion time.
	pub size: f64,
	pub title: String,
	pub author: String,
	pub excerpt: String,
	pub category: String,
	pub color: String,
	pub border_color: Option<String>,
	/// Connection count used only to derive `size`.
	pub connections: u32,
	pub is_starting_point: bool,
}

/// Node attributes supplied by callers of `add_node`; id and size are
/// assigned by the store.
#[derive(Clone, Debug, Default)]
pub struct NodeDraft {
	pub x: f64,
	pub y: f64,
	pub title: String,
	pub author: String,
	pub excerpt: String,
	pub category: String,
	pub color: String,
	pub border_color: Option<String>,
	pub connections: u32,
	pub is_starting_point: bool,
}

/// Partial update merged into an existing node by `update_node`.
#[derive(Clone, Debug, Default)]
pub struct NodePatch {
	pub x: Option<f64>,
	pub y: Option<f64>,
	pub title: Option<String>,
	pub author: Option<String>,
	pub excerpt: Option<String>,
	pub category: Option<String>,
	pub color: Option<String>,
	pub border_color: Option<String>,
	pub connections: Option<u32>,
}

/// Named attachment point on a node's bounding box, used by curved routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
	Top,
	Right,
	Bottom,
	Left,
}

impl Anchor {
	/// Parse an anchor name. Unknown names yield `None`, which resolves to
	/// the node center at routing time.
	pub fn parse(name: &str) -> Option<Anchor> {
		match name {
			"top" => Some(Anchor::Top),
			"right" => Some(Anchor::Right),
			"bottom" => Some(Anchor::Bottom),
			"left" => Some(Anchor::Left),
			_ => None,
		}
	}
}

/// Anchor pair for a curved connection. `None` on either side means the
/// endpoint attaches to the node center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchors {
	pub source: Option<Anchor>,
	pub target: Option<Anchor>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
	pub source: NodeId,
	pub target: NodeId,
	/// `Some` selects curved routing, `None` straight center-to-center.
	pub anchors: Option<Anchors>,
}

impl Connection {
	pub fn new(source: NodeId, target: NodeId) -> Self {
		Self {
			source,
			target,
			anchors: None,
		}
	}

	pub fn anchored(source: NodeId, target: NodeId, source_anchor: &str, target_anchor: &str) -> Self {
		Self {
			source,
			target,
			anchors: Some(Anchors {
				source: Anchor::parse(source_anchor),
				target: Anchor::parse(target_anchor),
			}),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<StoryNode>,
	pub connections: Vec<Connection>,
}
