//! Interactive story-graph canvas: node store, edge routing, highlight
//! propagation, viewport transform, and the pointer state machine, behind
//! a canvas component and an imperative controller for the host.

mod component;
mod controller;
mod data;
mod highlight;
mod interaction;
mod render;
mod router;
mod state;
mod store;
mod types;
mod viewport;

pub use component::StoryGraphCanvas;
pub use controller::StoryGraphController;
pub use data::{generate_story_graph, generate_system_graph};
pub use types::{Anchor, Connection, GraphData, NodeDraft, NodePatch, StoryNode};

pub(crate) use controller::schedule_once;
pub(crate) use data::rand_simple;
