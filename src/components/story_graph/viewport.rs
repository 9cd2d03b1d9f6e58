use super::store::NodeStore;
use super::types::StoryNode;

pub const SCALE_MIN: f64 = 0.5;
pub const SCALE_MAX: f64 = 2.0;
pub const SCALE_STEP: f64 = 0.2;
pub const FOCUS_SCALE: f64 = 1.5;
pub const PERSPECTIVE_MAX: f64 = 30.0;
pub const PERSPECTIVE_PUSH: f64 = 10.0;
pub const PERSPECTIVE_RELAX: f64 = 5.0;
/// Delay before a zoom-out's perspective push partially relaxes.
pub const PERSPECTIVE_RELAX_DELAY_MS: i32 = 500;
const TILT_RANGE_DEG: f64 = 20.0;

/// Whole-canvas transform: zoom, pan, tilt, depth cue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasTransform {
	pub scale: f64,
	pub offset: (f64, f64),
	pub rotate_x: f64,
	pub rotate_y: f64,
	pub perspective: f64,
}

impl Default for CanvasTransform {
	fn default() -> Self {
		Self {
			scale: 1.0,
			offset: (0.0, 0.0),
			rotate_x: 0.0,
			rotate_y: 0.0,
			perspective: 0.0,
		}
	}
}

/// Owns the canvas transform and the post-initialization node snapshot that
/// `reset_map` restores.
#[derive(Clone, Debug, Default)]
pub struct FocusController {
	pub transform: CanvasTransform,
	snapshot: Option<Vec<StoryNode>>,
}

impl FocusController {
	/// Record the reset target. Taken once, immediately after the initial
	/// node set is built.
	pub fn capture_snapshot(&mut self, nodes: &[StoryNode]) {
		self.snapshot = Some(nodes.to_vec());
	}

	/// Plain zoom step; the selected/hovered focus policy sits above this.
	pub fn zoom_step_in(&mut self) {
		self.transform.scale = (self.transform.scale + SCALE_STEP).min(SCALE_MAX);
	}

	/// Zoom out and push the 3D depth cue. The caller schedules the one-shot
	/// relax step after `PERSPECTIVE_RELAX_DELAY_MS`.
	pub fn zoom_out(&mut self) {
		self.transform.scale = (self.transform.scale - SCALE_STEP).max(SCALE_MIN);
		self.transform.perspective = (self.transform.perspective + PERSPECTIVE_PUSH).min(PERSPECTIVE_MAX);
	}

	/// Deferred half of `zoom_out`. Clamps at zero, so a step firing after a
	/// reset is harmless.
	pub fn relax_perspective(&mut self) {
		self.transform.perspective = (self.transform.perspective - PERSPECTIVE_RELAX).max(0.0);
	}

	/// Zoom to a fixed level and pan so the node lands at the visual center.
	pub fn focus_on(&mut self, node: &StoryNode, viewport: (f64, f64)) {
		self.transform.scale = FOCUS_SCALE;
		self.transform.offset = (viewport.0 / 2.0 - node.x, viewport.1 / 2.0 - node.y);
	}

	/// Tilt toward the pointer while the modifier key is held. ±10° at the
	/// viewport edges.
	pub fn apply_tilt(&mut self, pointer: (f64, f64), viewport: (f64, f64)) {
		let (w, h) = viewport;
		if w <= 0.0 || h <= 0.0 {
			return;
		}
		self.transform.rotate_y = ((pointer.0 - w / 2.0) / w) * TILT_RANGE_DEG;
		self.transform.rotate_x = -((pointer.1 - h / 2.0) / h) * TILT_RANGE_DEG;
	}

	/// Releasing the modifier levels the canvas; scale and pan stay put.
	pub fn clear_tilt(&mut self) {
		self.transform.rotate_x = 0.0;
		self.transform.rotate_y = 0.0;
	}

	/// Restore the transform and the snapshotted node set, discarding drags
	/// and recolors made since initialization. No-op when no snapshot was
	/// ever captured.
	pub fn reset_map(&mut self, store: &mut NodeStore) -> bool {
		let Some(snapshot) = self.snapshot.clone() else {
			return false;
		};
		self.transform = CanvasTransform::default();
		store.restore(snapshot);
		true
	}
}
