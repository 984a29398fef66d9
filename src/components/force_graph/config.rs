//! Visual and physics configuration for the force graph.
//!
//! Visual sizes are derived from the drawing surface so the layout keeps its
//! proportions on any canvas: node radius and link rest distance scale with
//! the smaller surface dimension.

/// Node radius as a fraction of the smaller surface dimension.
const NODE_RADIUS_FACTOR: f64 = 0.013;
/// Link base distance as a fraction of the smaller surface dimension.
const LINK_DISTANCE_FACTOR: f64 = 0.05;

/// Visual parameters: sizes, hover behavior, transition timing.
#[derive(Clone, Debug)]
pub struct VisualConfig {
	/// Baseline drawn node radius in pixels.
	pub node_radius: f64,
	/// Pointer hit-test radius in pixels. At least the drawn radius.
	pub hit_radius: f64,
	/// Numerator of the per-link rest distance (`base / weight`).
	pub link_base_distance: f64,
	/// Multiplier applied to the node radius while hovered.
	pub radius_expand: f64,
	/// Seconds for the hover radius/stroke transition, both directions.
	pub transition_duration: f64,
}

impl VisualConfig {
	/// Derive sizes from the drawing surface dimensions.
	pub fn for_surface(width: f64, height: f64) -> Self {
		let min = width.min(height);
		let node_radius = NODE_RADIUS_FACTOR * min;
		Self {
			node_radius,
			hit_radius: (node_radius * 1.6).max(10.0),
			link_base_distance: LINK_DISTANCE_FACTOR * min,
			radius_expand: 1.5,
			transition_duration: 0.25,
		}
	}
}

/// Physics parameters governing force strengths and energy cooling.
#[derive(Clone, Debug)]
pub struct PhysicsConfig {
	/// Convergence floor: the simulation goes idle below this energy.
	pub alpha_min: f64,
	/// Geometric decay rate applied to energy each step.
	pub alpha_decay: f64,
	/// Fraction of velocity removed each step (0..1).
	pub velocity_decay: f64,
	/// Many-body strength. Negative repels.
	pub repulsion_strength: f64,
	/// Link spring stiffness.
	pub spring_stiffness: f64,
	/// Fraction of the centroid offset corrected per step.
	pub centering_strength: f64,
	/// Energy target set while a drag gesture is active.
	pub drag_wake_target: f64,
}

impl Default for PhysicsConfig {
	fn default() -> Self {
		Self {
			alpha_min: 0.001,
			// Reaches alpha_min from 1.0 in ~300 steps.
			alpha_decay: 1.0 - 0.001_f64.powf(1.0 / 300.0),
			velocity_decay: 0.4,
			repulsion_strength: -30.0,
			spring_stiffness: 0.7,
			centering_strength: 1.0,
			drag_wake_target: 0.3,
		}
	}
}
