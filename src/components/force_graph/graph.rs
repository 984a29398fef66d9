//! Internal graph model: identity data, simulation bodies, and links.
//!
//! Built once per load from a [`GraphDocument`]. Node identifiers are the
//! document positions, so they are exactly `[0, node_count)` with no gaps.
//! Display data and simulation state are separate aggregates joined by the
//! identifier: [`GraphNode`] never changes after construction, while the
//! parallel [`NodeBody`] vector is mutated every simulation step.

use thiserror::Error;

use super::types::GraphDocument;

/// Node identifier: the node's position in document order.
pub type NodeId = usize;
/// Link handle: the link's position in the document's `links` array.
pub type LinkId = usize;

/// Load-time validation and parse failures. All fatal to the session.
#[derive(Debug, Error)]
pub enum GraphError {
	#[error("failed to parse graph document: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("failed to fetch graph document: {0}")]
	Fetch(String),
	#[error("link {link} references node {index} but the graph has {count} nodes")]
	DanglingLink {
		link: LinkId,
		index: usize,
		count: usize,
	},
	#[error("link {link} has non-positive weight {value}")]
	BadWeight { link: LinkId, value: f64 },
}

/// Identity and display fields of a node. Immutable after construction.
#[derive(Clone, Debug)]
pub struct GraphNode {
	pub id: NodeId,
	pub name: String,
	pub group: u32,
	pub url: Option<String>,
}

/// Simulation state of a node: position, velocity, and optional pin.
///
/// While `pin` is present the integrator holds the node at the pinned
/// coordinates and zeroes its velocity; pin state is created on drag-start
/// and cleared on drag-end, never outliving the gesture.
#[derive(Clone, Debug, Default)]
pub struct NodeBody {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub pin: Option<(f64, f64)>,
}

impl NodeBody {
	pub fn pinned(&self) -> bool {
		self.pin.is_some()
	}
}

/// A weighted link between two node identifiers.
#[derive(Clone, Debug)]
pub struct Link {
	pub source: NodeId,
	pub target: NodeId,
	/// Positive weight from the document's `value` field.
	pub weight: f64,
	/// Spring rest length, `base_distance / weight`. Recomputed when links
	/// are replaced.
	pub distance: f64,
}

/// The full graph: ordered nodes, their bodies, and links.
#[derive(Debug)]
pub struct Graph {
	pub nodes: Vec<GraphNode>,
	pub bodies: Vec<NodeBody>,
	pub links: Vec<Link>,
}

impl Graph {
	/// Build a graph from a parsed document.
	///
	/// Node ids are assigned in document order. Bodies are seeded on a
	/// deterministic phyllotaxis spiral around the surface center, compact
	/// enough for the spring forces to take hold from the first steps. Fails
	/// on any link whose endpoint index is out of range or whose weight is
	/// not a positive finite number; no partial graph is produced.
	pub fn from_document(
		doc: &GraphDocument,
		base_distance: f64,
		width: f64,
		height: f64,
	) -> Result<Self, GraphError> {
		let count = doc.nodes.len();

		let nodes = doc
			.nodes
			.iter()
			.enumerate()
			.map(|(id, n)| GraphNode {
				id,
				name: n.name.clone(),
				group: n.group,
				url: n.url.clone(),
			})
			.collect();

		// Phyllotaxis placement: radius 10 * sqrt(0.5 + i), golden-angle turn
		// per node.
		const SEED_RADIUS: f64 = 10.0;
		let seed_angle = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());
		let bodies = (0..count)
			.map(|i| {
				let radius = SEED_RADIUS * (0.5 + i as f64).sqrt();
				let angle = i as f64 * seed_angle;
				NodeBody {
					x: width / 2.0 + radius * angle.cos(),
					y: height / 2.0 + radius * angle.sin(),
					..NodeBody::default()
				}
			})
			.collect();

		let mut links = Vec::with_capacity(doc.links.len());
		for (id, l) in doc.links.iter().enumerate() {
			for endpoint in [l.source, l.target] {
				if endpoint >= count {
					return Err(GraphError::DanglingLink {
						link: id,
						index: endpoint,
						count,
					});
				}
			}
			if !(l.value.is_finite() && l.value > 0.0) {
				return Err(GraphError::BadWeight {
					link: id,
					value: l.value,
				});
			}
			links.push(Link {
				source: l.source,
				target: l.target,
				weight: l.value,
				distance: base_distance / l.value,
			});
		}

		Ok(Self {
			nodes,
			bodies,
			links,
		})
	}

	/// Parse JSON text and build the graph in one step.
	pub fn from_json(
		text: &str,
		base_distance: f64,
		width: f64,
		height: f64,
	) -> Result<Self, GraphError> {
		let doc: GraphDocument = serde_json::from_str(text)?;
		Self::from_document(&doc, base_distance, width, height)
	}

	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{DocLink, DocNode};

	fn doc(names: &[&str], links: &[(usize, usize, f64)]) -> GraphDocument {
		GraphDocument {
			nodes: names
				.iter()
				.map(|n| DocNode {
					name: n.to_string(),
					group: 1,
					url: None,
				})
				.collect(),
			links: links
				.iter()
				.map(|&(source, target, value)| DocLink {
					source,
					target,
					value,
				})
				.collect(),
		}
	}

	#[test]
	fn ids_cover_document_order() {
		let g = Graph::from_document(&doc(&["a", "b", "c"], &[]), 30.0, 600.0, 600.0).unwrap();
		let ids: Vec<NodeId> = g.nodes.iter().map(|n| n.id).collect();
		assert_eq!(ids, vec![0, 1, 2]);
		assert_eq!(g.bodies.len(), 3);
	}

	#[test]
	fn link_endpoints_resolve() {
		let g =
			Graph::from_document(&doc(&["a", "b"], &[(0, 1, 2.0)]), 30.0, 600.0, 600.0).unwrap();
		for link in &g.links {
			assert!(link.source < g.node_count());
			assert!(link.target < g.node_count());
		}
	}

	#[test]
	fn out_of_range_link_is_fatal() {
		let err = Graph::from_document(&doc(&["a", "b"], &[(0, 5, 1.0)]), 30.0, 600.0, 600.0)
			.unwrap_err();
		assert!(matches!(
			err,
			GraphError::DanglingLink {
				link: 0,
				index: 5,
				count: 2
			}
		));
	}

	#[test]
	fn zero_and_invalid_weights_are_fatal() {
		for bad in [0.0, -1.5, f64::NAN, f64::INFINITY] {
			let err = Graph::from_document(&doc(&["a", "b"], &[(0, 1, bad)]), 30.0, 600.0, 600.0)
				.unwrap_err();
			assert!(matches!(err, GraphError::BadWeight { link: 0, .. }));
		}
	}

	#[test]
	fn rest_distance_is_base_over_weight() {
		let g =
			Graph::from_document(&doc(&["a", "b"], &[(0, 1, 2.0)]), 30.0, 600.0, 600.0).unwrap();
		assert_eq!(g.links[0].distance, 15.0);
	}

	#[test]
	fn parse_error_is_fatal() {
		assert!(matches!(
			Graph::from_json("{ not json", 30.0, 600.0, 600.0),
			Err(GraphError::Parse(_))
		));
	}

	#[test]
	fn seeding_is_deterministic() {
		let d = doc(&["a", "b", "c"], &[]);
		let g1 = Graph::from_document(&d, 30.0, 600.0, 600.0).unwrap();
		let g2 = Graph::from_document(&d, 30.0, 600.0, 600.0).unwrap();
		for (b1, b2) in g1.bodies.iter().zip(&g2.bodies) {
			assert_eq!((b1.x, b1.y), (b2.x, b2.y));
		}
	}
}
