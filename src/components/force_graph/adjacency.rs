//! Per-node index of incident link handles.
//!
//! Built once per graph load and used for O(1) lookup of the links to
//! highlight on hover. Never mutated after construction; a replaced graph
//! gets a freshly built index.

use super::graph::{Graph, LinkId, NodeId};

/// Maps each node identifier to the links touching it (either direction).
pub struct AdjacencyIndex {
	incident: Vec<Vec<LinkId>>,
}

impl AdjacencyIndex {
	pub fn build(graph: &Graph) -> Self {
		let mut incident = vec![Vec::new(); graph.node_count()];
		for (id, link) in graph.links.iter().enumerate() {
			incident[link.source].push(id);
			if link.target != link.source {
				incident[link.target].push(id);
			}
		}
		Self { incident }
	}

	/// Link handles incident to `node`, in link-id order.
	pub fn incident(&self, node: NodeId) -> &[LinkId] {
		&self.incident[node]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{DocLink, DocNode, GraphDocument};

	fn chain_graph() -> Graph {
		let doc = GraphDocument {
			nodes: (0..3)
				.map(|i| DocNode {
					name: format!("n{i}"),
					group: 0,
					url: None,
				})
				.collect(),
			links: vec![
				DocLink {
					source: 0,
					target: 1,
					value: 1.0,
				},
				DocLink {
					source: 1,
					target: 2,
					value: 2.0,
				},
			],
		};
		Graph::from_document(&doc, 30.0, 600.0, 600.0).unwrap()
	}

	#[test]
	fn middle_node_sees_both_links() {
		let index = AdjacencyIndex::build(&chain_graph());
		assert_eq!(index.incident(1), &[0, 1]);
		assert_eq!(index.incident(0), &[0]);
		assert_eq!(index.incident(2), &[1]);
	}

	#[test]
	fn self_loop_appears_once() {
		let doc = GraphDocument {
			nodes: vec![DocNode {
				name: "only".into(),
				group: 0,
				url: None,
			}],
			links: vec![DocLink {
				source: 0,
				target: 0,
				value: 1.0,
			}],
		};
		let graph = Graph::from_document(&doc, 30.0, 600.0, 600.0).unwrap();
		let index = AdjacencyIndex::build(&graph);
		assert_eq!(index.incident(0), &[0]);
	}
}
