/*!
# Online Instances

An [`OnlineInstance`] bundles everything that defines one online coloring
experiment: the full graph, the order in which its vertices are disclosed,
and the planted partition witnessing that the graph is k-colorable.

The instance is immutable once constructed. The planted partition exists for
validation and metrics only; it is never handed to an online algorithm (that
would be cheating), which is why algorithms consume instances exclusively
through the [`RevealFeed`](crate::reveal::RevealFeed).
*/

use crate::{ops::*, reveal::RevealFeed, utils::Partition, *};

/// An undirected k-colorable graph together with a fixed reveal order
#[derive(Debug)]
pub struct OnlineInstance {
    graph: AdjArrayUndir,
    reveal_order: Vec<Node>,
    planted: Partition,
}

impl OnlineInstance {
    /// Bundles a graph, reveal order, and planted partition into an instance.
    ///
    /// Validates the data-model invariants:
    /// - `reveal_order` is a permutation of all vertices,
    /// - every vertex belongs to a planted class,
    /// - no edge runs within a planted class,
    /// - every pair of planted classes is linked by at least one edge.
    pub fn new(graph: AdjArrayUndir, reveal_order: Vec<Node>, planted: Partition) -> Result<Self> {
        let n = graph.number_of_nodes();

        let mut seen = vec![false; n as usize];
        for &u in &reveal_order {
            if u >= n || seen[u as usize] {
                return Err(Error::InvalidRevealOrder(u));
            }
            seen[u as usize] = true;
        }
        if reveal_order.len() != n as usize {
            let missing = seen.iter().position(|&s| !s).unwrap_or(0) as Node;
            return Err(Error::InvalidRevealOrder(missing));
        }

        if let Some(u) = graph.vertices().find(|&u| planted.class_of_node(u).is_none()) {
            return Err(Error::UnassignedVertex(u));
        }

        let k = planted.number_of_classes();
        let mut linked = vec![false; (k * k) as usize];
        for Edge(u, v) in graph.edges(true) {
            if planted.class_of_edge(u, v).is_some() {
                return Err(Error::ImproperPlantedPartition { u, v });
            }

            // class_of_edge returned None, so the classes differ
            let (cu, cv) = (
                planted.class_of_node(u).unwrap(),
                planted.class_of_node(v).unwrap(),
            );
            linked[(cu * k + cv) as usize] = true;
            linked[(cv * k + cu) as usize] = true;
        }

        for a in 0..k {
            for b in (a + 1)..k {
                if !linked[(a * k + b) as usize] {
                    return Err(Error::UnlinkedClasses { a, b });
                }
            }
        }

        Ok(Self {
            graph,
            reveal_order,
            planted,
        })
    }

    /// The full underlying graph
    pub fn graph(&self) -> &AdjArrayUndir {
        &self.graph
    }

    /// Number of vertices in the instance
    pub fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }

    /// The order in which vertices are disclosed online
    pub fn reveal_order(&self) -> &[Node] {
        &self.reveal_order
    }

    /// The planted independent sets. For validation and metrics only;
    /// never pass this to an online algorithm.
    pub fn planted_partition(&self) -> &Partition {
        &self.planted
    }

    /// Number of planted classes, i.e. the k the instance was generated for.
    /// As every class pair is linked by an edge, this is also the exact
    /// chromatic number for k <= 2 and an upper bound otherwise.
    pub fn number_of_classes(&self) -> NumNodes {
        self.planted.number_of_classes()
    }

    /// Starts the one-shot disclosure of this instance
    pub fn feed(&self) -> RevealFeed<'_, AdjArrayUndir> {
        RevealFeed::with_order(&self.graph, self.reveal_order.clone())
    }
}
