/*!
# Graph Representation

A single adjacency-array backed representation for undirected simple graphs.
Neighborhoods are kept as plain `Vec<Node>` which is the best trade-off for
the sparse instances the planted generator produces: O(1) amortized edge
insertion, O(deg) neighborhood iteration, O(deg) edge queries.
*/

use crate::{ops::*, *};

/// An undirected graph stored as one neighbor list per node
#[derive(Clone, Debug, Default)]
pub struct AdjArrayUndir {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl GraphNew for AdjArrayUndir {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphNodeOrder for AdjArrayUndir {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }
}

impl GraphEdgeOrder for AdjArrayUndir {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjArrayUndir {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for AdjArrayUndir {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!((v as usize) < self.nbs.len());
        self.nbs[u as usize].contains(&v)
    }
}

impl GraphEdgeEditing for AdjArrayUndir {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert_ne!(u, v, "self-loops are not supported");
        if self.has_edge(u, v) {
            return true;
        }

        self.nbs[u as usize].push(v);
        self.nbs[v as usize].push(u);
        self.num_edges += 1;
        false
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn empty_graph() {
        for n in 0..10 {
            let graph = AdjArrayUndir::new(n);
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.number_of_edges(), 0);
            assert!(graph.is_singleton());
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
        }
    }

    #[test]
    fn add_and_query_edges() {
        let mut graph = AdjArrayUndir::new(4);
        graph.add_edges([(0, 1), (1, 2), (2, 3)]);

        assert_eq!(graph.number_of_edges(), 3);
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 0));
        assert!(!graph.has_edge(0, 2));

        assert_eq!(graph.degree_of(1), 2);
        assert_eq!(graph.max_degree(), 2);

        // duplicate insertion is reported, not counted twice
        assert!(graph.try_add_edge(2, 1));
        assert_eq!(graph.number_of_edges(), 3);
    }

    #[test]
    fn normalized_edge_iteration() {
        let graph = AdjArrayUndir::from_edges(5, [(3, 1), (0, 4), (1, 0)]);

        let edges = graph.ordered_edges(true).collect_vec();
        assert_eq!(edges, vec![Edge(0, 1), Edge(0, 4), Edge(1, 3)]);

        // every edge shows up in both orientations when not normalizing
        assert_eq!(graph.edges(false).count(), 6);
    }

    #[test]
    #[should_panic]
    fn rejects_self_loop() {
        let mut graph = AdjArrayUndir::new(3);
        graph.add_edge(1, 1);
    }
}
