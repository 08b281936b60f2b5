/*!
# Reveal Feeds

A [`RevealFeed`] discloses a graph one vertex at a time. Each step yields a
[`Reveal`] naming the new vertex plus all of its neighbors among the vertices
disclosed in earlier steps. Edges towards still-hidden vertices stay hidden;
they surface later from the other endpoint once that endpoint is revealed.

The feed is a plain [`Iterator`] and deliberately one-shot: online algorithms
must commit to a color before the next vertex arrives, so there is no way to
rewind or peek ahead.
*/

use crate::{ops::*, *};

/// One disclosure step: a vertex and its already-revealed neighbors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    /// The vertex disclosed in this step
    pub node: Node,
    /// All neighbors of `node` among previously disclosed vertices
    pub neighbors: Vec<Node>,
}

/// Iterator disclosing the vertices of a graph in a fixed order
pub struct RevealFeed<'a, G> {
    graph: &'a G,
    order: Vec<Node>,
    revealed: Vec<bool>,
    step: usize,
}

impl<'a, G: GraphNodeOrder + AdjacencyList> RevealFeed<'a, G> {
    /// Creates a feed disclosing `graph` in the given order.
    /// The order is trusted here; [`OnlineInstance::new`](crate::instance::OnlineInstance::new)
    /// validates it upfront.
    pub fn with_order(graph: &'a G, order: Vec<Node>) -> Self {
        Self {
            graph,
            order,
            revealed: vec![false; graph.len()],
            step: 0,
        }
    }

    /// Number of vertices disclosed so far
    pub fn number_revealed(&self) -> NumNodes {
        self.step as NumNodes
    }

    /// *True* exactly if `u` has already been disclosed
    pub fn is_revealed(&self, u: Node) -> bool {
        self.revealed[u as usize]
    }
}

impl<G: GraphNodeOrder + AdjacencyList> Iterator for RevealFeed<'_, G> {
    type Item = Reveal;

    fn next(&mut self) -> Option<Self::Item> {
        let node = *self.order.get(self.step)?;
        self.step += 1;

        let neighbors = self
            .graph
            .neighbors_of(node)
            .filter(|&v| self.revealed[v as usize])
            .collect();
        self.revealed[node as usize] = true;

        Some(Reveal { node, neighbors })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.order.len() - self.step;
        (rem, Some(rem))
    }
}

impl<G: GraphNodeOrder + AdjacencyList> ExactSizeIterator for RevealFeed<'_, G> {}
