/*!
# Errors

All fallible engine operations share one error enum. Configuration errors are
reported before any work happens and a caller may simply skip the offending
parameter combination. Invariant violations on the other hand indicate a
broken input guarantee (or a bug) and abort the affected run; they carry the
offending vertices so the defect can be diagnosed.
*/

use thiserror::Error;

use crate::{Color, Node, NumNodes};

/// Shorthand for results produced by the coloring engine
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// Generator parameters require `1 <= k <= n`
    #[error("need at least one vertex per class: n = {n}, k = {k}")]
    InvalidClassCount { n: NumNodes, k: NumNodes },

    /// Edge probabilities live in `[0, 1]`
    #[error("edge probability {0} is not in [0, 1]")]
    InvalidProbability(f64),

    /// CBIP only maintains bipartitions; larger k is out of scope
    #[error("partition maintenance is only supported for k = 2, got k = {0}")]
    UnsupportedClassCount(NumNodes),

    /// The reveal order of an instance must be a permutation of all vertices
    #[error("reveal order is not a permutation: vertex {0} missing or repeated")]
    InvalidRevealOrder(Node),

    /// The planted partition must assign every vertex to a class
    #[error("vertex {0} is not assigned to any planted class")]
    UnassignedVertex(Node),

    /// The planted partition must never put both endpoints of an edge into
    /// the same class
    #[error("planted partition puts adjacent vertices {u} and {v} in one class")]
    ImproperPlantedPartition { u: Node, v: Node },

    /// Every pair of planted classes must be linked by at least one edge
    #[error("planted classes {a} and {b} share no edge")]
    UnlinkedClasses { a: NumNodes, b: NumNodes },

    /// A revealed edge with equally colored endpoints: the coloring is broken
    #[error("vertices {u} and {v} are adjacent but share color {color}")]
    ImproperColoring { u: Node, v: Node, color: Color },

    /// CBIP found an odd cycle, i.e. the revealed subgraph is not bipartite
    /// even though the input was claimed 2-colorable
    #[error("odd cycle via vertices {u} and {v}: revealed subgraph is not bipartite")]
    OddCycle { u: Node, v: Node },
}
