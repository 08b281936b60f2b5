/*!
`ocolor` is an engine for **online graph coloring** experiments: vertices of a
graph are disclosed one at a time, and each must receive a color immediately
and irrevocably such that no two revealed-adjacent vertices share a color,
using only the subgraph revealed so far.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of
nodes in the graph, and **edges** as a simple tuple-struct `Edge(Node, Node)`.
All graphs are undirected and simple. **Colors** are `u32` starting at `0`.

# Building blocks

An experiment runs through four stages:

- [`gens::PlantedKColorable`] generates a random graph that is k-colorable by
  construction (witnessed by a planted partition into k independent sets)
  together with a uniformly random reveal order,
- the resulting [`instance::OnlineInstance`] is disclosed step by step through
  a [`reveal::RevealFeed`],
- an algorithm from [`algo`] ([`algo::FirstFit`], [`algo::Cbip`], or
  [`algo::DegreeFirstFit`]) consumes the feed and commits one color per step,
- [`metrics`] relates the final color count to the planted chromatic number.

Instances can be persisted and reloaded through [`io`] in a self-contained
edge-list format.

# Usage

```rust
use ocolor::{algo::*, gens::*, metrics::competitive_ratio, prelude::*};

let instance = PlantedKColorable::new()
    .nodes(100)
    .classes(2)
    .prob(0.3)
    .generate_with_seed(42)
    .unwrap();

let coloring = Cbip::color_instance(&instance).unwrap();
assert!(coloring.verify_proper(instance.graph()).is_ok());

let ratio = competitive_ratio(coloring.number_of_colors(), 2);
assert!(ratio >= 1.0);
```

# Design

Generators and algorithms are configurable structs following the *Builder* /
*Setter* pattern; the shared behavior sits in the [`gens::NumNodesGen`] and
[`algo::OnlineColoring`] traits. A run owns all of its state, so independent
experiments can be fanned out in parallel by the caller without any locking.
*/

pub mod algo;
pub mod coloring;
pub mod edge;
pub mod error;
pub mod gens;
pub mod instance;
pub mod io;
pub mod metrics;
pub mod node;
pub mod ops;
pub mod repr;
pub mod reveal;
pub mod utils;

/// `ocolor::prelude` includes definitions for nodes, edges, and colorings,
/// the basic graph operation traits, the graph representation, and the error
/// types.
pub mod prelude {
    pub use super::{coloring::*, edge::*, error::*, node::*, ops::*, repr::*};
}

pub use prelude::*;
