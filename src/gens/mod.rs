/*!
# Instance Generators

This module provides randomized generators for online coloring instances.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `PlantedKColorable::new()`).
2. Set parameters using the builder methods (e.g., `.nodes(n).classes(k).prob(p)`).
3. Generate an instance via `generate(&mut rng)` or `generate_with_seed(seed)`.

The only model currently supported is [`PlantedKColorable`]: a random graph
that is k-colorable by construction, witnessed by a planted partition into k
independent sets, together with a uniformly random reveal order.
*/

use crate::prelude::*;

mod planted;

pub use planted::*;

/// Trait for generators that allow setting the number of nodes.
///
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the generator.
    fn nodes(self, n: NumNodes) -> Self;
}
