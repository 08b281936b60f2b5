/*!
# Online Coloring Algorithms

This module provides the online coloring strategies of this crate.
All algorithms implement the [`OnlineColoring`] trait and are re-exported at
the top level of this module, so you can simply do:
```rust
use ocolor::algo::*;
```

Available strategies:
- [`FirstFit`] : the greedy baseline,
- [`Cbip`] : first-fit restricted to the opposite side of a maintained
  bipartition (2-colorable instances only),
- [`DegreeFirstFit`] : FirstFit fed in non-increasing full-graph degree order.
*/

mod cbip;
mod degree;
mod first_fit;
mod online;

use crate::{instance::*, prelude::*, reveal::*};

pub use cbip::*;
pub use degree::*;
pub use first_fit::*;
pub use online::*;
