/*!
# Colorings

A [`Coloring`] is the write-once output of an online coloring run: every
vertex receives exactly one color the moment it is revealed and that color is
never revised. Colors are non-negative integers starting at `0`.
*/

use crate::{ops::*, *};

/// Colors are unsigned integers from `0` to `Color::MAX - 1`
pub type Color = u32;

/// Color-Value marking a still uncolored vertex
pub const INVALID_COLOR: Color = Color::MAX;

/// There can be at most `2^32 - 1` colors (one per node suffices)
pub type NumColors = Color;

/// A partial vertex coloring that grows by one assignment per reveal step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<Color>,
    num_colors: NumColors,
}

impl Coloring {
    /// Creates an all-uncolored coloring for `n` vertices
    pub fn new(n: NumNodes) -> Self {
        Self {
            colors: vec![INVALID_COLOR; n as usize],
            num_colors: 0,
        }
    }

    /// Returns the color of `u` if it was assigned one already
    pub fn color_of(&self, u: Node) -> Option<Color> {
        let color = self.colors[u as usize];
        (color != INVALID_COLOR).then_some(color)
    }

    /// Irrevocably assigns `color` to `u`.
    /// ** Panics if `u` is already colored or `u >= n` **
    pub fn assign(&mut self, u: Node, color: Color) {
        assert_eq!(self.colors[u as usize], INVALID_COLOR);
        self.colors[u as usize] = color;
        self.num_colors = self.num_colors.max(color + 1);
    }

    /// Returns the number of distinct colors assigned so far.
    /// As colors are handed out first-fit, this equals the maximum color + 1.
    pub fn number_of_colors(&self) -> NumColors {
        self.num_colors
    }

    /// Returns the number of vertices this coloring was created for
    pub fn number_of_nodes(&self) -> NumNodes {
        self.colors.len() as NumNodes
    }

    /// Returns *true* if every vertex has received a color
    pub fn is_complete(&self) -> bool {
        self.colors.iter().all(|&c| c != INVALID_COLOR)
    }

    /// Checks that no edge of `graph` connects two equally colored vertices.
    /// Uncolored endpoints never conflict, so this is also valid on prefixes
    /// of a run.
    pub fn verify_proper<G: AdjacencyList>(&self, graph: &G) -> Result<()> {
        for Edge(u, v) in graph.edges(true) {
            if let (Some(cu), Some(cv)) = (self.color_of(u), self.color_of(v)) {
                if cu == cv {
                    return Err(Error::ImproperColoring { u, v, color: cu });
                }
            }
        }
        Ok(())
    }
}

/// Returns the smallest color `c >= 0` that does not appear in `used`
pub fn smallest_missing_color<I>(used: I) -> Color
where
    I: IntoIterator<Item = Color>,
{
    let mut used: Vec<Color> = used.into_iter().collect();
    used.sort_unstable();
    used.dedup();

    used.iter()
        .zip(0u32..)
        .find(|&(&c, i)| c != i)
        .map_or(used.len() as Color, |(_, i)| i)
}
