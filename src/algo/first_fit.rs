/*!
# FirstFit

The greedy baseline: every vertex receives the smallest color that none of its
already revealed neighbors carries. Always succeeds and never uses more than
`max_degree + 1` colors, but on adversarial reveal orders of 2-colorable
graphs it can be forced into `Omega(log n)` colors.
*/

use super::*;

/// Greedy online coloring with the smallest fitting color
pub struct FirstFit {
    coloring: Coloring,
}

impl OnlineColoring for FirstFit {
    fn for_instance(instance: &OnlineInstance) -> Result<Self> {
        Ok(Self {
            coloring: Coloring::new(instance.number_of_nodes()),
        })
    }

    fn color_next(&mut self, reveal: &Reveal) -> Result<Color> {
        let color = smallest_missing_color(
            reveal
                .neighbors
                .iter()
                .filter_map(|&u| self.coloring.color_of(u)),
        );
        self.coloring.assign(reveal.node, color);
        Ok(color)
    }

    fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    fn into_coloring(self) -> Coloring {
        self.coloring
    }
}
