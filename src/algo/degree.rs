/*!
# Degree-Ordered FirstFit

FirstFit with a reordered disclosure: degrees are computed once on the full
graph and vertices are consumed in non-increasing degree order (ties broken by
vertex id). The coloring rule itself is plain [`FirstFit`].

Note that this heuristic replaces the instance's random reveal order with its
own static one, so it is a semi-online strategy by construction.
*/

use std::cmp::Reverse;

use itertools::Itertools;

use super::*;

/// FirstFit consuming vertices from highest to lowest full-graph degree
pub struct DegreeFirstFit {
    greedy: FirstFit,
}

impl OnlineColoring for DegreeFirstFit {
    fn for_instance(instance: &OnlineInstance) -> Result<Self> {
        Ok(Self {
            greedy: FirstFit::for_instance(instance)?,
        })
    }

    fn consume_order(&self, instance: &OnlineInstance) -> Vec<Node> {
        let degrees = instance.graph().degrees().collect_vec();
        instance
            .graph()
            .vertices()
            .sorted_by_key(|&u| (Reverse(degrees[u as usize]), u))
            .collect_vec()
    }

    fn color_next(&mut self, reveal: &Reveal) -> Result<Color> {
        self.greedy.color_next(reveal)
    }

    fn coloring(&self) -> &Coloring {
        self.greedy.coloring()
    }

    fn into_coloring(self) -> Coloring {
        self.greedy.into_coloring()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, utils::IntoPartition};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn consumes_by_degree() {
        // star center has degree 3, leaves degree 1
        let graph = AdjArrayUndir::from_edges(4, [(1, 0), (1, 2), (1, 3)]);
        let planted = vec![vec![1], vec![0, 2, 3]].into_partition(4);
        let instance = OnlineInstance::new(graph, vec![3, 0, 2, 1], planted).unwrap();

        let algo = DegreeFirstFit::for_instance(&instance).unwrap();
        assert_eq!(algo.consume_order(&instance), vec![1, 0, 2, 3]);

        let coloring = DegreeFirstFit::color_instance(&instance).unwrap();
        assert_eq!(coloring.color_of(1), Some(0));
        assert_eq!(coloring.number_of_colors(), 2);
    }

    #[test]
    fn proper_on_random_instances() {
        let mut rng = Pcg64Mcg::seed_from_u64(31);
        for k in [2, 4] {
            let instance = PlantedKColorable::new()
                .nodes(40)
                .classes(k)
                .prob(0.25)
                .generate(&mut rng)
                .unwrap();

            let coloring = DegreeFirstFit::color_instance(&instance).unwrap();
            assert!(coloring.is_complete());
            coloring.verify_proper(instance.graph()).unwrap();
        }
    }
}
