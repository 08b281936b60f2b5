/*!
# CBIP

First-fit restricted to the opposite side of a maintained bipartition.

On arrival of a vertex, CBIP merges the revealed components that vertex
bridges, keeps a consistent 2-coloring (bipartition) of the merged component,
and then assigns the smallest color not used on the *opposite* side of the
vertex's own component. Restricting the conflict set to the opposite side is
what beats FirstFit on 2-colorable instances.

Only instances with exactly two planted classes are supported. On such
instances every revealed subgraph is bipartite, so a failing side assignment
(an odd cycle) means the input violated its 2-colorability contract and the
run aborts with [`Error::OddCycle`].
*/

use super::*;

/// The two sides of a component's bipartition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn from_parity(parity: bool) -> Self {
        if parity {
            Side::Right
        } else {
            Side::Left
        }
    }
}

/// A bipartition of the revealed subgraph, grown one vertex at a time.
///
/// Union-find over the revealed components with one parity bit per vertex
/// storing its side relative to its parent. Merging two components flips one
/// of them implicitly by choosing the parity of the attached root, so a merge
/// costs only the root relink plus the member-list append.
struct IncrementalBipartition {
    parent: Vec<Node>,
    /// Side relative to the parent; a root's parity fixes its component's labels
    parity: Vec<bool>,
    /// Component members, only meaningful at roots
    members: Vec<Vec<Node>>,
}

impl IncrementalBipartition {
    fn new(n: NumNodes) -> Self {
        Self {
            parent: vec![INVALID_NODE; n as usize],
            parity: vec![false; n as usize],
            members: vec![Vec::new(); n as usize],
        }
    }

    /// Starts a new singleton component containing `u`
    fn insert(&mut self, u: Node) {
        debug_assert_eq!(self.parent[u as usize], INVALID_NODE);
        self.parent[u as usize] = u;
        self.members[u as usize] = vec![u];
    }

    /// Returns the root of `u`'s component and `u`'s side relative to it.
    /// Compresses the visited path.
    fn find(&mut self, u: Node) -> (Node, bool) {
        let mut cur = u;
        let mut parity = false;
        while self.parent[cur as usize] != cur {
            parity ^= self.parity[cur as usize];
            cur = self.parent[cur as usize];
        }
        let root = cur;

        // second pass: point everything on the path directly at the root
        let (mut cur, mut cur_parity) = (u, parity);
        while self.parent[cur as usize] != root {
            let next = self.parent[cur as usize];
            let next_parity = cur_parity ^ self.parity[cur as usize];

            self.parent[cur as usize] = root;
            self.parity[cur as usize] = cur_parity;

            (cur, cur_parity) = (next, next_parity);
        }

        (root, parity)
    }

    /// Constrains `u` and `v` to opposite sides, merging their components if
    /// needed. Fails if they are already forced onto the same side.
    fn join_opposite(&mut self, u: Node, v: Node) -> Result<()> {
        let (ru, pu) = self.find(u);
        let (rv, pv) = self.find(v);

        if ru == rv {
            if pu == pv {
                return Err(Error::OddCycle { u, v });
            }
            return Ok(());
        }

        // merge-by-size: attach the smaller root below the larger one; its
        // parity is chosen so u and v end up on opposite sides
        let (keep, drop) = if self.members[ru as usize].len() >= self.members[rv as usize].len() {
            (ru, rv)
        } else {
            (rv, ru)
        };
        self.parent[drop as usize] = keep;
        self.parity[drop as usize] = !(pu ^ pv);

        let absorbed = std::mem::take(&mut self.members[drop as usize]);
        self.members[keep as usize].extend(absorbed);

        Ok(())
    }

    /// The side of `u` within its component. Sides of different components
    /// are unrelated.
    fn side_of(&mut self, u: Node) -> Side {
        let (_, parity) = self.find(u);
        Side::from_parity(parity)
    }

    /// All vertices in `u`'s component that sit on the side opposite to `u`
    fn opposite_side(&mut self, u: Node) -> Vec<Node> {
        let (root, parity) = self.find(u);

        let members = std::mem::take(&mut self.members[root as usize]);
        let opposite = members
            .iter()
            .filter(|&&w| self.find(w).1 != parity)
            .copied()
            .collect();
        self.members[root as usize] = members;

        opposite
    }
}

/// Online coloring via first-fit against the opposite bipartition side
pub struct Cbip {
    coloring: Coloring,
    bipartition: IncrementalBipartition,
}

impl Cbip {
    /// The bipartition side of an already revealed vertex
    pub fn side_of(&mut self, u: Node) -> Side {
        self.bipartition.side_of(u)
    }
}

impl OnlineColoring for Cbip {
    fn for_instance(instance: &OnlineInstance) -> Result<Self> {
        let k = instance.number_of_classes();
        if k != 2 {
            return Err(Error::UnsupportedClassCount(k));
        }

        Ok(Self {
            coloring: Coloring::new(instance.number_of_nodes()),
            bipartition: IncrementalBipartition::new(instance.number_of_nodes()),
        })
    }

    fn color_next(&mut self, reveal: &Reveal) -> Result<Color> {
        let v = reveal.node;
        self.bipartition.insert(v);
        for &u in &reveal.neighbors {
            self.bipartition.join_opposite(v, u)?;
        }

        let color = smallest_missing_color(
            self.bipartition
                .opposite_side(v)
                .into_iter()
                .filter_map(|u| self.coloring.color_of(u)),
        );
        self.coloring.assign(v, color);
        Ok(color)
    }

    fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    fn into_coloring(self) -> Coloring {
        self.coloring
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, metrics::competitive_ratio, utils::IntoPartition};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn path_instance() -> OnlineInstance {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let planted = vec![vec![0, 2], vec![1, 3]].into_partition(4);
        OnlineInstance::new(graph, vec![0, 1, 2, 3], planted).unwrap()
    }

    #[test]
    fn rejects_unsupported_class_counts() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        for k in [1, 3, 4] {
            let instance = PlantedKColorable::new()
                .nodes(12)
                .classes(k)
                .prob(0.3)
                .generate(&mut rng)
                .unwrap();
            assert_eq!(
                Cbip::color_instance(&instance).unwrap_err(),
                Error::UnsupportedClassCount(k)
            );
        }
    }

    #[test]
    fn two_colors_on_a_path() {
        let instance = path_instance();
        let mut algo = Cbip::for_instance(&instance).unwrap();
        for reveal in instance.feed() {
            algo.color_next(&reveal).unwrap();
        }

        // consecutive path vertices alternate sides within one component
        let sides = (0..4).map(|u| algo.side_of(u)).collect::<Vec<_>>();
        assert_eq!(sides[0], sides[2]);
        assert_eq!(sides[1], sides[3]);
        assert_ne!(sides[0], sides[1]);

        let coloring = algo.into_coloring();
        coloring.verify_proper(instance.graph()).unwrap();
        assert_eq!(coloring.number_of_colors(), 2);
    }

    #[test]
    fn detects_odd_cycles() {
        // valid bipartite instance, but the feed is forged into a triangle
        let instance = path_instance();
        let mut algo = Cbip::for_instance(&instance).unwrap();

        algo.color_next(&Reveal { node: 0, neighbors: vec![] }).unwrap();
        algo.color_next(&Reveal { node: 1, neighbors: vec![0] }).unwrap();
        assert_eq!(
            algo.color_next(&Reveal { node: 2, neighbors: vec![0, 1] })
                .unwrap_err(),
            Error::OddCycle { u: 2, v: 1 }
        );
    }

    #[test]
    fn ratio_at_most_two_on_bipartite_instances() {
        let mut rng = Pcg64Mcg::seed_from_u64(999);
        for _ in 0..20 {
            let instance = PlantedKColorable::new()
                .nodes(50)
                .classes(2)
                .prob(0.4)
                .generate(&mut rng)
                .unwrap();

            let coloring = Cbip::color_instance(&instance).unwrap();
            assert!(coloring.is_complete());
            coloring.verify_proper(instance.graph()).unwrap();
            assert!(competitive_ratio(coloring.number_of_colors(), 2) <= 2.0);
        }
    }
}
