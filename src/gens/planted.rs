use std::cmp::Reverse;

use itertools::Itertools;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use tracing::debug;

use crate::{gens::*, instance::OnlineInstance, utils::*};

/// Generator for random k-colorable graphs with a planted witness partition.
///
/// Construction, for `n` nodes, `k` classes, and cross-edge probability `p`:
/// 1. every node joins a uniformly random class; empty classes are repaired
///    deterministically by pulling a node out of a largest class,
/// 2. every pair of classes is linked by one forced edge between random
///    representatives, so no class ends up isolated,
/// 3. every remaining cross-class node pair becomes an edge independently
///    with probability `p`,
/// 4. no edge ever runs within a class, so the planted partition is a proper
///    k-coloring by construction,
/// 5. the reveal order is a uniform permutation, independent of the classes.
#[derive(Debug, Copy, Clone, Default)]
pub struct PlantedKColorable {
    n: NumNodes,
    k: NumNodes,
    p: f64,
}

impl PlantedKColorable {
    /// Creates a new empty generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of planted classes
    pub fn classes(mut self, k: NumNodes) -> Self {
        self.k = k;
        self
    }

    /// Sets the probability of each non-forced cross-class edge
    pub fn prob(mut self, prob: f64) -> Self {
        self.p = prob;
        self
    }

    /// Generates a fresh instance from the given random source.
    ///
    /// Fails with a configuration error if `k < 1`, `n < k`, or `p` is not a
    /// probability. The output is deterministic in the state of `rng`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<OnlineInstance> {
        if self.k < 1 || self.n < self.k {
            return Err(Error::InvalidClassCount {
                n: self.n,
                k: self.k,
            });
        }
        if !self.p.is_valid_probability() {
            return Err(Error::InvalidProbability(self.p));
        }

        let members = self.random_classes(rng);
        let mut graph = AdjArrayUndir::new(self.n);

        // forced representative edge per class pair
        for a in 0..self.k as usize {
            for b in (a + 1)..self.k as usize {
                let u = members[a][rng.random_range(0..members[a].len())];
                let v = members[b][rng.random_range(0..members[b].len())];
                graph.add_edge(u, v);
            }
        }

        let pairs = CrossPairs::new(&members);
        match self.p {
            0.0 => {}
            1.0 => {
                for x in 0..pairs.total() {
                    let Edge(u, v) = pairs.pair_at(x);
                    graph.try_add_edge(u, v);
                }
            }
            p => {
                for x in GeometricJumper::new(p).stop_at(pairs.total()).iter(rng) {
                    let Edge(u, v) = pairs.pair_at(x);
                    graph.try_add_edge(u, v);
                }
            }
        }

        let mut reveal_order = graph.vertices().collect_vec();
        reveal_order.shuffle(rng);

        debug!(
            n = self.n,
            k = self.k,
            m = graph.number_of_edges(),
            "generated planted instance"
        );

        OnlineInstance::new(graph, reveal_order, members.into_partition(self.n))
    }

    /// Generates a fresh instance from a dedicated generator seeded with
    /// `seed`. Identical seeds yield identical instances.
    pub fn generate_with_seed(&self, seed: u64) -> Result<OnlineInstance> {
        self.generate(&mut Pcg64Mcg::seed_from_u64(seed))
    }

    /// Assigns every node a uniform class, then repairs empty classes by
    /// moving the highest node out of a largest class (smallest class id on
    /// ties) until all k classes are inhabited.
    fn random_classes<R: Rng>(&self, rng: &mut R) -> Vec<Vec<Node>> {
        let mut members: Vec<Vec<Node>> = vec![Vec::new(); self.k as usize];
        for u in 0..self.n {
            members[rng.random_range(0..self.k) as usize].push(u);
        }

        for empty in 0..self.k as usize {
            if !members[empty].is_empty() {
                continue;
            }

            let (donor, _) = members
                .iter()
                .enumerate()
                .max_by_key(|(i, m)| (m.len(), Reverse(*i)))
                .unwrap();

            // n >= k guarantees a donor with at least two members
            debug_assert!(members[donor].len() > 1);
            let moved = members[donor].pop().unwrap();
            members[empty].push(moved);
        }

        members
    }
}

impl NumNodesGen for PlantedKColorable {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

/// Bijection from `0..total` to the cross-class vertex pairs, laid out as one
/// consecutive block per class pair. Lets the geometric jumper sample all
/// cross pairs with a single index stream.
struct CrossPairs<'a> {
    members: &'a [Vec<Node>],
    pairs: Vec<(usize, usize)>,
    /// `starts[i]` is the first index of block `i`; one extra entry holds the total
    starts: Vec<u64>,
}

impl<'a> CrossPairs<'a> {
    fn new(members: &'a [Vec<Node>]) -> Self {
        let k = members.len();
        let mut pairs = Vec::with_capacity(k * (k - 1) / 2);
        let mut starts = Vec::with_capacity(pairs.capacity() + 1);

        let mut total = 0u64;
        for a in 0..k {
            for b in (a + 1)..k {
                pairs.push((a, b));
                starts.push(total);
                total += (members[a].len() * members[b].len()) as u64;
            }
        }
        starts.push(total);

        Self {
            members,
            pairs,
            starts,
        }
    }

    fn total(&self) -> u64 {
        *self.starts.last().unwrap()
    }

    /// The cross-class pair with index `x < total`
    fn pair_at(&self, x: u64) -> Edge {
        let block = self.starts.partition_point(|&s| s <= x) - 1;
        let (a, b) = self.pairs[block];

        let offset = x - self.starts[block];
        let width = self.members[b].len() as u64;
        Edge(
            self.members[a][(offset / width) as usize],
            self.members[b][(offset % width) as usize],
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_invalid_configurations() {
        assert_eq!(
            PlantedKColorable::new()
                .nodes(3)
                .classes(5)
                .prob(0.5)
                .generate_with_seed(0)
                .unwrap_err(),
            Error::InvalidClassCount { n: 3, k: 5 }
        );
        assert_eq!(
            PlantedKColorable::new()
                .nodes(3)
                .classes(0)
                .prob(0.5)
                .generate_with_seed(0)
                .unwrap_err(),
            Error::InvalidClassCount { n: 3, k: 0 }
        );
        assert_eq!(
            PlantedKColorable::new()
                .nodes(10)
                .classes(2)
                .prob(1.5)
                .generate_with_seed(0)
                .unwrap_err(),
            Error::InvalidProbability(1.5)
        );
    }

    #[test]
    fn identical_seeds_give_identical_instances() {
        let gen = PlantedKColorable::new().nodes(40).classes(3).prob(0.3);
        let a = gen.generate_with_seed(42).unwrap();
        let b = gen.generate_with_seed(42).unwrap();

        assert_eq!(a.reveal_order(), b.reveal_order());
        assert_eq!(
            a.graph().ordered_edges(true).collect_vec(),
            b.graph().ordered_edges(true).collect_vec()
        );
        assert!(a
            .graph()
            .vertices()
            .all(|u| a.planted_partition().class_of_node(u)
                == b.planted_partition().class_of_node(u)));
    }

    #[test]
    fn planted_partition_is_proper_witness() {
        for seed in 0..5 {
            let instance = PlantedKColorable::new()
                .nodes(50)
                .classes(4)
                .prob(0.15)
                .generate_with_seed(seed)
                .unwrap();

            let planted = instance.planted_partition();
            assert_eq!(planted.number_of_classes(), 4);
            assert_eq!(planted.number_of_unassigned(), 0);
            assert!(instance
                .graph()
                .edges(true)
                .all(|Edge(u, v)| planted.class_of_edge(u, v).is_none()));
        }
    }

    #[test]
    fn every_class_survives_tight_instances() {
        // n = k forces the repair path for nearly every seed
        for seed in 0..10 {
            let instance = PlantedKColorable::new()
                .nodes(6)
                .classes(6)
                .prob(0.0)
                .generate_with_seed(seed)
                .unwrap();

            let planted = instance.planted_partition();
            assert!((0..6).all(|c| planted.number_in_class(c) == 1));
        }
    }

    #[test]
    fn prob_zero_keeps_only_forced_edges() {
        let instance = PlantedKColorable::new()
            .nodes(30)
            .classes(4)
            .prob(0.0)
            .generate_with_seed(11)
            .unwrap();

        assert_eq!(instance.graph().number_of_edges(), 4 * 3 / 2);
    }

    #[test]
    fn prob_one_links_all_cross_pairs() {
        let instance = PlantedKColorable::new()
            .nodes(20)
            .classes(3)
            .prob(1.0)
            .generate_with_seed(5)
            .unwrap();

        let planted = instance.planted_partition();
        let sizes = (0..3)
            .map(|c| planted.number_in_class(c) as NumEdges)
            .collect_vec();
        let expected = sizes[0] * sizes[1] + sizes[0] * sizes[2] + sizes[1] * sizes[2];
        assert_eq!(instance.graph().number_of_edges(), expected);
    }

    #[test]
    fn single_class_instances_are_edgeless() {
        let instance = PlantedKColorable::new()
            .nodes(8)
            .classes(1)
            .prob(0.7)
            .generate_with_seed(2)
            .unwrap();

        assert_eq!(instance.graph().number_of_edges(), 0);
        assert_eq!(instance.number_of_classes(), 1);
    }
}
