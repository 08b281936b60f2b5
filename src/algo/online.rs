use tracing::debug;

use super::*;

/// Common contract of all online coloring strategies.
///
/// An algorithm is set up once per instance via [`OnlineColoring::for_instance`]
/// and then consumes one [`Reveal`] per call to [`OnlineColoring::color_next`],
/// committing exactly one irrevocable color each time. Algorithms only ever see
/// the revealed subgraph, never the planted partition.
///
/// [`OnlineColoring::color_instance`] drives a full run in one call.
pub trait OnlineColoring: Sized {
    /// Prepares a run on the given instance.
    /// Fails if the algorithm does not support the instance's configuration.
    fn for_instance(instance: &OnlineInstance) -> Result<Self>;

    /// The order in which this algorithm consumes the instance's vertices.
    /// Defaults to the instance's own reveal order; heuristics that reorder
    /// the disclosure override this.
    fn consume_order(&self, instance: &OnlineInstance) -> Vec<Node> {
        instance.reveal_order().to_vec()
    }

    /// Irrevocably colors the vertex disclosed by `reveal` and returns its color.
    /// ** Panics if the same vertex is disclosed twice **
    fn color_next(&mut self, reveal: &Reveal) -> Result<Color>;

    /// The partial coloring committed so far
    fn coloring(&self) -> &Coloring;

    /// Consumes the algorithm and returns its coloring
    fn into_coloring(self) -> Coloring;

    /// Runs the algorithm over the full instance and returns the final coloring
    fn color_instance(instance: &OnlineInstance) -> Result<Coloring> {
        let mut algo = Self::for_instance(instance)?;
        let order = algo.consume_order(instance);

        for reveal in RevealFeed::with_order(instance.graph(), order) {
            algo.color_next(&reveal)?;
        }

        let coloring = algo.into_coloring();
        debug!(
            n = instance.number_of_nodes(),
            colors = coloring.number_of_colors(),
            "finished online coloring run"
        );

        Ok(coloring)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;

    /// Drives a full run but verifies properness after every single step
    fn assert_proper_after_every_step<A: OnlineColoring>(instance: &OnlineInstance) {
        let mut algo = A::for_instance(instance).unwrap();
        let order = algo.consume_order(instance);

        for reveal in RevealFeed::with_order(instance.graph(), order) {
            algo.color_next(&reveal).unwrap();
            algo.coloring().verify_proper(instance.graph()).unwrap();
        }

        assert!(algo.coloring().is_complete());
    }

    #[test]
    fn every_prefix_stays_proper() {
        let instance = PlantedKColorable::new()
            .nodes(60)
            .classes(2)
            .prob(0.15)
            .generate_with_seed(8)
            .unwrap();

        assert_proper_after_every_step::<FirstFit>(&instance);
        assert_proper_after_every_step::<Cbip>(&instance);
        assert_proper_after_every_step::<DegreeFirstFit>(&instance);

        let instance = PlantedKColorable::new()
            .nodes(60)
            .classes(4)
            .prob(0.15)
            .generate_with_seed(9)
            .unwrap();

        assert_proper_after_every_step::<FirstFit>(&instance);
        assert_proper_after_every_step::<DegreeFirstFit>(&instance);
    }
}
