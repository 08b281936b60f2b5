use rand::Rng;
use rand_distr::{Distribution, Geometric, StandardGeometric};

use crate::utils::Probability;

/// A geometric distribution.
/// As the case for `p = 1/2` can be significantly sped up by using
/// `StandardGeometric` instead of `Geometric`, we abstract over both.
#[derive(Debug, Copy, Clone)]
enum GeometricDistribution {
    /// General geometric distribution
    General(Geometric),
    /// Geometric distribution for `p = 1/2`
    OneHalf(StandardGeometric),
}

impl Distribution<u64> for GeometricDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        match self {
            GeometricDistribution::General(distr) => distr.sample(rng),
            GeometricDistribution::OneHalf(distr) => distr.sample(rng),
        }
    }
}

impl GeometricDistribution {
    /// Given a probability, returns a geometric distribution and *true* if the
    /// distribution is inverted: for `p > 0.5` it is beneficial to sample the
    /// gaps between the skipped indices instead to minimize draws.
    fn from_prob_with_inv(prob: f64) -> (Self, bool) {
        if prob == 0.5 {
            (Self::OneHalf(StandardGeometric), false)
        } else if prob < 0.5 {
            (Self::General(Geometric::new(prob).unwrap()), false)
        } else {
            (Self::General(Geometric::new(1.0 - prob).unwrap()), true)
        }
    }
}

/// Emits every index in `0..stop` independently with probability `p` by
/// jumping over the skipped indices with geometrically distributed step
/// sizes, so the expected cost is proportional to `min(p, 1 - p) * stop`.
#[derive(Debug, Copy, Clone)]
pub struct GeometricJumper {
    /// Success probability per index
    prob: f64,
    /// Stop once this value is reached
    stop: Option<u64>,
}

impl GeometricJumper {
    /// Creates a new geometric jumper from a probability with no stop value
    pub fn new(prob: f64) -> Self {
        assert!(prob.is_valid_probability());

        Self { prob, stop: None }
    }

    /// Updates the stop value of the jumper
    pub fn stop_at(mut self, stop: u64) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Creates an iterator over the sampled indices starting at `0`
    pub fn iter<R: Rng>(self, rng: &mut R) -> GeometricJumperIter<'_, R> {
        let (distr, inv) = GeometricDistribution::from_prob_with_inv(self.prob);

        // In inverted mode we track the position of the next skipped index
        let next_skip = if inv { rng.sample(distr) } else { 0 };

        GeometricJumperIter {
            geom_distr: distr,
            rng,
            stop: self.stop.unwrap_or(u64::MAX),
            inv,
            cur: 0,
            next_skip,
        }
    }
}

/// An iterator over geometrically jumped indices with an optional stop value
#[derive(Debug)]
pub struct GeometricJumperIter<'a, R>
where
    R: Rng,
{
    geom_distr: GeometricDistribution,
    rng: &'a mut R,
    stop: u64,
    cur: u64,
    inv: bool,
    next_skip: u64,
}

impl<R> Iterator for GeometricJumperIter<'_, R>
where
    R: Rng,
{
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.inv {
            // The sampled value is the number of misses before the next hit
            let gap = self.rng.sample(self.geom_distr);
            self.cur = match self.cur.checked_add(gap) {
                Some(x) if x < self.stop => x,
                _ => {
                    self.cur = self.stop;
                    return None;
                }
            };

            self.cur += 1;
            return Some(self.cur - 1);
        }

        loop {
            if self.cur >= self.stop {
                return None;
            }

            if self.cur < self.next_skip {
                self.cur += 1;
                return Some(self.cur - 1);
            }

            // `cur` is the queued miss itself; step over it and queue the next one
            let gap = self.rng.sample(self.geom_distr);
            self.cur += 1;
            self.next_skip = self.cur.saturating_add(gap);
        }
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn wrong_prob() {
        for prob in [-10.0, -0.001, 1.0001, 3.4] {
            assert!(std::panic::catch_unwind(|| GeometricJumper::new(prob)).is_err());
        }
    }

    #[test]
    fn edge_cases() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        // p = 1.0 emits every index below the stop value
        for stop in [3u64, 10] {
            assert_eq!(
                GeometricJumper::new(1.0)
                    .stop_at(stop)
                    .iter(rng)
                    .collect::<Vec<_>>(),
                (0..stop).collect::<Vec<_>>()
            );
        }

        // p = 0.0 emits nothing
        assert_eq!(GeometricJumper::new(0.0).stop_at(1000).iter(rng).count(), 0);
    }

    #[test]
    fn occurrences() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        let stop = 100u64;
        for (prob, range) in [(0.25, 150..350), (0.75, 650..850)] {
            let mut occurrences = vec![0; stop as usize];
            for _ in 0..1000 {
                for x in GeometricJumper::new(prob).stop_at(stop).iter(rng) {
                    occurrences[x as usize] += 1;
                }
            }

            assert!(occurrences.into_iter().all(|x| range.contains(&x)));
        }
    }

    #[test]
    fn strictly_increasing() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for prob in [0.1, 0.5, 0.9] {
            let hits: Vec<u64> = GeometricJumper::new(prob).stop_at(500).iter(rng).collect();
            assert!(hits.windows(2).all(|w| w[0] < w[1]));
            assert!(hits.iter().all(|&x| x < 500));
        }
    }
}
