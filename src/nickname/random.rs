//! Random decisions used by the word source and the mutation pipeline.
//!
//! Every probabilistic branch goes through [`RandomSource`] so a run can be
//! driven by a seeded generator, the thread generator, or a scripted
//! sequence in tests.

use rand::RngExt;

/// A source of the two kinds of draws the generator needs.
pub trait RandomSource {
    /// Returns `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool;

    /// Returns an index uniformly drawn from `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// A fair coin flip.
    fn coin(&mut self) -> bool {
        self.chance(0.5)
    }
}

/// Adapts any `rand` generator into a [`RandomSource`].
pub struct RngSource<R>(pub R);

impl<R: RngExt> RandomSource for RngSource<R> {
    fn chance(&mut self, p: f64) -> bool {
        self.0.random_bool(p)
    }

    fn index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_source_index_in_range() {
        let mut rng = RngSource(StdRng::seed_from_u64(7));
        for len in 1..50 {
            assert!(rng.index(len) < len);
        }
    }

    #[test]
    fn test_rng_source_extremes() {
        let mut rng = RngSource(StdRng::seed_from_u64(7));
        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
    }
}
