//! Sources of the uniform random draws used for jitter and mood palettes.

use rand::{
    rngs::{StdRng, ThreadRng},
    Rng, SeedableRng,
};

use crate::Component;

/// Produces independent draws, uniformly distributed in `[0, 1)`.
pub trait RandomSource {
    /// Take the next draw.
    fn next_uniform(&mut self) -> Component;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_uniform(&mut self) -> Component {
        (**self).next_uniform()
    }
}

/// Draws from any [`rand::Rng`].
#[derive(Clone, Debug)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    /// Wrap the given generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ThreadRng> {
    /// Draw from the lazily seeded thread-local generator.
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// A reproducible generator for the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_uniform(&mut self) -> Component {
        self.0.random::<Component>()
    }
}

/// Replays a fixed list of draws, starting over when it runs out. An empty
/// list always yields `0.5`, the draw that adds no jitter.
#[derive(Clone, Debug, Default)]
pub struct FixedSequence {
    draws: Vec<Component>,
    next: usize,
}

impl FixedSequence {
    /// Create a source replaying `draws` in order.
    pub fn new(draws: impl Into<Vec<Component>>) -> Self {
        Self {
            draws: draws.into(),
            next: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn taken(&self) -> usize {
        self.next
    }
}

impl RandomSource for FixedSequence {
    fn next_uniform(&mut self) -> Component {
        let draw = if self.draws.is_empty() {
            0.5
        } else {
            self.draws[self.next % self.draws.len()]
        };
        self.next += 1;
        draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_sequence_cycles() {
        let mut source = FixedSequence::new([0.1, 0.2]);
        assert_eq!(source.next_uniform(), 0.1);
        assert_eq!(source.next_uniform(), 0.2);
        assert_eq!(source.next_uniform(), 0.1);
        assert_eq!(source.taken(), 3);
    }

    #[test]
    fn empty_sequence_is_centered() {
        let mut source = FixedSequence::default();
        assert_eq!(source.next_uniform(), 0.5);
    }

    #[test]
    fn rng_draws_are_in_the_unit_interval() {
        let mut source = RngSource::thread();
        for _ in 0..1000 {
            let u = source.next_uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        for _ in 0..16 {
            assert_eq!(a.next_uniform(), b.next_uniform());
        }
    }

    #[test]
    fn borrowed_sources_advance_the_original() {
        fn draw(mut source: impl RandomSource) -> Component {
            source.next_uniform()
        }

        let mut source = FixedSequence::new([0.3]);
        assert_eq!(draw(&mut source), 0.3);
        assert_eq!(source.taken(), 1);
    }
}
