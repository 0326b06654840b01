// third-party imports
#[cfg(test)]
use mockall::mock;
use rand::{
    Rng, SeedableRng,
    rngs::{StdRng, ThreadRng},
};

// ---

/// Source of uniformly distributed values in range [0, 1).
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

#[cfg(test)]
mock! {
    pub RandomSource {}

    impl RandomSource for RandomSource {
        fn next_unit(&mut self) -> f64;
    }
}

impl<T> RandomSource for &mut T
where
    T: RandomSource + ?Sized,
{
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<T> RandomSource for Box<T>
where
    T: RandomSource + ?Sized,
{
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

// ---

/// Thread-local generator seeded by the operating system.
#[derive(Clone, Debug)]
pub struct ThreadRandom(ThreadRng);

impl Default for ThreadRandom {
    fn default() -> Self {
        Self(rand::rng())
    }
}

impl RandomSource for ThreadRandom {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

// ---

/// Deterministic generator, the same seed always yields the same sequence.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    seed: u64,
    inner: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}
