use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the secret number, asked once at the start of each round.
pub trait NumberGenerator {
    /// Returns a uniformly distributed integer in [1, 100].
    fn generate(&mut self) -> u32;
}

/// Production generator backed by `StdRng`.
pub struct RandomGenerator {
    rng: StdRng,
}

impl RandomGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded variant for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberGenerator for RandomGenerator {
    fn generate(&mut self) -> u32 {
        self.rng.random_range(1..=100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_numbers_stay_in_range() {
        let mut generator = RandomGenerator::new();
        for _ in 0..1000 {
            let number = generator.generate();
            assert!((1..=100).contains(&number), "out of range: {number}");
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_same_sequence() {
        let mut a = RandomGenerator::seeded(42);
        let mut b = RandomGenerator::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.generate(), b.generate());
        }
    }
}
