//! Random number generation for item generation
//!
//! Uses a seeded ChaCha RNG so a fixed seed reproduces every generated item.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Note: RNG state is not serialized - a restored stream restarts from its seed.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1, or 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Signed `0..n-1`; non-positive n yields 0.
    pub fn randint0(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Signed `1..n`; non-positive n yields 0.
    pub fn randint1(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.rng.gen_range(1..=n)
    }

    /// Signed dice roll; zero dice or sides give 0.
    pub fn damroll(&mut self, num: i32, sides: i32) -> i32 {
        if num <= 0 || sides <= 0 {
            return 0;
        }
        (0..num).map(|_| self.randint1(sides)).sum()
    }

    /// Returns true with probability 1/n
    pub fn one_in(&mut self, n: u32) -> bool {
        self.rn2(n) == 0
    }

    /// Uniform double in `[lo, hi)`. Returns `lo` for an empty range.
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        let v = self.rng.gen_range(lo..hi);
        // gen_range can round up to `hi` for wide ranges
        if v >= hi { lo } else { v }
    }

    /// Uniform value in `avg - spread ..= avg + spread`.
    ///
    /// `spread` is clamped so the width fits in an `i32`; the result saturates.
    pub fn rand_spread(&mut self, avg: i32, spread: i32) -> i32 {
        let spread = spread.clamp(0, (i32::MAX - 1) / 2);
        avg.saturating_add(self.randint0(1 + 2 * spread))
            .saturating_sub(spread)
    }

    /// Normal draw rounded to the nearest integer (Box-Muller).
    pub fn rand_normal(&mut self, mean: i32, stand: i32) -> i32 {
        if stand < 1 {
            return mean;
        }
        let u1: f64 = 1.0 - self.rng.r#gen::<f64>();
        let u2: f64 = self.rng.r#gen::<f64>();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        (mean as f64 + z * stand as f64).round() as i32
    }

    /// Integer division whose remainder rounds up with matching probability.
    pub fn simulate_division(&mut self, dividend: i32, divisor: i32) -> i32 {
        if divisor <= 0 {
            return 0;
        }
        let quotient = dividend / divisor;
        let remainder = dividend % divisor;
        if self.randint0(divisor) < remainder {
            quotient + 1
        } else {
            quotient
        }
    }

    /// Level-scaled bonus in `0..=max`
    ///
    /// The mean approaches `max` as `level` approaches `max_depth`; the
    /// standard deviation is a quarter of `max`.
    pub fn m_bonus(&mut self, max: i32, level: i32, max_depth: i32) -> i32 {
        if max <= 0 || max_depth <= 0 {
            return 0;
        }
        let level = level.clamp(0, max_depth - 1);
        let bonus = self.simulate_division(max * level, max_depth);
        let stand = self.simulate_division(max, 4);
        self.rand_normal(bonus, stand).clamp(0, max)
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len() as u32) as usize])
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rn2_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.rn2(10);
            assert!(n < 10);
        }
    }

    #[test]
    fn test_randint_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            assert!((0..7).contains(&rng.randint0(7)));
            assert!((1..=7).contains(&rng.randint1(7)));
        }
        assert_eq!(rng.randint0(0), 0);
        assert_eq!(rng.randint1(-3), 0);
    }

    #[test]
    fn test_damroll() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.damroll(2, 6);
            assert!((2..=12).contains(&n));
        }
        assert_eq!(rng.damroll(0, 6), 0);
    }

    #[test]
    fn test_range_f64_half_open() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let v = rng.range_f64(0.0, 5.0);
            assert!((0.0..5.0).contains(&v));
        }
        assert_eq!(rng.range_f64(3.0, 3.0), 3.0);
    }

    #[test]
    fn test_rand_spread_bounds() {
        let mut rng = GameRng::new(3);
        for _ in 0..1000 {
            let v = rng.rand_spread(20, 5);
            assert!((15..=25).contains(&v));
        }
    }

    #[test]
    fn test_rand_spread_wide() {
        let mut rng = GameRng::new(4);
        let half = (i32::MAX - 1) / 2;
        for _ in 0..100 {
            assert!(rng.rand_spread(i32::MAX - 5, i32::MAX) >= i32::MAX - 5 - half);
            let v = rng.rand_spread(100, i32::MAX);
            assert!((100 - half..=100 + half).contains(&v));
        }
    }

    #[test]
    fn test_m_bonus_bounds() {
        let mut rng = GameRng::new(11);
        for level in [0, 10, 50, 127, 500] {
            for _ in 0..200 {
                let b = rng.m_bonus(10, level, 128);
                assert!((0..=10).contains(&b));
            }
        }
        assert_eq!(rng.m_bonus(0, 50, 128), 0);
    }

    #[test]
    fn test_m_bonus_grows_with_level() {
        let mut rng = GameRng::new(5);
        let shallow: i32 = (0..500).map(|_| rng.m_bonus(10, 1, 128)).sum();
        let deep: i32 = (0..500).map(|_| rng.m_bonus(10, 120, 128)).sum();
        assert!(deep > shallow);
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.rn2(100), rng2.rn2(100));
            assert_eq!(rng1.range_f64(0.0, 1.0), rng2.range_f64(0.0, 1.0));
        }
    }

    #[test]
    fn test_zero_inputs() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.rn2(0), 0);
        assert_eq!(rng.simulate_division(10, 0), 0);
    }
}
