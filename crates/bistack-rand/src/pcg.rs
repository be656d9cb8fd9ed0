//! PCG-XSH-RR 64/32 generator.
//!
//! One 64-bit word of state, advanced by a fixed linear congruential step.
//! Each output is a xorshift of the high bits, rotated by the top five bits
//! of the pre-advance state. Output sequences are fully determined by the
//! seed and identical on every platform.

use rand_core::{impls, RngCore, SeedableRng};

/// LCG multiplier.
pub const MULTIPLIER: u64 = 6364136223846793005;
/// LCG increment. Odd, so the generator has full period.
pub const INCREMENT: u64 = 1442695040888963407;

/// Deterministic 32-bit generator with 64 bits of state.
///
/// `Pcg32` is a plain `Copy` value: the caller owns it and threads it through
/// every call. There is no hidden global generator. To persist a generator,
/// store [`state`](Self::state) and rebuild it with
/// [`from_state`](Self::from_state).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pcg32 {
    state: u64,
}

impl Pcg32 {
    /// Seed a generator.
    ///
    /// The state starts at `seed + INCREMENT` and one output is discarded so
    /// that nearby seeds diverge immediately.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            state: seed.wrapping_add(INCREMENT),
        };
        let _ = rng.next_u32();
        rng
    }

    /// Rebuild a generator from a previously saved [`state`](Self::state).
    pub fn from_state(state: u64) -> Self {
        Self { state }
    }

    /// The raw state word.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance one step and return 32 random bits.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = old.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform integer in `[min, max)` without modulo bias.
    ///
    /// Consumes exactly two outputs. The range is scaled into 64-bit
    /// products `range * r1` and `range * r2`; the high half of the first
    /// is the candidate and the carry out of `lo(first) + hi(second)` is
    /// added to it. No rejection loop.
    ///
    /// # Panics
    ///
    /// Panics if `min >= max`.
    pub fn uniform_u32(&mut self, min: u32, max: u32) -> u32 {
        assert!(min < max, "uniform_u32 requires min < max (got {min}..{max})");
        let range = u64::from(max - min);
        let m1 = range * u64::from(self.next_u32());
        let m2 = range * u64::from(self.next_u32());
        let hi = (m1 >> 32) as u32;
        let carry = ((m1 & 0xFFFF_FFFF) + (m2 >> 32)) >> 32;
        min + hi + carry as u32
    }

    /// Uniform integer in `[min, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `min >= max`.
    pub fn uniform_i32(&mut self, min: i32, max: i32) -> i32 {
        assert!(min < max, "uniform_i32 requires min < max (got {min}..{max})");
        let span = max.abs_diff(min);
        min.wrapping_add(self.uniform_u32(0, span) as i32)
    }

    /// Uniform float in `[0, 1)` with 24 bits of precision.
    pub fn uniform_f32_01(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
    }

    /// Uniform float in `[min, max)`.
    pub fn uniform_f32(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.uniform_f32_01()
    }

    /// `true` with probability `p`. Values of `p` outside `[0, 1]` saturate.
    pub fn probability(&mut self, p: f32) -> bool {
        self.uniform_f32_01() < p
    }

    /// Fair coin flip, taken from the top output bit.
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }
}

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        Pcg32::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Pcg32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_zero_reference_vector() {
        let mut rng = Pcg32::new(0);
        assert_eq!(rng.next_u32(), 3894649422);
        assert_eq!(rng.next_u32(), 2055130073);
        assert_eq!(rng.next_u32(), 2315086854);
    }

    #[test]
    fn seed_42_reference_vector() {
        let mut rng = Pcg32::new(42);
        assert_eq!(rng.state(), 10915315373440060052);
        assert_eq!(rng.next_u32(), 3270867926);
        assert_eq!(rng.next_u32(), 1795671209);
        assert_eq!(rng.next_u32(), 1924641435);
    }

    #[test]
    fn seeding_discards_first_output() {
        let rng = Pcg32::new(0);
        assert_eq!(rng.state(), 1876011003808476466);
    }

    #[test]
    fn state_round_trip_resumes_sequence() {
        let mut a = Pcg32::new(99);
        let _ = a.next_u32();
        let mut b = Pcg32::from_state(a.state());
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn uniform_u32_reference_vector() {
        let mut rng = Pcg32::new(0);
        let draws: Vec<u32> = (0..8).map(|_| rng.uniform_u32(0, 10)).collect();
        assert_eq!(draws, vec![9, 5, 8, 0, 8, 9, 8, 8]);
    }

    #[test]
    fn uniform_u32_consumes_two_outputs() {
        let mut a = Pcg32::new(3);
        let mut b = Pcg32::new(3);
        let _ = a.uniform_u32(0, 100);
        let _ = b.next_u32();
        let _ = b.next_u32();
        assert_eq!(a, b);
    }

    #[test]
    fn uniform_u32_covers_small_range() {
        let mut rng = Pcg32::new(1);
        let mut seen = [0u32; 7];
        for _ in 0..10_000 {
            let v = rng.uniform_u32(3, 10);
            assert!((3..10).contains(&v));
            seen[(v - 3) as usize] += 1;
        }
        assert!(seen.iter().all(|&n| n > 1000), "{seen:?}");
    }

    #[test]
    fn uniform_u32_full_range_stays_in_bounds() {
        let mut rng = Pcg32::new(5);
        for _ in 0..10_000 {
            assert!(rng.uniform_u32(0, u32::MAX) < u32::MAX);
            assert_eq!(rng.uniform_u32(u32::MAX - 1, u32::MAX), u32::MAX - 1);
        }
    }

    #[test]
    #[should_panic(expected = "min < max")]
    fn uniform_u32_rejects_empty_range() {
        Pcg32::new(0).uniform_u32(5, 5);
    }

    #[test]
    fn uniform_i32_handles_negative_and_extreme_ranges() {
        let mut rng = Pcg32::new(11);
        for _ in 0..10_000 {
            let v = rng.uniform_i32(-5, 5);
            assert!((-5..5).contains(&v));
            let w = rng.uniform_i32(i32::MIN, i32::MAX);
            assert!(w < i32::MAX);
        }
    }

    #[test]
    fn float_helpers_stay_in_range() {
        let mut rng = Pcg32::new(8);
        for _ in 0..10_000 {
            let f = rng.uniform_f32_01();
            assert!((0.0..1.0).contains(&f));
            let g = rng.uniform_f32(-2.0, 6.0);
            assert!((-2.0..6.0).contains(&g));
        }
    }

    #[test]
    fn uniform_f32_01_reference_value() {
        let mut rng = Pcg32::new(0);
        assert_eq!(rng.uniform_f32_01(), 0.9067937135696411);
    }

    #[test]
    fn probability_extremes() {
        let mut rng = Pcg32::new(2);
        for _ in 0..1000 {
            assert!(!rng.probability(0.0));
            assert!(rng.probability(1.0));
        }
    }

    #[test]
    fn next_bool_is_roughly_fair() {
        let mut rng = Pcg32::new(6);
        let heads = (0..10_000).filter(|_| rng.next_bool()).count();
        assert!((4_500..5_500).contains(&heads), "heads = {heads}");
    }

    #[test]
    fn seedable_rng_matches_new() {
        assert_eq!(Pcg32::seed_from_u64(77), Pcg32::new(77));
        assert_eq!(Pcg32::from_seed(77u64.to_le_bytes()), Pcg32::new(77));
    }

    #[test]
    fn rng_core_next_u64_is_two_draws() {
        let mut a = Pcg32::new(4);
        let mut b = Pcg32::new(4);
        let lo = u64::from(b.next_u32());
        let hi = u64::from(b.next_u32());
        assert_eq!(RngCore::next_u64(&mut a), (hi << 32) | lo);
    }
}
