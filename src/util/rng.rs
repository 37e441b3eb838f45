//! Seeded pseudo-random source for sequence generation.
//!
//! The sweep owns exactly one [`SweepRng`] and threads it through every
//! generation call, so a fixed seed reproduces every input of a run.
//! Values follow the C `rand()` contract (`0..=RAND_MAX`), which keeps the
//! modulus-based generators' bias toward small values and duplicates.

/// Largest value returned by [`SweepRng::next_raw`].
pub const RAND_MAX: u32 = 0x7fff_ffff;

/// Deterministic, single-owner random source.
#[derive(Debug, Clone)]
pub struct SweepRng {
    rng: fastrand::Rng,
    seed: u64,
}

impl SweepRng {
    /// Creates a source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            seed,
        }
    }

    /// Seed this source was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Next value in `0..=RAND_MAX`.
    pub fn next_raw(&mut self) -> u32 {
        self.rng.u32(..=RAND_MAX)
    }

    /// `next_raw() % bound`; `bound` must be non-zero.
    pub fn below(&mut self, bound: u64) -> u32 {
        debug_assert!(bound > 0, "modulus must be non-zero");
        let raw = u64::from(self.next_raw()) % bound;
        // raw < 2^31, so it always fits.
        u32::try_from(raw).unwrap_or(RAND_MAX)
    }

    /// Derives an independent stream, deterministically, from this seed.
    ///
    /// Forking does not advance `self`.
    #[must_use]
    pub fn fork(&self, stream: u64) -> Self {
        let child = self
            .seed
            .wrapping_add(0x9e37_79b9_7f4a_7c15)
            .wrapping_add(stream.wrapping_mul(0x517c_c1b7_2722_0a95));
        Self::new(mix_seed(child))
    }
}

fn mix_seed(mut seed: u64) -> u64 {
    seed ^= seed >> 30;
    seed = seed.wrapping_mul(0xbf58_476d_1ce4_e5b9);
    seed ^= seed >> 27;
    seed = seed.wrapping_mul(0x94d0_49bb_1331_11eb);
    seed ^= seed >> 31;
    seed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_test(name: &str) {
        crate::test_utils::init_test_logging();
        crate::test_phase!(name);
    }

    #[test]
    fn same_seed_same_stream() {
        init_test("same_seed_same_stream");
        let mut a = SweepRng::new(42);
        let mut b = SweepRng::new(42);
        let xs: Vec<u32> = (0..64).map(|_| a.next_raw()).collect();
        let ys: Vec<u32> = (0..64).map(|_| b.next_raw()).collect();
        crate::assert_with_log!(xs == ys, "streams equal", &xs, &ys);
        crate::test_complete!("same_seed_same_stream");
    }

    #[test]
    fn raw_values_respect_rand_max_and_modulus() {
        init_test("raw_values_respect_rand_max_and_modulus");
        let mut rng = SweepRng::new(7);
        for k in 0..256_u64 {
            let raw = rng.next_raw();
            crate::assert_with_log!(raw <= RAND_MAX, "raw bound", RAND_MAX, raw);
            let v = rng.below(k + 1);
            crate::assert_with_log!(u64::from(v) <= k, "below bound", k, v);
        }
        let zero = rng.below(1);
        crate::assert_with_log!(zero == 0, "modulus one", 0, zero);
        crate::test_complete!("raw_values_respect_rand_max_and_modulus");
    }

    #[test]
    fn fork_is_deterministic_and_distinct() {
        init_test("fork_is_deterministic_and_distinct");
        let root = SweepRng::new(42);
        let mut f1 = root.fork(1);
        let mut f1_again = root.fork(1);
        let mut f2 = root.fork(2);
        let a = f1.next_raw();
        let b = f1_again.next_raw();
        crate::assert_with_log!(a == b, "fork repeatable", a, b);
        let differs = f1.seed() != f2.seed();
        crate::assert_with_log!(differs, "fork streams differ", true, differs);
        let _ = f2.next_raw();
        crate::test_complete!("fork_is_deterministic_and_distinct");
    }
}
