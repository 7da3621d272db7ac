//! Seedable uniform generators owned by a single estimator call.
//!
//! Every generator here is a plain value: callers construct one from a seed,
//! draw from it, and drop it. Nothing is shared between calls or threads, so two
//! calls with the same kind and seed see the same stream.

use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::{Deserialize, Serialize};

/// Generator family backing a [`FastRng`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FastRngKind {
    /// xoshiro256++ (Blackman and Vigna).
    #[default]
    Xoshiro256PlusPlus,
    /// PCG XSL-RR 128/64.
    Pcg64,
    /// `rand`'s standard cryptographically strong generator.
    StdRng,
}

impl FastRngKind {
    /// Short label for bench ids and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xoshiro256PlusPlus => "xoshiro256pp",
            Self::Pcg64 => "pcg64",
            Self::StdRng => "std_rng",
        }
    }
}

/// Top 53 bits of `x` mapped onto `[0, 1)`.
#[inline(always)]
fn unit_f64(x: u64) -> f64 {
    (x >> 11) as f64 * (1.0 / ((1_u64 << 53) as f64))
}

/// xoshiro256++ with SplitMix64 seed expansion.
#[derive(Debug, Clone)]
pub struct Xoshiro256PlusPlus {
    state: [u64; 4],
}

impl Xoshiro256PlusPlus {
    #[inline]
    pub fn seed_from_u64(seed: u64) -> Self {
        let mut sm = SplitMix64::new(seed);
        let mut state = [0_u64; 4];
        for word in &mut state {
            *word = sm.next_u64();
        }
        // All-zero is the one state xoshiro cannot leave.
        if state.iter().all(|&w| w == 0) {
            state[0] = 1;
        }
        Self { state }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s = &mut self.state;
        let out = s[0].wrapping_add(s[3]).rotate_left(23).wrapping_add(s[0]);
        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];
        s[2] ^= t;
        s[3] = s[3].rotate_left(45);

        out
    }

    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        unit_f64(self.next_u64())
    }
}

/// PCG XSL-RR 128/64, seeded state and odd stream increment via SplitMix64.
#[derive(Debug, Clone)]
pub struct Pcg64 {
    state: u128,
    inc: u128,
}

impl Pcg64 {
    const MULTIPLIER: u128 = 47026247687942121848144207491837523525;

    #[inline]
    pub fn seed_from_u64(seed: u64) -> Self {
        let mut sm = SplitMix64::new(seed);
        let hi = sm.next_u64() as u128;
        let lo = sm.next_u64() as u128;
        let stream = sm.next_u64() as u128;

        let mut rng = Self {
            state: (hi << 64) | lo,
            inc: (stream << 1) | 1,
        };
        rng.next_u64();
        rng
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let old = self.state;
        self.state = old.wrapping_mul(Self::MULTIPLIER).wrapping_add(self.inc);

        let xorshifted = ((old >> 64) ^ old) as u64;
        let rot = (old >> 122) as u32;
        xorshifted.rotate_right(rot)
    }

    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        unit_f64(self.next_u64())
    }
}

/// A locally-owned uniform generator of one of the [`FastRngKind`] families.
#[derive(Debug)]
pub enum FastRng {
    Xoshiro256PlusPlus(Xoshiro256PlusPlus),
    Pcg64(Pcg64),
    StdRng(StdRng),
}

impl FastRng {
    #[inline]
    pub fn from_seed(kind: FastRngKind, seed: u64) -> Self {
        match kind {
            FastRngKind::Xoshiro256PlusPlus => {
                Self::Xoshiro256PlusPlus(Xoshiro256PlusPlus::seed_from_u64(seed))
            }
            FastRngKind::Pcg64 => Self::Pcg64(Pcg64::seed_from_u64(seed)),
            FastRngKind::StdRng => Self::StdRng(StdRng::seed_from_u64(seed)),
        }
    }

    #[inline]
    pub fn kind(&self) -> FastRngKind {
        match self {
            Self::Xoshiro256PlusPlus(_) => FastRngKind::Xoshiro256PlusPlus,
            Self::Pcg64(_) => FastRngKind::Pcg64,
            Self::StdRng(_) => FastRngKind::StdRng,
        }
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn random_f64(&mut self) -> f64 {
        match self {
            Self::Xoshiro256PlusPlus(rng) => rng.next_f64(),
            Self::Pcg64(rng) => rng.next_f64(),
            Self::StdRng(rng) => rng.random::<f64>(),
        }
    }

    #[inline]
    pub fn random_u64(&mut self) -> u64 {
        match self {
            Self::Xoshiro256PlusPlus(rng) => rng.next_u64(),
            Self::Pcg64(rng) => rng.next_u64(),
            Self::StdRng(rng) => rng.random::<u64>(),
        }
    }

    /// Fills `out` with consecutive uniform draws in `[0, 1)`.
    ///
    /// Consumes exactly `out.len()` draws, in slice order, so a bulk fill and
    /// the same number of [`random_f64`](Self::random_f64) calls agree.
    pub fn fill_uniform(&mut self, out: &mut [f64]) {
        match self {
            Self::Xoshiro256PlusPlus(rng) => {
                for u in out.iter_mut() {
                    *u = rng.next_f64();
                }
            }
            Self::Pcg64(rng) => {
                for u in out.iter_mut() {
                    *u = rng.next_f64();
                }
            }
            Self::StdRng(rng) => {
                for u in out.iter_mut() {
                    *u = StandardUniform.sample(rng);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    #[inline]
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [FastRngKind; 3] = [
        FastRngKind::Xoshiro256PlusPlus,
        FastRngKind::Pcg64,
        FastRngKind::StdRng,
    ];

    #[test]
    fn same_seed_reproduces_sequence_for_every_kind() {
        for kind in ALL_KINDS {
            let mut a = FastRng::from_seed(kind, 42);
            let mut b = FastRng::from_seed(kind, 42);
            for _ in 0..128 {
                assert_eq!(a.random_u64(), b.random_u64(), "{kind:?}");
            }
        }
    }

    #[test]
    fn different_seeds_diverge() {
        for kind in ALL_KINDS {
            let mut a = FastRng::from_seed(kind, 1);
            let mut b = FastRng::from_seed(kind, 2);
            let same = (0..16).filter(|_| a.random_u64() == b.random_u64()).count();
            assert!(same < 16, "{kind:?}");
        }
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        for kind in ALL_KINDS {
            let mut rng = FastRng::from_seed(kind, 7);
            for _ in 0..10_000 {
                let u = rng.random_f64();
                assert!((0.0..1.0).contains(&u), "{kind:?} produced {u}");
            }
        }
    }

    #[test]
    fn fill_uniform_matches_sequential_draws() {
        for kind in ALL_KINDS {
            let mut bulk = FastRng::from_seed(kind, 101);
            let mut seq = FastRng::from_seed(kind, 101);
            let mut buf = vec![0.0; 64];
            bulk.fill_uniform(&mut buf);
            for &u in &buf {
                assert_eq!(u.to_bits(), seq.random_f64().to_bits(), "{kind:?}");
            }
        }
    }

    #[test]
    fn zero_seed_is_usable() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn std_rng_generator_is_moved_not_copied() {
        fn drain(mut rng: FastRng, n: usize) -> Vec<u64> {
            (0..n).map(|_| rng.random_u64()).collect()
        }
        let rng = FastRng::from_seed(FastRngKind::StdRng, 101);
        assert_eq!(rng.kind(), FastRngKind::StdRng);
        let moved = drain(rng, 8);
        assert_eq!(moved, drain(FastRng::from_seed(FastRngKind::StdRng, 101), 8));
    }

    #[test]
    fn kind_round_trips_through_from_seed() {
        for kind in ALL_KINDS {
            assert_eq!(FastRng::from_seed(kind, 3).kind(), kind);
        }
    }
}
