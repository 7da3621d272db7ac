//! Numerical building blocks shared by the kernels.

pub mod fast_rng;

pub use fast_rng::{FastRng, FastRngKind, Pcg64, Xoshiro256PlusPlus};
