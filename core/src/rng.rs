//! Deterministic random number generation.
//!
//! RULE: Nothing in the projection may call any platform RNG.
//! All randomness flows through a `RandomSource` handed to the engine,
//! normally a `StreamRng` derived from the run's master seed.
//!
//! Each random step gets its own stream, seeded from
//! (master_seed XOR slot_index * golden-ratio constant). Adding a new
//! random step never shifts an existing step's stream.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// The one seam through which the engine draws randomness.
///
/// Tests implement this with scripted draws to pin the exact year a
/// breakthrough fires.
pub trait RandomSource {
    /// Roll a float in [0.0, 1.0).
    fn next_f64(&mut self) -> f64;

    /// Roll a percentage in [0.0, 100.0).
    fn next_percent(&mut self) -> f64 {
        self.next_f64() * 100.0
    }
}

/// A named, deterministic RNG for a single projection step.
pub struct StreamRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl StreamRng {
    /// Create a stream RNG from the master seed and a stable slot index.
    /// The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl RandomSource for StreamRng {
    fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// All stream RNGs for a single run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_slot(&self, slot: StreamSlot) -> StreamRng {
        StreamRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries, only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Breakthrough = 0,
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Breakthrough => "breakthrough",
        }
    }
}
