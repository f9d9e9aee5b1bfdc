//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through GeneratorRng streams derived
//! from the single master seed on the run configuration.
//!
//! Each entity generator gets its own RNG stream, seeded deterministically
//! from (master_seed XOR generator_index). This means:
//!   - Adding a new generator never changes existing generators' streams.
//!   - Each stream is fully reproducible in isolation, so independent
//!     streams can be split across threads later without losing
//!     reproducibility.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG stream for a single entity generator.
pub struct GeneratorRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl GeneratorRng {
    /// Create a generator stream from the master seed and a stable
    /// slot index. The index must never change once assigned.
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

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Integer in [lo, hi], both ends inclusive.
    pub fn int_between(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo <= hi, "lo must be <= hi");
        lo + self.next_u64_below((hi - lo + 1) as u64) as i64
    }

    /// Float in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Index into a weight table, drawn proportionally to the weights.
    /// Weights need not sum to 1. Falls back to the last index on
    /// floating-point shortfall.
    pub fn weighted_index(&mut self, weights: &[f64]) -> usize {
        assert!(!weights.is_empty(), "weights must be non-empty");
        let total: f64 = weights.iter().sum();
        let roll = self.next_f64() * total;
        let mut cumulative = 0.0;
        for (i, w) in weights.iter().enumerate() {
            cumulative += w;
            if roll < cumulative {
                return i;
            }
        }
        weights.len() - 1
    }

    /// Uniform choice from a slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_u64_below(items.len() as u64) as usize]
    }

    /// Poisson draw (Knuth's product method). The mean must be positive:
    /// a non-positive mean is a broken distribution constant and fails
    /// loudly instead of clamping.
    pub fn poisson(&mut self, mean: f64) -> u64 {
        assert!(mean > 0.0, "poisson mean must be > 0, got {mean}");
        let limit = (-mean).exp();
        let mut k = 0u64;
        let mut p = 1.0;
        loop {
            p *= self.next_f64();
            if p <= limit {
                return k;
            }
            k += 1;
        }
    }
}

/// All generator RNG streams for a single run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_generator(&self, slot: GeneratorSlot) -> GeneratorRng {
        GeneratorRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable generator slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every generator's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum GeneratorSlot {
    Account = 0,
    User = 1,
    Subscription = 2,
    Billing = 3,
    Deal = 4,
    ProductEvent = 5,
    SupportTicket = 6,
    MarketingSpend = 7,
    // Add new generators here — append only.
}

impl GeneratorSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::User => "user",
            Self::Subscription => "subscription",
            Self::Billing => "billing",
            Self::Deal => "deal",
            Self::ProductEvent => "product_event",
            Self::SupportTicket => "support_ticket",
            Self::MarketingSpend => "marketing_spend",
        }
    }
}
