//! Weighted dice, repeated games, and descriptive statistics over rolled outcomes.
//!
//! Three layers, each depending only on the one before it:
//!
//! - [`WeightedDie`] — a fixed set of distinct faces with mutable relative weights
//! - [`Game`] — an ordered set of shared dice, rolled together a fixed number of times
//! - [`Analyzer`] — read-only statistics over the most recent [`Outcomes`] of a [`Game`]
//!
//! ## Randomness
//!
//! Nothing here reaches for a process-wide generator. Every roll takes an explicit
//! [`rand::Rng`], so a seeded [`rand::rngs::SmallRng`] (see [`rng`]) makes whole
//! games reproducible.
//!
//! ## Statistics
//!
//! - [`Analyzer::jackpot_count`] — rolls where every die shows the same face
//! - [`Analyzer::face_counts_per_roll`] — per-roll occurrence counts as [`FaceCounts`]
//! - [`Analyzer::combo_count`] — order-independent [`Tally`] over [`Multisets`]
//! - [`Analyzer::permutation_count`] — [`Tally`] over [`Sequences`], matched by sorted roll
//! - [`Analyzer::sequence_count`] — [`Tally`] over [`Sequences`], matched in die order
pub mod analysis;
pub mod dice;
pub mod error;
pub mod game;

pub use analysis::*;
pub use dice::*;
pub use error::*;
pub use game::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Normalized selection chance of a face.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a random instance.
    fn random() -> Self;
}

// ============================================================================
// DICE PARAMETERS
// ============================================================================
/// Weight assigned to every face at construction.
pub const DEFAULT_WEIGHT: f64 = 1.0;
/// Number of draws performed by a bare roll.
pub const DEFAULT_ROLLS: usize = 1;
/// Seed used when a caller wants a reproducible run without picking one.
pub const MONTECARLO_SEED: u64 = 0x5EED;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Seeded small generator for deterministic games.
pub fn rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Initialize terminal logging at INFO.
#[cfg(feature = "logging")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    if simplelog::CombinedLogger::init(vec![term]).is_err() {
        log::warn!("logger already initialized");
    }
}
