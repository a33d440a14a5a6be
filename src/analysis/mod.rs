//! Statistics over the latest outcomes of a [`crate::Game`].
//!
//! The [`Analyzer`] reads, never writes. Its enumerations ([`Multisets`],
//! [`Sequences`]) walk index space lazily and are mapped onto face options
//! only when a [`Tally`] is built.
mod analyzer;
mod counts;
mod multisets;
mod sequences;
mod tally;

pub use analyzer::*;
pub use counts::*;
pub use multisets::*;
pub use sequences::*;
pub use tally::*;

/// Binomial coefficient C(n, k). Zero when k > n, `None` when it overflows `usize`.
pub fn choose(n: usize, k: usize) -> Option<usize> {
    match k > n {
        true => Some(0),
        false => (0..k.min(n - k))
            .try_fold(1u128, |x, i| {
                x.checked_mul((n - i) as u128).map(|y| y / (i as u128 + 1))
            })
            .and_then(|x| usize::try_from(x).ok()),
    }
}
