/// Anything that can label the side of a die.
///
/// Faces of one die share a single type, so a die is homogeneous by
/// construction. `Ord` defines the canonical (sorted) order of a roll,
/// `Hash` keys the tallies, and `Display` renders tables.
pub trait Face: Clone + Ord + std::hash::Hash + std::fmt::Debug + std::fmt::Display {}

impl<T> Face for T where T: Clone + Ord + std::hash::Hash + std::fmt::Debug + std::fmt::Display {}
