/// Errors raised synchronously by dice, games, and analyzers.
///
/// Nothing is retried or partially applied: the call that detects the
/// problem returns the error and leaves all state as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    /// Malformed input: duplicate or missing faces, unusable weights.
    InvalidArgument(String),
    /// A face that the die (or game) does not know about.
    NotFound(String),
    /// An operation that needs state which does not exist yet.
    InvalidState(String),
}

impl DiceError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
    pub fn missing(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
    pub fn state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
    /// Queries against a game that has never been played.
    pub fn unplayed() -> Self {
        Self::state("no game has been played yet")
    }
}

impl std::fmt::Display for DiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(s) => write!(f, "invalid argument: {}", s),
            Self::NotFound(s) => write!(f, "not found: {}", s),
            Self::InvalidState(s) => write!(f, "invalid state: {}", s),
        }
    }
}

impl std::error::Error for DiceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_kind() {
        assert_eq!(
            DiceError::invalid("faces must be distinct").to_string(),
            "invalid argument: faces must be distinct"
        );
        assert_eq!(DiceError::missing("7").to_string(), "not found: 7");
        assert_eq!(
            DiceError::unplayed().to_string(),
            "invalid state: no game has been played yet"
        );
    }
}
