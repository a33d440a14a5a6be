use crate::Arbitrary;
use crate::DEFAULT_WEIGHT;
use crate::DiceError;

/// Relative selection weight of a face.
///
/// Weights are never normalized: a face's chance is its weight over the
/// sum of all weights on the die at the time of the draw. Any finite,
/// non-negative real is accepted, including zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Weight(f64);

impl Weight {
    pub fn value(&self) -> f64 {
        self.0
    }
    pub fn is_zero(&self) -> bool {
        self.0 == 0.
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self(DEFAULT_WEIGHT)
    }
}

impl From<Weight> for f64 {
    fn from(w: Weight) -> Self {
        w.0
    }
}

impl TryFrom<f64> for Weight {
    type Error = DiceError;
    fn try_from(x: f64) -> Result<Self, Self::Error> {
        match x.is_finite() && x >= 0. {
            // abs folds -0.0 into 0.0
            true => Ok(Self(x.abs())),
            false => Err(DiceError::invalid(format!(
                "weight must be a non-negative real number, got {}",
                x
            ))),
        }
    }
}

impl TryFrom<i64> for Weight {
    type Error = DiceError;
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::try_from(n as f64)
    }
}

/// str parsing, for weights that arrive as text
impl TryFrom<&str> for Weight {
    type Error = DiceError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .parse::<f64>()
            .map_err(|_| DiceError::invalid(format!("weight {:?} is not numeric", s)))
            .and_then(Self::try_from)
    }
}

impl std::str::FromStr for Weight {
    type Err = DiceError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Arbitrary for Weight {
    fn random() -> Self {
        Self(rand::random_range(0.5..2.))
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
