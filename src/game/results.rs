use super::outcomes::Outcomes;
use super::record::Record;
use crate::Face;

/// The most recent outcome table, in the shape that was asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Results<'a, F: Face> {
    /// row = roll, column = die
    Wide(&'a Outcomes<F>),
    /// one record per (roll, die)
    Long(Vec<Record<F>>),
}

impl<'a, F: Face> Results<'a, F> {
    pub fn wide(self) -> Option<&'a Outcomes<F>> {
        match self {
            Self::Wide(outcomes) => Some(outcomes),
            Self::Long(_) => None,
        }
    }
    pub fn long(self) -> Option<Vec<Record<F>>> {
        match self {
            Self::Wide(_) => None,
            Self::Long(records) => Some(records),
        }
    }
    /// Number of rows in this shape.
    pub fn len(&self) -> usize {
        match self {
            Self::Wide(outcomes) => outcomes.n_rolls(),
            Self::Long(records) => records.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<F: Face> std::fmt::Display for Results<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Wide(outcomes) => write!(f, "{}", outcomes),
            Self::Long(records) => {
                writeln!(f, "{:<8}{:<8}{:>8}", "roll", "die", "face")?;
                records.iter().try_for_each(|r| writeln!(f, "{}", r))
            }
        }
    }
}
