use crate::Face;

/// One cell of the long-form outcome table, keyed by (roll, die).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record<F: Face> {
    pub roll: usize,
    pub die: usize,
    pub face: F,
}

impl<F: Face> Record<F> {
    pub fn new(roll: usize, die: usize, face: F) -> Self {
        Self { roll, die, face }
    }
    pub fn key(&self) -> (usize, usize) {
        (self.roll, self.die)
    }
}

impl<F: Face> std::fmt::Display for Record<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<8}{:<8}{:>8}", self.roll, self.die, self.face.to_string())
    }
}
