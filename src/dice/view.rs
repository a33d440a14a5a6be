use super::face::Face;
use super::weight::Weight;

/// Read-only snapshot of a die's faces and weights, in face definition order.
///
/// Detached from the die it was taken from: later reweighting
/// does not show up here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DieView<F: Face>(Vec<(F, Weight)>);

impl<F: Face> DieView<F> {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, face: &F) -> Option<Weight> {
        self.0
            .iter()
            .find(|(f, _)| f == face)
            .map(|(_, w)| *w)
    }
    pub fn faces(&self) -> impl Iterator<Item = &F> + '_ {
        self.0.iter().map(|(f, _)| f)
    }
    pub fn weights(&self) -> impl Iterator<Item = Weight> + '_ {
        self.0.iter().map(|(_, w)| *w)
    }
    pub fn total(&self) -> f64 {
        self.weights().map(f64::from).sum()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(F, Weight)> + '_ {
        self.0.iter()
    }
}

impl<F: Face> From<Vec<(F, Weight)>> for DieView<F> {
    fn from(pairs: Vec<(F, Weight)>) -> Self {
        Self(pairs)
    }
}

impl<F: Face> IntoIterator for DieView<F> {
    type Item = (F, Weight);
    type IntoIter = std::vec::IntoIter<(F, Weight)>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<F: Face> std::fmt::Display for DieView<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<12}{:>12}", "face", "weight")?;
        for (face, weight) in self.iter() {
            writeln!(f, "{:<12}{:>12}", face.to_string(), weight.to_string())?;
        }
        Ok(())
    }
}
