use super::face::Face;
use super::view::DieView;
use super::weight::Weight;
use crate::Arbitrary;
use crate::DiceError;
use crate::Probability;
use std::cell::RefCell;
use std::rc::Rc;

/// Handle through which games hold their dice.
///
/// Several games (or several slots of one game) may point at the same die.
/// Reweighting it through any handle changes every subsequent roll that
/// goes through any other handle.
pub type Shared<F> = Rc<RefCell<WeightedDie<F>>>;

/// A die with a fixed set of distinct faces and mutable relative weights.
///
/// Faces are decided once at construction and never change. Weights run
/// parallel to faces, start at [`crate::DEFAULT_WEIGHT`], and may be
/// replaced one face at a time via [`WeightedDie::set_weight`].
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedDie<F: Face> {
    faces: Vec<F>,
    weights: Vec<Weight>,
}

impl<F: Face> WeightedDie<F> {
    /// Creates a die with every face weighted equally.
    ///
    /// Fails if there are no faces, or if any two faces are equal.
    pub fn new(faces: impl IntoIterator<Item = F>) -> Result<Self, DiceError> {
        let faces = faces.into_iter().collect::<Vec<F>>();
        if faces.is_empty() {
            return Err(DiceError::invalid("a die needs at least one face"));
        }
        let twin = {
            let ref mut seen = std::collections::HashSet::with_capacity(faces.len());
            faces.iter().find(|face| !seen.insert(*face)).cloned()
        };
        if let Some(twin) = twin {
            return Err(DiceError::invalid(format!(
                "face {} appears more than once",
                twin
            )));
        }
        log::debug!("{:<32}{:<16}", "creating die with faces", faces.len());
        let weights = vec![Weight::default(); faces.len()];
        Ok(Self { faces, weights })
    }

    /// Moves the die behind a [`Shared`] handle.
    pub fn shared(self) -> Shared<F> {
        Rc::new(RefCell::new(self))
    }

    pub fn faces(&self) -> &[F] {
        &self.faces
    }
    pub fn n(&self) -> usize {
        self.faces.len()
    }
    pub fn weight(&self, face: &F) -> Option<Weight> {
        self.index(face).map(|i| self.weights[i])
    }
    /// Sum of all current weights. May be infinite when huge weights add up.
    pub fn total(&self) -> f64 {
        self.weights.iter().copied().map(f64::from).sum()
    }
    /// Chance that a single draw shows this face. Zero on a die with no weight at all.
    pub fn probability(&self, face: &F) -> Option<Probability> {
        let i = self.index(face)?;
        let relative = self.relative();
        let total = relative.iter().sum::<f64>();
        Some(if total > 0. { relative[i] / total } else { 0. })
    }

    /// Replaces the weight of one face, leaving all others untouched.
    ///
    /// The face is looked up first, so an unknown face is reported as
    /// [`DiceError::NotFound`] even when the weight is also unusable.
    pub fn set_weight<W>(&mut self, face: &F, weight: W) -> Result<(), DiceError>
    where
        W: TryInto<Weight, Error = DiceError>,
    {
        let i = self
            .index(face)
            .ok_or_else(|| DiceError::missing(format!("face {} is not on this die", face)))?;
        let weight = weight.try_into()?;
        log::debug!("{:<32}{:<16}{:<16}", "reweighting face", face, weight);
        self.weights[i] = weight;
        Ok(())
    }

    /// Draws `n` faces independently, with replacement, proportional to weight.
    ///
    /// Outcomes come back in draw order. Fails only when there is something
    /// to draw and every weight is zero.
    pub fn roll<R>(&self, n: usize, rng: &mut R) -> Result<Vec<F>, DiceError>
    where
        R: rand::Rng + ?Sized,
    {
        use rand::distr::Distribution;
        use rand::distr::weighted::WeightedIndex;
        if n == 0 {
            return Ok(Vec::new());
        }
        let index = WeightedIndex::new(self.relative()).map_err(|e| {
            log::warn!("{:<32}{}", "die is not rollable", e);
            DiceError::state(format!("die cannot be rolled: {}", e))
        })?;
        Ok((0..n)
            .map(|_| index.sample(rng))
            .map(|i| self.faces[i].clone())
            .collect())
    }

    /// A single weighted draw.
    pub fn roll_one<R>(&self, rng: &mut R) -> Result<F, DiceError>
    where
        R: rand::Rng + ?Sized,
    {
        self.roll(crate::DEFAULT_ROLLS, rng)?
            .into_iter()
            .next()
            .ok_or_else(|| DiceError::state("roll produced no outcome"))
    }

    /// Snapshot of (face, weight) pairs in face definition order.
    pub fn view(&self) -> DieView<F> {
        self.faces
            .iter()
            .cloned()
            .zip(self.weights.iter().copied())
            .collect::<Vec<_>>()
            .into()
    }

    fn index(&self, face: &F) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }
    /// Weights divided by the largest one, so their sum stays finite.
    fn relative(&self) -> Vec<f64> {
        let max = self.weights.iter().map(Weight::value).fold(0., f64::max);
        self.weights
            .iter()
            .map(|w| if max > 0. { w.value() / max } else { 0. })
            .collect()
    }
}

/// a standard six-sided die with random weights
impl Arbitrary for WeightedDie<u8> {
    fn random() -> Self {
        Self {
            faces: (1..=6).collect(),
            weights: (1..=6).map(|_| Weight::random()).collect(),
        }
    }
}

impl<F: Face> std::fmt::Display for WeightedDie<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.view())
    }
}
