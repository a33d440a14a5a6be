use super::counts::FaceCounts;
use super::multisets::Multisets;
use super::sequences::Sequences;
use super::tally::Tally;
use crate::DiceError;
use crate::Face;
use crate::Game;
use crate::Outcomes;

/// Descriptive statistics over the most recent play of one [`Game`].
///
/// Holds nothing but the borrow: every query recomputes from whatever
/// outcome table the game holds right now, and fails with
/// [`DiceError::InvalidState`] if the game was never played.
///
/// Face options come from the game's first die. Dice with other faces
/// violate that assumption; their foreign outcomes are skipped by
/// [`Analyzer::face_counts_per_roll`] and rejected as
/// [`DiceError::NotFound`] by the tallies.
#[derive(Debug)]
pub struct Analyzer<'a, F: Face> {
    game: &'a Game<F>,
}

impl<'a, F: Face> From<&'a Game<F>> for Analyzer<'a, F> {
    fn from(game: &'a Game<F>) -> Self {
        Self { game }
    }
}

impl<'a, F: Face> Analyzer<'a, F> {
    pub fn new(game: &'a Game<F>) -> Self {
        Self::from(game)
    }

    pub fn game(&self) -> &'a Game<F> {
        self.game
    }

    /// Rolls on which every die shows the same face.
    ///
    /// With a single die, every roll is a jackpot.
    pub fn jackpot_count(&self) -> Result<usize, DiceError> {
        let jackpots = self
            .outcomes()?
            .rows()
            .filter(|(_, row)| Self::distinct(row) == 1)
            .count();
        log::debug!("{:<32}{:<16}", "counted jackpots", jackpots);
        Ok(jackpots)
    }

    /// Per-roll occurrence count of every face option.
    pub fn face_counts_per_roll(&self) -> Result<FaceCounts<F>, DiceError> {
        let outcomes = self.outcomes()?;
        Ok(FaceCounts::tabulate(
            self.game.face_options(),
            outcomes.rows().map(|(_, row)| row),
        ))
    }

    /// Order-independent tally over every multiset of face options.
    ///
    /// One row per combination with repetition, C(faces + dice - 1, dice)
    /// in all, keyed by its faces in ascending order. Each roll is sorted
    /// and counted against its key, so counts add up to the number of rolls.
    pub fn combo_count(&self) -> Result<Tally<F>, DiceError> {
        let outcomes = self.outcomes()?;
        let ref faces = self.game.face_options();
        let keys = Multisets::from((faces.len(), self.game.dice_count()))
            .map(|indices| Self::pick(faces, &indices))
            .map(Self::sorted);
        let mut tally = Tally::zeroed(keys);
        for (_, row) in outcomes.rows() {
            tally.witness(&Self::sorted(row.to_vec()))?;
        }
        Ok(tally)
    }

    /// Tally over every ordered arrangement of face options, faces^dice in all.
    ///
    /// Rolls are looked up by their *sorted* outcome, exactly as
    /// [`Analyzer::combo_count`] does. Only arrangements already in
    /// ascending order can ever be counted; every other arrangement of
    /// the same faces stays at zero. See [`Analyzer::sequence_count`]
    /// for the tally that respects die order.
    pub fn permutation_count(&self) -> Result<Tally<F>, DiceError> {
        let outcomes = self.outcomes()?;
        let mut tally = self.arrangements();
        for (_, row) in outcomes.rows() {
            tally.witness(&Self::sorted(row.to_vec()))?;
        }
        Ok(tally)
    }

    /// Tally over every ordered arrangement of face options, matching each
    /// roll in die order, so that (1, 2) and (2, 1) are counted apart.
    pub fn sequence_count(&self) -> Result<Tally<F>, DiceError> {
        let outcomes = self.outcomes()?;
        let mut tally = self.arrangements();
        for (_, row) in outcomes.rows() {
            tally.witness(row)?;
        }
        Ok(tally)
    }

    fn outcomes(&self) -> Result<&'a Outcomes<F>, DiceError> {
        self.game.outcomes()
    }
    fn arrangements(&self) -> Tally<F> {
        let ref faces = self.game.face_options();
        Tally::zeroed(
            Sequences::from((faces.len(), self.game.dice_count()))
                .map(|indices| Self::pick(faces, &indices)),
        )
    }
    fn pick(faces: &[F], indices: &[usize]) -> Vec<F> {
        indices.iter().map(|&i| faces[i].clone()).collect()
    }
    fn sorted(mut faces: Vec<F>) -> Vec<F> {
        faces.sort();
        faces
    }
    fn distinct(row: &[F]) -> usize {
        row.iter().collect::<std::collections::HashSet<_>>().len()
    }
}
