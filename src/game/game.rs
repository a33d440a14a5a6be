use super::outcomes::Outcomes;
use super::results::Results;
use crate::DiceError;
use crate::Face;
use crate::Shared;

/// An ordered set of dice rolled together, remembering only the latest play.
///
/// Dice are held by [`Shared`] handle, never copied: reweighting a die
/// between plays changes what the next play draws, in this game and in
/// any other game holding the same die.
///
/// Every die is expected to carry the same faces as the first one. That
/// is assumed by [`Game::face_options`] and everything built on it, but
/// never checked.
#[derive(Debug, Clone)]
pub struct Game<F: Face> {
    dice: Vec<Shared<F>>,
    outcomes: Option<Outcomes<F>>,
}

impl<F: Face> Game<F> {
    pub fn new(dice: impl IntoIterator<Item = Shared<F>>) -> Self {
        Self {
            dice: dice.into_iter().collect(),
            outcomes: None,
        }
    }

    /// Rolls every die `n` times, in die order, and replaces the outcome table.
    ///
    /// Each die contributes one column of `n` independent draws. If any die
    /// cannot be rolled, the previous table is kept as it was.
    pub fn play<R>(&mut self, n: usize, rng: &mut R) -> Result<(), DiceError>
    where
        R: rand::Rng + ?Sized,
    {
        log::debug!("{:<32}{:<16}{:<16}", "playing game", n, self.dice.len());
        let columns = self
            .dice
            .iter()
            .enumerate()
            .map(|(i, die)| {
                let column = die.borrow().roll(n, rng)?;
                log::trace!("{:<32}{:<16}", "rolled die", i);
                Ok(column)
            })
            .collect::<Result<Vec<Vec<F>>, DiceError>>()?;
        self.outcomes = Some(Outcomes::from_columns(columns, n)?);
        Ok(())
    }

    /// The latest outcome table, wide (row = roll, column = die) or long
    /// (one row per (roll, die) pair).
    pub fn recent_results(&self, wide: bool) -> Result<Results<'_, F>, DiceError> {
        let outcomes = self.outcomes()?;
        match wide {
            true => Ok(Results::Wide(outcomes)),
            false => Ok(Results::Long(outcomes.long())),
        }
    }

    /// The latest outcome table in its native wide shape.
    pub fn outcomes(&self) -> Result<&Outcomes<F>, DiceError> {
        self.outcomes.as_ref().ok_or_else(DiceError::unplayed)
    }

    pub fn played(&self) -> bool {
        self.outcomes.is_some()
    }

    /// Faces of the first die, in its definition order. Empty without dice.
    pub fn face_options(&self) -> Vec<F> {
        self.dice
            .first()
            .map(|die| die.borrow().faces().to_vec())
            .unwrap_or_default()
    }

    pub fn dice_count(&self) -> usize {
        self.dice.len()
    }

    pub fn dice(&self) -> &[Shared<F>] {
        &self.dice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WeightedDie;
    use std::rc::Rc;

    fn fair(n: u8) -> Shared<u8> {
        WeightedDie::new(1..=n).unwrap().shared()
    }

    #[test]
    fn unplayed_results_fail() {
        let game = Game::new([fair(6), fair(6)]);
        assert!(!game.played());
        assert!(matches!(
            game.recent_results(true),
            Err(DiceError::InvalidState(_))
        ));
        assert!(matches!(
            game.recent_results(false),
            Err(DiceError::InvalidState(_))
        ));
    }

    #[test]
    fn wide_and_long_shapes() {
        let ref mut rng = crate::rng(9);
        let mut game = Game::new([fair(6), fair(6), fair(6)]);
        game.play(25, rng).unwrap();
        let wide = game.recent_results(true).unwrap().wide().unwrap();
        assert_eq!(wide.n_rolls(), 25);
        assert_eq!(wide.n_dice(), game.dice_count());
        let long = game.recent_results(false).unwrap().long().unwrap();
        assert_eq!(long.len(), 25 * 3);
        assert!(long.iter().all(|r| wide.get(r.roll, r.die) == Some(&r.face)));
    }

    #[test]
    fn zero_rolls_make_empty_table() {
        let ref mut rng = crate::rng(0);
        let mut game = Game::new([fair(4), fair(4)]);
        game.play(0, rng).unwrap();
        let wide = game.outcomes().unwrap();
        assert_eq!(wide.n_rolls(), 0);
        assert_eq!(wide.n_dice(), 2);
        assert!(game.recent_results(false).unwrap().is_empty());
    }

    #[test]
    fn play_replaces_previous_table() {
        let ref mut rng = crate::rng(2);
        let mut game = Game::new([fair(6)]);
        game.play(10, rng).unwrap();
        game.play(3, rng).unwrap();
        assert_eq!(game.outcomes().unwrap().n_rolls(), 3);
    }

    #[test]
    fn columns_follow_die_order() {
        let ref mut rng = crate::rng(4);
        let ones = WeightedDie::new(["x", "y"]).unwrap();
        let mut only_x = ones.clone();
        only_x.set_weight(&"y", 0.).unwrap();
        let mut only_y = ones;
        only_y.set_weight(&"x", 0.).unwrap();
        let mut game = Game::new([only_x.shared(), only_y.shared()]);
        game.play(20, rng).unwrap();
        let wide = game.outcomes().unwrap();
        assert_eq!(wide.column(0).unwrap(), vec!["x"; 20]);
        assert_eq!(wide.column(1).unwrap(), vec!["y"; 20]);
    }

    #[test]
    fn reweighting_shared_die_affects_next_play() {
        let ref mut rng = crate::rng(6);
        let coin = WeightedDie::new(["H", "T"]).unwrap().shared();
        let mut game = Game::new([Rc::clone(&coin), Rc::clone(&coin)]);
        coin.borrow_mut().set_weight(&"H", 0.).unwrap();
        game.play(30, rng).unwrap();
        assert!(game.outcomes().unwrap().rows().all(|(_, r)| r == ["T", "T"]));
        coin.borrow_mut().set_weight(&"H", 1.).unwrap();
        coin.borrow_mut().set_weight(&"T", 0.).unwrap();
        game.play(30, rng).unwrap();
        assert!(game.outcomes().unwrap().rows().all(|(_, r)| r == ["H", "H"]));
    }

    #[test]
    fn plays_with_maximal_weights() {
        let ref mut rng = crate::rng(1);
        let coin = WeightedDie::new(["H", "T"]).unwrap().shared();
        coin.borrow_mut().set_weight(&"H", f64::MAX).unwrap();
        coin.borrow_mut().set_weight(&"T", f64::MAX).unwrap();
        let mut game = Game::new([Rc::clone(&coin), Rc::clone(&coin)]);
        game.play(20, rng).unwrap();
        assert_eq!(game.outcomes().unwrap().n_rolls(), 20);
    }

    #[test]
    fn failed_play_keeps_previous_table() {
        let ref mut rng = crate::rng(8);
        let coin = WeightedDie::new(["H", "T"]).unwrap().shared();
        let mut game = Game::new([Rc::clone(&coin)]);
        game.play(5, rng).unwrap();
        coin.borrow_mut().set_weight(&"H", 0.).unwrap();
        coin.borrow_mut().set_weight(&"T", 0.).unwrap();
        assert!(matches!(game.play(5, rng), Err(DiceError::InvalidState(_))));
        assert_eq!(game.outcomes().unwrap().n_rolls(), 5);
    }

    #[test]
    fn face_options_come_from_first_die() {
        let first = WeightedDie::new([3, 1, 2]).unwrap().shared();
        let game = Game::new([first, fair(6)]);
        assert_eq!(game.face_options(), vec![3, 1, 2]);
        assert_eq!(game.dice_count(), 2);
    }

    #[test]
    fn diceless_game() {
        let ref mut rng = crate::rng(10);
        let mut game = Game::<u8>::new([]);
        assert!(game.face_options().is_empty());
        game.play(4, rng).unwrap();
        let wide = game.outcomes().unwrap();
        assert_eq!(wide.n_rolls(), 4);
        assert_eq!(wide.n_dice(), 0);
    }
}
