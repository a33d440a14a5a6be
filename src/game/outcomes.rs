use super::record::Record;
use crate::DiceError;
use crate::Face;

/// Wide outcome table: one row per roll, one column per die.
///
/// Rolls are numbered from 1, dice from 0. The column count is kept
/// explicitly so that a zero-roll game still knows how many dice it had.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Outcomes<F: Face> {
    dice: usize,
    rows: Vec<Vec<F>>,
}

impl<F: Face> Outcomes<F> {
    /// Transposes per-die columns (each `n` draws long) into roll rows.
    ///
    /// Fails if any column holds a different number of draws than `n`.
    pub fn from_columns(columns: Vec<Vec<F>>, n: usize) -> Result<Self, DiceError> {
        if let Some(i) = columns.iter().position(|c| c.len() != n) {
            return Err(DiceError::invalid(format!(
                "die {} has {} outcomes, expected {}",
                i,
                columns[i].len(),
                n
            )));
        }
        let dice = columns.len();
        let rows = (0..n)
            .map(|r| columns.iter().map(|c| c[r].clone()).collect())
            .collect();
        Ok(Self { dice, rows })
    }
    pub fn n_rolls(&self) -> usize {
        self.rows.len()
    }
    pub fn n_dice(&self) -> usize {
        self.dice
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    /// Outcomes of one roll across all dice, by 1-based roll number.
    pub fn row(&self, roll: usize) -> Option<&[F]> {
        roll.checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(Vec::as_slice)
    }
    /// Every outcome of one die, in roll order.
    pub fn column(&self, die: usize) -> Option<Vec<F>> {
        (die < self.dice).then(|| self.rows.iter().map(|r| r[die].clone()).collect())
    }
    pub fn get(&self, roll: usize, die: usize) -> Option<&F> {
        self.row(roll).and_then(|r| r.get(die))
    }
    /// (roll number, outcomes) in roll order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[F])> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, r)| (i + 1, r.as_slice()))
    }
    /// Long form: one record per (roll, die), grouped by die, then by roll.
    pub fn long(&self) -> Vec<Record<F>> {
        (0..self.dice)
            .flat_map(move |die| {
                self.rows()
                    .map(move |(roll, r)| Record::new(roll, die, r[die].clone()))
            })
            .collect()
    }
}

impl<F: Face> std::fmt::Display for Outcomes<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<8}", "roll")?;
        for die in 0..self.dice {
            write!(f, "{:>8}", die)?;
        }
        writeln!(f)?;
        for (roll, r) in self.rows() {
            write!(f, "{:<8}", roll)?;
            for face in r {
                write!(f, "{:>8}", face.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Outcomes<char> {
        Outcomes::from_columns(vec![vec!['a', 'b', 'c'], vec!['x', 'y', 'z']], 3).unwrap()
    }

    #[test]
    fn transposes_columns() {
        let t = table();
        assert_eq!(t.n_rolls(), 3);
        assert_eq!(t.n_dice(), 2);
        assert_eq!(t.row(1), Some(&['a', 'x'][..]));
        assert_eq!(t.row(3), Some(&['c', 'z'][..]));
        assert_eq!(t.row(0), None);
        assert_eq!(t.row(4), None);
        assert_eq!(t.column(1), Some(vec!['x', 'y', 'z']));
        assert_eq!(t.column(2), None);
        assert_eq!(t.get(2, 0), Some(&'b'));
    }

    #[test]
    fn long_form_is_die_major() {
        let long = table().long();
        assert_eq!(long.len(), 6);
        assert_eq!(long[0], Record::new(1, 0, 'a'));
        assert_eq!(long[2], Record::new(3, 0, 'c'));
        assert_eq!(long[3], Record::new(1, 1, 'x'));
        assert_eq!(long[5], Record::new(3, 1, 'z'));
    }

    #[test]
    fn zero_rolls_keep_dice() {
        let t = Outcomes::<u8>::from_columns(vec![vec![], vec![], vec![]], 0).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.n_dice(), 3);
        assert!(t.long().is_empty());
    }

    #[test]
    fn ragged_columns_rejected() {
        assert!(matches!(
            Outcomes::from_columns(vec![vec![1u8, 2, 3], vec![4]], 3),
            Err(DiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            Outcomes::from_columns(vec![vec![1u8, 2]], 3),
            Err(DiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            Outcomes::from_columns(vec![vec![1u8, 2, 3, 4]], 3),
            Err(DiceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn display_has_header_and_rows() {
        let text = table().to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().next().unwrap().starts_with("roll"));
    }
}
