use crate::Face;

/// How many dice showed each face, roll by roll.
///
/// One row per roll (numbered from 1), one column per face option in
/// face definition order. With every die sharing the same faces, each
/// row sums to the number of dice.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FaceCounts<F: Face> {
    faces: Vec<F>,
    rows: Vec<Vec<usize>>,
}

impl<F: Face> FaceCounts<F> {
    /// Counts each face option within each roll.
    pub fn tabulate<'a>(faces: Vec<F>, rolls: impl Iterator<Item = &'a [F]>) -> Self
    where
        F: 'a,
    {
        let rows = rolls
            .map(|roll| {
                faces
                    .iter()
                    .map(|face| roll.iter().filter(|f| *f == face).count())
                    .collect()
            })
            .collect();
        Self { faces, rows }
    }
    pub fn faces(&self) -> &[F] {
        &self.faces
    }
    pub fn n_rolls(&self) -> usize {
        self.rows.len()
    }
    /// Counts for one roll, by 1-based roll number, aligned with [`FaceCounts::faces`].
    pub fn row(&self, roll: usize) -> Option<&[usize]> {
        roll.checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(Vec::as_slice)
    }
    pub fn count(&self, roll: usize, face: &F) -> Option<usize> {
        let column = self.faces.iter().position(|f| f == face)?;
        self.row(roll).map(|r| r[column])
    }
    /// (roll number, counts) in roll order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, r)| (i + 1, r.as_slice()))
    }
}

impl<F: Face> std::fmt::Display for FaceCounts<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<8}", "roll")?;
        for face in self.faces.iter() {
            write!(f, "{:>8}", face.to_string())?;
        }
        writeln!(f)?;
        for (roll, counts) in self.rows() {
            write!(f, "{:<8}", roll)?;
            for n in counts {
                write!(f, "{:>8}", n)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_faces_per_roll() {
        let rolls = vec![vec!["H", "H", "T"], vec!["T", "T", "T"]];
        let counts = FaceCounts::tabulate(vec!["H", "T"], rolls.iter().map(Vec::as_slice));
        assert_eq!(counts.n_rolls(), 2);
        assert_eq!(counts.row(1), Some(&[2, 1][..]));
        assert_eq!(counts.row(2), Some(&[0, 3][..]));
        assert_eq!(counts.count(2, &"H"), Some(0));
        assert_eq!(counts.count(1, &"E"), None);
    }

    #[test]
    fn unknown_outcomes_are_not_counted() {
        let rolls = vec![vec![1, 9]];
        let counts = FaceCounts::tabulate(vec![1, 2], rolls.iter().map(Vec::as_slice));
        assert_eq!(counts.row(1), Some(&[1, 0][..]));
    }
}
