use crate::DiceError;
use crate::Face;
use std::collections::HashMap;

/// Counts of rolled outcomes against a fixed, enumerated set of keys.
///
/// Every enumerated key has exactly one row, in enumeration order, whether
/// or not it was ever rolled. Counting goes through a key → row index, so
/// incrementing never scans the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tally<F: Face> {
    rows: Vec<(Vec<F>, usize)>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<Vec<F>, usize>,
}

impl<F: Face> Tally<F> {
    /// Zero-count rows for each key. Repeated keys collapse onto their first row.
    pub fn zeroed(keys: impl IntoIterator<Item = Vec<F>>) -> Self {
        let mut rows = Vec::new();
        let mut index = HashMap::new();
        for key in keys {
            if !index.contains_key(&key) {
                index.insert(key.clone(), rows.len());
                rows.push((key, 0));
            }
        }
        Self { rows, index }
    }

    /// Adds one observation of `key`. Keys outside the enumeration are an error.
    pub fn witness(&mut self, key: &[F]) -> Result<(), DiceError> {
        let i = *self.index.get(key).ok_or_else(|| {
            DiceError::missing(format!(
                "{} is not among the enumerated outcomes",
                Self::label(key)
            ))
        })?;
        self.rows[i].1 += 1;
        Ok(())
    }

    pub fn get(&self, key: &[F]) -> Option<usize> {
        self.index.get(key).map(|&i| self.rows[i].1)
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    /// sum of all counts
    pub fn total(&self) -> usize {
        self.rows.iter().map(|(_, n)| n).sum()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&[F], usize)> + '_ {
        self.rows.iter().map(|(k, n)| (k.as_slice(), *n))
    }
    pub fn keys(&self) -> impl Iterator<Item = &[F]> + '_ {
        self.rows.iter().map(|(k, _)| k.as_slice())
    }
    /// rows that were rolled at least once
    pub fn nonzero(&self) -> impl Iterator<Item = (&[F], usize)> + '_ {
        self.iter().filter(|(_, n)| *n > 0)
    }

    /// `[a, b, c]`
    pub fn label(key: &[F]) -> String {
        format!(
            "[{}]",
            key.iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl<F: Face> std::fmt::Display for Tally<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let width = self
            .keys()
            .map(|k| Self::label(k).len())
            .max()
            .unwrap_or(0)
            .max(8)
            + 2;
        writeln!(f, "{:<w$}{:>8}", "outcome", "count", w = width)?;
        for (key, n) in self.iter() {
            writeln!(f, "{:<w$}{:>8}", Self::label(key), n, w = width)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> Vec<Vec<char>> {
        vec![vec!['a', 'a'], vec!['a', 'b'], vec!['b', 'b']]
    }

    #[test]
    fn starts_at_zero_in_order() {
        let tally = Tally::zeroed(keys());
        assert_eq!(tally.len(), 3);
        assert_eq!(tally.total(), 0);
        assert_eq!(
            tally.keys().collect::<Vec<_>>(),
            vec![&['a', 'a'][..], &['a', 'b'][..], &['b', 'b'][..]]
        );
    }

    #[test]
    fn witness_increments_one_row() {
        let mut tally = Tally::zeroed(keys());
        tally.witness(&['a', 'b']).unwrap();
        tally.witness(&['a', 'b']).unwrap();
        tally.witness(&['b', 'b']).unwrap();
        assert_eq!(tally.get(&['a', 'a']), Some(0));
        assert_eq!(tally.get(&['a', 'b']), Some(2));
        assert_eq!(tally.get(&['b', 'b']), Some(1));
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.nonzero().count(), 2);
    }

    #[test]
    fn unknown_key_is_not_found() {
        let mut tally = Tally::zeroed(keys());
        assert!(matches!(
            tally.witness(&['b', 'a']),
            Err(DiceError::NotFound(_))
        ));
        assert_eq!(tally.get(&['z']), None);
    }

    #[test]
    fn repeated_keys_collapse() {
        let tally = Tally::zeroed(vec![vec![1], vec![1], vec![2]]);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn label_is_bracketed() {
        assert_eq!(Tally::<u8>::label(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(Tally::<u8>::label(&[]), "[]");
    }
}
