/// Sequences is an iterator over the k-fold Cartesian product of 0..n,
/// i.e. every ordered arrangement of k indices with repetition.
///
/// it counts like an odometer in base n, last slot fastest:
/// (0,0), (0,1), ..., (0,n-1), (1,0), ..., (n-1,n-1).
/// there are n^k of them. k = 0 yields the single empty sequence.
pub struct Sequences {
    n: usize,
    k: usize,
    seen: usize,
    next: Option<Vec<usize>>,
}

impl Sequences {
    /// n^k, or None past usize::MAX
    pub fn permutations(&self) -> Option<usize> {
        (0..self.k).try_fold(1usize, |x, _| x.checked_mul(self.n))
    }
    fn advance(&mut self) {
        let n = self.n;
        self.next = self.next.take().and_then(|mut digits| {
            // rightmost digit that doesn't roll over
            let i = digits.iter().rposition(|&d| d + 1 < n)?;
            digits[i] += 1;
            digits[i + 1..].iter_mut().for_each(|d| *d = 0);
            Some(digits)
        });
    }
}

/// (n faces, k dice)
impl From<(usize, usize)> for Sequences {
    fn from((n, k): (usize, usize)) -> Self {
        Self {
            n,
            k,
            seen: 0,
            next: (n > 0 || k == 0).then(|| vec![0; k]),
        }
    }
}

impl Iterator for Sequences {
    type Item = Vec<usize>;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.clone()?;
        self.advance();
        self.seen += 1;
        Some(current)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.permutations() {
            Some(total) => (total - self.seen, Some(total - self.seen)),
            None => (usize::MAX, None),
        }
    }
}
