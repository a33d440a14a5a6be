/// Multisets is an iterator over all combinations with replacement
/// of k indices drawn from 0..n, i.e. every multiset of size k.
///
/// each item is a non-decreasing index vector, yielded in lexicographic order:
/// (0,0,0), (0,0,1), ..., (0,0,n-1), (0,1,1), ..., (n-1,n-1,n-1).
/// nothing is materialized up front; the iterator only holds the current item.
/// there are C(n + k - 1, k) of them. k = 0 yields the single empty multiset.
pub struct Multisets {
    n: usize,
    k: usize,
    seen: usize,
    next: Option<Vec<usize>>,
}

impl Multisets {
    /// total number of multisets, regardless of how far we've iterated.
    /// None if that number doesn't fit in a usize.
    pub fn combinations(&self) -> Option<usize> {
        match (self.n, self.k) {
            (_, 0) => Some(1),
            (0, _) => Some(0),
            (n, k) => super::choose(n.checked_add(k - 1)?, k),
        }
    }
    fn advance(&mut self) {
        let n = self.n;
        self.next = self.next.take().and_then(|mut indices| {
            // rightmost slot that can still grow
            let i = indices.iter().rposition(|&x| x + 1 < n)?;
            let grown = indices[i] + 1;
            indices[i..].iter_mut().for_each(|x| *x = grown);
            Some(indices)
        });
    }
}

/// (n faces, k dice)
impl From<(usize, usize)> for Multisets {
    fn from((n, k): (usize, usize)) -> Self {
        Self {
            n,
            k,
            seen: 0,
            next: (n > 0 || k == 0).then(|| vec![0; k]),
        }
    }
}

impl Iterator for Multisets {
    type Item = Vec<usize>;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.clone()?;
        self.advance();
        self.seen += 1;
        Some(current)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.combinations() {
            Some(total) => (total - self.seen, Some(total - self.seen)),
            None => (usize::MAX, None),
        }
    }
}
