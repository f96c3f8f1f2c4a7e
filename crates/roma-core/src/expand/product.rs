/// Cartesian product over per-position alternative lists.
///
/// Tuples come out in odometer order (last position varies fastest). Any
/// empty list makes the product empty; zero positions yield one empty tuple.
pub(super) struct CartesianProduct<'a, T> {
    lists: Vec<&'a [T]>,
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a, T> CartesianProduct<'a, T> {
    pub(super) fn new(lists: Vec<&'a [T]>) -> Self {
        let exhausted = lists.iter().any(|l| l.is_empty());
        let indices = vec![0; lists.len()];
        Self {
            lists,
            indices,
            exhausted,
        }
    }

    /// Total number of tuples, saturating on overflow.
    pub(super) fn total(&self) -> usize {
        self.lists
            .iter()
            .fold(1usize, |acc, l| acc.saturating_mul(l.len()))
    }

    /// Step the odometer. Returns false once every position has wrapped.
    fn advance(&mut self) -> bool {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.lists[pos].len() {
                return true;
            }
            self.indices[pos] = 0;
        }
        false
    }
}

impl<'a, T> Iterator for CartesianProduct<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Vec<&'a T>> {
        if self.exhausted {
            return None;
        }
        let tuple = self
            .indices
            .iter()
            .zip(&self.lists)
            .map(|(&i, list)| &list[i])
            .collect();
        self.exhausted = !self.advance();
        Some(tuple)
    }
}
