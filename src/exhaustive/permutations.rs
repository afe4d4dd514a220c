//! Lazy lexicographic permutation generator.

/// Iterator over every ordering of `0..n` in lexicographic order.
///
/// Orderings are produced one at a time with the classic next-permutation
/// step, so memory stays O(n) however many orderings are consumed.
/// `n = 0` yields a single empty ordering.
///
/// # Examples
///
/// ```
/// use u_delivery::exhaustive::Permutations;
///
/// let all: Vec<Vec<usize>> = Permutations::new(3).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1, 2]);
/// assert_eq!(all[1], vec![0, 2, 1]);
/// assert_eq!(all[5], vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    pending: Option<Vec<usize>>,
}

impl Permutations {
    /// Starts at the identity ordering `[0, 1, .., n - 1]`.
    pub fn new(n: usize) -> Self {
        Self {
            pending: Some((0..n).collect()),
        }
    }

    /// Number of orderings of `n` items, or `None` on overflow.
    pub fn total(n: usize) -> Option<usize> {
        (1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.pending.take()?;
        let mut successor = current.clone();
        if advance(&mut successor) {
            self.pending = Some(successor);
        }
        Some(current)
    }
}

/// Rearranges `seq` into its lexicographic successor.
///
/// Returns `false` if `seq` is already the last ordering.
fn advance(seq: &mut [usize]) -> bool {
    let Some(pivot) = (1..seq.len()).rev().find(|&i| seq[i - 1] < seq[i]).map(|i| i - 1) else {
        return false;
    };
    // seq[pivot + 1] > seq[pivot] and the tail is non-increasing, so the scan
    // stops at pivot + 1 at the latest, on the smallest larger element.
    let mut swap = seq.len() - 1;
    while seq[swap] <= seq[pivot] {
        swap -= 1;
    }
    seq.swap(pivot, swap);
    seq[pivot + 1..].reverse();
    true
}
