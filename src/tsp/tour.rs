//! Permutation representation of a tour.

use std::fmt;
use std::ops::Deref;

use rand::Rng;
use u_numflow::random::shuffled_indices;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A visiting order over cities `0..n`, treated as cyclic.
///
/// Every operation that changes the order returns a new `Tour`; a value
/// handed to another component is never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// A uniformly random tour of `n` cities.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self(shuffled_indices(n, rng))
    }

    /// Wraps `order` if it is a permutation of `0..order.len()`.
    pub fn from_order(order: Vec<usize>) -> Option<Self> {
        if is_permutation(&order) {
            Some(Self(order))
        } else {
            None
        }
    }

    pub fn order(&self) -> &[usize] {
        &self.0
    }

    pub fn into_order(self) -> Vec<usize> {
        self.0
    }

    /// Swaps position `i` with its cyclic successor.
    ///
    /// Panics if the tour is empty.
    pub fn swap_adjacent(&self, i: usize) -> Self {
        let n = self.0.len();
        let mut next = self.0.clone();
        next.swap(i % n, (i + 1) % n);
        Self(next)
    }

    /// Rotates the visiting order left by `k` positions.
    pub fn rotated(&self, k: usize) -> Self {
        let mut next = self.0.clone();
        if !next.is_empty() {
            let len = next.len();
            next.rotate_left(k % len);
        }
        Self(next)
    }

    /// The same closed tour walked backwards.
    pub fn reversed(&self) -> Self {
        let mut next = self.0.clone();
        next.reverse();
        Self(next)
    }

    /// The lexicographic successor, or `None` if this is the last permutation.
    pub fn next_permutation(&self) -> Option<Self> {
        let mut next = self.0.clone();
        let n = next.len();
        if n < 2 {
            return None;
        }
        // Longest non-increasing suffix starts at `pivot + 1`.
        let mut i = n - 1;
        while i > 0 && next[i - 1] >= next[i] {
            i -= 1;
        }
        if i == 0 {
            return None;
        }
        let pivot = i - 1;
        let mut j = n - 1;
        while next[j] <= next[pivot] {
            j -= 1;
        }
        next.swap(pivot, j);
        next[i..].reverse();
        Some(Self(next))
    }
}

impl Deref for Tour {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Checks that `order` contains each of `0..order.len()` exactly once.
pub fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &c in order {
        match seen.get_mut(c) {
            Some(s) if !*s => *s = true,
            _ => return false,
        }
    }
    true
}
