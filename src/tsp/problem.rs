//! TSP problem instance and the tour-length objective.

use std::fmt;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side length of the square that random cities are drawn from.
pub const COORDINATE_RANGE: f64 = 100.0;

/// A city location in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// An immutable set of cities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Problem {
    cities: Vec<Point>,
}

impl Problem {
    /// Generates `n` cities drawn uniformly from `[0, 100) x [0, 100)`.
    ///
    /// `n = 0` yields an empty instance.
    pub fn generate<R: Rng>(n: usize, rng: &mut R) -> Self {
        let cities = (0..n)
            .map(|_| {
                Point::new(
                    rng.random_range(0.0..COORDINATE_RANGE),
                    rng.random_range(0.0..COORDINATE_RANGE),
                )
            })
            .collect();
        Self { cities }
    }

    /// Builds a problem from explicit coordinates.
    pub fn from_points(cities: Vec<Point>) -> Self {
        Self { cities }
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn cities(&self) -> &[Point] {
        &self.cities
    }

    /// Total length of the closed tour visiting cities in `order`.
    ///
    /// Each city is joined to its cyclic successor, so the last city links
    /// back to the first. Recomputed from scratch on every call; an empty
    /// order has length 0.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        let n = order.len();
        (0..n)
            .map(|i| self.cities[order[i]].distance(&self.cities[order[(i + 1) % n]]))
            .sum()
    }
}

impl From<Vec<[f64; 2]>> for Problem {
    fn from(coords: Vec<[f64; 2]>) -> Self {
        Self::from_points(coords.into_iter().map(|[x, y]| Point::new(x, y)).collect())
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.cities.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}, {}]", c.x, c.y)?;
        }
        write!(f, "]")
    }
}
