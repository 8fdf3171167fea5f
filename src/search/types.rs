//! Capability traits the search runners are written against.
//!
//! A runner never sees a concrete problem; it is handed an objective, a way
//! to produce starting points and a way to move between solutions. Each
//! capability can be implemented by a dedicated type or, for objectives and
//! observers, by a plain closure.

use rand::Rng;

/// Maps a solution to its cost. Lower is better.
pub trait Objective<S> {
    /// Evaluates the cost of `solution`.
    fn evaluate(&self, solution: &S) -> f64;
}

impl<S, F> Objective<S> for F
where
    F: Fn(&S) -> f64,
{
    fn evaluate(&self, solution: &S) -> f64 {
        self(solution)
    }
}

/// Produces fresh, independent solutions.
pub trait SolutionGenerator<S> {
    /// Creates a random solution.
    fn generate<R: Rng>(&self, rng: &mut R) -> S;
}

/// Produces a random neighbor of a solution.
///
/// The returned value is always a new solution; `solution` is left as is.
pub trait NeighborGenerator<S> {
    fn neighbor<R: Rng>(&self, solution: &S, rng: &mut R) -> S;
}

/// Produces the lowest-cost neighbor of a solution.
///
/// Implementations start from `solution` itself and replace it with any
/// candidate whose cost is less than or equal to the best seen so far, so
/// returning a value equal to `solution` certifies a local optimum.
pub trait BestNeighbor<S> {
    fn best_neighbor<O: Objective<S>>(&self, solution: &S, objective: &O) -> S;
}

/// Lists every neighbor of a solution, in a fixed order.
pub trait Neighborhood<S> {
    fn neighbors(&self, solution: &S) -> Vec<S>;
}

/// Walks the whole solution space in a fixed canonical order.
pub trait Enumeration<S> {
    /// The first solution in the order.
    fn first(&self) -> S;

    /// The successor of `current`, or `None` once the space is exhausted.
    fn next(&self, current: &S) -> Option<S>;
}

/// Receives one notification per search iteration.
///
/// `best` is the best solution known when the iteration completes and
/// `cost` its objective value. Observers cannot influence the search.
pub trait IterationObserver<S> {
    fn on_iteration(&mut self, index: usize, best: &S, cost: f64);
}

impl<S, F> IterationObserver<S> for F
where
    F: FnMut(usize, &S, f64),
{
    fn on_iteration(&mut self, index: usize, best: &S, cost: f64) {
        self(index, best, cost)
    }
}
