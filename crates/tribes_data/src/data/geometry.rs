use serde::{Deserialize, Serialize};

/// Immutable 2-tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<F, S> {
    first: F,
    second: S,
}

impl<F, S> Pair<F, S> {
    pub const fn of(first: F, second: S) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &F {
        &self.first
    }

    pub fn second(&self) -> &S {
        &self.second
    }

    pub fn into_inner(self) -> (F, S) {
        (self.first, self.second)
    }
}

impl<F, S> From<(F, S)> for Pair<F, S> {
    fn from((first, second): (F, S)) -> Self {
        Self::of(first, second)
    }
}

impl<F, S> From<Pair<F, S>> for (F, S) {
    fn from(pair: Pair<F, S>) -> Self {
        pair.into_inner()
    }
}

/// A grid coordinate. `x` is the row, `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x.abs_diff(other.x) as f64;
        let dy = self.y.abs_diff(other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Arithmetic mean of `points`, rounded to the nearest grid coordinate.
    ///
    /// Returns `None` for an empty slice.
    pub fn mean(points: &[Point]) -> Option<Point> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let (sum_x, sum_y) = points
            .iter()
            .fold((0.0f64, 0.0f64), |(sx, sy), p| (sx + p.x as f64, sy + p.y as f64));
        Some(Point::new(
            (sum_x / n).round() as usize,
            (sum_y / n).round() as usize,
        ))
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Point::new(x, y)
    }
}
