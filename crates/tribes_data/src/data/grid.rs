use crate::data::tribe::Tribe;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-size, row-major board of tribes.
///
/// Every cell always holds a [`Tribe`]; empty cells hold [`Tribe::None`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Tribe>,
}

impl Grid {
    /// Creates an all-empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Tribe::None; rows * cols],
        }
    }

    /// Builds a grid from rows of sigils (`A`, `B`, `C`, `.` or space).
    ///
    /// Returns `None` if the rows are ragged or contain an unknown sigil.
    ///
    /// ```
    /// use tribes_data::{Grid, Tribe};
    ///
    /// let grid = Grid::from_sigils(&["A.", ".B"]).unwrap();
    /// assert_eq!(grid.get(1, 1), Tribe::Warriors);
    /// ```
    pub fn from_sigils(rows: &[&str]) -> Option<Self> {
        let cols = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.chars().count() != cols {
                return None;
            }
            for c in row.chars() {
                cells.push(Tribe::from_sigil(c)?);
            }
        }
        Some(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `false` if the cell storage does not match the declared shape, which
    /// can only happen for a grid deserialized from untrusted input.
    pub fn is_well_formed(&self) -> bool {
        self.cells.len() == self.rows * self.cols
    }

    #[inline(always)]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// # Panics
    /// If `(row, col)` lies outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tribe {
        self.cells[self.index(row, col)]
    }

    /// # Panics
    /// If `(row, col)` lies outside the grid.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, tribe: Tribe) {
        let idx = self.index(row, col);
        self.cells[idx] = tribe;
    }

    pub fn row(&self, row: usize) -> &[Tribe] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn cells(&self) -> &[Tribe] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Tribe] {
        &mut self.cells
    }

    /// Number of live cells per tribe, indexed like [`Tribe::LIVING`].
    pub fn population(&self) -> [usize; Tribe::LIVING.len()] {
        let mut counts = [0usize; Tribe::LIVING.len()];
        for tribe in &self.cells {
            if let Some(i) = tribe.living_index() {
                counts[i] += 1;
            }
        }
        counts
    }

    pub fn is_empty_of_life(&self) -> bool {
        self.cells.iter().all(|t| !t.is_alive())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for tribe in self.row(r) {
                let c = if tribe.is_alive() { tribe.sigil() } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
