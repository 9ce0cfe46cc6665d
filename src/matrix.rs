//! The full dynamic programming table of a weighted Wagner-Fischer alignment.
//!
//! Rows follow the target and columns follow the source: cell `(i, j)` holds
//! the cheapest way to turn `source[..j]` into `target[..i]`. The whole table
//! is kept so that `trace` can replay the optimal path at the end.
mod traceback;

use crate::cost_model::*;
use crate::error::{PlanError, Result};
use log::debug;

/// The best cost to reach a prefix pair, and the last operation on that path.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub cost: Cost,
    pub kind: EditKind,
}

impl Default for Cell {
    /// The origin: nothing consumed and nothing paid.
    fn default() -> Self {
        Cell {
            cost: 0,
            kind: Skip,
        }
    }
}

/// A `(target.len() + 1) x (source.len() + 1)` table of cells in a single
/// row-major allocation.
#[derive(Clone, Debug)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl CostMatrix {
    /// Fill the table for `source` and `target` under `cm`.
    ///
    /// On equal candidates the diagonal (Skip/Replace) wins over Delete, and
    /// Delete wins over Insert. Fails when the cheapest way to reach a cell
    /// costs more than `Cost::MAX`, or when the table cannot be allocated.
    pub fn build<T: PartialEq>(source: &[T], target: &[T], cm: &CostTable) -> Result<Self> {
        let too_large = PlanError::TableTooLarge {
            rows: target.len(),
            cols: source.len(),
        };
        let rows = target.len().checked_add(1).ok_or(too_large.clone())?;
        let cols = source.len().checked_add(1).ok_or(too_large)?;
        debug!("building {rows}x{cols} cost matrix ({cm})");

        let mut cells = alloc_cells(rows, cols)?;
        let len = rows * cols;

        // The initial row corresponds to deleting all of the source.
        cells.push(Cell::default());
        let mut acc: Cost = 0;
        for j in 1..cols {
            acc = add(acc, cm.delete, 0, j)?;
            cells.push(Cell {
                cost: acc,
                kind: Delete,
            });
        }

        for (i0, tb) in target.iter().enumerate() {
            // Change from 0 to 1 based indexing.
            let i = i0 + 1;
            let prev = (i - 1) * cols;

            // With an empty source prefix, the only option is to insert.
            let first = add(cells[prev].cost, cm.insert, i, 0)?;
            cells.push(Cell {
                cost: first,
                kind: Insert,
            });

            for (j0, sa) in source.iter().enumerate() {
                let j = j0 + 1;
                let (diag_kind, diag_cost) = cm.diagonal(sa == tb);

                let candidates = [
                    (diag_kind, cells[prev + j - 1].cost.checked_add(diag_cost)),
                    (Delete, cells[prev + cols + j - 1].cost.checked_add(cm.delete)),
                    (Insert, cells[prev + j].cost.checked_add(cm.insert)),
                ];
                // A candidate that overflows can never be optimal. Only when all
                // three do is the cell unrepresentable.
                let mut best: Option<Cell> = None;
                for (kind, cost) in candidates {
                    let Some(cost) = cost else { continue };
                    if best.map_or(true, |b| cost < b.cost) {
                        best = Some(Cell { cost, kind });
                    }
                }
                let cell = best.ok_or(PlanError::CostOverflow { row: i, col: j })?;
                cells.push(cell);
            }
        }
        debug_assert_eq!(cells.len(), len);

        Ok(CostMatrix { rows, cols, cells })
    }

    /// Number of rows: `target.len() + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns: `source.len() + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} matrix",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// The minimal cost of the full alignment.
    pub fn total_cost(&self) -> Cost {
        self.cell(self.rows - 1, self.cols - 1).cost
    }
}

/// An empty vector with room for exactly `rows * cols` cells, or
/// `TableTooLarge` when the cell count or its size in bytes cannot be allocated.
fn alloc_cells(rows: usize, cols: usize) -> Result<Vec<Cell>> {
    let too_large = PlanError::TableTooLarge { rows, cols };
    let len = rows.checked_mul(cols).ok_or(too_large.clone())?;
    let mut cells = Vec::new();
    cells.try_reserve_exact(len).map_err(|_| too_large)?;
    Ok(cells)
}

#[inline]
fn add(a: Cost, b: Cost, row: usize, col: usize) -> Result<Cost> {
    a.checked_add(b).ok_or(PlanError::CostOverflow { row, col })
}
