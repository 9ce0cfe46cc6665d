//! Optimal weighted edit scripts.
//!
//! Given a source and a target sequence and a cost per operation kind,
//! [`plan`] returns the cheapest list of Skip/Delete/Insert/Replace steps that
//! turns the source into the target, in left-to-right order.
//!
//! ```
//! use optedit::prelude::*;
//!
//! let script = plan_str("kitten", "sitting", &CostTable::unit()).unwrap();
//! assert_eq!(script.cost(), 3);
//! assert_eq!(script.cigar().to_string(), "1X3=1X1=1I");
//! ```
pub mod cli;
pub mod cost_model;
pub mod error;
pub mod generate;
pub mod matrix;
pub mod script;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::cost_model::*;
    pub use crate::error::{PlanError, Result};
    pub use crate::matrix::{Cell, CostMatrix};
    pub use crate::script::{Cigar, EditRecord, EditScript};
    pub use crate::{plan, plan_str, EditPlanner};
}

use log::debug;
use prelude::*;

/// Compute an optimal edit script turning `source` into `target` under `cm`.
///
/// Ties are broken the same way on every call, so equal inputs give equal scripts.
pub fn plan<T: PartialEq + Clone>(
    source: &[T],
    target: &[T],
    cm: &CostTable,
) -> Result<EditScript<T>> {
    let matrix = CostMatrix::build(source, target, cm)?;
    let script = matrix.trace(source, target);
    debug!(
        "planned |source|={} |target|={}: cost {} in {} steps",
        source.len(),
        target.len(),
        script.cost(),
        script.len()
    );
    Ok(script)
}

/// As [`plan`], on the `char`s of two strings.
pub fn plan_str(source: &str, target: &str, cm: &CostTable) -> Result<EditScript<char>> {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    plan(&source, &target, cm)
}

/// A planner bound to one cost table, for planning many pairs with the same costs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditPlanner {
    pub costs: CostTable,
}

impl EditPlanner {
    pub fn new(costs: CostTable) -> Self {
        Self { costs }
    }

    pub fn plan<T: PartialEq + Clone>(&self, source: &[T], target: &[T]) -> Result<EditScript<T>> {
        plan(source, target, &self.costs)
    }

    /// Only the minimal cost. Still builds the full table.
    pub fn cost<T: PartialEq>(&self, source: &[T], target: &[T]) -> Result<Cost> {
        Ok(CostMatrix::build(source, target, &self.costs)?.total_cost())
    }
}
