use super::CostMatrix;
use crate::cost_model::*;
use crate::script::{EditRecord, EditScript};
use log::trace;

impl CostMatrix {
    /// Replay the optimal path from the full alignment back to the empty
    /// prefixes, and return it in left-to-right order.
    ///
    /// `source` and `target` must be the sequences the matrix was built from.
    pub fn trace<T: Clone>(&self, source: &[T], target: &[T]) -> EditScript<T> {
        assert_eq!(
            (self.rows, self.cols),
            (target.len() + 1, source.len() + 1),
            "sequences do not match the matrix dimensions"
        );

        let mut records = Vec::with_capacity(source.len() + target.len());
        let (mut i, mut j) = (target.len(), source.len());
        // Each step moves at least one of `i` and `j` towards 0.
        while i > 0 || j > 0 {
            let kind = self.cell(i, j).kind;
            let record = match kind {
                Skip => EditRecord::skip(source[j - 1].clone(), target[i - 1].clone()),
                Replace => EditRecord::replace(source[j - 1].clone(), target[i - 1].clone()),
                Delete => EditRecord::delete(source[j - 1].clone()),
                Insert => EditRecord::insert(target[i - 1].clone()),
            };
            trace!("({i}, {j}) {kind}");
            records.push(record);
            if kind.consumes_source() {
                j -= 1;
            }
            if kind.produces_target() {
                i -= 1;
            }
        }
        records.reverse();

        EditScript::new(records, self.total_cost())
    }
}
