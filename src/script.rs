//! Edit records, the ordered scripts they form, and their compressed `Cigar` summary.
use crate::cost_model::*;
use crate::error::{PlanError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, slice};

/// One step of an edit script.
///
/// Both symbols are kept for Skip and Replace. Which of them to show is up to the consumer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRecord<T> {
    pub kind: EditKind,
    /// The consumed source symbol. `None` for insertions.
    pub source: Option<T>,
    /// The produced target symbol. `None` for deletions.
    pub target: Option<T>,
}

impl<T> EditRecord<T> {
    pub fn skip(source: T, target: T) -> Self {
        Self {
            kind: Skip,
            source: Some(source),
            target: Some(target),
        }
    }

    pub fn replace(source: T, target: T) -> Self {
        Self {
            kind: Replace,
            source: Some(source),
            target: Some(target),
        }
    }

    pub fn delete(source: T) -> Self {
        Self {
            kind: Delete,
            source: Some(source),
            target: None,
        }
    }

    pub fn insert(target: T) -> Self {
        Self {
            kind: Insert,
            source: None,
            target: Some(target),
        }
    }

    /// The single symbol the minimal output format shows: the source symbol
    /// for deletions and the target symbol otherwise.
    pub fn symbol(&self) -> Option<&T> {
        match self.kind {
            Delete => self.source.as_ref(),
            _ => self.target.as_ref(),
        }
    }
}

/// An ordered left-to-right list of edits together with its total cost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScript<T> {
    records: Vec<EditRecord<T>>,
    cost: Cost,
}

impl<T> EditScript<T> {
    pub(crate) fn new(records: Vec<EditRecord<T>>, cost: Cost) -> Self {
        Self { records, cost }
    }

    /// Total cost of the script, as computed by the planner.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn records(&self) -> &[EditRecord<T>] {
        &self.records
    }

    pub fn into_records(self) -> Vec<EditRecord<T>> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, EditRecord<T>> {
        self.records.iter()
    }

    /// Sum of the per-record costs under `cm`.
    pub fn recompute_cost(&self, cm: &CostTable) -> Result<Cost> {
        self.records
            .iter()
            .enumerate()
            .try_fold(0 as Cost, |acc, (step, r)| {
                acc.checked_add(cm.cost(r.kind))
                    .ok_or(PlanError::ScriptCostOverflow { step })
            })
    }

    /// Number of records of each kind, in `EditKind::ALL` order.
    pub fn counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for r in &self.records {
            counts[r.kind as usize] += 1;
        }
        counts
    }

    /// Run-length compressed summary of the script.
    pub fn cigar(&self) -> Cigar {
        let mut cigar = Cigar::default();
        for r in &self.records {
            cigar.push(r.kind);
        }
        cigar
    }
}

impl<T: PartialEq + Clone> EditScript<T> {
    /// Replay the script on `source` and return the sequence it produces.
    ///
    /// Fails when a record does not fit: a recorded source symbol that differs
    /// from the actual one, a Skip of two different symbols, a Replace of two
    /// equal symbols, or a source of the wrong length.
    pub fn apply(&self, source: &[T]) -> Result<Vec<T>> {
        let mismatch = |step, reason| PlanError::ScriptMismatch { step, reason };
        let mut out = Vec::with_capacity(source.len());
        let mut rest = source.iter();
        for (step, r) in self.records.iter().enumerate() {
            if r.kind.consumes_source() {
                let Some(actual) = rest.next() else {
                    return Err(mismatch(step, "source is exhausted"));
                };
                if r.source.as_ref() != Some(actual) {
                    return Err(mismatch(step, "recorded source symbol differs"));
                }
            }
            if r.kind.produces_target() {
                let Some(t) = &r.target else {
                    return Err(mismatch(step, "missing target symbol"));
                };
                out.push(t.clone());
            }
            match r.kind {
                Skip if r.source != r.target => {
                    return Err(mismatch(step, "skip of unequal symbols"))
                }
                Replace if r.source == r.target => {
                    return Err(mismatch(step, "replace of equal symbols"))
                }
                _ => {}
            }
        }
        if rest.next().is_some() {
            return Err(mismatch(self.records.len(), "source is not fully consumed"));
        }
        Ok(out)
    }
}

impl<'a, T> IntoIterator for &'a EditScript<T> {
    type Item = &'a EditRecord<T>;

    type IntoIter = slice::Iter<'a, EditRecord<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<T> IntoIterator for EditScript<T> {
    type Item = EditRecord<T>;

    type IntoIter = std::vec::IntoIter<EditRecord<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CigarElem {
    pub kind: EditKind,
    pub cnt: usize,
}

/// Consecutive equal kinds merged into `(count, kind)` runs.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Cigar {
    ops: Vec<CigarElem>,
}

impl Cigar {
    pub fn push(&mut self, kind: EditKind) {
        if let Some(s) = self.ops.last_mut() {
            if s.kind == kind {
                s.cnt += 1;
                return;
            }
        }
        self.ops.push(CigarElem { kind, cnt: 1 });
    }

    pub fn ops(&self) -> &[CigarElem] {
        &self.ops
    }

    fn char(kind: EditKind) -> char {
        match kind {
            Skip => '=',
            Replace => 'X',
            Insert => 'I',
            Delete => 'D',
        }
    }
}

impl fmt::Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for op in &self.ops {
            write!(f, "{}{}", op.cnt, Cigar::char(op.kind))?;
        }
        Ok(())
    }
}
