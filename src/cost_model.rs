//! This module contains the `CostTable` cost model and the `EditKind` operations it prices.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type for storing costs.
///
/// Wide enough that realistic inputs never come close to the limit; the
/// matrix builder still checks every addition.
pub type Cost = u64;

/// The four elementary operations of an edit script.
///
/// Note that insertions add a symbol of the target, and deletions drop a symbol of the source.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum EditKind {
    /// Source and target symbol are equal.
    Skip,
    /// Drop one source symbol.
    Delete,
    /// Add one target symbol.
    Insert,
    /// Substitute a source symbol by a different target symbol.
    Replace,
}

pub use EditKind::*;

impl EditKind {
    pub const ALL: [EditKind; 4] = [Skip, Delete, Insert, Replace];

    /// The three-letter tag used in textual output.
    pub fn name(&self) -> &'static str {
        match self {
            Skip => "SKP",
            Delete => "DEL",
            Insert => "INS",
            Replace => "REP",
        }
    }

    /// Whether this operation moves one symbol forward in the source.
    pub fn consumes_source(&self) -> bool {
        *self != Insert
    }

    /// Whether this operation moves one symbol forward in the target.
    pub fn produces_target(&self) -> bool {
        *self != Delete
    }

    /// Skip and Replace both walk the diagonal of the table.
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Skip | Replace)
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cost for each of the four operation kinds.
///
/// All four are always present, so lookups cannot fail.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CostTable {
    /// The cost of keeping an equal symbol. Not necessarily zero.
    pub skip: Cost,
    pub delete: Cost,
    pub insert: Cost,
    pub replace: Cost,
}

impl CostTable {
    pub fn new(skip: Cost, delete: Cost, insert: Cost, replace: Cost) -> Self {
        Self {
            skip,
            delete,
            insert,
            replace,
        }
    }

    /// Levenshtein distance: free skips, every other operation costs 1.
    pub fn unit() -> Self {
        Self::new(0, 1, 1, 1)
    }

    pub fn cost(&self, kind: EditKind) -> Cost {
        match kind {
            Skip => self.skip,
            Delete => self.delete,
            Insert => self.insert,
            Replace => self.replace,
        }
    }

    /// The diagonal step for a pair of symbols: Skip when they are equal, Replace otherwise.
    #[inline]
    pub fn diagonal(&self, equal: bool) -> (EditKind, Cost) {
        if equal {
            (Skip, self.skip)
        } else {
            (Replace, self.replace)
        }
    }
}

/// The table the command line tool has always used: cheap skips and
/// replacements, expensive indels.
impl Default for CostTable {
    fn default() -> Self {
        Self::new(1, 10, 10, 2)
    }
}

impl fmt::Display for CostTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "skip={} delete={} insert={} replace={}",
            self.skip, self.delete, self.insert, self.replace
        )
    }
}
