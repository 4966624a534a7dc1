use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of every constraint encoded.
    pub constraints: usize,

    /// A count of the unit clauses pinning constants.
    pub constant_clauses: usize,

    /// A count of clauses read directly from constraints.
    pub direct_clauses: usize,

    /// A count of clauses defining auxiliary atoms.
    pub tseytin_clauses: usize,

    /// A count of clauses asserting the root of a constraint.
    pub root_clauses: usize,

    /// A count of auxiliary atoms obtained.
    pub auxiliary_atoms: usize,

    /// A count of constraints whose root is the negation of a compound expression.
    pub root_negations: usize,

    /// The time taken during an encoding.
    pub time: Duration,
}

impl Counters {
    /// A count of every clause added.
    pub fn total_clauses(&self) -> usize {
        self.constant_clauses + self.direct_clauses + self.tseytin_clauses + self.root_clauses
    }
}
