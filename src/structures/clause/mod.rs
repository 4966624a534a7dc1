//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use otter_tseytin::structures::clause::{Clause, ClauseKind, CClause};
//! # use otter_tseytin::structures::literal::{CLiteral, Literal};
//! let clause: CClause = vec![CLiteral::new(1, true), CLiteral::new(2, false)];
//!
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.as_dimacs(true), "1 -2 0");
//! assert!(matches!(ClauseKind::identify(&clause), ClauseKind::Binary));
//!
//! let valuation = vec![None, Some(false), Some(false)];
//! assert!(clause.satisfied_on(&valuation));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).
//! - The order of literals in a clause is the order in which the literals were added, and carries no meaning beyond reproducibility.

mod kind;
mod literal;
mod source;
mod v_clause;

pub use kind::ClauseKind;
pub use source::ClauseSource;

use crate::structures::{atom::Atom, literal::CLiteral, valuation::Valuation};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order of addition.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order of addition.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// Returns whether some literal of the clause is true on the given valuation.
    ///
    /// Atoms without a value on the valuation make no literal true.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;
