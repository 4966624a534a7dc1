//! Implementation of the clause trait for a single literal, identified with the unit clause containing the literal.

use crate::structures::{
    atom::Atom,
    clause::{CClause, Clause},
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

impl Clause for CLiteral {
    fn as_string(&self) -> String {
        format!("{self}")
    }

    fn as_dimacs(&self, zero: bool) -> String {
        match zero {
            true => format!("{self} 0"),
            false => format!("{self}"),
        }
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        std::iter::once(*self)
    }

    fn size(&self) -> usize {
        1
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        std::iter::once(self.atom())
    }

    fn canonical(self) -> CClause {
        vec![self]
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        valuation.value_of(self.atom()) == Some(self.polarity())
    }
}
