//! Implementation of the clause trait for a vector of literals.

use crate::structures::{
    atom::Atom,
    clause::{CClause, Clause},
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

impl Clause for CClause {
    fn as_string(&self) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        the_string.pop();
        the_string
    }

    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self.as_string();
        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> CClause {
        self
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.value_of(literal.atom()) == Some(literal.polarity()))
    }
}
