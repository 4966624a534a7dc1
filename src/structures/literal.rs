//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The 'canonical' implementation of the literal trait is an integer, with the sign of the integer indicating the polarity of the literal --- as clauses are consumed by external solvers, this is the representation external solvers expect.
//!
//! ```rust
//! # use otter_tseytin::structures::literal::{CLiteral, Literal};
//! let atom = 79;
//! let polarity = true;
//! let literal = CLiteral::new(atom, polarity);
//!
//! assert!(literal.polarity());
//!
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//!
//! assert_eq!(-literal, CLiteral::new(79, false));
//! ```
//!
//! As atoms are never `0`, `0` is never a literal.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The representation of a literal as an integer, with sign indicating polarity.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}
