//! Construction of expressions through the bitwise operators: `&` for conjunction, `|` for disjunction, and `!` for negation.

use std::ops::{BitAnd, BitOr, Not};

use super::Expression;

impl BitAnd for Expression {
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        Expression::and(self, other)
    }
}

impl BitOr for Expression {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        Expression::or(self, other)
    }
}

impl Not for Expression {
    type Output = Self;

    fn not(self) -> Self {
        Expression::negation(self)
    }
}
