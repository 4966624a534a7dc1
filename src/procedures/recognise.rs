//! Recognition of expressions in the shape of a single clause.
//!
//! An expression is in the shape of a clause if it is an atom, a negated atom, or the disjunction of expressions in the shape of a clause.
//!
//! Note, a conjunction is never in the shape of a (single) clause, even if both conjuncts are.
//! The conjunction of two clauses is a formula of two clauses, and conjunctions are left to the [Tseytin encoder](crate::procedures::tseytin), which asserts each conjunct of a root conjunction without introducing an auxiliary atom.
//!
//! ```rust
//! # use otter_tseytin::procedures::recognise::is_cnf;
//! # use otter_tseytin::structures::expression::Expression;
//! let a = Expression::Atom(1);
//! let b = Expression::Atom(2);
//!
//! assert_eq!(is_cnf(&(a.clone() | !b.clone())), Ok(true));
//! assert_eq!(is_cnf(&(a.clone() & b.clone())), Ok(false));
//! assert_eq!(is_cnf(&!(a | b)), Ok(false));
//! ```

use crate::{structures::expression::Expression, types::err};

/// Whether the expression is in the shape of a single clause.
///
/// Errors if an unsupported expression is reached during the check.
/// As disjunctions are checked left to right and the check stops at the first operand not in the shape of a clause, some unsupported expressions may go unnoticed.
/// For a complete check, see [check_supported](Expression::check_supported).
pub fn is_cnf(expression: &Expression) -> Result<bool, err::EncodingError> {
    match expression {
        Expression::Atom(_) => Ok(true),

        Expression::And(_, _) => Ok(false),

        Expression::Or(left, right) => Ok(is_cnf(left)? && is_cnf(right)?),

        Expression::Not(operand) => Ok(operand.is_atom()),

        Expression::Equivalence(_, _) => Err(err::EncodingError::UnsupportedFormula),
    }
}
