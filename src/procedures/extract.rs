//! Extraction of a clause from an expression in the shape of a clause.
//!
//! The expression is walked left to right, with each atom added as a positive literal and each negated atom as a negative literal.
//! So, for example, `(A | !B) | C` is read as the clause `A -B C`.
//!
//! # Soundness
//!
//! Extraction is only sound for expressions in the shape of a clause, as decided by [is_cnf].
//! This is checked before extraction, and any other expression is a failure to pair recognition with extraction.
//! Such a failure is a bug in the library, and so a panic.
//!
//! ```rust
//! # use otter_tseytin::procedures::extract::extract_clause;
//! # use otter_tseytin::structures::expression::Expression;
//! let expression = Expression::Atom(1) | !Expression::Atom(2);
//!
//! let mut clauses: Vec<Vec<i32>> = Vec::default();
//! assert!(extract_clause(&expression, &mut clauses).is_ok());
//! assert_eq!(clauses, vec![vec![1, -2]]);
//! ```

use crate::{
    db::clause::ClauseSink,
    procedures::recognise::is_cnf,
    structures::{
        clause::{CClause, ClauseSource},
        expression::Expression,
        literal::{CLiteral, Literal},
    },
    types::err,
};

/// Reads the clause of an expression in the shape of a clause, and adds the clause to the sink.
///
/// Unsupported expressions are refused.
///
/// # Panics
/// If the expression is not in the shape of a clause.
pub fn extract_clause(
    expression: &Expression,
    sink: &mut impl ClauseSink,
) -> Result<(), err::ErrorKind> {
    expression.check_supported()?;

    assert!(
        matches!(is_cnf(expression), Ok(true)),
        "! Extraction from an expression not in the shape of a clause: {expression}"
    );

    let mut clause = CClause::default();
    unfold_clause(expression, &mut clause);

    sink.add_clause(clause, ClauseSource::Direct)
}

fn unfold_clause(expression: &Expression, clause: &mut CClause) {
    match expression {
        Expression::Atom(atom) => clause.push(CLiteral::new(*atom, true)),

        Expression::Or(left, right) => {
            unfold_clause(left, clause);
            unfold_clause(right, clause);
        }

        Expression::Not(operand) => match operand.as_ref() {
            Expression::Atom(atom) => clause.push(CLiteral::new(*atom, false)),
            _ => panic!("! Negation of a non-atom during extraction: {expression}"),
        },

        Expression::And(_, _) | Expression::Equivalence(_, _) => {
            panic!("! Non-clausal connective during extraction: {expression}")
        }
    }
}
