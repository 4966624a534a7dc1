/*!
The Tseytin encoding of an expression.

# Overview

An expression is encoded by naming the value of each compound subexpression with a fresh auxiliary atom, and adding clauses which make the auxiliary atom equivalent to the subexpression it names.
The clauses for a subexpression refer to the subexpressions below it only through their names, and so each clause is short, and the count of clauses is linear in the size of the expression.

# Operands

The key method is [resolve], which returns a literal for any expression:
- The literal of an atom or negated atom is returned as it stands, and no auxiliary atom is introduced.
- Otherwise, a fresh auxiliary atom *t* is obtained, clauses which make *t* equivalent to the expression are added, and the (positive) literal of *t* is returned.

The clauses added for *t* ⟷ *e* are, with *a* and *b* the resolved operands of *e*:

| *e*     | Clauses                       |
|---------|-------------------------------|
| a ∧ b   | ¬a ∨ ¬b ∨ t, a ∨ ¬t, b ∨ ¬t   |
| a ∨ b   | a ∨ b ∨ ¬t, ¬a ∨ t, ¬b ∨ t    |
| ¬a      | ¬a ∨ ¬t, a ∨ t                |

Each collection of clauses is satisfied by a valuation if and only if the value of *t* on the valuation is the value of *e*, as may be checked by truth table.

# Roots

The value of an auxiliary atom feeds into the connective above it, and so an auxiliary atom must be equivalent to the subexpression it names.
At the root of an expression there is no connective above, and the value of the root is fixed to true.
So, rather than name the root and assert the name, [assert_root] asserts the root directly:
- A root conjunction is asserted by a unit clause for each (resolved) conjunct.
- A root disjunction is asserted by the clause of the (resolved) disjuncts.
- A root negation is asserted by the unit clause of the negated (resolved) operand.

For comparison, [assert_via_auxiliary] names the root and asserts the name.

# Order

Operands are always resolved left before right, and an auxiliary atom is obtained before the operands of the expression it names are resolved.
So, for a given allocator and expression, the encoding is reproducible.

# Example

```rust
# use otter_tseytin::db::atom::AtomDB;
# use otter_tseytin::procedures::tseytin::assert_root;
# use otter_tseytin::structures::atom::AtomKind;
# use otter_tseytin::structures::expression::Expression;
let mut atom_db = AtomDB::default();
let a = Expression::Atom(atom_db.fresh_atom(AtomKind::Symbol).unwrap());
let b = Expression::Atom(atom_db.fresh_atom(AtomKind::Symbol).unwrap());
let c = Expression::Atom(atom_db.fresh_atom(AtomKind::Symbol).unwrap());

let mut clauses: Vec<Vec<i32>> = Vec::default();
assert!(assert_root(&((a & b) | c), &mut atom_db, &mut clauses).is_ok());

assert_eq!(clauses, vec![vec![-1, -2, 4], vec![1, -4], vec![2, -4], vec![4, 3]]);
```
*/

use crate::{
    db::{atom::AtomAllocator, clause::ClauseSink},
    misc::log::targets::{self},
    structures::{
        clause::ClauseSource,
        expression::Expression,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A literal whose value is the value of the expression on any valuation satisfying the clauses added.
///
/// Atoms and negated atoms are returned as literals, otherwise a fresh auxiliary atom is defined.
///
/// Unsupported expressions are refused before any auxiliary atom is obtained.
pub fn resolve(
    expression: &Expression,
    atoms: &mut impl AtomAllocator,
    sink: &mut impl ClauseSink,
) -> Result<CLiteral, err::ErrorKind> {
    expression.check_supported()?;
    name(expression, atoms, sink)
}

/// Adds clauses which make the given auxiliary literal equivalent to the expression.
///
/// Unsupported expressions are refused before any auxiliary atom is obtained.
pub fn define(
    expression: &Expression,
    auxiliary: CLiteral,
    atoms: &mut impl AtomAllocator,
    sink: &mut impl ClauseSink,
) -> Result<(), err::ErrorKind> {
    expression.check_supported()?;
    gadget(expression, auxiliary, atoms, sink)
}

fn name(
    expression: &Expression,
    atoms: &mut impl AtomAllocator,
    sink: &mut impl ClauseSink,
) -> Result<CLiteral, err::ErrorKind> {
    if let Some(literal) = expression.as_literal() {
        return Ok(literal);
    }

    let auxiliary = CLiteral::new(atoms.fresh_auxiliary()?, true);
    log::trace!(target: targets::TSEYTIN, "{auxiliary} names {expression}");

    gadget(expression, auxiliary, atoms, sink)?;
    Ok(auxiliary)
}

fn gadget(
    expression: &Expression,
    auxiliary: CLiteral,
    atoms: &mut impl AtomAllocator,
    sink: &mut impl ClauseSink,
) -> Result<(), err::ErrorKind> {
    let t = auxiliary;

    match expression {
        Expression::Atom(_) => {
            let a = name(expression, atoms, sink)?;

            sink.add_clause(vec![-a, t], ClauseSource::Tseytin)?;
            sink.add_clause(vec![a, -t], ClauseSource::Tseytin)?;
        }

        Expression::And(left, right) => {
            let a = name(left, atoms, sink)?;
            let b = name(right, atoms, sink)?;

            sink.add_clause(vec![-a, -b, t], ClauseSource::Tseytin)?;
            sink.add_clause(vec![a, -t], ClauseSource::Tseytin)?;
            sink.add_clause(vec![b, -t], ClauseSource::Tseytin)?;
        }

        Expression::Or(left, right) => {
            let a = name(left, atoms, sink)?;
            let b = name(right, atoms, sink)?;

            sink.add_clause(vec![a, b, -t], ClauseSource::Tseytin)?;
            sink.add_clause(vec![-a, t], ClauseSource::Tseytin)?;
            sink.add_clause(vec![-b, t], ClauseSource::Tseytin)?;
        }

        Expression::Not(operand) => {
            let a = name(operand, atoms, sink)?;

            sink.add_clause(vec![-a, -t], ClauseSource::Tseytin)?;
            sink.add_clause(vec![a, t], ClauseSource::Tseytin)?;
        }

        Expression::Equivalence(_, _) => {
            log::error!(target: targets::TSEYTIN, "Unsupported expression: {expression}");
            return Err(err::ErrorKind::from(err::EncodingError::UnsupportedFormula));
        }
    }

    Ok(())
}

/// Adds clauses which assert the expression, without naming the root of the expression.
pub fn assert_root(
    expression: &Expression,
    atoms: &mut impl AtomAllocator,
    sink: &mut impl ClauseSink,
) -> Result<(), err::ErrorKind> {
    expression.check_supported()?;

    match expression {
        Expression::Atom(_) => {
            let a = name(expression, atoms, sink)?;
            sink.add_clause(vec![a], ClauseSource::Root)?;
        }

        Expression::And(left, right) => {
            let a = name(left, atoms, sink)?;
            let b = name(right, atoms, sink)?;

            sink.add_clause(vec![a], ClauseSource::Root)?;
            sink.add_clause(vec![b], ClauseSource::Root)?;
        }

        Expression::Or(left, right) => {
            let a = name(left, atoms, sink)?;
            let b = name(right, atoms, sink)?;

            sink.add_clause(vec![a, b], ClauseSource::Root)?;
        }

        Expression::Not(operand) => {
            let a = name(operand, atoms, sink)?;

            sink.add_clause(vec![-a], ClauseSource::Root)?;
        }

        Expression::Equivalence(_, _) => {
            log::error!(target: targets::TSEYTIN, "Unsupported root expression: {expression}");
            return Err(err::ErrorKind::from(err::EncodingError::UnsupportedFormula));
        }
    }

    Ok(())
}

/// Adds clauses which assert the expression, by naming the root of the expression and asserting the name.
pub fn assert_via_auxiliary(
    expression: &Expression,
    atoms: &mut impl AtomAllocator,
    sink: &mut impl ClauseSink,
) -> Result<(), err::ErrorKind> {
    expression.check_supported()?;

    let root = name(expression, atoms, sink)?;
    sink.add_clause(vec![root], ClauseSource::Root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::atom::AtomDB,
        structures::atom::{AtomKind, ATOM_MAX},
    };

    fn atom_db_with(count: usize) -> AtomDB {
        let mut atom_db = AtomDB::default();
        for _ in 0..count {
            let _ = atom_db.fresh_atom(AtomKind::Symbol);
        }
        atom_db
    }

    #[test]
    fn free_operands() {
        let mut atom_db = atom_db_with(2);
        let mut clauses: Vec<Vec<i32>> = Vec::default();

        let a = resolve(&Expression::Atom(1), &mut atom_db, &mut clauses);
        let not_b = resolve(&!Expression::Atom(2), &mut atom_db, &mut clauses);

        assert_eq!((a, not_b), (Ok(1), Ok(-2)));
        assert!(clauses.is_empty());
        assert_eq!(atom_db.count(), 2);
    }

    #[test]
    fn negation_gadget() {
        let mut atom_db = atom_db_with(2);
        let mut clauses: Vec<Vec<i32>> = Vec::default();

        let expression = !(Expression::Atom(1) & Expression::Atom(2));
        assert_eq!(resolve(&expression, &mut atom_db, &mut clauses), Ok(3));

        assert_eq!(
            clauses,
            vec![
                vec![-1, -2, 4],
                vec![1, -4],
                vec![2, -4],
                vec![-4, -3],
                vec![4, 3]
            ]
        );
    }

    #[test]
    fn atom_definition() {
        let mut atom_db = atom_db_with(1);
        let mut clauses: Vec<Vec<i32>> = Vec::default();

        assert!(define(&Expression::Atom(1), 2, &mut atom_db, &mut clauses).is_ok());
        assert_eq!(clauses, vec![vec![-1, 2], vec![1, -2]]);
    }

    #[test]
    fn root_via_auxiliary() {
        let mut atom_db = atom_db_with(2);
        let mut clauses: Vec<Vec<i32>> = Vec::default();

        let expression = Expression::Atom(1) & Expression::Atom(2);
        assert!(assert_via_auxiliary(&expression, &mut atom_db, &mut clauses).is_ok());
        assert_eq!(
            clauses,
            vec![vec![-1, -2, 3], vec![1, -3], vec![2, -3], vec![3]]
        );
    }

    #[test]
    fn unsupported_operand() {
        let mut atom_db = atom_db_with(2);
        let mut clauses: Vec<Vec<i32>> = Vec::default();

        let equivalence = Expression::equivalence(Expression::Atom(1), Expression::Atom(2));
        let expression = Expression::Atom(1) | !equivalence;

        assert_eq!(
            assert_root(&expression, &mut atom_db, &mut clauses),
            Err(err::ErrorKind::Encoding(err::EncodingError::UnsupportedFormula))
        );
    }

    #[test]
    fn atom_without_literal() {
        let mut atom_db = atom_db_with(1);
        let mut clauses: Vec<Vec<i32>> = Vec::default();

        let expression = !Expression::Atom(ATOM_MAX + 1) & Expression::Atom(1);

        assert_eq!(
            assert_root(&expression, &mut atom_db, &mut clauses),
            Err(err::ErrorKind::Encoding(err::EncodingError::InvalidAtom(ATOM_MAX + 1)))
        );
        assert_eq!(
            resolve(&(Expression::Atom(0) | Expression::Atom(1)), &mut atom_db, &mut clauses),
            Err(err::ErrorKind::Encoding(err::EncodingError::InvalidAtom(0)))
        );

        assert!(clauses.is_empty());
        assert_eq!(atom_db.count(), 1);
    }
}
