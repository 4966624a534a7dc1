/*!
Expressions, aka. trees over atoms built with the connectives of propositional logic.

An expression is one of:
- An atom, which stands for itself.
- The conjunction of two expressions.
- The disjunction of two expressions.
- The negation of an expression.
- The equivalence of two expressions.

Equivalences are produced by some sources of expressions, though are not supported by the encoder.
Rather than leaving equivalences out of the type, each match on an expression is required to handle the case, and the encoder does so by returning an [UnsupportedFormula](crate::types::err::EncodingError::UnsupportedFormula) error.

Atoms are referenced by identifier rather than owned, as the same atom may appear in any number of expressions, while the operands of a connective are owned by the connective.

```rust
# use otter_tseytin::structures::expression::Expression;
# use otter_tseytin::structures::literal::{CLiteral, Literal};
let a = Expression::Atom(1);
let b = Expression::Atom(2);

let expression = a.clone() | !b.clone();
assert_eq!(expression.to_string(), "(1 | !2)");
assert_eq!((!b).as_literal(), Some(CLiteral::new(2, false)));
assert_eq!(expression.as_literal(), None);

let valuation = vec![None, Some(false), Some(true)];
assert_eq!(expression.evaluate(&valuation), Some(false));
```
*/

mod ops;

use crate::{
    db::atom::AtomDB,
    structures::{
        atom::{Atom, ATOM_MAX, ATOM_RESERVED},
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
    types::err::{self},
};

/// An expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expression {
    /// An atom, referenced by identifier.
    Atom(Atom),

    /// The conjunction of a left and right expression.
    And(Box<Expression>, Box<Expression>),

    /// The disjunction of a left and right expression.
    Or(Box<Expression>, Box<Expression>),

    /// The negation of an expression.
    Not(Box<Expression>),

    /// The equivalence of a left and right expression.
    Equivalence(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn and(left: Expression, right: Expression) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    pub fn negation(operand: Expression) -> Self {
        Self::Not(Box::new(operand))
    }

    pub fn equivalence(left: Expression, right: Expression) -> Self {
        Self::Equivalence(Box::new(left), Box::new(right))
    }

    /// Whether the expression is an atom.
    pub fn is_atom(&self) -> bool {
        matches!(self, Self::Atom(_))
    }

    /// The literal of the expression, if the expression is an atom or a negated atom.
    ///
    /// Such expressions are operands of a connective as they stand, and so never require an auxiliary atom.
    pub fn as_literal(&self) -> Option<CLiteral> {
        match self {
            Self::Atom(atom) => Some(CLiteral::new(*atom, true)),
            Self::Not(operand) => match operand.as_ref() {
                Self::Atom(atom) => Some(CLiteral::new(*atom, false)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Ok if the expression is built from atoms with conjunction, disjunction, and negation only, and every atom has a literal.
    pub fn check_supported(&self) -> Result<(), err::EncodingError> {
        match self {
            Self::Atom(atom) => match *atom {
                ATOM_RESERVED => Err(err::EncodingError::InvalidAtom(*atom)),
                a if a > ATOM_MAX => Err(err::EncodingError::InvalidAtom(*atom)),
                _ => Ok(()),
            },

            Self::And(left, right) | Self::Or(left, right) => {
                left.check_supported()?;
                right.check_supported()
            }

            Self::Not(operand) => operand.check_supported(),

            Self::Equivalence(_, _) => Err(err::EncodingError::UnsupportedFormula),
        }
    }

    /// The atoms of the expression, in order of a left-to-right traversal and with repetition.
    pub fn atoms(&self) -> Vec<Atom> {
        let mut atoms = Vec::default();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms(&self, atoms: &mut Vec<Atom>) {
        match self {
            Self::Atom(atom) => atoms.push(*atom),

            Self::And(left, right) | Self::Or(left, right) | Self::Equivalence(left, right) => {
                left.collect_atoms(atoms);
                right.collect_atoms(atoms);
            }

            Self::Not(operand) => operand.collect_atoms(atoms),
        }
    }

    /// The number of nodes in the expression.
    pub fn size(&self) -> usize {
        match self {
            Self::Atom(_) => 1,

            Self::And(left, right) | Self::Or(left, right) | Self::Equivalence(left, right) => {
                1 + left.size() + right.size()
            }

            Self::Not(operand) => 1 + operand.size(),
        }
    }

    /// The value of the expression on a valuation, if every atom of the expression has a value.
    ///
    /// An equivalence is evaluated as a biconditional.
    pub fn evaluate(&self, valuation: &impl Valuation) -> Option<bool> {
        match self {
            Self::Atom(atom) => valuation.value_of(*atom),

            Self::And(left, right) => {
                let left = left.evaluate(valuation)?;
                let right = right.evaluate(valuation)?;
                Some(left && right)
            }

            Self::Or(left, right) => {
                let left = left.evaluate(valuation)?;
                let right = right.evaluate(valuation)?;
                Some(left || right)
            }

            Self::Not(operand) => operand.evaluate(valuation).map(|value| !value),

            Self::Equivalence(left, right) => {
                let left = left.evaluate(valuation)?;
                let right = right.evaluate(valuation)?;
                Some(left == right)
            }
        }
    }

    /// A string of the expression, with atoms written using their external representation from the given atom database.
    pub fn as_string(&self, atom_db: &AtomDB) -> String {
        match self {
            Self::Atom(atom) => atom_db.external_representation(*atom),

            Self::And(left, right) => {
                format!("({} & {})", left.as_string(atom_db), right.as_string(atom_db))
            }

            Self::Or(left, right) => {
                format!("({} | {})", left.as_string(atom_db), right.as_string(atom_db))
            }

            Self::Not(operand) => format!("!{}", operand.as_string(atom_db)),

            Self::Equivalence(left, right) => {
                format!("({} = {})", left.as_string(atom_db), right.as_string(atom_db))
            }
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(atom) => write!(f, "{atom}"),
            Self::And(left, right) => write!(f, "({left} & {right})"),
            Self::Or(left, right) => write!(f, "({left} | {right})"),
            Self::Not(operand) => write!(f, "!{operand}"),
            Self::Equivalence(left, right) => write!(f, "({left} = {right})"),
        }
    }
}
