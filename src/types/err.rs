//! Error types used in the library.
//!
//! - Encoding errors are fatal for the pass in which they occur --- no partial encoding of the offending constraint is ever added to a sink.
//! - Database errors are, for the most part, very unlikely to occur during use (e.g. exhausting the supply of atoms).
//! - Parse errors are external, and follow from malformed input to the [builder](crate::builder).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

/// The union of all errors in the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    ClauseDB(ClauseDBError),
    Encoding(EncodingError),
    Parse(ParseError),
    SymbolDB(SymbolDBError),
}

/// Errors during encoding of an expression.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodingError {
    /// Some expression is not a formula of propositional logic, e.g. an equivalence.
    UnsupportedFormula,

    /// Some atom is the reserved atom, or too large to be written as a literal.
    InvalidAtom(Atom),
}

impl From<EncodingError> for ErrorKind {
    fn from(e: EncodingError) -> Self {
        ErrorKind::Encoding(e)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// A clause contained `0`, which is not the literal of any atom.
    ZeroLiteral,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors in the symbol database.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SymbolDBError {
    /// A symbol with the given name already exists.
    DuplicateSymbol(String),

    /// No symbol with the given name exists.
    UnknownSymbol(String),
}

impl From<SymbolDBError> for ErrorKind {
    fn from(e: SymbolDBError) -> Self {
        ErrorKind::SymbolDB(e)
    }
}

/// Errors during parsing, with positions given as a character offset into the input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// An operator without an operand, e.g. `A &&` or `!`.
    MissingNode(usize),

    /// A parenthesis without a partner.
    UnbalancedParenthesis(usize),

    /// A character outside of the grammar.
    UnexpectedCharacter(usize, char),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomDB(AtomDBError::AtomsExhausted) => write!(f, "Atoms exhausted"),
            Self::ClauseDB(ClauseDBError::EmptyClause) => write!(f, "Empty clause"),
            Self::ClauseDB(ClauseDBError::ZeroLiteral) => write!(f, "Zero literal in clause"),
            Self::Encoding(EncodingError::UnsupportedFormula) => {
                write!(f, "Expression not a propositional logic formula")
            }
            Self::Encoding(EncodingError::InvalidAtom(atom)) => {
                write!(f, "Atom {atom} has no literal")
            }
            Self::Parse(ParseError::Empty) => write!(f, "Empty expression"),
            Self::Parse(ParseError::MissingNode(at)) => write!(f, "Missing operand at {at}"),
            Self::Parse(ParseError::UnbalancedParenthesis(at)) => {
                write!(f, "Unbalanced parenthesis at {at}")
            }
            Self::Parse(ParseError::UnexpectedCharacter(at, c)) => {
                write!(f, "Unexpected character '{c}' at {at}")
            }
            Self::SymbolDB(SymbolDBError::DuplicateSymbol(name)) => {
                write!(f, "Duplicate symbol: {name}")
            }
            Self::SymbolDB(SymbolDBError::UnknownSymbol(name)) => {
                write!(f, "Unknown symbol: {name}")
            }
        }
    }
}

impl std::error::Error for ErrorKind {}
