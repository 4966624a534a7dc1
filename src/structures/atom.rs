/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 1, or:
- *u - 1* is an atom.

The atom `0` is reserved, as `0` is not the literal of any atom, and no atom database will return `0` as a fresh atom.

```rust
# use otter_tseytin::structures::atom::{Atom, ATOM_MAX};
let atoms = (1..97).collect::<Vec<Atom>>();
assert!(atoms.iter().all(|atom| *atom <= ATOM_MAX));
```

# Kinds

Atoms are given a [kind](AtomKind) by the atom database, to help with presentation.
Still, every kind of atom is treated identically during an encoding --- an atom is a thing with a stable literal representation, and nothing more.

# Notes
- The external representation of an atom (a symbol name, for example) is stored in the atom database.
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The reserved atom, which is never returned as a fresh atom.
pub const ATOM_RESERVED: Atom = 0;

/// The maximum instance of an atom, as limited by the (signed integer) representation of literals.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();

/// The kind of thing an atom stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AtomKind {
    /// A (boolean or tristate) symbol.
    Symbol,

    /// The constant true.
    True,

    /// The constant false.
    False,

    /// Some value of a non-boolean symbol.
    NonBool,

    /// A select relation between symbols.
    Select,

    /// A choice between symbols.
    Choice,

    /// An atom introduced during an encoding to name the value of some subexpression.
    Auxiliary,
}

impl std::fmt::Display for AtomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symbol => write!(f, "symbol"),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::NonBool => write!(f, "nonbool"),
            Self::Select => write!(f, "select"),
            Self::Choice => write!(f, "choice"),
            Self::Auxiliary => write!(f, "auxiliary"),
        }
    }
}
