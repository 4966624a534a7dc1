/*!
A database of symbols, and the expressions which constrain each symbol.

A symbol is a name paired with a [type](SymbolType) and an atom, together with a list of constraints --- expressions which must hold of any valuation of interest.
The constraints of a symbol are kept in the order they were added, and symbols are kept in the order they were introduced, so that iteration through the constraints of a database is reproducible.

On creation the database allocates an atom for each constant: first falsum, then truth.

# Relevance

A symbol is *relevant* if the type of the symbol is known and the symbol has at least one constraint.
Only the constraints of relevant symbols are supplied for encoding.

```rust
# use otter_tseytin::db::atom::AtomDB;
# use otter_tseytin::db::symbol::{ConstraintSource, SymbolDB, SymbolType};
# use otter_tseytin::structures::expression::Expression;
let mut atom_db = AtomDB::default();
let mut symbol_db = SymbolDB::new(&mut atom_db).unwrap();

let a = symbol_db.add_symbol("A", SymbolType::Boolean, &mut atom_db).unwrap();
let _ = symbol_db.add_symbol("B", SymbolType::Tristate, &mut atom_db).unwrap();

assert!(symbol_db.add_constraint("A", !Expression::Atom(a)).is_ok());

assert_eq!((symbol_db.falsum(), symbol_db.truth()), (1, 2));
assert_eq!(symbol_db.constraints().count(), 1);
```
*/

use std::collections::HashMap;

use crate::{
    db::atom::AtomDB,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, AtomKind},
        expression::Expression,
    },
    types::err::{self, SymbolDBError},
};

/// Something which supplies expressions to encode.
pub trait ConstraintSource {
    /// The atom of the constant true.
    fn truth(&self) -> Atom;

    /// The atom of the constant false.
    fn falsum(&self) -> Atom;

    /// An iterator over each relevant symbol name paired with the constraints on the symbol, in a fixed order.
    fn constraints(&self) -> impl Iterator<Item = (&str, &[Expression])>;
}

/// The type of a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolType {
    Boolean,
    Tristate,
    Int,
    Hex,
    String,

    /// A symbol whose type could not be determined, and whose constraints are ignored.
    Unknown,
}

/// A symbol, with constraints.
#[derive(Clone, Debug)]
pub struct Symbol {
    /// The name of the symbol.
    pub name: String,

    /// The type of the symbol.
    pub kind: SymbolType,

    /// The atom allocated to the symbol.
    pub atom: Atom,

    /// Expressions which must hold, in order of addition.
    pub constraints: Vec<Expression>,
}

impl Symbol {
    /// Whether the constraints of the symbol are to be encoded.
    pub fn is_relevant(&self) -> bool {
        self.kind != SymbolType::Unknown && !self.constraints.is_empty()
    }
}

/// The symbol database.
pub struct SymbolDB {
    /// Every symbol, in order of introduction.
    symbols: Vec<Symbol>,

    /// A map from the name of a symbol to the index of the symbol.
    index: HashMap<String, usize>,

    /// The atom of the constant true.
    truth: Atom,

    /// The atom of the constant false.
    falsum: Atom,
}

impl SymbolDB {
    /// A symbol database, with atoms for the constants allocated from the given atom database.
    pub fn new(atom_db: &mut AtomDB) -> Result<Self, err::AtomDBError> {
        let falsum = atom_db.fresh_atom(AtomKind::False)?;
        let truth = atom_db.fresh_atom(AtomKind::True)?;

        Ok(SymbolDB {
            symbols: Vec::default(),
            index: HashMap::default(),
            truth,
            falsum,
        })
    }

    /// Introduces a symbol, returning the atom allocated to the symbol.
    pub fn add_symbol(
        &mut self,
        name: &str,
        kind: SymbolType,
        atom_db: &mut AtomDB,
    ) -> Result<Atom, err::ErrorKind> {
        if self.index.contains_key(name) {
            return Err(err::ErrorKind::from(SymbolDBError::DuplicateSymbol(
                name.to_string(),
            )));
        }

        let atom = atom_db.fresh_named_atom(AtomKind::Symbol, name)?;
        log::trace!(target: targets::SYMBOL_DB, "Symbol {name} ({kind:?}) as {atom}");

        self.index.insert(name.to_string(), self.symbols.len());
        self.symbols.push(Symbol {
            name: name.to_string(),
            kind,
            atom,
            constraints: Vec::default(),
        });

        Ok(atom)
    }

    /// Adds a constraint to the symbol with the given name.
    pub fn add_constraint(&mut self, name: &str, expression: Expression) -> Result<(), SymbolDBError> {
        match self.index.get(name) {
            Some(index) => {
                log::trace!(target: targets::SYMBOL_DB, "Constraint on {name}: {expression}");
                self.symbols[*index].constraints.push(expression);
                Ok(())
            }
            None => Err(SymbolDBError::UnknownSymbol(name.to_string())),
        }
    }

    /// The symbol with the given name, if it exists.
    pub fn symbol(&self, name: &str) -> Option<&Symbol> {
        self.index.get(name).map(|index| &self.symbols[*index])
    }

    /// An iterator over all symbols, in order of introduction.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// A count of all constraints on relevant symbols.
    pub fn constraint_count(&self) -> usize {
        self.symbols
            .iter()
            .filter(|symbol| symbol.is_relevant())
            .map(|symbol| symbol.constraints.len())
            .sum()
    }
}

impl ConstraintSource for SymbolDB {
    fn truth(&self) -> Atom {
        self.truth
    }

    fn falsum(&self) -> Atom {
        self.falsum
    }

    fn constraints(&self) -> impl Iterator<Item = (&str, &[Expression])> {
        self.symbols
            .iter()
            .filter(|symbol| symbol.is_relevant())
            .map(|symbol| (symbol.name.as_str(), symbol.constraints.as_slice()))
    }
}
