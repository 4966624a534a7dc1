/*!
The context --- to which symbols and constraints are added and within which an encoding takes place.

A context bundles together a [configuration](crate::config), [counters](Counters), and each [database](crate::db).
Methods on a context are thin wrappers around the databases and [procedures](crate::procedures), which pass the relevant parts of the context as explicit parameters.
So, a context is a convenience, and an encoding may equally be made by use of the procedures directly.

Each context is independent of every other context, and an encoding with a fresh context is reproducible.

# Example
```rust
# use otter_tseytin::context::Context;
# use otter_tseytin::config::Config;
# use otter_tseytin::db::symbol::SymbolType;
let mut the_context = Context::from_config(Config::default()).unwrap();

assert!(the_context.add_symbol("A", SymbolType::Boolean).is_ok());
assert!(the_context.add_symbol("B", SymbolType::Boolean).is_ok());

assert!(the_context.add_constraint_from_string("A", "A || !B").is_ok());
assert!(the_context.add_constraint_from_string("B", "!(A && B)").is_ok());

assert!(the_context.encode_all().is_ok());

assert_eq!(the_context.counters.direct_clauses, 1);
assert_eq!(the_context.counters.auxiliary_atoms, 1);
assert_eq!(the_context.counters.root_negations, 1);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{
        atom::AtomDB,
        clause::ClauseDB,
        symbol::{SymbolDB, SymbolType},
    },
    procedures::encode,
    structures::{atom::Atom, expression::Expression},
    types::err::{self},
};

/// A context.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/encoding.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The symbol database.
    /// See [db::symbol](crate::db::symbol) for details.
    pub symbol_db: SymbolDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,
}

impl Context {
    /// A fresh context, with atoms for the constants already allocated.
    pub fn from_config(config: Config) -> Result<Self, err::ErrorKind> {
        let mut atom_db = AtomDB::default();
        let symbol_db = SymbolDB::new(&mut atom_db)?;

        Ok(Context {
            config,
            counters: Counters::default(),
            atom_db,
            symbol_db,
            clause_db: ClauseDB::default(),
        })
    }

    /// Introduces a symbol, returning the atom allocated to the symbol.
    pub fn add_symbol(&mut self, name: &str, kind: SymbolType) -> Result<Atom, err::ErrorKind> {
        self.symbol_db.add_symbol(name, kind, &mut self.atom_db)
    }

    /// Adds a constraint to the symbol with the given name.
    pub fn add_constraint(&mut self, name: &str, expression: Expression) -> Result<(), err::ErrorKind> {
        self.symbol_db.add_constraint(name, expression)?;
        Ok(())
    }

    /// Adds a constraint, read from a string, to the symbol with the given name.
    ///
    /// The symbol must already exist, and on an error no symbol is introduced by the string.
    /// See [builder](crate::builder) for details on the string representation of an expression.
    pub fn add_constraint_from_string(&mut self, name: &str, string: &str) -> Result<(), err::ErrorKind> {
        if self.symbol_db.symbol(name).is_none() {
            return Err(err::ErrorKind::from(err::SymbolDBError::UnknownSymbol(
                name.to_string(),
            )));
        }

        let expression = self.expression_from_string(string)?;
        self.add_constraint(name, expression)
    }

    /// Encodes the constraints of the symbol database into the clause database.
    ///
    /// For documentation, see [procedures::encode](crate::procedures::encode).
    pub fn encode_all(&mut self) -> Result<(), err::ErrorKind> {
        encode::encode_all(
            &mut self.clause_db,
            &mut self.atom_db,
            &self.symbol_db,
            &self.config,
            &mut self.counters,
        )
    }

    /// The clause database in DIMACS form.
    pub fn as_dimacs(&self) -> String {
        self.clause_db.as_dimacs(self.atom_db.count())
    }
}
