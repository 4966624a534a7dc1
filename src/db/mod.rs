/*!
Databases for holding information relevant to an encoding.

- [Atoms](crate::structures::atom), and the allocation of fresh atoms, are held in the [atom database](atom).
- [Clauses](crate::structures::clause) produced by an encoding are held in the [clause database](clause).
- Symbols, and the [expressions](crate::structures::expression) constraining each symbol, are held in the [symbol database](symbol).

Each database is paired with a trait for the role the database has during an encoding:
- [AtomAllocator](atom::AtomAllocator), for minting fresh auxiliary atoms.
- [ClauseSink](clause::ClauseSink), for accepting finished clauses.
- [ConstraintSource](symbol::ConstraintSource), for supplying expressions to encode.

Procedures are written against the traits, so an encoding may be made directly into some other structure --- the clause store of an external solver, for example.
*/

pub mod atom;
pub mod clause;
pub mod symbol;
