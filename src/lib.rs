//! A library for encoding propositional formulas as equisatisfiable sets of clauses, in conjunctive normal form.
//!
//! otter_tseytin takes expressions built from atoms with conjunction, disjunction, and negation, and produces clauses for use by a satisfiability solver, such that the clauses are satisfiable if and only if the conjunction of the expressions is satisfiable.
//!
//! # Orientation
//!
//! The library is designed around a handful of [procedures], which read [expressions](structures::expression) and write [clauses](structures::clause).
//!
//! Procedures take the structures they mutate as explicit parameters, each of which is a trait:
//! - An [atom allocator](db::atom::AtomAllocator), from which fresh auxiliary atoms are obtained.
//! - A [clause sink](db::clause::ClauseSink), to which finished clauses are added.
//! - A [constraint source](db::symbol::ConstraintSource), which supplies the expressions to encode.
//!
//! The canonical implementation of each trait is a [database](db), and a [context] bundles the databases together with a [configuration](config) for convenience.
//!
//! In short, an encoding:
//! - Pins the constants true and false with a unit clause each.
//! - Reads each constraint already in the shape of a clause [directly](procedures::extract) as a clause.
//! - Encodes each other constraint via the [Tseytin transformation](procedures::tseytin), introducing an auxiliary atom for each compound subexpression below the root of the constraint.
//!
//! Useful starting points, then, may be:
//! - The [driver](procedures::encode) of an encoding.
//! - The [Tseytin encoder](procedures::tseytin), for the details of the transformation.
//! - The [builder], for writing expressions as strings.
//!
//! # Examples
//!
//! + Encode a pair of constraints and write the result in DIMACS form.
//!
//! ```rust
//! # use otter_tseytin::config::Config;
//! # use otter_tseytin::context::Context;
//! # use otter_tseytin::db::symbol::SymbolType;
//! let mut the_context = Context::from_config(Config::default()).unwrap();
//!
//! let _ = the_context.add_symbol("A", SymbolType::Boolean);
//! let _ = the_context.add_symbol("B", SymbolType::Boolean);
//! let _ = the_context.add_symbol("C", SymbolType::Boolean);
//!
//! assert!(the_context.add_constraint_from_string("A", "A | !B").is_ok());
//! assert!(the_context.add_constraint_from_string("C", "(A & B) | C").is_ok());
//!
//! assert!(the_context.encode_all().is_ok());
//!
//! let dimacs = "\
//! p cnf 6 7
//! -1 0
//! 2 0
//! 3 -4 0
//! -3 -4 6 0
//! 3 -6 0
//! 4 -6 0
//! 6 5 0
//! ";
//! assert_eq!(the_context.as_dimacs(), dimacs);
//! ```
//!
//! + Encode an expression with procedures directly, using a vector as a sink.
//!
//! ```rust
//! # use otter_tseytin::db::atom::AtomDB;
//! # use otter_tseytin::procedures::tseytin::assert_root;
//! # use otter_tseytin::structures::atom::AtomKind;
//! # use otter_tseytin::structures::expression::Expression;
//! let mut atom_db = AtomDB::default();
//! let a = Expression::Atom(atom_db.fresh_atom(AtomKind::Symbol).unwrap());
//! let b = Expression::Atom(atom_db.fresh_atom(AtomKind::Symbol).unwrap());
//!
//! let mut clauses: Vec<Vec<i32>> = Vec::default();
//! assert!(assert_root(&!(a | b), &mut atom_db, &mut clauses).is_ok());
//!
//! assert_eq!(clauses, vec![vec![1, 2, -3], vec![-1, 3], vec![-2, 3], vec![-3]]);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are lists in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to the auxiliary atoms of an encoding can be filtered with `RUST_LOG=tseytin …` or,
//! - A summary of an encoding can be found with `RUST_LOG=encode=info …`

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod transient;
