//! Procedures for encoding expressions as clauses.
//!
//! The procedures are free functions, and each takes whatever it mutates --- an [atom allocator](crate::db::atom::AtomAllocator), a [clause sink](crate::db::clause::ClauseSink) --- as an explicit parameter.
//! For the most part the procedures are used via the [driver](encode), or a [context](crate::context::Context).
//!
//! - [recognise] decides whether an expression is already in the shape of a clause.
//! - [extract] reads a clause from an expression in the shape of a clause.
//! - [tseytin] encodes any (supported) expression, introducing auxiliary atoms as required.
//! - [encode] drives the above over the constraints of some source.

pub mod encode;
pub mod extract;
pub mod recognise;
pub mod tseytin;
