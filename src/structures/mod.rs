//! Key structures, such as atoms, literals, clauses, and expressions.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Formulas
//!
//! A formula 𝐅 is set of [clauses](clause), interpreted as the conjunction of those clauses.
//! The clauses added to a [sink](crate::db::clause::ClauseSink) during an encoding are a formula, equisatisfiable with the conjunction of the [expressions](expression) encoded.
//!
//! ## Expressions
//!
//! An [expression](expression::Expression) is a tree over atoms built with negation, conjunction, and disjunction --- a formula in the broader sense of propositional logic.
//! The purpose of the library is to transform expressions into formulas.

pub mod atom;
pub mod clause;
pub mod expression;
pub mod literal;
pub mod valuation;
