/*!
The driver of an encoding.

# Overview

An encoding of the constraints of some [source](ConstraintSource):
1. Adds a unit clause pinning the constant false to false, and a unit clause pinning the constant true to true.
2. For each constraint of each relevant symbol, in the order given by the source:
   - Reads the constraint as a clause, if the constraint is in the shape of a clause.
   - Otherwise, asserts the constraint through the [Tseytin encoder](crate::procedures::tseytin).

The constants are pinned once per encoding, regardless of how many constraints mention the constants.

# Failure

Each constraint is checked to be a formula of propositional logic before any auxiliary atom is obtained for the constraint, and the clauses of each constraint are [buffered](crate::transient::ClauseBuffer) until the constraint has been encoded in full.
So, on an unsupported constraint the encoding stops with an error, the sink holds exactly the clauses of the constraints before the unsupported constraint, and the allocator is untouched by the unsupported constraint.

# Example

```rust
# use otter_tseytin::config::Config;
# use otter_tseytin::context::Counters;
# use otter_tseytin::db::{atom::AtomDB, clause::ClauseDB};
# use otter_tseytin::db::symbol::{SymbolDB, SymbolType};
# use otter_tseytin::procedures::encode::encode_all;
# use otter_tseytin::structures::expression::Expression;
let mut atom_db = AtomDB::default();
let mut symbol_db = SymbolDB::new(&mut atom_db).unwrap();
let a = symbol_db.add_symbol("A", SymbolType::Boolean, &mut atom_db).unwrap();
let b = symbol_db.add_symbol("B", SymbolType::Boolean, &mut atom_db).unwrap();

let _ = symbol_db.add_constraint("A", Expression::Atom(a) & Expression::Atom(b));

let mut clause_db = ClauseDB::default();
let mut counters = Counters::default();
let config = Config::default();

assert!(encode_all(&mut clause_db, &mut atom_db, &symbol_db, &config, &mut counters).is_ok());
assert_eq!(clause_db.all_clauses().collect::<Vec<_>>(), [&vec![-1], &vec![2], &vec![3], &vec![4]]);
assert_eq!(counters.auxiliary_atoms, 0);
```
*/

use std::time::Instant;

use crate::{
    config::Config,
    context::Counters,
    db::{atom::AtomAllocator, clause::ClauseSink, symbol::ConstraintSource},
    misc::log::targets::{self},
    procedures::{
        extract::extract_clause,
        recognise::is_cnf,
        tseytin::{assert_root, assert_via_auxiliary},
    },
    structures::{
        clause::ClauseSource,
        expression::Expression,
        literal::{CLiteral, Literal},
    },
    transient::ClauseBuffer,
    types::err::{self},
};

/// Encodes every constraint of the source, adding the clauses of the encoding to the sink.
///
/// For documentation, see [procedures::encode](crate::procedures::encode).
pub fn encode_all(
    sink: &mut impl ClauseSink,
    atoms: &mut impl AtomAllocator,
    source: &impl ConstraintSource,
    config: &Config,
    counters: &mut Counters,
) -> Result<(), err::ErrorKind> {
    let start = Instant::now();

    sink.add_clause(
        vec![CLiteral::new(source.falsum(), false)],
        ClauseSource::Constant,
    )?;
    sink.add_clause(
        vec![CLiteral::new(source.truth(), true)],
        ClauseSource::Constant,
    )?;
    counters.constant_clauses += 2;

    let mut buffer = ClauseBuffer::default();

    for (name, constraints) in source.constraints() {
        log::trace!(target: targets::ENCODE, "Encoding {} constraint(s) of {name}", constraints.len());

        for expression in constraints {
            if let Err(e) = encode_constraint(expression, &mut buffer, atoms, config, counters) {
                log::error!(target: targets::ENCODE, "Failed to encode a constraint of {name}: {expression}");
                counters.time += start.elapsed();
                return Err(e);
            }
            buffer.flush_into(sink)?;
        }
    }

    counters.time += start.elapsed();
    log::info!(target: targets::ENCODE, "Encoded {} constraint(s) with {} auxiliary atom(s)", counters.constraints, counters.auxiliary_atoms);

    Ok(())
}

/// Encodes a single constraint, adding the clauses of the encoding to the buffer.
///
/// On an error the buffer is cleared.
pub fn encode_constraint(
    expression: &Expression,
    buffer: &mut ClauseBuffer,
    atoms: &mut impl AtomAllocator,
    config: &Config,
    counters: &mut Counters,
) -> Result<(), err::ErrorKind> {
    buffer.clear();
    expression.check_supported()?;

    let atoms_before = atoms.atom_count();

    let encoding = match config.cnf_shortcut.value && is_cnf(expression)? {
        true => extract_clause(expression, buffer),

        false => {
            if let Expression::Not(operand) = expression {
                if !operand.is_atom() {
                    counters.root_negations += 1;
                    log::debug!(target: targets::ENCODE, "Root negation of a compound expression: {expression}");
                }
            }

            match config.direct_root.value {
                true => assert_root(expression, atoms, buffer),
                false => assert_via_auxiliary(expression, atoms, buffer),
            }
        }
    };

    if let Err(e) = encoding {
        buffer.clear();
        return Err(e);
    }

    counters.constraints += 1;
    counters.direct_clauses += buffer.count_from(ClauseSource::Direct);
    counters.tseytin_clauses += buffer.count_from(ClauseSource::Tseytin);
    counters.root_clauses += buffer.count_from(ClauseSource::Root);
    counters.auxiliary_atoms += atoms.atom_count().saturating_sub(atoms_before);

    Ok(())
}
