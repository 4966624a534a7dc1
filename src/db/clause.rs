/*!
A database of clauses.

Clauses are stored in the order they were added, together with the [source](ClauseSource) of each clause.
No attempt is made to simplify a clause --- duplicate literals, tautologies, and repeated clauses are all stored as given --- though the empty clause and clauses containing `0` are refused.

# Sinks

An encoding adds clauses to anything which implements [ClauseSink].
The clause database is the canonical sink, though a vector of clauses is also a sink, and wrapping the clause store of an external solver as a sink is straightforward.

# DIMACS

The clauses of the database may be written in DIMACS form, for use with external solvers.

```rust
# use otter_tseytin::db::clause::{ClauseDB, ClauseSink};
# use otter_tseytin::structures::clause::ClauseSource;
let mut clause_db = ClauseDB::default();
assert!(clause_db.add_clause(vec![-1], ClauseSource::Constant).is_ok());
assert!(clause_db.add_clause(vec![2, -3], ClauseSource::Direct).is_ok());

assert_eq!(clause_db.as_dimacs(3), "p cnf 3 2\n-1 0\n2 -3 0\n");
```
*/

use std::io::Write;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause, ClauseSource},
        literal::Literal,
    },
    types::err::{self},
};

/// Something which accepts finished clauses.
pub trait ClauseSink {
    /// Adds a clause to the sink, noting the source of the clause.
    fn add_clause(&mut self, clause: CClause, source: ClauseSource) -> Result<(), err::ErrorKind>;

    /// Adds each clause to the sink, in order, stopping at the first error.
    fn add_clauses(
        &mut self,
        clauses: impl IntoIterator<Item = CClause>,
        source: ClauseSource,
    ) -> Result<(), err::ErrorKind> {
        for clause in clauses {
            self.add_clause(clause, source)?;
        }
        Ok(())
    }
}

/// Checks a clause is fit to be added to a sink.
pub fn check_clause(clause: &impl Clause) -> Result<(), err::ClauseDBError> {
    if clause.size() == 0 {
        return Err(err::ClauseDBError::EmptyClause);
    }
    if clause.literals().any(|literal| literal == 0) {
        return Err(err::ClauseDBError::ZeroLiteral);
    }
    Ok(())
}

impl ClauseSink for Vec<CClause> {
    fn add_clause(&mut self, clause: CClause, _source: ClauseSource) -> Result<(), err::ErrorKind> {
        check_clause(&clause)?;
        self.push(clause);
        Ok(())
    }
}

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    /// Every clause, in order of addition.
    clauses: Vec<CClause>,

    /// The source of each clause, indexed as the clauses are.
    sources: Vec<ClauseSource>,
}

impl ClauseDB {
    /// A count of all clauses in the database.
    pub fn total_clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of clauses from the given source.
    pub fn count_from(&self, source: ClauseSource) -> usize {
        self.sources.iter().filter(|s| **s == source).count()
    }

    /// The clause at the given index, if it exists.
    pub fn get(&self, index: usize) -> Option<&CClause> {
        self.clauses.get(index)
    }

    /// An iterator over all clauses, in order of addition.
    pub fn all_clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    /// An iterator over all clauses paired with their source, in order of addition.
    pub fn all_clauses_with_source(&self) -> impl Iterator<Item = (&CClause, ClauseSource)> {
        self.clauses.iter().zip(self.sources.iter().copied())
    }

    /// The greatest atom in some clause of the database, or `0` if the database is empty.
    pub fn max_atom(&self) -> Atom {
        self.clauses
            .iter()
            .flat_map(|clause| clause.iter().map(|literal| literal.atom()))
            .max()
            .unwrap_or(0)
    }

    /// Writes the database in DIMACS form, with a problem line declaring `atom_count` atoms.
    pub fn write_dimacs(&self, atom_count: usize, mut writer: impl Write) -> std::io::Result<()> {
        writeln!(writer, "p cnf {atom_count} {}", self.clauses.len())?;
        for clause in &self.clauses {
            writeln!(writer, "{}", clause.as_dimacs(true))?;
        }
        writer.flush()
    }

    /// The database in DIMACS form, with a problem line declaring `atom_count` atoms.
    pub fn as_dimacs(&self, atom_count: usize) -> String {
        let mut the_string = format!("p cnf {atom_count} {}\n", self.clauses.len());
        for clause in &self.clauses {
            the_string.push_str(clause.as_dimacs(true).as_str());
            the_string.push('\n');
        }
        the_string
    }
}

impl ClauseSink for ClauseDB {
    fn add_clause(&mut self, clause: CClause, source: ClauseSource) -> Result<(), err::ErrorKind> {
        if let Err(e) = check_clause(&clause) {
            log::error!(target: targets::CLAUSE_DB, "Refused {source} clause: {}", clause.as_string());
            return Err(err::ErrorKind::from(e));
        }

        log::trace!(target: targets::CLAUSE_DB, "{source} clause: {}", clause.as_string());
        self.clauses.push(clause);
        self.sources.push(source);
        Ok(())
    }
}
