/*!
Transient structures, which hold information part way through some procedure.

# The clause buffer

Each constraint is encoded into a [ClauseBuffer], and the contents of the buffer are passed to the intended sink only after the constraint has been encoded in full.
So, should the encoding of a constraint fail part way through, no clause from the encoding is passed to the sink.
*/

use crate::{
    db::clause::{check_clause, ClauseSink},
    structures::clause::{CClause, ClauseSource},
    types::err::{self},
};

/// A buffer of clauses, paired with their source.
#[derive(Default)]
pub struct ClauseBuffer {
    clauses: Vec<(CClause, ClauseSource)>,
}

impl ClauseBuffer {
    /// A count of clauses in the buffer.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// A count of clauses in the buffer from the given source.
    pub fn count_from(&self, source: ClauseSource) -> usize {
        self.clauses.iter().filter(|(_, s)| *s == source).count()
    }

    /// Passes every clause in the buffer to the sink, in order of addition, leaving the buffer empty.
    pub fn flush_into(&mut self, sink: &mut impl ClauseSink) -> Result<(), err::ErrorKind> {
        for (clause, source) in self.clauses.drain(..) {
            sink.add_clause(clause, source)?;
        }
        Ok(())
    }

    /// Empties the buffer, without passing any clause on.
    pub fn clear(&mut self) {
        self.clauses.clear();
    }
}

impl ClauseSink for ClauseBuffer {
    fn add_clause(&mut self, clause: CClause, source: ClauseSource) -> Result<(), err::ErrorKind> {
        check_clause(&clause)?;
        self.clauses.push((clause, source));
        Ok(())
    }
}
