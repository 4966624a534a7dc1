/*!
A database of 'atom related' things.

Things include:
- The [kind](AtomKind) of each atom.
- Names for atoms (typically, the name of the symbol an atom stands for).

Atoms are allocated from a single counter, beginning with `1` and increasing by `1` with each allocation.
As a consequence, atoms allocated to symbols and auxiliary atoms allocated during an encoding are disjoint, and an encoding is reproducible given the same input.

```rust
# use otter_tseytin::db::atom::{AtomAllocator, AtomDB};
# use otter_tseytin::structures::atom::AtomKind;
let mut atom_db = AtomDB::default();
let p = atom_db.fresh_named_atom(AtomKind::Symbol, "p").unwrap();
let t = atom_db.fresh_auxiliary().unwrap();

assert_eq!((p, t), (1, 2));
assert_eq!(atom_db.external_representation(p), "p");
assert_eq!(atom_db.kind_of(t), Some(AtomKind::Auxiliary));
```
*/

use crate::{
    misc::log::targets::{self},
    structures::atom::{Atom, AtomKind, ATOM_MAX},
    types::err::AtomDBError,
};

/// Something from which fresh auxiliary atoms may be obtained.
pub trait AtomAllocator {
    /// A fresh atom, distinct from every atom previously allocated.
    fn fresh_auxiliary(&mut self) -> Result<Atom, AtomDBError>;

    /// A count of the atoms allocated.
    fn atom_count(&self) -> usize;
}

/// The atom database.
pub struct AtomDB {
    /// The kind of each atom, indexed by the atom less one.
    kinds: Vec<AtomKind>,

    /// The name of each atom, if any, indexed by the atom less one.
    names: Vec<Option<String>>,

    /// The greatest atom the database will allocate.
    limit: Atom,
}

impl Default for AtomDB {
    fn default() -> Self {
        AtomDB {
            kinds: Vec::default(),
            names: Vec::default(),
            limit: ATOM_MAX,
        }
    }
}

impl AtomDB {
    /// An atom database which will allocate at most `limit` atoms.
    ///
    /// Limits above [ATOM_MAX] are lowered to [ATOM_MAX].
    pub fn with_limit(limit: Atom) -> Self {
        AtomDB {
            limit: std::cmp::min(limit, ATOM_MAX),
            ..Default::default()
        }
    }

    /// A count of atoms in the [AtomDB].
    pub fn count(&self) -> usize {
        self.kinds.len()
    }

    /// Whether `count` further atoms may be allocated.
    pub fn has_room_for(&self, count: usize) -> bool {
        self.kinds.len().saturating_add(count) <= self.limit as usize
    }

    /// A fresh atom of the given kind.
    pub fn fresh_atom(&mut self, kind: AtomKind) -> Result<Atom, AtomDBError> {
        let atom = match (self.kinds.len() + 1).try_into() {
            Ok(atom) if atom <= self.limit => atom,
            _ => {
                log::error!(target: targets::ATOM_DB, "Atoms exhausted at {}", self.limit);
                return Err(AtomDBError::AtomsExhausted);
            }
        };

        self.kinds.push(kind);
        self.names.push(None);

        log::trace!(target: targets::ATOM_DB, "Fresh {kind} atom: {atom}");
        Ok(atom)
    }

    /// A fresh atom of the given kind, with the given name.
    pub fn fresh_named_atom(
        &mut self,
        kind: AtomKind,
        name: impl Into<String>,
    ) -> Result<Atom, AtomDBError> {
        let atom = self.fresh_atom(kind)?;
        if let Some(slot) = self.names.last_mut() {
            *slot = Some(name.into());
        }
        Ok(atom)
    }

    /// The kind of an atom, if the atom is part of the database.
    pub fn kind_of(&self, atom: Atom) -> Option<AtomKind> {
        let index = (atom as usize).checked_sub(1)?;
        self.kinds.get(index).copied()
    }

    /// The name of an atom, if the atom is part of the database and has some name.
    pub fn name_of(&self, atom: Atom) -> Option<&str> {
        let index = (atom as usize).checked_sub(1)?;
        self.names.get(index)?.as_deref()
    }

    /// Whether the atom was allocated as an auxiliary atom.
    pub fn is_auxiliary(&self, atom: Atom) -> bool {
        self.kind_of(atom) == Some(AtomKind::Auxiliary)
    }

    /// An iterator over all auxiliary atoms, in order of allocation.
    pub fn auxiliary_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .filter(|(_, kind)| **kind == AtomKind::Auxiliary)
            .map(|(index, _)| (index + 1) as Atom)
    }

    /// The external representation of an atom.
    ///
    /// Named atoms are represented by their name, auxiliary atoms by `_t` followed by the atom, and any other atom by the atom itself.
    pub fn external_representation(&self, atom: Atom) -> String {
        match (self.name_of(atom), self.kind_of(atom)) {
            (Some(name), _) => name.to_string(),
            (None, Some(AtomKind::Auxiliary)) => format!("_t{atom}"),
            (None, Some(AtomKind::True)) => "true".to_string(),
            (None, Some(AtomKind::False)) => "false".to_string(),
            _ => format!("{atom}"),
        }
    }
}

impl AtomAllocator for AtomDB {
    fn fresh_auxiliary(&mut self) -> Result<Atom, AtomDBError> {
        self.fresh_atom(AtomKind::Auxiliary)
    }

    fn atom_count(&self) -> usize {
        self.count()
    }
}
