/// Implimentation of the valuation trait for any structure which can be dereferenced to a slice of optional booleans.
use crate::structures::{atom::Atom, valuation::Valuation};

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)> {
        self.iter()
            .enumerate()
            .skip(1)
            .map(|(atom, value)| (atom as Atom, *value))
    }

    fn valued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.atom_value_pairs()
            .filter_map(|(atom, value)| value.map(|_| atom))
    }
}
