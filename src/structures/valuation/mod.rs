/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is a vector of optional booleans, where each index of the vector is interpreted as an atom:
-  *v*\[a\] = Some(true) *if any only if* 𝐯(𝐚) = true.
-  *v*\[a\] = Some(false) *if any only if* 𝐯(𝐚) = false.
-  *v*\[a\] = None *if any only if* 𝐯(𝐚) is undefined.

As `0` is a reserved atom, the first element of a valuation is ignored.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use otter_tseytin::structures::valuation::Valuation;
let valuation = vec![None, Some(true), None, Some(false)];

assert_eq!(valuation.value_of(1), Some(true));
assert_eq!(valuation.value_of(2), None);
assert_eq!(valuation.value_of(7), None);
assert_eq!(valuation.valued_atoms().count(), 2);
```

Valuations are used to [evaluate](crate::structures::expression::Expression::evaluate) expressions and to check whether [clauses](crate::structures::clause::Clause::satisfied_on) are satisfied, and so to test the transformation of the former into the latter.
*/

mod slice_impl;

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of a atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// The value of an atom under the valuation, if the atom has some value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// An iterator through all (Atom, Value) pairs, excluding the reserved atom.
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)>;

    /// An iterator through atoms which have some value.
    fn valued_atoms(&self) -> impl Iterator<Item = Atom>;
}
