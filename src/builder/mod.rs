/*!
Tools for building expressions.

# Basic methods

Expressions may be built:
- Directly, from the variants of [Expression] or through the bitwise operators `&`, `|`, and `!`.
- From a string, through [expression_from_string](Context::expression_from_string) or [parse_expression].

# Strings

The grammar of an expression, from loosest to tightest binding, is:

| Connective   | Written         |
|--------------|-----------------|
| Equivalence  | `<->` or `=`    |
| Disjunction  | `\|\|` or `\|`  |
| Conjunction  | `&&` or `&`     |
| Negation     | `!` or `-`      |

Parentheses group, binary connectives associate to the left, and names are non-empty strings of ASCII letters, digits, and underscores.
Within a context the names `true` and `false` are the constants, and any other name not already a symbol is introduced as a fresh boolean symbol.

# Examples

```rust
# use otter_tseytin::context::Context;
# use otter_tseytin::config::Config;
let mut the_context = Context::from_config(Config::default()).unwrap();

let expression = the_context.expression_from_string("A && -(B | C) || true").unwrap();
assert_eq!(expression.to_string(), "((3 & !(4 | 5)) | 2)");
assert_eq!(expression.as_string(&the_context.atom_db), "((A & !(B | C)) | true)");
```

Parsing of a malformed string fails, with the location of the issue.

```rust
# use otter_tseytin::context::Context;
# use otter_tseytin::config::Config;
# use otter_tseytin::types::err::{ErrorKind, ParseError};
let mut the_context = Context::from_config(Config::default()).unwrap();

assert_eq!(
    the_context.expression_from_string("A &&"),
    Err(ErrorKind::Parse(ParseError::MissingNode(4)))
);
```
*/

mod parse;
pub use parse::parse_expression;

use crate::{
    context::Context,
    db::symbol::{ConstraintSource, SymbolType},
    structures::{atom::Atom, expression::Expression},
    types::err::{self},
};

impl Context {
    /// An expression from a string, introducing a boolean symbol for each unfamiliar name.
    ///
    /// Symbols are introduced only if the whole string is read, and in order of first appearance.
    pub fn expression_from_string(&mut self, string: &str) -> Result<Expression, err::ErrorKind> {
        let truth = self.symbol_db.truth();
        let falsum = self.symbol_db.falsum();
        let next_atom = self.atom_db.count() + 1;

        let symbol_db = &self.symbol_db;
        let mut fresh_names: Vec<String> = Vec::default();

        let expression = parse_expression(string, |name| match name {
            "true" => Ok(Expression::Atom(truth)),

            "false" => Ok(Expression::Atom(falsum)),

            _ => {
                if let Some(atom) = symbol_db.symbol(name).map(|symbol| symbol.atom) {
                    return Ok(Expression::Atom(atom));
                }

                let offset = match fresh_names.iter().position(|fresh| fresh == name) {
                    Some(offset) => offset,
                    None => {
                        fresh_names.push(name.to_string());
                        fresh_names.len() - 1
                    }
                };

                match Atom::try_from(next_atom + offset) {
                    Ok(atom) => Ok(Expression::Atom(atom)),
                    Err(_) => Err(err::ErrorKind::from(err::AtomDBError::AtomsExhausted)),
                }
            }
        })?;

        if !self.atom_db.has_room_for(fresh_names.len()) {
            return Err(err::ErrorKind::from(err::AtomDBError::AtomsExhausted));
        }

        for (offset, name) in fresh_names.iter().enumerate() {
            let atom = self.symbol_db.add_symbol(name, SymbolType::Boolean, &mut self.atom_db)?;
            assert_eq!(atom as usize, next_atom + offset, "! Fresh symbol atom out of sequence");
        }

        Ok(expression)
    }
}
