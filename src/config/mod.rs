/*!
Configuration of an encoding.

All configuration for an encoding is contained within a [Config], and each option is a [ConfigOption] --- a value paired with a name and the bounds of the value.

Every configuration produces an encoding equisatisfiable with the expressions encoded.
Options, then, trade the count of clauses and auxiliary atoms against uniformity of the encoding:
- With the default configuration expressions in the shape of a clause are read directly as a clause, and the root of each other expression is asserted without an auxiliary atom.
- With both options disabled every expression is encoded by naming the root of the expression with an auxiliary atom and asserting the name.

```rust
# use otter_tseytin::config::Config;
let mut config = Config::default();
config.direct_root.value = false;

assert!(config.cnf_shortcut.value);
assert_eq!(config.direct_root.min_max(), (false, true));
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Read expressions in the shape of a clause directly as a clause, rather than encode the expression.
    pub cnf_shortcut: ConfigOption<bool>,

    /// Assert the root of an expression directly, rather than name the root with an auxiliary atom.
    pub direct_root: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cnf_shortcut: ConfigOption {
                name: "cnf_shortcut",
                min: false,
                max: true,
                value: true,
            },

            direct_root: ConfigOption {
                name: "direct_root",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
