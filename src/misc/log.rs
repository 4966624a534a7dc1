/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [driver](crate::procedures::encode)
    pub const ENCODE: &str = "encode";

    /// Logs related to the [Tseytin encoder](crate::procedures::tseytin)
    pub const TSEYTIN: &str = "tseytin";

    /// Logs related to the [atom database](crate::db::atom)
    pub const ATOM_DB: &str = "atom_db";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to the [symbol database](crate::db::symbol)
    pub const SYMBOL_DB: &str = "symbol_db";

    /// Logs related to [parsing](crate::builder)
    pub const PARSE: &str = "parse";
}
