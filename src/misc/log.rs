/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
No log implementation is provided by the library, though the binary installs one when built with the `log` feature.

For example, logs related to propagation alone may be filtered by the `propagation` target.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [agenda](crate::transient::agenda)
    pub const AGENDA: &str = "agenda";

    /// Logs related to [propagation](crate::procedures::propagation)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to the [atom database](crate::db::atom)
    pub const ATOM_DB: &str = "atom_db";

    /// Logs related to a [derivation](crate::reports::derivation)
    pub const DERIVATION: &str = "derivation";

    /// Logs related to reading a knowledge base
    pub const PARSE: &str = "parse";
}
