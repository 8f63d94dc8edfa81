use serde::Serialize;

/// Counts for various things which count during a query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    /// A count of literals taken from the agenda.
    pub steps: usize,

    /// A count of literals propagated through clause bodies.
    pub propagations: usize,

    /// A count of literals taken from the agenda but not propagated, as the literal was already derived.
    pub skipped: usize,

    /// A count of occurrences removed from clause bodies.
    pub removals: usize,

    /// A count of clauses fired.
    pub firings: usize,
}
