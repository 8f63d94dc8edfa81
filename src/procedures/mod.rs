//! Various procedures for making a query of a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.
//!
//! - [fresh_run] builds the state of a query from the definitions of a context.
//! - [propagation] confirms occurrences of a literal in clause bodies, and fires satisfied clauses.
//! - [forward_chain] takes literals from the agenda until the query is found, or the agenda is exhausted.

pub mod forward_chain;
pub mod fresh_run;
pub mod propagation;
