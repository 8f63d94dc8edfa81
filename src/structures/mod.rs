//! Key structures, such as literals, clauses, and knowledge bases.
//!
//! Structures here are *definitions*.
//! A definition is never mutated by a query, and so a [knowledge base](kb::KnowledgeBase) may be queried any number of times.
//! The mutable counterparts used during a single query (fresh `derived` flags, shrinking clause bodies) are built from these definitions when a query begins, see [transient](crate::transient).
//!
//! ## Horn clauses
//!
//! A (definite) Horn clause is an implication from a conjunction of (positive) literals, the *body*, to a single (positive) literal, the *head*.
//! - A clause with an empty body is unconditional, and so its head is always true.
//! - A fact is identified with the clause whose body is empty and whose head is the fact, though the two are recorded as distinct [entries](kb::Entry) of a knowledge base.

pub mod atom;
pub mod clause;
pub mod kb;
pub mod literal;
