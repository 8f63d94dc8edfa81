//! A library for determining whether a literal is entailed by a knowledge base of definite clauses, by forward chaining.
//!
//! A knowledge base is an ordered collection of entries, each of which is either a fact (a literal asserted to be true) or a clause (an implication from a conjunction of literals to a single literal).
//! A query is entailed when the queried literal is taken from an agenda of known-true literals, where the agenda is seeded with the facts of the knowledge base and grows each time a clause has every literal of its body confirmed.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context is built once from a [knowledge base](crate::structures::kb::KnowledgeBase) and a [configuration](crate::config).
//! Knowledge bases may be built [programatically](crate::structures::kb::KnowledgeBase::push) or [read](crate::builder::text) from text.
//!
//! Each query is made on a fresh [run](crate::transient::Run) of the context, so a context may be queried any number of times.
//! The outcome of a query is a [chain](crate::reports::chain::Chain), from which the [report](crate::reports::Report), the derived literals, and a [derivation](crate::reports::derivation::Derivation) may be read.
//!
//! Useful starting points, then, may be:
//! - The [forward chaining procedure](crate::procedures::forward_chain) to inspect the dynamics of a query.
//! - The [propagation procedure](crate::procedures::propagation) to see how clauses are satisfied.
//! - The [structures] to familiarise yourself with literals, clauses, and knowledge bases.
//!
//! # Examples
//!
//! + Russell & Norvig's wumpus world, in miniature.
//!
//! ```rust
//! # use horn_chain::config::Config;
//! # use horn_chain::context::Context;
//! # use horn_chain::reports::Report;
//! # use horn_chain::structures::{clause::Clause, kb::KnowledgeBase, literal::Literal};
//! let l = Literal::described("L", "loc in 1,1");
//! let b = Literal::described("B", "breeze");
//! let v = Literal::described("V", "breeze in 1,1");
//! let w = Literal::new("W");
//!
//! let mut kb = KnowledgeBase::default();
//! kb.push_fact(l.clone());
//! kb.push_fact(b.clone());
//! kb.push_clause(Clause::new([l.clone(), b.clone()], v.clone()));
//!
//! let the_context = Context::from_kb(&kb, Config::default()).unwrap();
//!
//! assert_eq!(the_context.entails(&v), Report::Entailed);
//! assert_eq!(the_context.entails(&w), Report::NotEntailed);
//!
//! // The literals of the knowledge base are untouched by a query.
//! assert!(kb.facts().all(|fact| !fact.is_derived()));
//! ```
//!
//! + The same, as a single call.
//!
//! ```rust
//! # use horn_chain::forward_chain;
//! # use horn_chain::structures::{clause::Clause, kb::KnowledgeBase, literal::Literal};
//! let [l, b, v] = ["L", "B", "V"].map(Literal::new);
//! let kb = KnowledgeBase::from_iter([
//!     l.clone().into(),
//!     b.clone().into(),
//!     Clause::new([l, b], v.clone()).into(),
//! ]);
//!
//! assert!(forward_chain(&kb, &v));
//! ```
//!
//! # Logging
//!
//! Calls to [log] are made throughout the library, with a [target](crate::misc::log::targets) for each part of a query.
//! No logger is set by the library, and the CLI sets a log4rs logger when built with the `log` feature.
//!
//! By default, logs at the debug level are compiled in debug builds, and no logs are compiled in release builds.

#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod transient;
pub mod types;

pub use procedures::forward_chain::forward_chain;
