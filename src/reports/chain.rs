//! A record of a query.

use crate::{
    context::Counters,
    reports::{derivation::Derivation, Report},
    structures::{atom::Atom, literal::Literal},
    transient::{agenda::Occurrence, Run},
};

/// A record of a query, kept after the run of the query has finished.
pub struct Chain {
    query: Literal,

    /// The atom of the query, if the query is part of the context.
    query_atom: Option<Atom>,

    /// The occurrence of the query taken from the agenda, if the query was entailed.
    entailing: Option<Occurrence>,

    report: Report,

    /// The literals of the run, indexed by atom and marked as derived where derived.
    literals: Vec<Literal>,

    /// Heads of fired clauses, in the order the clauses fired.
    derived: Vec<Atom>,

    derivation: Derivation,

    counters: Counters,
}

impl Chain {
    pub(crate) fn from_run(
        query: Literal,
        query_atom: Option<Atom>,
        entailing: Option<Occurrence>,
        report: Report,
        run: Run,
    ) -> Self {
        Chain {
            query,
            query_atom,
            entailing,
            report,
            literals: run.literals,
            derived: run.derived,
            derivation: run.derivation,
            counters: run.counters,
        }
    }

    pub fn report(&self) -> Report {
        self.report
    }

    pub fn query(&self) -> &Literal {
        &self.query
    }

    pub fn query_atom(&self) -> Option<Atom> {
        self.query_atom
    }

    /// The occurrence of the query which settled the query as entailed, if any.
    pub fn entailing(&self) -> Option<Occurrence> {
        self.entailing
    }

    /// The facts derived during the query, in the order of derivation and with repetition.
    pub fn derived_facts(&self) -> impl Iterator<Item = &Literal> {
        self.derived
            .iter()
            .filter_map(|atom| self.literals.get(*atom as usize))
    }

    /// The literals of the run, indexed by atom.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Whether the literal with the given id was processed as true during the query.
    pub fn is_derived(&self, id: &str) -> bool {
        self.literals
            .iter()
            .any(|literal| literal.id() == id && literal.is_derived())
    }

    pub fn derivation(&self) -> &Derivation {
        &self.derivation
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }
}
