//! Tools for building a context.
//!
//! A context is built from the entries of a knowledge base, in order.
//! - A fact entry is interned and noted as an occurrence on the agenda of each query.
//! - A clause entry is stored in the clause database, with the clause noted on the occurrence list of each atom in its body.
//!
//! Knowledge bases may also be [read](crate::structures::kb::KnowledgeBase::read) from a simple text format.

pub mod text;

use crate::{
    config::Config,
    context::Context,
    db::ClauseKey,
    structures::{
        atom::Atom,
        clause::Clause,
        kb::{Entry, KnowledgeBase},
        literal::Literal,
    },
    types::err::{self},
};

/// Methods for building the context.
impl Context {
    /// A context of the given knowledge base.
    ///
    /// Facts and clauses are kept apart as the context is built, so the interleaving of facts and clauses in the knowledge base has no effect on which clauses are examined during a query.
    pub fn from_kb(kb: &KnowledgeBase, config: Config) -> Result<Self, err::ErrorKind> {
        let mut the_context = Context::from_config(config);
        for entry in kb {
            the_context.add_entry(entry.clone())?;
        }
        Ok(the_context)
    }

    pub fn add_entry(&mut self, entry: Entry) -> Result<(), err::ErrorKind> {
        match entry {
            Entry::Fact(literal) => self.add_fact(&literal).map(|_| ()),
            Entry::Clause(clause) => self.add_clause(clause).map(|_| ()),
        }
    }

    /// Adds a fact to the context, returning the atom of the fact.
    ///
    /// Adding the same fact twice adds two occurrences of the fact.
    pub fn add_fact(&mut self, literal: &Literal) -> Result<Atom, err::ErrorKind> {
        let atom = self.atom_db.ensure_atom(literal)?;
        self.facts_mut().push(atom);
        Ok(atom)
    }

    /// Adds a clause to the context, returning the key to the clause.
    ///
    /// ```rust
    /// # use horn_chain::config::Config;
    /// # use horn_chain::context::Context;
    /// # use horn_chain::structures::{clause::Clause, literal::Literal};
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let p = Literal::new("p");
    /// let q = Literal::new("q");
    ///
    /// assert!(the_context.add_clause(Clause::new([p, q.clone()], q)).is_ok());
    /// assert_eq!(the_context.clause_db.count(), 1);
    /// assert_eq!(the_context.atom_db.count(), 2);
    /// ```
    pub fn add_clause(&mut self, clause: Clause) -> Result<ClauseKey, err::ErrorKind> {
        self.clause_db.store(clause, &mut self.atom_db)
    }
}
