/*!
The context --- from which queries are made.

A context is built once from a [knowledge base](crate::structures::kb::KnowledgeBase) and a [configuration](crate::config::Config), after which the definitions of the context are fixed.
Each query is then made on a fresh [run](crate::transient::Run), and so any number of queries may be made of a context, in any order, without one query influencing another.

# Example
```rust
# use horn_chain::config::Config;
# use horn_chain::context::Context;
# use horn_chain::reports::Report;
# use horn_chain::structures::{clause::Clause, kb::KnowledgeBase, literal::Literal};
let [l, b, v] = ["L", "B", "V"].map(Literal::new);

let mut kb = KnowledgeBase::default();
kb.push_fact(l.clone());
kb.push_clause(Clause::new([l.clone(), b.clone()], v.clone()));

let the_context = Context::from_kb(&kb, Config::default()).unwrap();

assert_eq!(the_context.entails(&v), Report::NotEntailed);
assert_eq!(the_context.entails(&l), Report::Entailed);

// Nothing from the first query carries over to the second.
assert_eq!(the_context.entails(&v), Report::NotEntailed);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB},
    structures::{atom::Atom, literal::Literal},
};

/// The context of a knowledge base.
pub struct Context {
    /// The configuration followed by each query.
    pub config: Config,

    /// The atom database, for interning literals and occurrence lists.
    pub atom_db: AtomDB,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The atom of each fact entry, in order and with repetition.
    facts: Vec<Atom>,
}

impl Context {
    /// A context without any facts or clauses.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            facts: Vec::default(),
        }
    }

    /// The atom of each fact entry, in order and with repetition.
    pub fn facts(&self) -> &[Atom] {
        &self.facts
    }

    pub(crate) fn facts_mut(&mut self) -> &mut Vec<Atom> {
        &mut self.facts
    }

    /// Whether some fact entry asserts `atom`.
    pub fn is_fact(&self, atom: Atom) -> bool {
        self.facts.contains(&atom)
    }

    /// The literal of an atom, if the atom is part of the context.
    pub fn literal_of(&self, atom: Atom) -> Option<&Literal> {
        self.atom_db.literal_of(atom)
    }
}
