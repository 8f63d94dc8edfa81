/*!
Structures which exist only for the duration of a query.

Each query made of a [context](crate::context::Context) works on a [Run], built from the (fixed) definitions of the context:
- A fresh copy of each literal, none of which is marked as derived.
- An [ActiveClause] for each clause, whose body shrinks as occurrences are confirmed.
- An [agenda] of literals known to be true but not yet propagated.

And so, the definitions of a context are never mutated by a query.
*/

pub mod agenda;

use slotmap::SecondaryMap;

use crate::{
    context::Counters,
    db::ClauseKey,
    reports::derivation::Derivation,
    structures::{atom::Atom, clause::ActiveClause, literal::Literal},
};

use agenda::Agenda;

/// The mutable state of a single query.
pub struct Run {
    /// A fresh copy of each literal, indexed by atom.
    pub literals: Vec<Literal>,

    /// The state of each clause.
    pub clauses: SecondaryMap<ClauseKey, ActiveClause>,

    /// Literals known to be true, and yet to be propagated.
    pub agenda: Agenda,

    /// Heads of fired clauses, in the order the clauses fired.
    pub derived: Vec<Atom>,

    /// A record of every clause fired.
    pub derivation: Derivation,

    pub counters: Counters,
}
