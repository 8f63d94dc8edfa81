/*!
Builds the state of a query.

The state of a query is a [Run], built fresh from the definitions of a context each time a query is made.

- Each literal is copied, and no copy is marked as derived.
- Each clause is made active, with every occurrence in the body unconfirmed.
- The agenda holds one occurrence for each fact entry, in knowledge base order.

Clauses with an empty body are satisfied from the outset, and so are fired as the run is built.
As a consequence, the head of a clause with an empty body is derived even when a knowledge base has no facts.
*/

use slotmap::SecondaryMap;

use crate::{
    context::{Context, Counters},
    misc::log::targets::{self},
    reports::derivation::Derivation,
    structures::clause::ActiveClause,
    transient::{
        agenda::{Agenda, Occurrence},
        Run,
    },
};

impl Context {
    /// A fresh run for a query, see [procedures::fresh_run](crate::procedures::fresh_run).
    pub fn fresh_run(&self) -> Run {
        let mut run = Run {
            literals: self.atom_db.fresh_literals(),
            clauses: SecondaryMap::with_capacity(self.clause_db.count()),
            agenda: Agenda::new(self.config.agenda_order.value),
            derived: Vec::default(),
            derivation: Derivation::default(),
            counters: Counters::default(),
        };

        for atom in self.facts() {
            run.agenda.push(Occurrence::fact(*atom));
        }

        for (key, stored) in self.clause_db.iter() {
            let active = ActiveClause::new(stored.body().to_vec(), stored.head());
            let unconditional = active.is_satisfied();
            run.clauses.insert(key, active);

            if unconditional {
                log::trace!(target: targets::PROPAGATION, "Unconditional: {}", stored.clause());
                self.fire(&mut run, key);
            }
        }

        run
    }
}
