/*!
Propagates a literal taken from the agenda through the bodies of clauses.

# Overview

Propagation of an (occurrence of an) atom *p*:
1. Marks the literal of *p* as derived, if it is not already.
2. For each clause which is not yet satisfied, confirms occurrences of *p* in the body of the clause.
3. Fires each clause satisfied by the confirmation, in which case the head of the clause is pushed to the agenda and recorded as derived.

Which occurrences are confirmed follows [Occurrences]:
- [Multiset](Occurrences::Multiset), a single occurrence of *p* is confirmed in each body, and each occurrence of *p* taken from the agenda is propagated.
- [Set](Occurrences::Set), every occurrence of *p* is confirmed in each body, and only the first occurrence of *p* taken from the agenda is propagated.

Which clauses are examined follows [Propagation]:
- [Indexed](Propagation::Indexed), only clauses on the occurrence list of *p*.
- [Scan](Propagation::Scan), every clause, in knowledge base order.

Each confirmation notes the source of the confirming occurrence (a fact entry, or the firing which derived the occurrence), and the sources are recorded as the premises of the firing, see [Derivation](crate::reports::derivation::Derivation).

# Single fire

A clause fires only when some occurrence is confirmed *and* the clause is then satisfied.
As no occurrence can be confirmed in the body of a satisfied clause, a clause fires at most once during a run.
(Clauses with an empty body are the exception which proves the rule, and are fired when a run is [built](crate::procedures::fresh_run).)

# Termination

Every occurrence on the agenda is either a fact entry, or the head of a fired clause, and so at most (#facts + #clauses) occurrences are ever taken from the agenda.
In particular, a clause whose head occurs in its own body cannot cause a loop.
*/

use crate::{
    config::{Occurrences, Propagation},
    context::Context,
    db::ClauseKey,
    misc::log::targets::{self},
    transient::{agenda::Occurrence, Run},
};

impl Context {
    /// For documentation see [procedures::propagation](crate::procedures::propagation).
    pub fn propagate(&self, run: &mut Run, occurrence: Occurrence) {
        let atom = occurrence.atom;
        let first_occurrence = match run.literals.get_mut(atom as usize) {
            Some(literal) => {
                let first = !literal.is_derived();
                literal.mark_derived();
                first
            }
            None => {
                log::error!(target: targets::PROPAGATION, "Atom {atom} is not part of the context.");
                return;
            }
        };

        let occurrences = self.config.occurrences.value;

        if occurrences == Occurrences::Set && !first_occurrence {
            log::trace!(target: targets::PROPAGATION, "Skipped repeat of {atom}");
            run.counters.skipped += 1;
            return;
        }

        run.counters.propagations += 1;

        match self.config.propagation.value {
            Propagation::Indexed => {
                for key in self.atom_db.occurrences(atom) {
                    self.confirm_occurrence(run, *key, occurrence, occurrences);
                }
            }

            Propagation::Scan => {
                for key in self.clause_db.keys() {
                    self.confirm_occurrence(run, key, occurrence, occurrences);
                }
            }
        }
    }

    /// Confirms occurrences of the atom of `occurrence` in the body of the clause of `key`, and fires the clause if it is then satisfied.
    fn confirm_occurrence(
        &self,
        run: &mut Run,
        key: ClauseKey,
        occurrence: Occurrence,
        occurrences: Occurrences,
    ) {
        let Some(active) = run.clauses.get_mut(key) else {
            return;
        };

        if active.is_satisfied() {
            return;
        }

        let removed = match occurrences {
            Occurrences::Multiset => {
                active.confirm_occurrence(occurrence.atom, occurrence.firing) as usize
            }
            Occurrences::Set => active.confirm_all_occurrences(occurrence.atom, occurrence.firing),
        };

        if removed == 0 {
            return;
        }

        let satisfied = active.is_satisfied();
        run.counters.removals += removed;

        if satisfied {
            self.fire(run, key);
        }
    }

    /// Fires the clause of `key`.
    ///
    /// The head of the clause is pushed to the agenda and recorded as derived, with the firing noted against the occurrences which satisfied the body.
    pub(crate) fn fire(&self, run: &mut Run, key: ClauseKey) {
        let stored = match self.clause_db.get(key) {
            Ok(stored) => stored,
            Err(_) => {
                log::error!(target: targets::PROPAGATION, "Attempt to fire a missing clause.");
                return;
            }
        };

        log::debug!(target: targets::PROPAGATION, "Fired: {}", stored.clause());

        let premises = match run.clauses.get(key) {
            Some(active) => active.premises().to_vec(),
            None => Vec::default(),
        };

        let head = stored.head();
        let firing = run.derivation.record(key, stored.body(), head, premises);
        run.derived.push(head);
        run.agenda.push(Occurrence::derived(head, firing));
        run.counters.firings += 1;
    }
}
