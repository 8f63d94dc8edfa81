/*!
Determines whether a query is entailed by the knowledge base of a context, by forward chaining.

# Overview

```none
            +---------------------+
  query --->| fresh_run           |
            +---------------------+
                       |
                       ⌄
            +---------------------+  agenda is empty
  +-------->| take from agenda    |-------------------> not entailed
  |         +---------------------+
  |                    |
  |                    |             the query
  |                    +----------------------------> entailed
  |                    |
  |                    ⌄
  |         +---------------------+
  +---------| propagate           |
            +---------------------+
```

- The query is compared with each literal taken from the agenda *before* the literal is propagated, and so a query which is a fact entry is entailed without examining any clause.
- If a [step limit](crate::config::Config::step_limit) is set and reached, the query is cut short with an [unknown](Report::Unknown) report.

As the derived literals only grow during a run, the order in which literals are taken from the agenda does not change whether a query is entailed.
*/

use crate::{
    config::Config,
    context::Context,
    misc::log::targets::{self},
    reports::{chain::Chain, Report},
    structures::{kb::KnowledgeBase, literal::Literal},
};

impl Context {
    /// Makes a query of the context, returning a record of the run.
    ///
    /// ```rust
    /// # use horn_chain::config::Config;
    /// # use horn_chain::context::Context;
    /// # use horn_chain::reports::Report;
    /// # use horn_chain::structures::{clause::Clause, kb::KnowledgeBase, literal::Literal};
    /// let [p, q, r] = ["p", "q", "r"].map(Literal::new);
    ///
    /// let mut kb = KnowledgeBase::default();
    /// kb.push_fact(p.clone());
    /// kb.push_clause(Clause::new([p.clone()], q.clone()));
    /// kb.push_clause(Clause::new([q.clone()], r.clone()));
    ///
    /// let the_context = Context::from_kb(&kb, Config::default()).unwrap();
    /// let chain = the_context.chain(&r);
    ///
    /// assert_eq!(chain.report(), Report::Entailed);
    /// assert_eq!(chain.derived_facts().map(|l| l.id()).collect::<Vec<_>>(), vec!["q", "r"]);
    /// ```
    pub fn chain(&self, query: &Literal) -> Chain {
        let query_atom = self.atom_db.atom_of(query.id());
        let step_limit = self.config.step_limit.value;

        let mut run = self.fresh_run();

        let mut entailing = None;

        let report = 'chain_loop: loop {
            if run.agenda.is_empty() {
                break 'chain_loop Report::NotEntailed;
            }

            if step_limit != 0 && run.counters.steps >= step_limit {
                log::info!(target: targets::AGENDA, "Step limit of {step_limit} reached.");
                break 'chain_loop Report::Unknown;
            }

            let Some(occurrence) = run.agenda.pop() else {
                break 'chain_loop Report::NotEntailed;
            };
            run.counters.steps += 1;

            if Some(occurrence.atom) == query_atom {
                entailing = Some(occurrence);
                break 'chain_loop Report::Entailed;
            }

            self.propagate(&mut run, occurrence);
        };

        log::info!(target: targets::AGENDA, "{query}: {report} after {} steps", run.counters.steps);

        Chain::from_run(query.clone(), query_atom, entailing, report, run)
    }

    /// Whether the query is entailed by the knowledge base of the context.
    pub fn entails(&self, query: &Literal) -> Report {
        self.chain(query).report()
    }
}

/// Whether `query` is entailed by `kb`, using the default configuration.
///
/// ```rust
/// # use horn_chain::forward_chain;
/// # use horn_chain::structures::{clause::Clause, kb::KnowledgeBase, literal::Literal};
/// let l = Literal::described("L", "loc in 1,1");
/// let b = Literal::described("B", "breeze");
/// let v = Literal::described("V", "breeze in 1,1");
///
/// let mut kb = KnowledgeBase::default();
/// kb.push_clause(Clause::new([l.clone(), b.clone()], v.clone()));
/// kb.push_fact(l);
/// kb.push_fact(b);
///
/// assert!(forward_chain(&kb, &v));
/// ```
pub fn forward_chain(kb: &KnowledgeBase, query: &Literal) -> bool {
    match Context::from_kb(kb, Config::default()) {
        Ok(the_context) => the_context.entails(query) == Report::Entailed,
        Err(e) => {
            log::error!("Failed to build a context: {e}");
            false
        }
    }
}
