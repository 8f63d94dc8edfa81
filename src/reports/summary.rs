/*!
Proofs and summaries of a query, relative to the context the query was made of.

A [ChainSummary] is a digest of a [Chain] which may be serialized, e.g. to JSON:

```rust
# use horn_chain::config::Config;
# use horn_chain::context::Context;
# use horn_chain::structures::{clause::Clause, kb::KnowledgeBase, literal::Literal};
let [p, q] = ["p", "q"].map(Literal::new);

let mut kb = KnowledgeBase::default();
kb.push_fact(p.clone());
kb.push_clause(Clause::new([p.clone()], q.clone()));

let the_context = Context::from_kb(&kb, Config::default()).unwrap();
let summary = the_context.summarise(&the_context.chain(&q));

let json = serde_json::to_value(&summary).unwrap();
assert_eq!(json["report"], "entailed");
assert_eq!(json["proof"][0], "p implies q");
```
*/

use serde::Serialize;

use crate::{
    context::{Context, Counters},
    reports::{chain::Chain, Report},
    structures::clause::Clause,
};

/// A serializable digest of a query.
#[derive(Clone, Debug, Serialize)]
pub struct ChainSummary {
    pub query: String,
    pub report: Report,

    /// Ids of the facts derived during the query, in the order of derivation.
    pub derived: Vec<String>,

    /// The clauses of a proof of the query, in English.
    pub proof: Vec<String>,

    pub counters: Counters,
}

impl Context {
    /// The clauses of a proof of the query of `chain`, such that each clause comes after the clauses used to derive its body.
    ///
    /// The proof follows the occurrence of the query which settled the query, and so is empty if the query was not entailed, or if the occurrence is a fact entry.
    pub fn proof(&self, chain: &Chain) -> Vec<&Clause> {
        let Some(entailing) = chain.entailing() else {
            return Vec::default();
        };

        chain
            .derivation()
            .proof(entailing.firing)
            .into_iter()
            .filter_map(|key| self.clause_db.get(key).ok())
            .map(|stored| stored.clause())
            .collect()
    }

    /// A digest of `chain`.
    pub fn summarise(&self, chain: &Chain) -> ChainSummary {
        ChainSummary {
            query: chain.query().id().to_owned(),
            report: chain.report(),
            derived: chain
                .derived_facts()
                .map(|literal| literal.id().to_owned())
                .collect(),
            proof: self
                .proof(chain)
                .into_iter()
                .map(|clause| clause.as_string())
                .collect(),
            counters: chain.counters(),
        }
    }

    /// The derivation of `chain` in the dot language.
    pub fn derivation_dot(&self, chain: &Chain) -> String {
        chain.derivation().as_dot(&self.atom_db)
    }
}
