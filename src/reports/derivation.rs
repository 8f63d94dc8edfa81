/*!
A record of the clauses fired during a query.

Each firing of a clause is recorded as edges from the (distinct) atoms of the body to the head, labelled with the index of the firing.

Each firing also notes the *premises* of the firing, that is, the source of each occurrence confirmed in the body of the clause.
A source is either a fact entry or an earlier firing, and following premises back from an occurrence to fact entries gives a proof of the occurrence.
As each occurrence of a literal is confirmed separately, a proof of a clause with a repeated body literal includes the derivation of each occurrence used.

```rust
# use horn_chain::config::Config;
# use horn_chain::context::Context;
# use horn_chain::structures::{clause::Clause, kb::KnowledgeBase, literal::Literal};
let [a, b, c, d] = ["a", "b", "c", "d"].map(Literal::new);

let mut kb = KnowledgeBase::default();
kb.push_fact(a.clone());
kb.push_clause(Clause::new([a.clone()], b.clone()));
kb.push_clause(Clause::new([a.clone()], d.clone()));
kb.push_clause(Clause::new([b.clone()], c.clone()));

let the_context = Context::from_kb(&kb, Config::default()).unwrap();
let chain = the_context.chain(&c);

let proof = the_context
    .proof(&chain)
    .iter()
    .map(|clause| clause.to_string())
    .collect::<Vec<_>>();

assert_eq!(proof, vec!["a implies b", "b implies c"]);
```
*/

use std::collections::{BTreeSet, HashMap, HashSet};

use petgraph::{
    algo::has_path_connecting,
    dot::Dot,
    graph::{DiGraph, NodeIndex},
};

use crate::{
    db::{atom::AtomDB, ClauseKey},
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// A single firing of a clause.
#[derive(Clone, Debug)]
pub struct Firing {
    pub key: ClauseKey,

    pub head: Atom,

    /// The source of each occurrence confirmed in the body, with none for a fact entry.
    pub premises: Vec<Option<usize>>,
}

/// A graph of the firings of a query.
#[derive(Default)]
pub struct Derivation {
    /// Nodes are atoms, and edges are labelled with the index of a firing.
    graph: DiGraph<Atom, usize>,

    nodes: HashMap<Atom, NodeIndex>,

    /// Fired clauses, in the order the clauses fired.
    firings: Vec<Firing>,
}

impl Derivation {
    fn node_of(&mut self, atom: Atom) -> NodeIndex {
        match self.nodes.get(&atom) {
            Some(index) => *index,
            None => {
                let index = self.graph.add_node(atom);
                self.nodes.insert(atom, index);
                index
            }
        }
    }

    /// Records the firing of the clause of `key`, with the given body, head, and premises, returning the index of the firing.
    pub fn record(
        &mut self,
        key: ClauseKey,
        body: &[Atom],
        head: Atom,
        premises: Vec<Option<usize>>,
    ) -> usize {
        let firing = self.firings.len();
        log::trace!(target: targets::DERIVATION, "Firing {firing} of {head} from {premises:?}");

        self.firings.push(Firing {
            key,
            head,
            premises,
        });

        let head_node = self.node_of(head);
        let mut seen = HashSet::with_capacity(body.len());
        for atom in body {
            if seen.insert(*atom) {
                let body_node = self.node_of(*atom);
                self.graph.add_edge(body_node, head_node, firing);
            }
        }

        firing
    }

    /// Fired clauses, in the order the clauses fired.
    pub fn firings(&self) -> &[Firing] {
        &self.firings
    }

    /// Whether `conclusion` was derived using `premise`, through some chain of firings.
    pub fn depends_on(&self, conclusion: Atom, premise: Atom) -> bool {
        match (self.nodes.get(&premise), self.nodes.get(&conclusion)) {
            (Some(from), Some(to)) if from != to => {
                has_path_connecting(&self.graph, *from, *to, None)
            }
            _ => false,
        }
    }

    /// Keys to the clauses of a proof of the occurrence derived by `firing`, in the order the clauses fired.
    ///
    /// A premise always fires before the firings which use it, so each clause comes after the clauses used to derive its body.
    /// If `firing` is none (i.e. the occurrence is a fact entry) the proof is empty.
    pub fn proof(&self, firing: Option<usize>) -> Vec<ClauseKey> {
        let mut used = BTreeSet::new();
        let mut stack = firing.into_iter().collect::<Vec<_>>();

        while let Some(index) = stack.pop() {
            if !used.insert(index) {
                continue;
            }

            if let Some(fired) = self.firings.get(index) {
                let premises = fired.premises.iter().flatten();
                stack.extend(premises.filter(|premise| !used.contains(*premise)));
            }
        }

        used
            .into_iter()
            .filter_map(|index| self.firings.get(index))
            .map(|fired| fired.key)
            .collect()
    }

    /// The derivation in the [dot](https://graphviz.org/doc/info/lang.html) language, with nodes labelled by literal ids and edges by the index of the firing.
    pub fn as_dot(&self, atom_db: &AtomDB) -> String {
        let labelled = self.graph.map(
            |_, atom| match atom_db.literal_of(*atom) {
                Some(literal) => literal.id().to_owned(),
                None => atom.to_string(),
            },
            |_, firing| *firing,
        );

        format!("{}", Dot::new(&labelled))
    }
}
