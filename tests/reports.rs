use horn_chain::{
    config::Config,
    context::Context,
    reports::Report,
    structures::{clause::Clause, kb::KnowledgeBase, literal::Literal},
};

fn wumpus() -> KnowledgeBase {
    let kb = include_str!("../demos/wumpus.kb");
    KnowledgeBase::read(kb.as_bytes()).unwrap()
}

mod read {
    use super::*;

    #[test]
    fn wumpus_entries() {
        let kb = wumpus();

        assert_eq!(kb.facts().count(), 2);
        assert_eq!(kb.clauses().count(), 6);

        let first = kb.facts().next().unwrap();
        assert_eq!(first.id(), "L11");
        assert_eq!(first.description(), Some("agent in 1,1"));
    }

    #[test]
    fn wumpus_queries() {
        let kb = wumpus();
        let ctx = Context::from_kb(&kb, Config::default()).unwrap();

        assert_eq!(ctx.entails(&Literal::new("FRONTIER")), Report::Entailed);
        assert_eq!(ctx.entails(&Literal::new("PIT_NEARBY")), Report::NotEntailed);
        assert_eq!(ctx.entails(&Literal::new("WUMPUS_NEARBY")), Report::NotEntailed);
    }
}

mod proof {
    use super::*;

    #[test]
    fn wumpus_proof() {
        let kb = wumpus();
        let ctx = Context::from_kb(&kb, Config::default()).unwrap();
        let chain = ctx.chain(&Literal::new("FRONTIER"));

        let proof = ctx
            .proof(&chain)
            .iter()
            .map(|clause| clause.as_string())
            .collect::<Vec<_>>();

        assert_eq!(
            proof,
            vec![
                "V11 AND L11 implies OK12",
                "V11 AND L11 implies OK21",
                "OK12 AND OK21 implies FRONTIER",
            ]
        );
    }

    #[test]
    fn no_proof_of_fact_or_failure() {
        let kb = wumpus();
        let ctx = Context::from_kb(&kb, Config::default()).unwrap();

        assert!(ctx.proof(&ctx.chain(&Literal::new("L11"))).is_empty());
        assert!(ctx.proof(&ctx.chain(&Literal::new("PIT_NEARBY"))).is_empty());
    }

    #[test]
    fn proof_of_each_occurrence() {
        let [a, b, y] = ["A", "B", "Y"].map(Literal::new);

        let mut kb = KnowledgeBase::default();
        kb.push_fact(a.clone());
        kb.push_fact(b.clone());
        kb.push_clause(Clause::new([b.clone()], a.clone()));
        kb.push_clause(Clause::new([a.clone(), a.clone()], y.clone()));

        let ctx = Context::from_kb(&kb, Config::default()).unwrap();
        let chain = ctx.chain(&y);
        assert_eq!(chain.report(), Report::Entailed);

        let proof = ctx
            .proof(&chain)
            .iter()
            .map(|clause| clause.as_string())
            .collect::<Vec<_>>();

        assert_eq!(proof, vec!["B implies A", "A AND A implies Y"]);

        // The proof stands as a knowledge base of its own, with the facts of the original.
        let mut proof_kb = KnowledgeBase::default();
        proof_kb.push_fact(a);
        proof_kb.push_fact(b);
        for clause in ctx.proof(&chain) {
            proof_kb.push_clause(clause.clone());
        }
        let proof_ctx = Context::from_kb(&proof_kb, Config::default()).unwrap();
        assert_eq!(proof_ctx.entails(&y), Report::Entailed);
    }

    #[test]
    fn proof_with_shared_premise() {
        let [p, q, r, s] = ["p", "q", "r", "s"].map(Literal::new);

        let mut kb = KnowledgeBase::default();
        kb.push_fact(p.clone());
        kb.push_clause(Clause::new([p.clone()], q.clone()));
        kb.push_clause(Clause::new([q.clone(), p.clone()], r.clone()));
        kb.push_clause(Clause::new([q.clone(), r.clone()], s.clone()));

        let ctx = Context::from_kb(&kb, Config::default()).unwrap();
        let chain = ctx.chain(&s);

        let proof = ctx
            .proof(&chain)
            .iter()
            .map(|clause| clause.as_string())
            .collect::<Vec<_>>();

        assert_eq!(
            proof,
            vec!["p implies q", "q AND p implies r", "q AND r implies s"]
        );
    }

    #[test]
    fn dependencies() {
        let [l, b, v, w] = ["L", "B", "V", "W"].map(Literal::new);

        let mut kb = KnowledgeBase::default();
        kb.push_fact(l.clone());
        kb.push_fact(b.clone());
        kb.push_clause(Clause::new([l.clone(), b.clone()], v.clone()));
        kb.push_clause(Clause::new([v.clone()], w.clone()));

        let ctx = Context::from_kb(&kb, Config::default()).unwrap();
        let chain = ctx.chain(&w);
        assert_eq!(chain.report(), Report::Entailed);

        let atom = |id: &str| ctx.atom_db.atom_of(id).unwrap();
        let derivation = chain.derivation();

        assert!(derivation.depends_on(atom("W"), atom("L")));
        assert!(derivation.depends_on(atom("V"), atom("B")));
        assert!(!derivation.depends_on(atom("L"), atom("W")));
        assert_eq!(derivation.firings().len(), 2);
        assert_eq!(derivation.firings()[1].head, atom("W"));
        assert_eq!(derivation.firings()[1].premises, vec![Some(0)]);
        assert!(ctx.is_fact(atom("L")));
        assert!(!ctx.is_fact(atom("V")));

        let dot = ctx.derivation_dot(&chain);
        assert!(dot.contains("digraph"));
        assert!(dot.contains("->"));
        assert!(dot.contains('W'));
    }
}

mod summary {
    use super::*;

    #[test]
    fn json() {
        let kb = wumpus();
        let ctx = Context::from_kb(&kb, Config::default()).unwrap();

        let summary = ctx.summarise(&ctx.chain(&Literal::new("FRONTIER")));
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["query"], "FRONTIER");
        assert_eq!(json["report"], "entailed");
        assert_eq!(
            json["derived"],
            serde_json::json!(["V11", "OK12", "OK21", "FRONTIER"])
        );
        assert_eq!(json["proof"].as_array().map(|proof| proof.len()), Some(3));
        assert_eq!(json["counters"]["firings"], 4);

        let summary = ctx.summarise(&ctx.chain(&Literal::new("PIT_NEARBY")));
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"report\":\"not-entailed\""));
    }
}
