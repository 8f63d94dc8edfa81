use horn_chain::{
    config::Config,
    context::Context,
    forward_chain,
    reports::Report,
    structures::{clause::Clause, kb::KnowledgeBase, literal::Literal},
};

mod basic {
    use super::*;

    #[test]
    fn modus_ponens() {
        let [l, b, v] = ["L", "B", "V"].map(Literal::new);

        let mut kb = KnowledgeBase::default();
        kb.push_fact(l.clone());
        kb.push_fact(b.clone());
        kb.push_clause(Clause::new([l, b], v.clone()));

        assert!(forward_chain(&kb, &v));
    }

    #[test]
    fn missing_premise() {
        let [l, b, v] = ["L", "B", "V"].map(Literal::new);

        let mut kb = KnowledgeBase::default();
        kb.push_fact(l.clone());
        kb.push_clause(Clause::new([l, b], v.clone()));

        assert!(!forward_chain(&kb, &v));
    }

    #[test]
    fn empty_body() {
        let x = Literal::new("X");

        let mut kb = KnowledgeBase::default();
        kb.push_clause(Clause::unconditional(x.clone()));

        assert!(forward_chain(&kb, &x));
    }

    #[test]
    fn empty_body_chains() {
        let [x, y] = ["X", "Y"].map(Literal::new);

        let mut kb = KnowledgeBase::default();
        kb.push_clause(Clause::new([x.clone()], y.clone()));
        kb.push_clause(Clause::new([], x));

        assert!(forward_chain(&kb, &y));
    }

    #[test]
    fn repeated_body_literal_single_fact() {
        let [a, y] = ["A", "Y"].map(Literal::new);

        let mut kb = KnowledgeBase::default();
        kb.push_fact(a.clone());
        kb.push_clause(Clause::new([a.clone(), a], y.clone()));

        assert!(!forward_chain(&kb, &y));
    }

    #[test]
    fn repeated_body_literal_repeated_fact() {
        let [a, y] = ["A", "Y"].map(Literal::new);

        let mut kb = KnowledgeBase::default();
        kb.push_fact(a.clone());
        kb.push_fact(a.clone());
        kb.push_clause(Clause::new([a.clone(), a], y.clone()));

        assert!(forward_chain(&kb, &y));
    }

    #[test]
    fn query_is_fact() {
        let q = Literal::new("Q");

        let mut kb = KnowledgeBase::default();
        kb.push_fact(q.clone());

        assert!(forward_chain(&kb, &q));
    }

    #[test]
    fn empty_kb() {
        let kb = KnowledgeBase::default();
        assert!(!forward_chain(&kb, &Literal::new("Q")));
    }

    #[test]
    fn unknown_query() {
        let [p, q] = ["p", "q"].map(Literal::new);

        let mut kb = KnowledgeBase::default();
        kb.push_fact(p.clone());
        kb.push_clause(Clause::new([p], q));

        assert!(!forward_chain(&kb, &Literal::new("r")));
    }

    #[test]
    fn described_literals_match_by_id() {
        let v = Literal::described("V", "breeze in 1,1");

        let mut kb = KnowledgeBase::default();
        kb.push_fact(Literal::new("L"));
        kb.push_clause(Clause::new([Literal::described("L", "loc in 1,1")], v));

        assert!(forward_chain(&kb, &Literal::new("V")));
    }
}

mod properties {
    use super::*;

    #[test]
    fn single_fire() {
        let [a, b, c] = ["A", "B", "C"].map(Literal::new);

        let mut kb = KnowledgeBase::default();
        kb.push_fact(a.clone());
        kb.push_fact(a.clone());
        kb.push_fact(b.clone());
        kb.push_clause(Clause::new([a, b], c));

        let ctx = Context::from_kb(&kb, Config::default()).unwrap();
        let chain = ctx.chain(&Literal::new("Z"));

        assert_eq!(chain.report(), Report::NotEntailed);
        assert_eq!(chain.counters().firings, 1);
        assert_eq!(
            chain.derived_facts().map(|l| l.id()).collect::<Vec<_>>(),
            vec!["C"]
        );
    }

    #[test]
    fn self_referential_clause() {
        let [p, q] = ["P", "Q"].map(Literal::new);

        let mut kb = KnowledgeBase::default();
        kb.push_fact(p.clone());
        kb.push_clause(Clause::new([p.clone()], p.clone()));
        kb.push_clause(Clause::new([p.clone(), q.clone()], p.clone()));
        assert!(kb.clauses().all(|clause| clause.is_self_referential()));

        let ctx = Context::from_kb(&kb, Config::default()).unwrap();
        let chain = ctx.chain(&q);

        assert_eq!(chain.report(), Report::NotEntailed);
        assert_eq!(chain.counters().firings, 1);
        assert_eq!(chain.counters().steps, 2);
    }

    #[test]
    fn monotonicity() {
        let [a, b, c, d] = ["A", "B", "C", "D"].map(Literal::new);

        let mut kb = KnowledgeBase::default();
        kb.push_fact(a.clone());
        kb.push_clause(Clause::new([a.clone()], b.clone()));
        kb.push_clause(Clause::new([b.clone(), a.clone()], c.clone()));
        kb.push_clause(Clause::new([c.clone(), d.clone()], a.clone()));

        let ctx = Context::from_kb(&kb, Config::default()).unwrap();
        let chain = ctx.chain(&d);

        assert_eq!(chain.report(), Report::NotEntailed);
        assert!(chain.is_derived("A"));
        assert!(chain.derived_facts().all(|literal| literal.is_derived()));
        assert!(!chain.is_derived("D"));
    }

    #[test]
    fn interleaved_entries() {
        let [a, b, c] = ["A", "B", "C"].map(Literal::new);

        let mut kb = KnowledgeBase::default();
        kb.push_clause(Clause::new([a.clone()], b.clone()));
        kb.push_fact(a.clone());
        kb.push_clause(Clause::new([b.clone()], c.clone()));

        assert!(forward_chain(&kb, &c));
    }

    #[test]
    fn repeated_queries() {
        let [l, b, v, w] = ["L", "B", "V", "W"].map(Literal::new);

        let mut kb = KnowledgeBase::default();
        kb.push_fact(l.clone());
        kb.push_fact(b.clone());
        kb.push_clause(Clause::new([l, b], v.clone()));

        let ctx = Context::from_kb(&kb, Config::default()).unwrap();

        assert_eq!(ctx.entails(&v), Report::Entailed);
        assert_eq!(ctx.entails(&w), Report::NotEntailed);
        assert_eq!(ctx.entails(&v), Report::Entailed);

        let first = ctx.chain(&w);
        let second = ctx.chain(&w);
        assert_eq!(first.counters(), second.counters());
    }

    #[test]
    fn caller_kb_untouched() {
        let [l, b, v] = ["L", "B", "V"].map(Literal::new);

        let mut kb = KnowledgeBase::default();
        kb.push_fact(l.clone());
        kb.push_fact(b.clone());
        kb.push_clause(Clause::new([l.clone(), b.clone()], v.clone()));
        let before = kb.clone();

        assert!(forward_chain(&kb, &v));
        assert!(forward_chain(&kb, &v));

        assert_eq!(kb, before);
        assert_eq!(kb.clauses().next().map(|clause| clause.size()), Some(2));
        assert!(kb.facts().all(|fact| !fact.is_derived()));
        assert!(kb
            .clauses()
            .flat_map(|clause| clause.literals())
            .all(|literal| !literal.is_derived()));
    }
}
