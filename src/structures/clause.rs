/*!
Clauses, aka. implications from a conjunction of literals (the body) to a literal (the head).

The body of a clause is a multiset.
Repeated literals are kept, and each occurrence must be matched separately before the clause is satisfied (though see [Occurrences](crate::config::Occurrences) for how occurrences are matched).

```rust
# use horn_chain::structures::clause::Clause;
# use horn_chain::structures::literal::Literal;
let l = Literal::described("L", "loc in 1,1");
let b = Literal::described("B", "breeze");
let v = Literal::described("V", "breeze in 1,1");

let clause = Clause::new([l, b], v);

assert_eq!(clause.size(), 2);
assert_eq!(clause.as_string(), "L AND B implies V");
```

Two representations are used:
- [Clause], the definition of a clause, as given by a caller.
- [ActiveClause], the state of a clause during a single query, whose body shrinks as occurrences of literals are confirmed.
*/

use crate::structures::{atom::Atom, literal::Literal};

/// The definition of a clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    body: Vec<Literal>,
    head: Literal,
}

impl Clause {
    /// A clause from `body` to `head`.
    pub fn new(body: impl IntoIterator<Item = Literal>, head: Literal) -> Self {
        Clause {
            body: body.into_iter().collect(),
            head,
        }
    }

    /// A clause with an empty body, and so a clause whose head is unconditionally true.
    pub fn unconditional(head: Literal) -> Self {
        Clause {
            body: Vec::default(),
            head,
        }
    }

    pub fn body(&self) -> &[Literal] {
        &self.body
    }

    pub fn head(&self) -> &Literal {
        &self.head
    }

    /// The number of literal occurrences in the body.
    pub fn size(&self) -> usize {
        self.body.len()
    }

    /// Whether the head of the clause also occurs in the body.
    pub fn is_self_referential(&self) -> bool {
        self.body.contains(&self.head)
    }

    /// An iterator over all literals of the clause, the body followed by the head.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.body.iter().chain(std::iter::once(&self.head))
    }

    pub(crate) fn literals_mut(&mut self) -> impl Iterator<Item = &mut Literal> {
        self.body.iter_mut().chain(std::iter::once(&mut self.head))
    }

    /// The clause in English, as `L1 AND L2 AND … implies H`.
    pub fn as_string(&self) -> String {
        match self.body.is_empty() {
            true => format!("implies {}", self.head.id()),
            false => {
                let body = self.body.iter().map(|l| l.id()).collect::<Vec<_>>();
                format!("{} implies {}", body.join(" AND "), self.head.id())
            }
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

/// The state of a clause during a query.
///
/// # Invariant
/// `remaining` is always the number of atoms in `body`.
#[derive(Clone, Debug)]
pub struct ActiveClause {
    /// Occurrences in the body not yet confirmed.
    body: Vec<Atom>,

    head: Atom,

    remaining: usize,

    /// For each confirmed occurrence, the firing which derived the confirming occurrence (none for a fact entry).
    premises: Vec<Option<usize>>,
}

impl ActiveClause {
    pub fn new(body: Vec<Atom>, head: Atom) -> Self {
        let remaining = body.len();
        ActiveClause {
            body,
            head,
            remaining,
            premises: Vec::with_capacity(remaining),
        }
    }

    pub fn head(&self) -> Atom {
        self.head
    }

    /// The occurrences in the body not yet confirmed, order is not guaranteed.
    pub fn unconfirmed(&self) -> &[Atom] {
        &self.body
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining
    }

    /// Removes at most one occurrence of `atom` from the body, returning whether some occurrence was removed.
    pub fn remove_literal_occurrence(&mut self, atom: Atom) -> bool {
        match self.body.iter().position(|occurrence| *occurrence == atom) {
            Some(index) => {
                self.body.swap_remove(index);
                self.remaining -= 1;
                debug_assert_eq!(self.remaining, self.body.len());
                true
            }
            None => false,
        }
    }

    /// Removes every occurrence of `atom` from the body, one at a time, returning a count of removed occurrences.
    pub fn remove_all_occurrences(&mut self, atom: Atom) -> usize {
        let mut removed = 0;
        while self.remove_literal_occurrence(atom) {
            removed += 1;
        }
        removed
    }

    /// Confirms one occurrence of `atom` in the body, noting `firing` as the source of the confirmation.
    pub fn confirm_occurrence(&mut self, atom: Atom, firing: Option<usize>) -> bool {
        let removed = self.remove_literal_occurrence(atom);
        if removed {
            self.premises.push(firing);
        }
        removed
    }

    /// Confirms every occurrence of `atom` in the body, noting `firing` as the source of each confirmation.
    pub fn confirm_all_occurrences(&mut self, atom: Atom, firing: Option<usize>) -> usize {
        let removed = self.remove_all_occurrences(atom);
        self.premises.extend(std::iter::repeat(firing).take(removed));
        removed
    }

    /// The source of each confirmed occurrence, in order of confirmation.
    pub fn premises(&self) -> &[Option<usize>] {
        &self.premises
    }

    pub fn is_satisfied(&self) -> bool {
        self.remaining == 0
    }
}
