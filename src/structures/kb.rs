/*!
Knowledge bases, aka. an ordered collection of facts and clauses.

Each entry of a knowledge base is either a [fact](Entry::Fact) or a [clause](Entry::Clause).
The order of entries does not affect whether a query is entailed, though it may affect the order in which literals are derived.

Repeated fact entries are kept.
Each fact entry is a distinct *occurrence* of the literal as true, and so two entries for `A` may satisfy a clause whose body is `A ∧ A` while a single entry does not (under the default [multiset](crate::config::Occurrences::Multiset) semantics).

```rust
# use horn_chain::structures::{clause::Clause, kb::KnowledgeBase, literal::Literal};
let [l, b, v] = ["L", "B", "V"].map(Literal::new);

let mut kb = KnowledgeBase::default();
kb.push_fact(l.clone());
kb.push_fact(b.clone());
kb.push_clause(Clause::new([l, b], v));

assert_eq!(kb.len(), 3);
assert_eq!(kb.facts().count(), 2);
assert_eq!(kb.clauses().count(), 1);
```
*/

use crate::structures::{clause::Clause, literal::Literal};

/// An entry of a knowledge base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// A literal asserted as true.
    Fact(Literal),

    /// An implication.
    Clause(Clause),
}

impl From<Literal> for Entry {
    fn from(literal: Literal) -> Self {
        Entry::Fact(literal)
    }
}

impl From<Clause> for Entry {
    fn from(clause: Clause) -> Self {
        Entry::Clause(clause)
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entry::Fact(literal) => write!(f, "{literal}"),
            Entry::Clause(clause) => write!(f, "{clause}"),
        }
    }
}

/// An ordered collection of entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<Entry>,
}

impl KnowledgeBase {
    pub fn push(&mut self, entry: impl Into<Entry>) {
        self.entries.push(entry.into());
    }

    pub fn push_fact(&mut self, literal: Literal) {
        self.entries.push(Entry::Fact(literal));
    }

    pub fn push_clause(&mut self, clause: Clause) {
        self.entries.push(Entry::Clause(clause));
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [Entry] {
        &mut self.entries
    }

    /// An iterator over the fact entries, in order and with repetition.
    pub fn facts(&self) -> impl Iterator<Item = &Literal> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Fact(literal) => Some(literal),
            Entry::Clause(_) => None,
        })
    }

    /// An iterator over the clause entries, in order.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Fact(_) => None,
            Entry::Clause(clause) => Some(clause),
        })
    }

    /// Whether `literal` is asserted by some fact entry.
    pub fn contains_fact(&self, literal: &Literal) -> bool {
        self.facts().any(|fact| fact == literal)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Entry> for KnowledgeBase {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        KnowledgeBase {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<Entry> for KnowledgeBase {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        self.entries.extend(iter)
    }
}

impl IntoIterator for KnowledgeBase {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a KnowledgeBase {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_entries_keep_order() {
        let [a, b, c] = ["a", "b", "c"].map(Literal::new);

        let kb: KnowledgeBase = [
            Entry::from(a.clone()),
            Entry::from(Clause::new([a.clone()], b.clone())),
            Entry::from(a.clone()),
            Entry::from(Clause::new([b.clone()], c.clone())),
        ]
        .into_iter()
        .collect();

        assert_eq!(kb.facts().collect::<Vec<_>>(), vec![&a, &a]);
        assert_eq!(
            kb.clauses().map(|c| c.to_string()).collect::<Vec<_>>(),
            vec!["a implies b", "b implies c"]
        );
        assert!(kb.contains_fact(&a));
        assert!(!kb.contains_fact(&c));
    }
}
