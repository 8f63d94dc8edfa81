/*!
Literals, aka. atomic propositions.

A literal has an id, an optional human-readable description, and a flag recording whether the literal has been derived.

The id is the *only* key for equality and hashing.
So, two literals with the same id are the same proposition, even if their descriptions differ.
And, distinct propositions must be given distinct ids.

```rust
# use horn_chain::structures::literal::Literal;
let breeze = Literal::described("B", "breeze");
let also_breeze = Literal::new("B");

assert_eq!(breeze, also_breeze);
assert_eq!(breeze.description(), Some("breeze"));
assert!(!breeze.is_derived());
```

The derived flag of a literal built by a caller is never touched by a query.
Instead, each query works with fresh copies of the literals of a knowledge base, and it is these copies which are [marked](Literal::mark_derived).
*/

use std::hash::{Hash, Hasher};

/// A literal, identified by its id.
#[derive(Clone, Debug)]
pub struct Literal {
    /// The unique symbolic name of the literal.
    id: String,

    /// An optional human-readable description.
    description: Option<String>,

    /// Whether the literal has been processed as true.
    derived: bool,
}

impl Literal {
    /// A literal with the given id and no description.
    pub fn new(id: impl Into<String>) -> Self {
        Literal {
            id: id.into(),
            description: None,
            derived: false,
        }
    }

    /// A literal with the given id and description.
    pub fn described(id: impl Into<String>, description: impl Into<String>) -> Self {
        Literal {
            id: id.into(),
            description: Some(description.into()),
            derived: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn is_derived(&self) -> bool {
        self.derived
    }

    /// Marks the literal as derived.
    ///
    /// Idempotent, and there is no way to unmark a literal.
    pub fn mark_derived(&mut self) {
        self.derived = true;
    }

    /// A copy of the literal, without the derived mark.
    pub fn fresh(&self) -> Self {
        Literal {
            id: self.id.clone(),
            description: self.description.clone(),
            derived: false,
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for Literal {
    fn from(id: &str) -> Self {
        Literal::new(id)
    }
}

impl From<String> for Literal {
    fn from(id: String) -> Self {
        Literal::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mark_is_idempotent() {
        let mut p = Literal::new("p");
        p.mark_derived();
        assert!(p.is_derived());
        p.mark_derived();
        assert!(p.is_derived());
    }

    #[test]
    fn identity_is_the_id() {
        let mut derived = Literal::described("L", "loc in 1,1");
        derived.mark_derived();

        let plain = Literal::new("L");
        assert_eq!(derived, plain);

        let mut set = HashSet::new();
        set.insert(derived);
        assert!(set.contains(&plain));
        assert!(!set.contains(&Literal::new("B")));
    }

    #[test]
    fn fresh_drops_the_mark() {
        let mut v = Literal::described("V", "breeze in 1,1");
        v.mark_derived();

        let copy = v.fresh();
        assert!(!copy.is_derived());
        assert_eq!(copy.description(), Some("breeze in 1,1"));
    }
}
