/*!
The agenda, aka. the literals known to be true, and yet to be propagated.

Each entry on the agenda is a *true occurrence* of a literal.
An occurrence is added for each fact entry of a knowledge base, and for each clause fired during a query, and notes the firing it came from (if any).
So, the same atom may be on the agenda more than once.

The order in which occurrences are taken from the agenda follows [AgendaOrder].
Order does not change whether a query is entailed, though it may change the count of steps made before a query is settled.

```rust
# use horn_chain::config::AgendaOrder;
# use horn_chain::transient::agenda::{Agenda, Occurrence};
let mut stack = Agenda::new(AgendaOrder::Stack);
let mut queue = Agenda::new(AgendaOrder::Queue);

for atom in [1, 2, 3] {
    stack.push(Occurrence::fact(atom));
    queue.push(Occurrence::fact(atom));
}

assert_eq!(stack.pop().map(|occurrence| occurrence.atom), Some(3));
assert_eq!(queue.pop().map(|occurrence| occurrence.atom), Some(1));
```
*/

use std::collections::VecDeque;

use crate::{
    config::AgendaOrder,
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// A true occurrence of an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occurrence {
    pub atom: Atom,

    /// The index of the firing which derived the occurrence, or none for a fact entry.
    pub firing: Option<usize>,
}

impl Occurrence {
    pub fn fact(atom: Atom) -> Self {
        Occurrence { atom, firing: None }
    }

    pub fn derived(atom: Atom, firing: usize) -> Self {
        Occurrence {
            atom,
            firing: Some(firing),
        }
    }
}

/// Occurrences of atoms known to be true, and yet to be propagated.
pub struct Agenda {
    order: AgendaOrder,
    occurrences: VecDeque<Occurrence>,
}

impl Agenda {
    pub fn new(order: AgendaOrder) -> Self {
        Agenda {
            order,
            occurrences: VecDeque::default(),
        }
    }

    pub fn push(&mut self, occurrence: Occurrence) {
        log::trace!(target: targets::AGENDA, "Pushed {}", occurrence.atom);
        self.occurrences.push_back(occurrence);
    }

    /// Takes the next occurrence from the agenda, if one exists.
    pub fn pop(&mut self) -> Option<Occurrence> {
        match self.order {
            AgendaOrder::Stack => self.occurrences.pop_back(),
            AgendaOrder::Queue => self.occurrences.pop_front(),
        }
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}
