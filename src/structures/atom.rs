/*!
(The internal representation of) an atom.

Each distinct literal id seen by a [context](crate::context) is interned to an atom, and atoms are handed out in order from 0.
So, the atoms of a context with *m* distinct ids are [0..*m*), and atoms may be used as the indicies of a structure.

```rust
# use horn_chain::structures::atom::Atom;
let m = 97;
let atoms = (0..m).collect::<Vec<Atom>>();
assert_eq!(atoms.len(), 97);
```

The external representation of an atom is the [Literal](crate::structures::literal::Literal) stored in the [atom database](crate::db::atom).
*/

/// An atom, the internal name of a literal.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = Atom::MAX;
