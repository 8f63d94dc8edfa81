/*!
A database of 'atom related' things.

Things include:
- Internal and external name maps, for reading and writing [Atom]s and [Literal]s.
- For each atom, the (keys of) clauses whose body mentions the atom, aka. the occurrence list of the atom.

Occurrence lists support propagation without an examination of every clause in a context, see [Propagation](crate::config::Propagation).
*/

use std::collections::HashMap;

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::Literal,
    },
    types::err::AtomDBError,
};

/// The atom database.
#[derive(Default)]
pub struct AtomDB {
    /// A map from literal ids to atoms.
    atom_map: HashMap<String, Atom>,

    /// The literal of each atom, indexed by atom.
    literals: Vec<Literal>,

    /// Clauses whose body mentions the atom, indexed by atom.
    occurrences: Vec<Vec<ClauseKey>>,
}

impl AtomDB {
    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.literals.len()
    }

    /// The atom of the literal with the given id, if some such atom exists.
    pub fn atom_of(&self, id: &str) -> Option<Atom> {
        self.atom_map.get(id).copied()
    }

    /// The literal of an atom, if the atom is part of the database.
    pub fn literal_of(&self, atom: Atom) -> Option<&Literal> {
        self.literals.get(atom as usize)
    }

    /// The atom of `literal`, with a fresh atom made if the id of the literal has not been seen before.
    ///
    /// The first description given for an id is kept.
    pub fn ensure_atom(&mut self, literal: &Literal) -> Result<Atom, AtomDBError> {
        if let Some(atom) = self.atom_map.get(literal.id()) {
            let known = &mut self.literals[*atom as usize];
            if known.description().is_none() {
                if let Some(description) = literal.description() {
                    known.set_description(description);
                }
            }
            return Ok(*atom);
        }

        let atom = match self.literals.len().try_into() {
            Ok(atom) if atom < ATOM_MAX => atom,
            _ => return Err(AtomDBError::AtomsExhausted),
        };

        log::trace!(target: targets::ATOM_DB, "Atom {atom} for {}", literal.id());

        self.atom_map.insert(literal.id().to_owned(), atom);
        self.literals.push(literal.fresh());
        self.occurrences.push(Vec::default());

        Ok(atom)
    }

    /// Notes the body of the clause of `key` mentions `atom`.
    ///
    /// A key is noted at most once for an atom, regardless of how often the atom occurs in the body.
    pub fn note_occurrence(&mut self, atom: Atom, key: ClauseKey) {
        let list = &mut self.occurrences[atom as usize];
        if list.last() != Some(&key) && !list.contains(&key) {
            list.push(key);
        }
    }

    /// Keys to clauses whose body mentions `atom`, in the order the clauses were stored.
    pub fn occurrences(&self, atom: Atom) -> &[ClauseKey] {
        match self.occurrences.get(atom as usize) {
            Some(list) => list,
            None => &[],
        }
    }

    /// A fresh copy of each literal, indexed by atom, and with no literal marked as derived.
    pub fn fresh_literals(&self) -> Vec<Literal> {
        self.literals.iter().map(Literal::fresh).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn interning() {
        let mut db = AtomDB::default();

        let p = db.ensure_atom(&Literal::new("p")).unwrap();
        let q = db.ensure_atom(&Literal::described("q", "queue")).unwrap();
        let p_again = db.ensure_atom(&Literal::described("p", "late")).unwrap();

        assert_eq!(p, 0);
        assert_eq!(q, 1);
        assert_eq!(p, p_again);
        assert_eq!(db.count(), 2);

        assert_eq!(db.atom_of("q"), Some(q));
        assert_eq!(db.atom_of("r"), None);
        assert_eq!(db.literal_of(p).and_then(|l| l.description()), Some("late"));
        assert_eq!(db.literal_of(q).and_then(|l| l.description()), Some("queue"));
    }

    #[test]
    fn occurrences_are_noted_once() {
        let mut keys = SlotMap::<ClauseKey, ()>::with_key();
        let first = keys.insert(());
        let second = keys.insert(());

        let mut db = AtomDB::default();
        let a = db.ensure_atom(&Literal::new("a")).unwrap();

        db.note_occurrence(a, first);
        db.note_occurrence(a, first);
        db.note_occurrence(a, second);

        assert_eq!(db.occurrences(a), &[first, second]);
        assert!(db.occurrences(7).is_empty());
    }
}
