/*!
A database of clauses.

Each clause is stored alongside the atoms of its body and head, and is accessed through a [ClauseKey].
Clauses are never removed, and so iteration over the database follows the order in which clauses were stored, which is the order of clauses in the knowledge base a context was built from.
*/

use slotmap::SlotMap;

use crate::{
    db::atom::AtomDB,
    misc::log::targets::{self},
    structures::{atom::Atom, clause::Clause},
    types::err::{self, ClauseDBError},
};

slotmap::new_key_type! {
    /// A key to a clause in the clause database.
    pub struct ClauseKey;
}

/// A clause, as stored in the database.
#[derive(Clone, Debug)]
pub struct StoredClause {
    /// The clause, as given.
    clause: Clause,

    /// The atoms of the body, with repetition.
    body: Vec<Atom>,

    head: Atom,
}

impl StoredClause {
    pub fn clause(&self) -> &Clause {
        &self.clause
    }

    pub fn body(&self) -> &[Atom] {
        &self.body
    }

    pub fn head(&self) -> Atom {
        self.head
    }
}

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    clauses: SlotMap<ClauseKey, StoredClause>,
}

impl ClauseDB {
    /// Stores `clause`, interning the literals of the clause to atoms and noting occurrences in the atom database.
    pub fn store(
        &mut self,
        clause: Clause,
        atom_db: &mut AtomDB,
    ) -> Result<ClauseKey, err::ErrorKind> {
        let mut body = Vec::with_capacity(clause.size());
        for literal in clause.body() {
            body.push(atom_db.ensure_atom(literal)?);
        }
        let head = atom_db.ensure_atom(clause.head())?;

        log::trace!(target: targets::CLAUSE_DB, "Storing: {clause}");

        let key = self.clauses.insert(StoredClause { clause, body, head });

        let stored = &self.clauses[key];
        for atom in &stored.body {
            atom_db.note_occurrence(*atom, key);
        }

        Ok(key)
    }

    pub fn get(&self, key: ClauseKey) -> Result<&StoredClause, ClauseDBError> {
        self.clauses.get(key).ok_or(ClauseDBError::Missing)
    }

    /// A count of stored clauses.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    /// An iterator over keys to all clauses, in the order the clauses were stored.
    pub fn keys(&self) -> impl Iterator<Item = ClauseKey> + '_ {
        self.clauses.keys()
    }

    /// An iterator over all clauses, in the order the clauses were stored.
    pub fn iter(&self) -> impl Iterator<Item = (ClauseKey, &StoredClause)> {
        self.clauses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Literal;

    #[test]
    fn store_and_index() {
        let mut atom_db = AtomDB::default();
        let mut clause_db = ClauseDB::default();

        let [a, b, c] = ["a", "b", "c"].map(Literal::new);

        let first = clause_db
            .store(Clause::new([a.clone(), a.clone(), b.clone()], c.clone()), &mut atom_db)
            .unwrap();
        let second = clause_db
            .store(Clause::new([c.clone()], a.clone()), &mut atom_db)
            .unwrap();

        assert_eq!(clause_db.count(), 2);
        assert_eq!(clause_db.keys().collect::<Vec<_>>(), vec![first, second]);

        let stored = clause_db.get(first).unwrap();
        assert_eq!(stored.body(), &[0, 0, 1]);
        assert_eq!(stored.head(), 2);

        assert_eq!(atom_db.occurrences(0), &[first]);
        assert_eq!(atom_db.occurrences(2), &[second]);
    }
}
