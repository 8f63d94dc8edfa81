/*!
Databases holding the definitions of a context.

- The [atom database](atom) interns literal ids to [atoms](crate::structures::atom::Atom), and records which clauses mention each atom in their body.
- The [clause database](clause) stores clauses, accessed through [keys](ClauseKey).

Both databases are written to only while a context is built.
*/

pub mod atom;
pub mod clause;

pub use clause::ClauseKey;
