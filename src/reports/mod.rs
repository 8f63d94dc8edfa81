/*!
Reports for the context.

- A [Report] is the high-level outcome of a query.
- A [Chain](chain::Chain) is a record of a query, including the literals derived and a [Derivation](derivation::Derivation).
- A [ChainSummary](summary::ChainSummary) is a serializable digest of a chain.
*/

pub mod chain;
pub mod derivation;
pub mod summary;

use serde::Serialize;

/// High-level reports regarding a query.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Report {
    /// The query is entailed by the knowledge base.
    Entailed,

    /// The query is not entailed by the knowledge base.
    NotEntailed,

    /// Entailment of the query is unknown, for some reason (e.g. a step limit).
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "Entailed"),
            Self::NotEntailed => write!(f, "Not entailed"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
