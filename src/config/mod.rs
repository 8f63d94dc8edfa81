/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and each query made of a context follows the configuration of the context.

None of the options change whether a query is entailed, with the exception of [Occurrences], which decides how repeated literals in the body of a clause are matched, and a step limit, which may cut a query short.

```rust
# use horn_chain::config::{AgendaOrder, Config};
let mut config = Config::default();
assert_eq!(config.agenda_order.value, AgendaOrder::Stack);

assert!(config.step_limit.set(64).is_ok());
```
*/

mod config_option;
pub use config_option::ConfigOption;

use serde::Serialize;

/// The order in which literals are taken from the agenda.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AgendaOrder {
    #[default]
    /// Last in, first out
    Stack,
    /// First in, first out
    Queue,
}

impl AgendaOrder {
    pub const MIN: AgendaOrder = AgendaOrder::Stack;
    pub const MAX: AgendaOrder = AgendaOrder::Queue;
}

/// How the occurrences of a literal in the body of a clause are matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Occurrences {
    #[default]
    /// Each true occurrence of a literal (a fact entry, or a clause firing) matches one occurrence in each body
    Multiset,
    /// The first true occurrence of a literal matches every occurrence in each body, later occurrences are skipped
    Set,
}

impl Occurrences {
    pub const MIN: Occurrences = Occurrences::Multiset;
    pub const MAX: Occurrences = Occurrences::Set;
}

/// Which clauses are examined when propagating a literal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Propagation {
    #[default]
    /// Only those clauses whose body mentions the literal
    Indexed,
    /// Every clause, in knowledge base order
    Scan,
}

impl Propagation {
    pub const MIN: Propagation = Propagation::Indexed;
    pub const MAX: Propagation = Propagation::Scan;
}

impl std::fmt::Display for AgendaOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Stack => write!(f, "stack"),
            Self::Queue => write!(f, "queue"),
        }
    }
}

impl std::fmt::Display for Occurrences {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Multiset => write!(f, "multiset"),
            Self::Set => write!(f, "set"),
        }
    }
}

impl std::fmt::Display for Propagation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Indexed => write!(f, "indexed"),
            Self::Scan => write!(f, "scan"),
        }
    }
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The order in which literals are taken from the agenda.
    pub agenda_order: ConfigOption<AgendaOrder>,

    /// How occurrences of a literal in the body of a clause are matched.
    pub occurrences: ConfigOption<Occurrences>,

    /// Which clauses are examined when propagating a literal.
    pub propagation: ConfigOption<Propagation>,

    /// The maximum number of literals taken from the agenda during a query, with 0 for no limit.
    pub step_limit: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            agenda_order: ConfigOption {
                name: "agenda_order",
                min: AgendaOrder::MIN,
                max: AgendaOrder::MAX,
                value: AgendaOrder::Stack,
            },

            occurrences: ConfigOption {
                name: "occurrences",
                min: Occurrences::MIN,
                max: Occurrences::MAX,
                value: Occurrences::Multiset,
            },

            propagation: ConfigOption {
                name: "propagation",
                min: Propagation::MIN,
                max: Propagation::MAX,
                value: Propagation::Indexed,
            },

            step_limit: ConfigOption {
                name: "step_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_set() {
        let mut option = ConfigOption {
            name: "bounded",
            min: 1_usize,
            max: 8,
            value: 4,
        };

        assert!(option.set(8).is_ok());
        assert_eq!(option.value, 8);

        assert_eq!(
            option.set(9),
            Err(crate::types::err::ConfigError::OutOfBounds("bounded"))
        );
        assert_eq!(option.value, 8);
        assert_eq!(option.min_max(), (1, 8));
    }
}
