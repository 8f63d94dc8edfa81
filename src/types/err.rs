//! Error types used in the library.
//!
//! - Errors only arise when building a context or reading a knowledge base.
//! - A query which is not entailed is *not* an error, see [Report](crate::reports::Report).
//!
//! Names of the error enums overlap with the structures they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    ClauseDB(ClauseDBError),
    AtomDB(AtomDBError),
    Config(ConfigError),
    Parse(ParseError),
}

/// Errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// No clause is stored with the given key.
    Missing,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors when revising a configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The requested value for the named option is outside the bounds of the option.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors when reading a knowledge base, each with the (1-indexed) line of the error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The line could not be read.
    Line(usize),

    /// More than one `->` on a line.
    MultipleArrows(usize),

    /// A clause without a head.
    MissingHead(usize),

    /// A clause with more than one literal after `->`.
    MultipleHeads(usize),

    /// A fact line with more than one literal.
    Fact(usize),

    /// A description without a literal, or a literal without a description.
    Description(usize),

    /// No file could be opened at the given path.
    NoFile(String),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(n) => write!(f, "line {n} could not be read"),
            Self::MultipleArrows(n) => write!(f, "line {n} has more than one '->'"),
            Self::MissingHead(n) => write!(f, "line {n} has a clause without a head"),
            Self::MultipleHeads(n) => write!(f, "line {n} has a clause with more than one head"),
            Self::Fact(n) => write!(f, "line {n} has more than one literal, but no '->'"),
            Self::Description(n) => write!(f, "line {n} has an incomplete description"),
            Self::NoFile(path) => write!(f, "no file could be opened at {path}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClauseDB(ClauseDBError::Missing) => write!(f, "a clause is missing"),
            Self::AtomDB(AtomDBError::AtomsExhausted) => write!(f, "there are no more fresh atoms"),
            Self::Config(ConfigError::OutOfBounds(name)) => {
                write!(f, "the value requested for {name} is out of bounds")
            }
            Self::Parse(e) => write!(f, "parse error, {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}
