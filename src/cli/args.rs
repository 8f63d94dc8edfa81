use clap::Parser;

use horn_chain::config::{AgendaOrder, Config, Occurrences, Propagation};

/// Determines whether queries are entailed by a knowledge base of definite clauses, by forward chaining
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Knowledge base files to read, in order
    #[arg(required_unless_present = "markdown_help")]
    pub paths: Vec<std::path::PathBuf>,

    /// A literal to query, may be given more than once
    #[arg(short, long = "query", required_unless_present = "markdown_help")]
    pub queries: Vec<String>,

    /// The order in which literals are taken from the agenda
    #[arg(long, default_value_t, value_enum)]
    pub order: AgendaOrder,

    /// How repeated literals in the body of a clause are matched
    #[arg(long, default_value_t, value_enum)]
    pub occurrences: Occurrences,

    /// Which clauses are examined when propagating a literal
    #[arg(long, default_value_t, value_enum)]
    pub propagation: Propagation,

    /// The maximum number of literals taken from the agenda for each query, with 0 for no limit
    #[arg(long, default_value_t = 0)]
    pub step_limit: usize,

    /// Display the facts derived during each query
    #[arg(short, long, default_value_t = false)]
    pub derived: bool,

    /// Display a proof of each entailed query
    #[arg(short, long, default_value_t = false)]
    pub proof: bool,

    /// Display the derivation of each query in the dot language
    #[arg(long, default_value_t = false)]
    pub dot: bool,

    /// Display a JSON summary of each query, in place of the plain report
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print the help for the CLI as markdown and exit
    #[arg(long, hide = true, default_value_t = false)]
    pub markdown_help: bool,
}

/// A configuration for the context, from the arguments.
pub fn config_from_args(args: &Args) -> Result<Config, horn_chain::types::err::ConfigError> {
    let mut config = Config::default();

    config.agenda_order.set(args.order)?;
    config.occurrences.set(args.occurrences)?;
    config.propagation.set(args.propagation)?;
    config.step_limit.set(args.step_limit)?;

    Ok(config)
}
