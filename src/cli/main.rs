#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::Parser;

use horn_chain::{context::Context, reports::Report, structures::literal::Literal};

mod args;
mod misc;

use args::{config_from_args, Args};

#[cfg(feature = "log")]
fn init_logging() {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log::LevelFilter::Debug));

    match config {
        Ok(config) => {
            let _ = log4rs::init_config(config);
        }
        Err(e) => println!("c Failed to configure logging: {e}"),
    }
}

fn main() {
    #[cfg(feature = "log")]
    init_logging();

    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        std::process::exit(0);
    }

    let config = match config_from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            println!("c Configuration error: {e:?}");
            std::process::exit(1);
        }
    };

    let kb = match misc::load_kb(&args.paths) {
        Ok(kb) => kb,
        Err(e) => {
            println!("c Error loading knowledge base: {e}");
            std::process::exit(1);
        }
    };

    let ctx = match Context::from_kb(&kb, config) {
        Ok(ctx) => ctx,
        Err(e) => {
            println!("c Context error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "c {} atoms, {} facts, {} clauses",
        ctx.atom_db.count(),
        ctx.facts().len(),
        ctx.clause_db.count()
    );

    let mut overall = Report::Entailed;

    for query in &args.queries {
        let chain = ctx.chain(&Literal::new(query.as_str()));
        misc::display_chain(&ctx, &chain, &args);

        match (overall, chain.report()) {
            (_, Report::NotEntailed) => overall = Report::NotEntailed,
            (Report::Entailed, Report::Unknown) => overall = Report::Unknown,
            _ => {}
        }
    }

    match overall {
        Report::Entailed => std::process::exit(10),
        Report::NotEntailed => std::process::exit(20),
        Report::Unknown => std::process::exit(30),
    }
}
