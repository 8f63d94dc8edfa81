use std::{fs::File, io::BufReader, path::PathBuf};

use horn_chain::{
    context::Context,
    reports::chain::Chain,
    structures::kb::KnowledgeBase,
    types::err::{self, ParseError},
};

use crate::args::Args;

/// Reads each file to a single knowledge base, with entries in order of the paths.
pub fn load_kb(paths: &[PathBuf]) -> Result<KnowledgeBase, err::ErrorKind> {
    let mut kb = KnowledgeBase::default();

    for path in paths {
        println!("c Reading knowledge base from {path:?}");

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                println!("c Failed to open {path:?}: {e}");
                let path = path.display().to_string();
                return Err(err::ErrorKind::from(ParseError::NoFile(path)));
            }
        };

        kb.extend(KnowledgeBase::read(BufReader::new(file))?);
    }

    Ok(kb)
}

/// Writes the outcome of a query, with the detail requested by the arguments.
pub fn display_chain(ctx: &Context, chain: &Chain, args: &Args) {
    if args.json {
        match serde_json::to_string(&ctx.summarise(chain)) {
            Ok(json) => println!("{json}"),
            Err(e) => println!("c Failed to write summary: {e}"),
        }
    } else {
        println!("s {} {}", chain.report(), chain.query());

        if args.derived {
            let derived = chain
                .derived_facts()
                .map(|literal| literal.id())
                .collect::<Vec<_>>();
            println!("d {}", derived.join(" "));
        }

        if args.proof {
            for clause in ctx.proof(chain) {
                println!("p {clause}");
            }
        }
    }

    if args.dot {
        println!("{}", ctx.derivation_dot(chain));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_names_path() {
        let path = PathBuf::from("no/such/dir/wumpus.kb");

        match load_kb(&[path]) {
            Err(err::ErrorKind::Parse(ParseError::NoFile(missing))) => {
                assert!(missing.ends_with("wumpus.kb"))
            }
            _ => panic!("a missing file should be reported with its path"),
        }
    }

    #[test]
    fn files_in_order() {
        let demo = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/wumpus.kb");

        let kb = load_kb(&[demo.clone(), demo]).unwrap();
        assert_eq!(kb.facts().count(), 4);
        assert_eq!(kb.clauses().count(), 12);
    }
}
