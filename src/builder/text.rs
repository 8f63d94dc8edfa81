/*!
Reads a knowledge base from text.

The format is line based:

```none
# A comment.
L : loc in 1,1        a description of L
B : breeze
L                     a fact
B
L & B -> V            a clause, the body may be separated by whitespace and/or '&'
-> X                  a clause with an empty body
```

- Blank lines, and lines beginning with `#`, are skipped.
- A description applies to every literal with the same id, wherever the literal appears, and the first description given for an id is kept.
- Facts and heads are read in the same way as bodies, so `p&q` on a line of its own is two literals (and an error).
- Any line containing `->` is a clause, and a line containing `:` (but no `->`) is a description.

The format is for input only, and a knowledge base is never written back.
*/

use std::{collections::HashMap, io::BufRead};

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        kb::{Entry, KnowledgeBase},
        literal::Literal,
    },
    types::err::{self, ParseError},
};

const ARROW: &str = "->";

/// The literals of `text`, separated by whitespace and/or '&'.
fn literals(text: &str) -> impl Iterator<Item = Literal> + '_ {
    text.split(|c: char| c.is_whitespace() || c == '&')
        .filter(|token| !token.is_empty())
        .map(Literal::new)
}

/// The content of a (trimmed, non-comment) line.
enum Line {
    Entry(Entry),
    Description(String, String),
}

fn read_line(line: &str, line_counter: usize) -> Result<Line, ParseError> {
    if line.contains(ARROW) {
        let mut parts = line.split(ARROW);
        let body = parts.next().unwrap_or_default();
        let head = parts.next().unwrap_or_default();
        if parts.next().is_some() {
            return Err(ParseError::MultipleArrows(line_counter));
        }

        let mut heads = literals(head);
        let head = match (heads.next(), heads.next()) {
            (None, _) => return Err(ParseError::MissingHead(line_counter)),
            (Some(head), None) => head,
            (Some(_), Some(_)) => return Err(ParseError::MultipleHeads(line_counter)),
        };

        return Ok(Line::Entry(Entry::Clause(Clause::new(literals(body), head))));
    }

    if let Some((id, description)) = line.split_once(':') {
        let id = id.trim();
        let description = description.trim();
        if id.is_empty() || id.contains(char::is_whitespace) || description.is_empty() {
            return Err(ParseError::Description(line_counter));
        }
        return Ok(Line::Description(id.to_owned(), description.to_owned()));
    }

    let mut facts = literals(line);
    match (facts.next(), facts.next()) {
        (Some(fact), None) => Ok(Line::Entry(Entry::Fact(fact))),
        _ => Err(ParseError::Fact(line_counter)),
    }
}

impl KnowledgeBase {
    /// Reads a knowledge base, see [builder::text](crate::builder::text) for the format.
    ///
    /// ```rust
    /// # use horn_chain::forward_chain;
    /// # use horn_chain::structures::{kb::KnowledgeBase, literal::Literal};
    /// let text = "
    /// ## Russell & Norvig, 7.5.3
    /// L : loc in 1,1
    /// L
    /// B
    /// L & B -> V
    /// ";
    ///
    /// let kb = KnowledgeBase::read(text.as_bytes()).unwrap();
    /// assert_eq!(kb.len(), 3);
    /// assert_eq!(kb.facts().next().and_then(|l| l.description()), Some("loc in 1,1"));
    ///
    /// assert!(forward_chain(&kb, &Literal::new("V")));
    /// ```
    pub fn read(mut reader: impl BufRead) -> Result<Self, err::ErrorKind> {
        let mut kb = KnowledgeBase::default();
        let mut descriptions = HashMap::<String, String>::default();

        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(line_counter + 1))),
            }

            let line = buffer.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match read_line(line, line_counter)? {
                Line::Entry(entry) => kb.push(entry),
                Line::Description(id, description) => {
                    descriptions.entry(id).or_insert(description);
                }
            }
        }

        log::debug!(target: targets::PARSE, "Read {} entries from {line_counter} lines", kb.len());

        if !descriptions.is_empty() {
            for entry in kb.entries_mut() {
                match entry {
                    Entry::Fact(literal) => describe(literal, &descriptions),
                    Entry::Clause(clause) => {
                        for literal in clause.literals_mut() {
                            describe(literal, &descriptions)
                        }
                    }
                }
            }
        }

        Ok(kb)
    }
}

fn describe(literal: &mut Literal, descriptions: &HashMap<String, String>) {
    if let Some(description) = descriptions.get(literal.id()) {
        literal.set_description(description.as_str());
    }
}
