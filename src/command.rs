//! Line-oriented session commands
//!
//! The input layer speaks one command per line:
//!
//! ```text
//! insert <key> <value...>     modify <key> <value...>     delete <key>
//! select <variant...>         toggle                      mode text|graph
//! text                        graph                       show
//! help
//! ```
//!
//! The value is everything after the key, so it may contain spaces.
//! Blank lines and lines starting with `#` are skipped.

use crate::controller::{ViewController, ViewMode};
use crate::model::{Graph, TrieVariant};
use crate::{Error, Result};

pub const HELP: &str = "\
insert <key> <value>   insert into every trie
modify <key> <value>   overwrite a key in every trie
delete <key>           remove a key from every trie
select <variant>       generic | storage | transaction | receipt
toggle                 switch between text and graph mode
mode <text|graph>      set the view mode
text                   print the text view
graph                  print the graph view
show                   print the view for the current mode
help                   print this message";

/// A parsed session command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Insert { key: String, value: String },
    Modify { key: String, value: String },
    Delete { key: String },
    Select(TrieVariant),
    Toggle,
    Mode(ViewMode),
    Text,
    Graph,
    Show,
    Help,
}

/// What applying a command produced
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A mutation ran; `applied` is false when it was a no-op
    Mutated { applied: bool },
    /// Variant or mode changed
    ViewChanged {
        variant: TrieVariant,
        mode: ViewMode,
    },
    Text(String),
    Graph(Graph),
    Help,
}

impl Command {
    /// Parse one input line. Returns `Ok(None)` for blank and comment lines.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = split_word(line);
        let command = match verb.to_lowercase().as_str() {
            "insert" | "modify" => {
                let (key, value) = split_word(rest);
                if key.is_empty() || value.is_empty() {
                    return Err(Error::InvalidCommand(format!(
                        "{} requires a key and a value",
                        verb
                    )));
                }
                let (key, value) = (key.to_string(), value.to_string());
                if verb.eq_ignore_ascii_case("insert") {
                    Command::Insert { key, value }
                } else {
                    Command::Modify { key, value }
                }
            }
            "delete" => {
                let (key, extra) = split_word(rest);
                if key.is_empty() || !extra.is_empty() {
                    return Err(Error::InvalidCommand(
                        "delete requires exactly one key".into(),
                    ));
                }
                Command::Delete {
                    key: key.to_string(),
                }
            }
            "select" => {
                if rest.is_empty() {
                    return Err(Error::InvalidCommand("select requires a variant".into()));
                }
                Command::Select(rest.parse()?)
            }
            "mode" => Command::Mode(rest.parse()?),
            "toggle" => no_args(Command::Toggle, rest)?,
            "text" => no_args(Command::Text, rest)?,
            "graph" => no_args(Command::Graph, rest)?,
            "show" => no_args(Command::Show, rest)?,
            "help" => Command::Help,
            _ => return Err(Error::InvalidCommand(format!("unknown command: {}", verb))),
        };

        Ok(Some(command))
    }

    /// Run this command against a controller
    pub fn apply(self, controller: &mut ViewController) -> Outcome {
        match self {
            Command::Insert { key, value } => Outcome::Mutated {
                applied: controller.insert(&key, &value),
            },
            Command::Modify { key, value } => Outcome::Mutated {
                applied: controller.modify(&key, &value),
            },
            Command::Delete { key } => Outcome::Mutated {
                applied: controller.delete(&key),
            },
            Command::Select(variant) => {
                controller.select_variant(variant);
                view_changed(controller)
            }
            Command::Toggle => {
                controller.toggle_mode();
                view_changed(controller)
            }
            Command::Mode(mode) => {
                controller.set_mode(mode);
                view_changed(controller)
            }
            Command::Text => Outcome::Text(controller.text_view()),
            Command::Graph => Outcome::Graph(current_graph(controller)),
            Command::Show => match controller.mode() {
                ViewMode::Text => Outcome::Text(controller.text_view()),
                ViewMode::Graph => Outcome::Graph(controller.graph_view().clone()),
            },
            Command::Help => Outcome::Help,
        }
    }
}

/// The held graph in graph mode; a fresh projection otherwise, since the
/// held one is only maintained while graph mode is active
fn current_graph(controller: &ViewController) -> Graph {
    match controller.mode() {
        ViewMode::Graph => controller.graph_view().clone(),
        ViewMode::Text => {
            let variant = controller.selected();
            crate::viz::project_graph(variant, controller.store().entries(variant))
        }
    }
}

fn view_changed(controller: &ViewController) -> Outcome {
    Outcome::ViewChanged {
        variant: controller.selected(),
        mode: controller.mode(),
    }
}

fn no_args(command: Command, rest: &str) -> Result<Command> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(Error::InvalidCommand(format!(
            "unexpected arguments: {}",
            rest
        )))
    }
}

/// Split off the first whitespace-delimited word; the rest is trimmed
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim()),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_insert_value_with_spaces() {
        assert_eq!(
            parse("insert greeting hello there world"),
            Command::Insert {
                key: "greeting".into(),
                value: "hello there world".into()
            }
        );
    }

    #[test]
    fn test_parse_modify_and_delete() {
        assert_eq!(
            parse("MODIFY k v2"),
            Command::Modify {
                key: "k".into(),
                value: "v2".into()
            }
        );
        assert_eq!(parse("delete k"), Command::Delete { key: "k".into() });
    }

    #[test]
    fn test_parse_select_display_name() {
        assert_eq!(
            parse("select Transaction Trie"),
            Command::Select(TrieVariant::Transaction)
        );
        assert_eq!(parse("select storage"), Command::Select(TrieVariant::Storage));
    }

    #[test]
    fn test_parse_mode_and_views() {
        assert_eq!(parse("mode graph"), Command::Mode(ViewMode::Graph));
        assert_eq!(parse("toggle"), Command::Toggle);
        assert_eq!(parse("  show  "), Command::Show);
    }

    #[test]
    fn test_skips_blank_and_comments() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# setup").unwrap(), None);
    }

    #[test]
    fn test_rejects_bad_lines() {
        for line in [
            "insert",
            "insert onlykey",
            "delete",
            "delete a b",
            "select",
            "select accounts",
            "mode tree",
            "toggle now",
            "frobnicate",
        ] {
            assert!(Command::parse(line).is_err(), "accepted: {}", line);
        }
    }

    #[test]
    fn test_apply_sequence() {
        let mut controller = ViewController::new();

        let outcome = parse("insert ca 1").apply(&mut controller);
        assert_eq!(outcome, Outcome::Mutated { applied: true });
        parse("insert cb 2").apply(&mut controller);

        let outcome = parse("delete zz").apply(&mut controller);
        assert_eq!(outcome, Outcome::Mutated { applied: false });

        match parse("graph").apply(&mut controller) {
            Outcome::Graph(graph) => assert_eq!(graph.node_count(), 6),
            other => panic!("expected graph, got {:?}", other),
        }

        let outcome = parse("select receipt").apply(&mut controller);
        assert_eq!(
            outcome,
            Outcome::ViewChanged {
                variant: TrieVariant::Receipt,
                mode: ViewMode::Text
            }
        );

        match parse("show").apply(&mut controller) {
            Outcome::Text(text) => assert!(text.starts_with("Receipt ID: ca => ")),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_show_follows_mode() {
        let mut controller = ViewController::new();
        parse("insert k v").apply(&mut controller);
        parse("toggle").apply(&mut controller);

        match parse("show").apply(&mut controller) {
            Outcome::Graph(graph) => assert!(graph.node("root-k-value").is_some()),
            other => panic!("expected graph, got {:?}", other),
        }
    }
}
