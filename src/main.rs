//! trieviz CLI - interactive session over a trie_viz dataset
//!
//! Reads session commands from stdin or a script file, one per line, and
//! writes rendered views to stdout. Nothing is persisted between runs.

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::{info, warn};
use trie_viz::command::HELP;
use trie_viz::logging::{self, LogConfig, LogLevel};
use trie_viz::{Command, Config, Outcome, OutputFormat, TrieVariant, ViewController, ViewExport};

#[derive(Parser)]
#[command(name = "trieviz")]
#[command(about = "Explore one dataset as four trie views, in text or graph form")]
#[command(version)]
struct Cli {
    /// Path to a JSON config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (json or text)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Variant selected at startup
    #[arg(short, long)]
    variant: Option<String>,

    /// Start in graph mode
    #[arg(short, long)]
    graph: bool,

    /// Log level for stderr (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.output = format;
    }
    if let Some(variant) = &cli.variant {
        config.default_variant = variant.parse::<TrieVariant>()?;
    }
    if cli.graph {
        config.start_in_graph_mode = true;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.parse::<LogLevel>()?;
    }

    logging::try_init(&LogConfig::new().with_level(config.log_level));

    let reader: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening script {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut controller = ViewController::with_config(&config);
    info!(
        variant = controller.selected().as_str(),
        mode = controller.mode().as_str(),
        "session started"
    );

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(command)) => {
                let outcome = command.apply(&mut controller);
                render(config.output, &controller, outcome)?;
            }
            Err(e) => {
                warn!(line = line_no, error = %e, "rejected command");
                output(
                    config.output,
                    &serde_json::json!({
                        "status": "error",
                        "line": line_no,
                        "message": e.to_string()
                    }),
                )?;
            }
        }
    }

    info!(entries = controller.store().len(), "session ended");
    Ok(())
}

fn render(format: OutputFormat, controller: &ViewController, outcome: Outcome) -> anyhow::Result<()> {
    match outcome {
        Outcome::Mutated { applied } => output(
            format,
            &serde_json::json!({
                "status": "ok",
                "applied": applied,
                "entries": controller.store().len()
            }),
        ),
        Outcome::ViewChanged { variant, mode } => output(
            format,
            &serde_json::json!({
                "status": "ok",
                "variant": variant.display_name(),
                "mode": mode
            }),
        ),
        Outcome::Text(text) => match format {
            OutputFormat::Json => output(
                format,
                &serde_json::to_value(ViewExport::text(controller.selected(), text))?,
            ),
            OutputFormat::Text => {
                print!("{}", text);
                Ok(())
            }
        },
        Outcome::Graph(graph) => {
            let export = ViewExport::graph(controller.selected(), graph);
            output(format, &serde_json::to_value(export)?)
        }
        Outcome::Help => match format {
            OutputFormat::Json => output(format, &serde_json::json!({ "help": HELP })),
            OutputFormat::Text => {
                println!("{}", HELP);
                Ok(())
            }
        },
    }
}

fn output(format: OutputFormat, value: &serde_json::Value) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
        OutputFormat::Text => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use trie_viz::ViewMode;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_graph_flag_parses() {
        let cli = Cli::parse_from(["trieviz", "--graph", "-v", "receipt", "-f", "text"]);
        assert!(cli.graph);
        assert_eq!(cli.variant.as_deref(), Some("receipt"));
        assert_eq!(cli.format, Some(OutputFormat::Text));
    }

    #[test]
    fn test_view_mode_serializes_lowercase() {
        let value = serde_json::json!({ "mode": ViewMode::Graph });
        assert_eq!(value["mode"], "graph");
    }
}
