use anyhow::{Context, Result};
use clap::Parser;
use grafo_core::{sample_document, GraphDocument, Vertex};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shortest paths over a weighted directed graph
#[derive(Parser, Debug)]
#[command(name = "grafo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Graph document (JSON). Defaults to the built-in seven-vertex sample
    #[arg(short, long, env = "GRAFO_GRAPH_FILE")]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Source vertex label
    #[arg(requires = "to", allow_negative_numbers = true)]
    from: Option<String>,

    /// Destination vertex label
    #[arg(allow_negative_numbers = true)]
    to: Option<String>,
}

impl Cli {
    fn query(&self) -> Option<(Vertex, Vertex)> {
        match (&self.from, &self.to) {
            (Some(from), Some(to)) => Some((Vertex::from(from.as_str()), Vertex::from(to.as_str()))),
            _ => None,
        }
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let doc = match &cli.file {
        Some(path) => GraphDocument::from_path(path)?,
        None => sample_document(),
    };
    let graph = doc.into_graph().context("graph document rejected")?;

    println!(
        "Graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    if let Some((from, to)) = cli.query() {
        match graph.shortest_path(&from, &to)? {
            Some(path) => println!("Shortest {from} -> {to}: {path}"),
            None => println!("No path from {from} to {to}: unreachable"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_query_labels_may_start_with_a_hyphen() {
        let cli = Cli::try_parse_from(["grafo", "--file", "dash.json", "A", "-1"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("dash.json")));
        assert_eq!(cli.query(), Some((Vertex::from("A"), Vertex::from("-1"))));

        let cli = Cli::try_parse_from(["grafo", "-v", "--", "-start", "--end"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.query(), Some((Vertex::from("-start"), Vertex::from("--end"))));
    }

    #[test]
    fn test_source_requires_destination() {
        assert!(Cli::try_parse_from(["grafo", "A"]).is_err());

        let cli = Cli::try_parse_from(["grafo"]).unwrap();
        assert_eq!(cli.query(), None);
    }

    #[test]
    fn test_help_is_reported_not_exited() {
        let err = Cli::try_parse_from(["grafo", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
