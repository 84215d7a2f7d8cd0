//! nomgraph CLI - interactive nomination network generation
//!
//! Reads a nominations CSV and writes a self-contained interactive HTML
//! document of the nomination graph.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use nomgraph::{export_html, read_records, ExportOptions, NominationGraph};

#[derive(Parser)]
#[command(name = "nomgraph")]
#[command(version, about = "Generate an interactive nomination network HTML document", long_about = None)]
struct Cli {
    /// Path to the nominations CSV file
    #[arg(short, long)]
    input: PathBuf,

    /// Output HTML file
    #[arg(short, long, default_value = "nominations_network.html")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), nomgraph::NominationError> {
    println!("📖 Reading nominations from {}...", cli.input.display());
    let records = read_records(&cli.input)?;
    println!("  ✓ Parsed {} records", records.len());

    let graph = NominationGraph::build(&records);
    println!(
        "  ✓ Built graph: {} people, {} nominations",
        graph.person_count(),
        graph.nomination_count()
    );

    export_html(&graph, &cli.output, &ExportOptions::default())?;

    Ok(())
}
