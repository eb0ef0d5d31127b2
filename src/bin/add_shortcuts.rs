use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use itertools::Itertools;
use log::error;
use shortcut_graph::{
    ch::shortcuts, graphs::graph_factory::from_edge_file, utility::get_progressbar,
};

/// Adds contraction shortcuts to a graph whose vertices all carry an
/// importance
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Infile with `v <name> <importance>` and `e <source> <destination> <weight>` lines
    #[arg(short, long)]
    graph: PathBuf,
    /// Treat every edge as undirected
    #[arg(short, long)]
    undirected: bool,
    /// Print every shortcut together with the vertices it skips
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    println!("Loading graph");
    let start = Instant::now();
    let mut graph = match from_edge_file::<u32>(&args.graph, !args.undirected) {
        Ok(graph) => graph,
        Err(err) => {
            error!("could not read {}: {}", args.graph.display(), err);
            return ExitCode::FAILURE;
        }
    };
    println!(
        "it took {:?} to load {} vertices and {} edges",
        start.elapsed(),
        graph.number_of_vertices(),
        graph.number_of_edges()
    );

    println!("Adding shortcuts");
    let start = Instant::now();
    let pb = get_progressbar("Contracting", graph.number_of_vertices() as u64);
    let statistics = match graph.add_shortcuts_with_progress(pb) {
        Ok(statistics) => statistics,
        Err(err) => {
            error!("contraction aborted: {}", err);
            return ExitCode::FAILURE;
        }
    };
    println!(
        "contracting {} vertices took {:?} and added {} shortcuts",
        statistics.contracted_vertices,
        start.elapsed(),
        statistics.shortcuts
    );

    if args.verbose {
        for shortcut in shortcuts(&graph).sorted_by_key(|shortcut| shortcut.decompose()) {
            println!(
                "{} -> {} ({:?}) via {}",
                shortcut.source(),
                shortcut.destination(),
                shortcut.weight(),
                shortcut.skipped_vertices().join(", ")
            );
        }
    }

    ExitCode::SUCCESS
}
