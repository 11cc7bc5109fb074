use clap::Parser;
use gncut::cli::Args;
use gncut::girvan_newman::girvan_newman;
use gncut::graph::CsrGraph;
use gncut::{io, settings};
use std::process::ExitCode;

fn main() -> ExitCode {
    settings::init_logging();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gncut: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(args: &Args) -> gncut::Result<()> {
    args.validate()?;

    tracing::info!(input = %args.input_file.display(), "reading edge list");
    let raw_edges = io::read_edge_list(&args.input_file)?;
    tracing::info!(edges = raw_edges.len(), "parsed edge list");

    let (mut graph, _id_map) = CsrGraph::build(&raw_edges);
    tracing::info!(nodes = graph.n(), edges = graph.m(), "built CSR graph");

    let partition = girvan_newman(&mut graph, args.num_clusters(), args.sample_rate)?;
    tracing::info!(
        target = args.num_clusters,
        found = partition.count(),
        "girvan-newman complete"
    );

    io::write_communities(&args.output_file, &partition.communities, &graph)?;
    tracing::info!(output = %args.output_file.display(), "wrote communities");
    Ok(())
}
