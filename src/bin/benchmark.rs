use std::{
    error::Error,
    fs::File,
    io::{BufReader, BufWriter},
    path::PathBuf,
    time::Instant,
};

use clap::Parser;
use indicatif::ProgressIterator;
use lazy_paths::{
    graphs::{graph_factory::read_graph, graph_functions::validate_path},
    search::{
        path::{ShortestPathTestCase, ShortestPathTestTimingResult},
        Dijkstra,
    },
    utility::{get_progressbar_long_jobs, init_logging, summarize_durations},
};
use tracing::{info, warn};

/// Does a single threaded benchmark and validates every answer against the
/// stored test cases.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph in .fmi or .bincode format
    #[arg(short, long)]
    graph: PathBuf,

    /// Test cases as written by create_tests
    #[arg(short, long)]
    test_cases: PathBuf,

    /// Optional output file for the timing of every query (json)
    #[arg(short, long)]
    timing_results: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let args = Args::parse();

    let graph = read_graph(&args.graph)?;
    let test_cases: Vec<ShortestPathTestCase> =
        serde_json::from_reader(BufReader::new(File::open(&args.test_cases)?))?;
    info!(test_cases = test_cases.len(), "starting benchmark");

    let mut dijkstra = Dijkstra::new(&graph);
    let mut timing_results = Vec::with_capacity(test_cases.len());
    let mut paths = Vec::with_capacity(test_cases.len());
    let mut durations = Vec::with_capacity(test_cases.len());

    let bar = get_progressbar_long_jobs("Timing", test_cases.len() as u64);
    for test_case in test_cases.iter() {
        let request = &test_case.request;

        let start = Instant::now();
        let path = dijkstra.shortest_path(&request.source, &request.target);
        let duration = start.elapsed();

        timing_results.push(ShortestPathTestTimingResult {
            test_case: test_case.clone(),
            timing_in_seconds: duration.as_secs_f64(),
        });
        paths.push((path, dijkstra.search_space_size() as u32));
        durations.push(duration);
        bar.inc(1);
    }
    bar.finish_and_clear();

    let mut failures = 0;
    for (test_case, (path, search_space_size)) in test_cases.iter().zip(paths.iter()).progress() {
        let request = &test_case.request;
        let result = match (path, test_case.weight) {
            (Ok(path), Some(_)) => {
                validate_path(&graph, &request.source, |vertex| *vertex == request.target, path)
                    .and_then(|()| {
                        if Some(path.weight) == test_case.weight {
                            Ok(())
                        } else {
                            Err(format!(
                                "wrong path weight {}, expected {:?}",
                                path.weight, test_case.weight
                            ))
                        }
                    })
            }
            (Ok(_), None) => Err("a path was found where there should be none".to_string()),
            (Err(err), Some(_)) => Err(format!("no path is found but there should be one: {}", err)),
            (Err(_), None) => Ok(()),
        };

        if let Err(reason) = result {
            warn!(
                source = request.source,
                target = request.target,
                %reason,
                "test case failed"
            );
            failures += 1;
        } else if *search_space_size != test_case.search_space_size {
            // Ties between equally heavy vertices may be broken differently.
            info!(
                source = request.source,
                target = request.target,
                search_space_size,
                expected = test_case.search_space_size,
                "search space size differs"
            );
        }
    }

    if let Some(summary) = summarize_durations(&durations) {
        info!(
            min = ?summary.min,
            median = ?summary.median,
            average = ?summary.average,
            max = ?summary.max,
            "query durations"
        );
    }

    if let Some(timing_results_path) = &args.timing_results {
        let writer = BufWriter::new(File::create(timing_results_path)?);
        serde_json::to_writer(writer, &timing_results)?;
    }

    if failures > 0 {
        return Err(format!("{} of {} test cases failed", failures, test_cases.len()).into());
    }

    Ok(())
}
