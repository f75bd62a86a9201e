use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use indicatif::ProgressIterator;
use rand::Rng;
use thiserror::Error;

use super::{edge::WeightedEdge, vec_graph::VecGraph, VertexId};

#[derive(Error, Debug)]
pub enum GraphReadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("unable to parse line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("file ended before all {expected} lines were read")]
    Truncated { expected: usize },

    #[error("unknown graph file extension {0:?}")]
    UnknownExtension(String),
}

/// Reads a graph, choosing the format by file extension (`.fmi` or
/// `.bincode`).
pub fn read_graph(path: &Path) -> Result<VecGraph<u32>, GraphReadError> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or_default();
    match extension {
        "fmi" => from_fmi_file(path),
        "bincode" => from_bincode_file(path),
        other => Err(GraphReadError::UnknownExtension(other.to_string())),
    }
}

pub fn from_fmi_file(path: &Path) -> Result<VecGraph<u32>, GraphReadError> {
    let reader = BufReader::new(File::open(path)?);
    let edges = read_fmi_edges(reader)?;
    Ok(VecGraph::from_edges(&edges))
}

/// Parses the edges of a graph in fmi format:
///
/// ```text
/// # comment lines
/// <number of vertices>
/// <number of edges>
/// <one line per vertex>
/// <srcIDX trgIDX cost [...]>
/// ```
pub fn read_fmi_edges<R: BufRead>(reader: R) -> Result<Vec<WeightedEdge<u32>>, GraphReadError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(index, line)| line.map(|line| (index + 1, line)))
        .filter(|line| {
            line.as_ref()
                .map_or(true, |(_, line)| !line.starts_with('#') && !line.trim().is_empty())
        });

    let mut next_count = |expected: usize| -> Result<usize, GraphReadError> {
        let (line_number, line) = lines
            .next()
            .ok_or(GraphReadError::Truncated { expected })??;
        line.trim().parse().map_err(|_| GraphReadError::Parse {
            line: line_number,
            reason: format!("expected a count, found {:?}", line),
        })
    };
    let number_of_vertices = next_count(2)?;
    let number_of_edges = next_count(2)?;

    let expected = number_of_vertices + number_of_edges;
    let mut edges = Vec::with_capacity(number_of_edges);
    for (index, line) in lines
        .take(expected)
        .progress_count(expected as u64)
        .enumerate()
    {
        let (line_number, line) = line?;
        if index < number_of_vertices {
            continue;
        }
        edges.push(parse_fmi_edge(line_number, &line)?);
    }

    if edges.len() < number_of_edges {
        return Err(GraphReadError::Truncated { expected });
    }

    Ok(edges)
}

fn parse_fmi_edge(line_number: usize, line: &str) -> Result<WeightedEdge<u32>, GraphReadError> {
    let mut values = line.split_whitespace();
    let mut next_value = |name: &str| -> Result<u32, GraphReadError> {
        values
            .next()
            .ok_or_else(|| GraphReadError::Parse {
                line: line_number,
                reason: format!("no {} found", name),
            })?
            .parse()
            .map_err(|_| GraphReadError::Parse {
                line: line_number,
                reason: format!("unable to parse {}", name),
            })
    };

    let tail = next_value("tail")?;
    let head = next_value("head")?;
    let weight = next_value("weight")?;
    Ok(WeightedEdge::new(tail, head, weight))
}

pub fn from_bincode_file(path: &Path) -> Result<VecGraph<u32>, GraphReadError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(bincode::deserialize_from(reader)?)
}

/// Random graph on `number_of_vertices` vertices with up to `number_of_edges`
/// edges (parallel edges collapse) and weights in `0..=max_weight`.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: u32,
) -> VecGraph<u32> {
    let mut graph = VecGraph::with_vertices(number_of_vertices);
    if number_of_vertices == 0 {
        return graph;
    }

    for _ in 0..number_of_edges {
        let tail: VertexId = rng.gen_range(0..number_of_vertices);
        let head: VertexId = rng.gen_range(0..number_of_vertices);
        let weight = rng.gen_range(0..=max_weight);
        graph.set_edge(&WeightedEdge::new(tail, head, weight));
    }

    graph
}
