use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use rand::Rng;

use super::{Graph, Importance, VertexName, Weight};
use crate::error::FactoryError;

pub fn from_edges<V: VertexName, W: Weight>(
    directed: bool,
    edges: impl IntoIterator<Item = (V, V, W)>,
) -> Graph<V, W> {
    let mut graph = Graph::new(directed);
    for (source, destination, weight) in edges {
        graph.add_edge(source, destination, weight);
    }
    graph
}

/// Reads a graph from a line based text file.
///
/// ```text
/// # comment
/// v <name> <importance>
/// e <source> <destination> <weight>
/// ```
///
/// Edges may name vertices that were never declared; those are created
/// without an importance.
pub fn from_edge_file<W>(path: &Path, directed: bool) -> Result<Graph<String, W>, FactoryError>
where
    W: Weight + FromStr,
{
    let reader = BufReader::new(File::open(path)?);
    let mut graph = Graph::new(directed);

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let mut values = line.split_whitespace();

        match values.next() {
            None => continue,
            Some(tag) if tag.starts_with('#') => continue,
            Some("v") => {
                let name = next_value(&mut values, line_number, "vertex name")?;
                let importance: Importance =
                    parse_value(&mut values, line_number, "importance")?;
                if !graph.contains_vertex(&name) {
                    graph.add_vertex(name.clone());
                }
                graph
                    .set_importance(&name, importance)
                    .map_err(|error| FactoryError::Parse {
                        line: line_number,
                        reason: error.to_string(),
                    })?;
            }
            Some("e") => {
                let source = next_value(&mut values, line_number, "source")?;
                let destination = next_value(&mut values, line_number, "destination")?;
                let weight: W = parse_value(&mut values, line_number, "weight")?;
                graph.add_edge(source, destination, weight);
            }
            Some(tag) => {
                return Err(FactoryError::Parse {
                    line: line_number,
                    reason: format!("unknown line type {}", tag),
                })
            }
        }
    }

    Ok(graph)
}

fn next_value<'a>(
    values: &mut impl Iterator<Item = &'a str>,
    line: usize,
    what: &str,
) -> Result<String, FactoryError> {
    values
        .next()
        .map(str::to_string)
        .ok_or_else(|| FactoryError::Parse {
            line,
            reason: format!("no {} found", what),
        })
}

fn parse_value<'a, T: FromStr>(
    values: &mut impl Iterator<Item = &'a str>,
    line: usize,
    what: &str,
) -> Result<T, FactoryError> {
    let value = next_value(values, line, what)?;
    value.parse().map_err(|_| FactoryError::Parse {
        line,
        reason: format!("unable to parse {} {}", what, value),
    })
}

/// A directed graph on the vertices `0..number_of_vertices` with up to
/// `number_of_edges` random edges of weight `1..=max_weight`. Self loops are
/// skipped, repeated pairs keep the last weight drawn.
pub fn random_graph<R: Rng>(
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: u32,
    rng: &mut R,
) -> Graph<u32, u32> {
    let mut graph = Graph::new(true);
    for vertex in 0..number_of_vertices {
        graph.add_vertex(vertex);
    }
    if number_of_vertices < 2 {
        return graph;
    }

    for _ in 0..number_of_edges {
        let source = rng.gen_range(0..number_of_vertices);
        let destination = rng.gen_range(0..number_of_vertices);
        if source == destination {
            continue;
        }
        graph.add_edge(source, destination, rng.gen_range(1..=max_weight.max(1)));
    }

    graph
}
