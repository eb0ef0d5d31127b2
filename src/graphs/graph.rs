use std::fmt;

use ahash::{HashMap, HashMapExt};
use itertools::Itertools;
use log::warn;

use super::{Connection, Edge, Importance, Vertex, VertexName, Weight};
use crate::error::GraphError;

/// A weighted graph keyed by vertex name.
///
/// The graph owns all of its vertices. For every vertex `v` each stored
/// connection starts at `v`. Undirected graphs mirror every `add_edge`,
/// `add_connection` and `remove_edge`.
#[derive(Clone, Debug)]
pub struct Graph<V, W> {
    vertices: HashMap<V, Vertex<V, W>>,
    directed: bool,
}

impl<V: VertexName, W: Weight> Default for Graph<V, W> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<V: VertexName, W: Weight> Graph<V, W> {
    pub fn new(directed: bool) -> Graph<V, W> {
        Graph {
            vertices: HashMap::new(),
            directed,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Creates an empty vertex. An existing vertex of the same name is
    /// replaced, losing its connections and importance.
    pub fn add_vertex(&mut self, name: V) {
        self.vertices.insert(name.clone(), Vertex::new(name));
    }

    /// Removes a vertex together with every connection pointing to it.
    pub fn remove_vertex(&mut self, name: &V) -> Option<Vertex<V, W>> {
        for vertex in self.vertices.values_mut() {
            vertex.remove_connection(name);
        }
        self.vertices.remove(name)
    }

    pub fn contains_vertex(&self, name: &V) -> bool {
        self.vertices.contains_key(name)
    }

    pub fn get_vertex(&self, name: &V) -> Option<&Vertex<V, W>> {
        self.vertices.get(name)
    }

    pub fn set_importance(&mut self, name: &V, importance: Importance) -> Result<(), GraphError> {
        let vertex = self.vertices.get_mut(name).ok_or_else(|| {
            let error = GraphError::UnknownVertex(format!("{:?}", name));
            warn!("importance not set: {}", error);
            error
        })?;
        vertex.set_importance(importance);
        Ok(())
    }

    /// Inserts the edge `source -> destination`, creating missing endpoints.
    /// Undirected graphs also get `destination -> source`.
    pub fn add_edge(&mut self, source: V, destination: V, weight: W) {
        if !self.contains_vertex(&destination) {
            self.add_vertex(destination.clone());
        }
        if !self.contains_vertex(&source) {
            self.add_vertex(source.clone());
        }

        let edge = Edge::new(source, destination, weight);
        if !self.directed {
            self.insert_connection(Connection::Edge(edge.transpose()));
        }
        self.insert_connection(Connection::Edge(edge));
    }

    /// Inserts an already built connection into its source vertex. Undirected
    /// graphs also get the transposed connection. Both endpoints have to
    /// exist, otherwise nothing is inserted.
    pub fn add_connection(&mut self, connection: Connection<V, W>) -> Result<(), GraphError> {
        for endpoint in [connection.source(), connection.destination()] {
            if !self.contains_vertex(endpoint) {
                let error = GraphError::UnknownVertex(format!("{:?}", endpoint));
                warn!("connection not added: {}", error);
                return Err(error);
            }
        }

        if !self.directed {
            self.insert_connection(connection.transpose());
        }
        self.insert_connection(connection);
        Ok(())
    }

    // Both endpoints are known to exist, so the source lookup cannot fail.
    fn insert_connection(&mut self, connection: Connection<V, W>) {
        if let Some(vertex) = self.vertices.get_mut(connection.source()) {
            let _ = vertex.add_connection(connection);
        }
    }

    pub fn remove_edge(&mut self, source: &V, destination: &V) {
        if let Some(vertex) = self.vertices.get_mut(source) {
            vertex.remove_connection(destination);
        }
        if !self.directed {
            if let Some(vertex) = self.vertices.get_mut(destination) {
                vertex.remove_connection(source);
            }
        }
    }

    pub fn contains_edge(&self, source: &V, destination: &V) -> bool {
        if !self.contains_vertex(destination) {
            return false;
        }
        self.vertices
            .get(source)
            .is_some_and(|vertex| vertex.has_connection(destination))
    }

    pub fn get_weight(&self, source: &V, destination: &V) -> Option<W> {
        self.vertices.get(source)?.get_weight(destination)
    }

    /// Destinations of all connections leaving `name`.
    pub fn adjacent(&self, name: &V) -> Result<Vec<V>, GraphError> {
        match self.vertices.get(name) {
            Some(vertex) => Ok(vertex.connections().keys().cloned().collect()),
            None => {
                let error = GraphError::UnknownVertex(format!("{:?}", name));
                warn!("no adjacency: {}", error);
                Err(error)
            }
        }
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V, W>> + '_ {
        self.vertices.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Connection<V, W>> + '_ {
        self.vertices
            .values()
            .flat_map(|vertex| vertex.connections().values())
    }

    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.vertices
            .values()
            .map(|vertex| vertex.connections().len())
            .sum()
    }

    /// Returns a graph with every connection reversed. Vertex metadata such
    /// as the importance is carried over.
    pub fn transpose(&self) -> Graph<V, W> {
        let mut transposed = Graph::new(self.directed);

        for vertex in self.vertices() {
            transposed.add_vertex(vertex.name().clone());
        }
        for connection in self.edges() {
            transposed.insert_connection(connection.transpose());
        }
        for (name, vertex) in transposed.vertices.iter_mut() {
            if let Some(original) = self.vertices.get(name) {
                vertex.set_metadata(*original.metadata());
            }
        }

        transposed
    }

    /// All vertices with a connection to `name`. Scans every vertex, so this
    /// is O(|V|) per call.
    pub fn get_parents(&self, name: &V) -> Vec<&Vertex<V, W>> {
        self.vertices
            .values()
            .filter(|vertex| vertex.has_connection(name))
            .collect()
    }

    /// All vertices one connection away from `name`, O(degree).
    pub fn get_children(&self, name: &V) -> Vec<&Vertex<V, W>> {
        let Some(vertex) = self.vertices.get(name) else {
            return Vec::new();
        };
        vertex
            .connections()
            .keys()
            .filter_map(|child| self.vertices.get(child))
            .collect()
    }
}

impl<V: VertexName, W: Weight> fmt::Display for Graph<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices() {
            let destinations = vertex
                .connections()
                .keys()
                .map(|destination| format!("{:?}", destination))
                .sorted()
                .join(", ");
            writeln!(f, "{:?} : [{}]", vertex.name(), destinations)?;
        }
        Ok(())
    }
}
