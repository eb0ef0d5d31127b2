use ahash::{HashMap, HashMapExt};
use log::warn;

use super::{Connection, Importance, VertexName, Weight};
use crate::error::GraphError;

/// Everything a vertex carries besides its name and connections.
///
/// Copied field by field whenever a vertex is rebuilt, e.g. by
/// [`super::Graph::transpose`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VertexMetadata {
    pub importance: Option<Importance>,
}

/// A vertex and its outgoing connections, at most one per destination.
#[derive(Clone, Debug)]
pub struct Vertex<V, W> {
    name: V,
    connections: HashMap<V, Connection<V, W>>,
    metadata: VertexMetadata,
}

impl<V: VertexName, W: Weight> Vertex<V, W> {
    pub fn new(name: V) -> Vertex<V, W> {
        Vertex {
            name,
            connections: HashMap::new(),
            metadata: VertexMetadata::default(),
        }
    }

    /// Builds a vertex from a list of connections. Connections that do not
    /// start at `name` are ignored.
    pub fn with_connections(
        name: V,
        connections: impl IntoIterator<Item = Connection<V, W>>,
    ) -> Vertex<V, W> {
        let connections = connections
            .into_iter()
            .filter(|connection| connection.source() == &name)
            .map(|connection| (connection.destination().clone(), connection))
            .collect();

        Vertex {
            name,
            connections,
            metadata: VertexMetadata::default(),
        }
    }

    pub fn name(&self) -> &V {
        &self.name
    }

    /// Inserts `connection`, replacing whatever pointed to the same
    /// destination before. The replaced connection is returned.
    ///
    /// Nothing is compared here: callers that want to keep the cheaper of two
    /// connections have to check [`Vertex::get_weight`] first.
    pub fn add_connection(
        &mut self,
        connection: Connection<V, W>,
    ) -> Result<Option<Connection<V, W>>, GraphError> {
        if connection.source() != &self.name {
            let error = GraphError::SourceMismatch {
                vertex: format!("{:?}", self.name),
                source_name: format!("{:?}", connection.source()),
            };
            warn!("connection not added: {}", error);
            return Err(error);
        }

        Ok(self
            .connections
            .insert(connection.destination().clone(), connection))
    }

    pub fn remove_connection(&mut self, destination: &V) -> Option<Connection<V, W>> {
        self.connections.remove(destination)
    }

    pub fn has_connection(&self, destination: &V) -> bool {
        self.connections.contains_key(destination)
    }

    pub fn get_connection(&self, destination: &V) -> Option<&Connection<V, W>> {
        self.connections.get(destination)
    }

    pub fn get_weight(&self, destination: &V) -> Option<W> {
        self.connections.get(destination).map(Connection::weight)
    }

    pub fn connections(&self) -> &HashMap<V, Connection<V, W>> {
        &self.connections
    }

    pub fn importance(&self) -> Option<Importance> {
        self.metadata.importance
    }

    pub fn set_importance(&mut self, importance: Importance) {
        self.metadata.importance = Some(importance);
    }

    pub fn metadata(&self) -> &VertexMetadata {
        &self.metadata
    }

    pub(crate) fn set_metadata(&mut self, metadata: VertexMetadata) {
        self.metadata = metadata;
    }
}
