use super::{VertexName, Weight};

/// A plain weighted edge between two vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<V, W> {
    source: V,
    destination: V,
    weight: W,
}

impl<V: VertexName, W: Weight> Edge<V, W> {
    pub fn new(source: V, destination: V, weight: W) -> Edge<V, W> {
        Edge {
            source,
            destination,
            weight,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn destination(&self) -> &V {
        &self.destination
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn transpose(&self) -> Edge<V, W> {
        Edge {
            source: self.destination.clone(),
            destination: self.source.clone(),
            weight: self.weight,
        }
    }
}

/// Two connections glued together at a common vertex.
///
/// The parts are owned, so a shortcut can bypass an arbitrarily long chain of
/// previously contracted vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Shortcut<V, W> {
    first: Box<Connection<V, W>>,
    second: Box<Connection<V, W>>,
    weight: W,
}

impl<V: VertexName, W: Weight> Shortcut<V, W> {
    /// Returns `None` if `first` does not end where `second` starts.
    pub fn new(first: Connection<V, W>, second: Connection<V, W>) -> Option<Shortcut<V, W>> {
        if first.destination() != second.source() {
            return None;
        }

        let weight = first.weight() + second.weight();
        Some(Shortcut {
            first: Box::new(first),
            second: Box::new(second),
            weight,
        })
    }

    pub fn first(&self) -> &Connection<V, W> {
        &self.first
    }

    pub fn second(&self) -> &Connection<V, W> {
        &self.second
    }

    pub fn source(&self) -> &V {
        self.first.source()
    }

    pub fn destination(&self) -> &V {
        self.second.destination()
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// Reverses the direction: the transposed second part now comes first.
    pub fn transpose(&self) -> Shortcut<V, W> {
        Shortcut {
            first: Box::new(self.second.transpose()),
            second: Box::new(self.first.transpose()),
            weight: self.weight,
        }
    }

    pub fn decompose(&self) -> Vec<V> {
        let mut path = self.first.decompose();
        // the joint vertex is already the last entry of the first half
        path.extend(self.second.decompose().into_iter().skip(1));
        path
    }
}

/// Anything a vertex can store as an outgoing connection.
#[derive(Clone, Debug, PartialEq)]
pub enum Connection<V, W> {
    Edge(Edge<V, W>),
    Shortcut(Shortcut<V, W>),
}

impl<V: VertexName, W: Weight> Connection<V, W> {
    pub fn source(&self) -> &V {
        match self {
            Connection::Edge(edge) => edge.source(),
            Connection::Shortcut(shortcut) => shortcut.source(),
        }
    }

    pub fn destination(&self) -> &V {
        match self {
            Connection::Edge(edge) => edge.destination(),
            Connection::Shortcut(shortcut) => shortcut.destination(),
        }
    }

    pub fn weight(&self) -> W {
        match self {
            Connection::Edge(edge) => edge.weight(),
            Connection::Shortcut(shortcut) => shortcut.weight(),
        }
    }

    pub fn transpose(&self) -> Connection<V, W> {
        match self {
            Connection::Edge(edge) => Connection::Edge(edge.transpose()),
            Connection::Shortcut(shortcut) => Connection::Shortcut(shortcut.transpose()),
        }
    }

    /// Ordered list of the vertices visited when following this connection.
    ///
    /// Two entries for an edge, at least three for a shortcut.
    pub fn decompose(&self) -> Vec<V> {
        match self {
            Connection::Edge(edge) => vec![edge.source().clone(), edge.destination().clone()],
            Connection::Shortcut(shortcut) => shortcut.decompose(),
        }
    }

    /// The vertices bypassed by this connection, i.e. the path without its
    /// endpoints.
    pub fn skipped_vertices(&self) -> Vec<V> {
        let mut path = self.decompose();
        path.pop();
        path.remove(0);
        path
    }

    pub fn is_shortcut(&self) -> bool {
        matches!(self, Connection::Shortcut(_))
    }
}

impl<V, W> From<Edge<V, W>> for Connection<V, W> {
    fn from(edge: Edge<V, W>) -> Self {
        Connection::Edge(edge)
    }
}

impl<V, W> From<Shortcut<V, W>> for Connection<V, W> {
    fn from(shortcut: Shortcut<V, W>) -> Self {
        Connection::Shortcut(shortcut)
    }
}
