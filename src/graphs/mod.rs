use std::{fmt::Debug, hash::Hash, ops::Add};

pub mod connection;
pub mod graph;
pub mod graph_factory;
pub mod vertex;

pub use connection::{Connection, Edge, Shortcut};
pub use graph::Graph;
pub use vertex::{Vertex, VertexMetadata};

/// Rank assigned to a vertex from outside. Lower values are contracted first.
pub type Importance = i32;

/// Identifier of a vertex. Any hashable, comparable value will do.
pub trait VertexName: Clone + Eq + Hash + Debug {}

impl<T> VertexName for T where T: Clone + Eq + Hash + Debug {}

/// Numeric weight of a connection.
///
/// Only addition and comparison are needed, so integers and floats both
/// qualify. No guarantees are made beyond the arithmetic of the type itself.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Debug {}

impl<T> Weight for T where T: Copy + PartialOrd + Add<Output = T> + Debug {}
