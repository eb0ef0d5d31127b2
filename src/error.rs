use thiserror::Error;

/// Conditions reported by [`crate::graphs::Graph`] and
/// [`crate::graphs::Vertex`]. None of them leave a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {0} does not exist")]
    UnknownVertex(String),
    #[error("connection starts at {source_name} but was offered to vertex {vertex}")]
    SourceMismatch { vertex: String, source_name: String },
    #[error("vertex {0} has no importance")]
    MissingImportance(String),
}

/// Conditions reported by [`crate::queue::indexed_heap::IndexedBinaryHeap`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("the heap is empty")]
    Empty,
    #[error("index {index} is outside of the heap (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("new value at index {0} does not decrease the current one")]
    NotDecreasing(usize),
    #[error("the heap was built without a key function")]
    KeyTrackingDisabled,
    #[error("key {0} is not in the heap")]
    UnknownKey(String),
    #[error("new value has key {found} but {expected} was requested")]
    KeyMismatch { expected: String, found: String },
    #[error("key {0} is already in the heap")]
    DuplicateKey(String),
}

/// Failures while building a graph from outside input.
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}
