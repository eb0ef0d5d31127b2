use crate::{
    error::HeapError,
    graphs::{VertexName, Weight},
};

pub mod indexed_heap;

pub use indexed_heap::IndexedBinaryHeap;

/// Tentative distance of a vertex, the element a shortest path search keeps
/// in its queue.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexDistance<V, W> {
    pub vertex: V,
    pub distance: W,
}

impl<V: VertexName, W: Weight> VertexDistance<V, W> {
    pub fn new(vertex: V, distance: W) -> VertexDistance<V, W> {
        VertexDistance { vertex, distance }
    }

    /// True iff `self` has to be settled before `other`.
    pub fn is_closer(&self, other: &Self) -> bool {
        self.distance < other.distance
    }
}

/// Queue of tentative distances keyed by vertex, so that a search can relax
/// a distance with [`IndexedBinaryHeap::decrease_by_key`].
pub type DistanceQueue<V, W> = IndexedBinaryHeap<VertexDistance<V, W>, V>;

/// Builds a [`DistanceQueue`]. Every vertex may appear only once.
pub fn distance_queue<V, W>(
    elements: Vec<VertexDistance<V, W>>,
) -> Result<DistanceQueue<V, W>, HeapError>
where
    V: VertexName + 'static,
    W: Weight + 'static,
{
    IndexedBinaryHeap::with_key(
        elements,
        VertexDistance::is_closer,
        |element: &VertexDistance<V, W>| element.vertex.clone(),
    )
}
