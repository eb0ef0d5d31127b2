use crate::graphs::{Connection, Graph, VertexName, Weight};

pub mod contraction;

/// Summary of one [`Graph::add_shortcuts`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShortcutStatistics {
    pub contracted_vertices: usize,
    pub shortcuts: usize,
}

/// All connections of `graph` that are shortcuts.
pub fn shortcuts<V: VertexName, W: Weight>(
    graph: &Graph<V, W>,
) -> impl Iterator<Item = &Connection<V, W>> + '_ {
    graph.edges().filter(|connection| connection.is_shortcut())
}
