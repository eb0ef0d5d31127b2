use indicatif::{ProgressBar, ProgressIterator};
use itertools::Itertools;
use log::{debug, info, warn};

use super::ShortcutStatistics;
use crate::{
    error::GraphError,
    graphs::{Connection, Graph, Importance, Shortcut, Vertex, VertexName, Weight},
};

impl<V: VertexName, W: Weight> Graph<V, W> {
    /// Contracts a single vertex.
    ///
    /// For every parent `p` and child `c` of `name` that are at least as
    /// important as `name` (and distinct from each other) the path
    /// `p -> name -> c` becomes a shortcut `p -> c` unless `p` already has a
    /// connection to `c` that is at most as heavy. Nothing is removed; the
    /// contracted vertex stays in the graph.
    ///
    /// Returns the number of inserted shortcuts.
    pub fn add_shortcut(&mut self, name: &V) -> Result<usize, GraphError> {
        let vertex = self.get_vertex(name).ok_or_else(|| {
            let error = GraphError::UnknownVertex(format!("{:?}", name));
            warn!("no shortcuts added: {}", error);
            error
        })?;
        let importance = vertex.importance().ok_or_else(|| {
            let error = GraphError::MissingImportance(format!("{:?}", name));
            warn!("no shortcuts added: {}", error);
            error
        })?;

        let parents = Self::relevant(self.get_parents(name), importance);
        let children = Self::relevant(self.get_children(name), importance);

        let mut number_of_shortcuts = 0;
        for parent in parents.iter() {
            for child in children.iter() {
                if parent == child {
                    continue;
                }

                let (Some(first), Some(second)) = (
                    self.get_connection(parent, name),
                    self.get_connection(name, child),
                ) else {
                    continue;
                };

                let weight = first.weight() + second.weight();
                let is_improvement = match self.get_weight(parent, child) {
                    Some(current_weight) => current_weight > weight,
                    None => true,
                };
                if !is_improvement {
                    continue;
                }

                let Some(shortcut) = Shortcut::new(first.clone(), second.clone()) else {
                    continue;
                };
                debug!(
                    "adding shortcut {:?} -> {:?} over {:?} with weight {:?}",
                    parent, child, name, weight
                );
                self.add_connection(Connection::Shortcut(shortcut))?;
                number_of_shortcuts += 1;
            }
        }

        Ok(number_of_shortcuts)
    }

    /// Contracts every vertex in order of increasing importance.
    ///
    /// All vertices need an importance. This is checked once before the
    /// first contraction, so a missing importance leaves the graph as it was.
    pub fn add_shortcuts(&mut self) -> Result<ShortcutStatistics, GraphError> {
        self.add_shortcuts_with_progress(ProgressBar::hidden())
    }

    /// Same as [`Graph::add_shortcuts`], reporting progress on `pb`.
    pub fn add_shortcuts_with_progress(
        &mut self,
        pb: ProgressBar,
    ) -> Result<ShortcutStatistics, GraphError> {
        let order = self.contraction_order()?;

        info!("contracting {} vertices", order.len());
        pb.set_length(order.len() as u64);

        let mut statistics = ShortcutStatistics::default();
        for name in order.iter().progress_with(pb) {
            statistics.shortcuts += self.add_shortcut(name)?;
            statistics.contracted_vertices += 1;
        }
        info!(
            "contracted {} vertices, added {} shortcuts",
            statistics.contracted_vertices, statistics.shortcuts
        );

        Ok(statistics)
    }

    /// Vertex names sorted by increasing importance.
    fn contraction_order(&self) -> Result<Vec<V>, GraphError> {
        let mut importances = Vec::with_capacity(self.number_of_vertices());
        for vertex in self.vertices() {
            let Some(importance) = vertex.importance() else {
                let error = GraphError::MissingImportance(format!("{:?}", vertex.name()));
                warn!("graph has vertices without an importance, exiting: {}", error);
                return Err(error);
            };
            importances.push((importance, vertex.name().clone()));
        }

        Ok(importances
            .into_iter()
            .sorted_by_key(|(importance, _)| *importance)
            .map(|(_, name)| name)
            .collect())
    }

    // Neighbors that are not below `importance`. Vertices without an
    // importance never take part in a contraction.
    fn relevant(neighbors: Vec<&Vertex<V, W>>, importance: Importance) -> Vec<V> {
        neighbors
            .into_iter()
            .filter(|neighbor| {
                neighbor
                    .importance()
                    .is_some_and(|neighbor_importance| neighbor_importance >= importance)
            })
            .map(|neighbor| neighbor.name().clone())
            .collect()
    }

    fn get_connection(&self, source: &V, destination: &V) -> Option<&Connection<V, W>> {
        self.get_vertex(source)?.get_connection(destination)
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::GraphError, graphs::Graph};

    fn scenario() -> Graph<char, u32> {
        let mut graph = Graph::new(true);
        graph.add_edge('A', 'B', 3);
        graph.add_edge('B', 'C', 4);
        graph.set_importance(&'A', 2).unwrap();
        graph.set_importance(&'B', 0).unwrap();
        graph.set_importance(&'C', 2).unwrap();
        graph
    }

    #[test]
    fn shortcut_bypasses_unimportant_vertex() {
        let mut graph = scenario();
        let statistics = graph.add_shortcuts().unwrap();

        assert_eq!(statistics.contracted_vertices, 3);
        assert_eq!(statistics.shortcuts, 1);
        assert_eq!(graph.get_weight(&'A', &'C'), Some(7));

        let shortcut = graph.get_vertex(&'A').unwrap().get_connection(&'C').unwrap();
        assert!(shortcut.is_shortcut());
        assert_eq!(shortcut.decompose(), vec!['A', 'B', 'C']);

        let b = graph.get_vertex(&'B').unwrap();
        assert_eq!(b.connections().len(), 1);
        assert_eq!(b.get_weight(&'C'), Some(4));
    }

    #[test]
    fn cheaper_direct_edge_is_kept() {
        let mut graph = scenario();
        graph.add_edge('A', 'C', 6);

        assert_eq!(graph.add_shortcut(&'B'), Ok(0));
        assert_eq!(graph.get_weight(&'A', &'C'), Some(6));
    }

    #[test]
    fn equal_weight_keeps_original_edge() {
        let mut graph = scenario();
        graph.add_edge('A', 'C', 7);

        assert_eq!(graph.add_shortcut(&'B'), Ok(0));
        assert!(!graph
            .get_vertex(&'A')
            .unwrap()
            .get_connection(&'C')
            .unwrap()
            .is_shortcut());
    }

    #[test]
    fn costlier_edge_is_replaced() {
        let mut graph = scenario();
        graph.add_edge('A', 'C', 10);

        assert_eq!(graph.add_shortcut(&'B'), Ok(1));
        assert_eq!(graph.get_weight(&'A', &'C'), Some(7));
    }

    #[test]
    fn less_important_neighbors_are_ignored() {
        let mut graph = scenario();
        graph.set_importance(&'C', -1).unwrap();

        assert_eq!(graph.add_shortcut(&'B'), Ok(0));
        assert!(!graph.contains_edge(&'A', &'C'));
    }

    #[test]
    fn no_self_loop_shortcuts() {
        let mut graph = Graph::new(false);
        graph.add_edge('A', 'B', 1);
        graph.set_importance(&'A', 1).unwrap();
        graph.set_importance(&'B', 0).unwrap();

        assert_eq!(graph.add_shortcut(&'B'), Ok(0));
        assert!(!graph.contains_edge(&'A', &'A'));
    }

    #[test]
    fn undirected_shortcut_is_mirrored() {
        let mut graph = Graph::new(false);
        graph.add_edge('A', 'B', 3);
        graph.add_edge('B', 'C', 4);
        graph.set_importance(&'A', 2).unwrap();
        graph.set_importance(&'B', 0).unwrap();
        graph.set_importance(&'C', 2).unwrap();

        assert_eq!(graph.add_shortcut(&'B'), Ok(1));
        assert_eq!(graph.get_weight(&'A', &'C'), Some(7));
        assert_eq!(graph.get_weight(&'C', &'A'), Some(7));

        let reverse = graph.get_vertex(&'C').unwrap().get_connection(&'A').unwrap();
        assert!(reverse.is_shortcut());
        assert_eq!(reverse.decompose(), vec!['C', 'B', 'A']);
    }

    #[test]
    fn neighbors_without_importance_are_skipped() {
        let mut graph = scenario();
        graph.add_edge('B', 'D', 1);

        assert_eq!(graph.add_shortcut(&'B'), Ok(1));
        assert!(graph.contains_edge(&'A', &'C'));
        assert!(!graph.contains_edge(&'A', &'D'));
    }

    #[test]
    fn missing_importance_aborts_batch() {
        let mut graph = scenario();
        graph.add_edge('C', 'D', 1);
        let number_of_edges = graph.number_of_edges();
        assert_eq!(number_of_edges, 3);

        assert_eq!(
            graph.add_shortcuts(),
            Err(GraphError::MissingImportance("'D'".to_string()))
        );
        assert!(!graph.contains_edge(&'A', &'C'));
        assert_eq!(graph.number_of_edges(), number_of_edges);
    }

    #[test]
    fn single_vertex_needs_importance() {
        let mut graph: Graph<char, u32> = Graph::new(true);
        graph.add_edge('A', 'B', 1);

        assert!(matches!(
            graph.add_shortcut(&'A'),
            Err(GraphError::MissingImportance(_))
        ));
        assert!(matches!(
            graph.add_shortcut(&'Z'),
            Err(GraphError::UnknownVertex(_))
        ));
    }
}
