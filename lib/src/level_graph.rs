//! # Level graph
//!
//! A LevelGraph holds the edges of the residual network that advance exactly one
//! breadth-first level away from the source. It is built once per phase by
//! `FlowNetwork::build_level_graph` and then only ever shrinks: edges are removed
//! once an augmenting path consumes them and dead-end vertices are removed whole.
use crate::adjacency::AdjacencyMatrix;
use crate::Vertex;

#[derive(Debug, Clone)]
pub struct LevelGraph {
  edges: AdjacencyMatrix,
  levels: Vec<Option<usize>>,
}

impl LevelGraph {
  pub(crate) fn new(edges: AdjacencyMatrix, levels: Vec<Option<usize>>) -> Self {
    assert_eq!(edges.len(), levels.len());
    Self { edges, levels }
  }

  /// Returns every vertex reachable from `vertex` by one level graph edge,
  /// in ascending index order
  pub fn neighbors(&self, vertex: Vertex) -> Vec<Vertex> {
    self.edges.successors(vertex).collect()
  }

  /// Returns the lowest index neighbor of `vertex`, the one the engine advances to
  pub fn first_neighbor(&self, vertex: Vertex) -> Option<Vertex> {
    self.edges.successors(vertex).next()
  }

  pub fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
    self.edges.contains(from, to)
  }

  /// Removes the edge between every consecutive pair of `path`
  pub fn delete_edges_on_path(&mut self, path: &[Vertex]) {
    for pair in path.windows(2) {
      self.edges.remove(pair[0], pair[1]);
    }
  }

  /// Removes `vertex` along with all of its incoming and outgoing edges
  pub fn delete_vertex(&mut self, vertex: Vertex) {
    self.edges.isolate(vertex);
  }

  /// Breadth-first distance of `vertex` from the source at the time the graph
  /// was built, `None` if it was unreachable
  pub fn level(&self, vertex: Vertex) -> Option<usize> {
    self.levels[vertex]
  }

  pub fn edge_count(&self) -> usize {
    self.edges.edge_count()
  }
}
