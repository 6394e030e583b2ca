//! # Residual flow network for bipartite matching
//!
//! The network has `N = vertex_count + 2` vertices. Vertex `0` is the source and
//! vertex `N - 1` the sink. With `mid = N / 2`, vertices `[1, mid)` form the left
//! partition and `[mid, N - 1)` the right partition. Every edge has unit
//! capacity, so the residual state of an edge pair is fully described by which
//! of the two directions is present.
use crate::adjacency::AdjacencyMatrix;
use crate::error::GraphError;
use crate::input::GraphInput;
use crate::level_graph::LevelGraph;
use crate::matching::Matching;
use crate::Vertex;
use std::collections::VecDeque;
use std::ops::Range;

const SOURCE_NAME: &str = "source";
const SINK_NAME: &str = "sink";

#[derive(Debug, Clone)]
pub struct FlowNetwork {
  names: Vec<String>,
  residual: AdjacencyMatrix,
  /// Right partner of each left vertex, indexed by vertex
  partner: Vec<Option<Vertex>>,
  /// Left vertices in the order they were first matched
  match_order: Vec<Vertex>,
  terminals_connected: bool,
}

impl FlowNetwork {
  /// Returns a network holding `vertex_count` named vertices and the given
  /// left to right `edges`. Edge endpoints are 1-based positions into `names`.
  /// The source and sink are not connected yet, see `connect_terminals`.
  pub fn new(
    vertex_count: usize,
    names: Vec<String>,
    edges: &[(usize, usize)],
  ) -> Result<Self, GraphError> {
    if vertex_count % 2 != 0 {
      return Err(GraphError::OddVertexCount(vertex_count));
    }
    if names.len() != vertex_count {
      return Err(GraphError::NameCountMismatch {
        expected: vertex_count,
        found: names.len(),
      });
    }
    let n = vertex_count + 2;
    let mut all_names = Vec::with_capacity(n);
    all_names.push(SOURCE_NAME.to_string());
    all_names.extend(names);
    all_names.push(SINK_NAME.to_string());
    let mut network = Self {
      names: all_names,
      residual: AdjacencyMatrix::new(n),
      partner: vec![None; n],
      match_order: Vec::new(),
      terminals_connected: false,
    };
    for &(start, end) in edges {
      network.add_edge(start, end)?;
    }
    Ok(network)
  }

  /// Returns a fully wired network built from parsed input
  pub fn from_input(input: &GraphInput) -> Result<Self, GraphError> {
    let mut network = Self::new(input.vertex_count(), input.names.clone(), &input.edges)?;
    network.connect_terminals();
    Ok(network)
  }

  /// Adds the residual edge `start -> end` between a left and a right vertex
  pub fn add_edge(&mut self, start: Vertex, end: Vertex) -> Result<(), GraphError> {
    for &v in &[start, end] {
      if v == self.source() || v >= self.sink() {
        return Err(GraphError::VertexOutOfRange {
          vertex: v,
          vertex_count: self.vertex_count(),
        });
      }
    }
    if !self.left().contains(&start) || !self.right().contains(&end) {
      return Err(GraphError::WrongPartition { start, end });
    }
    if self.residual.contains(start, end) {
      warn!(
        "Ignoring duplicate edge {} / {}",
        self.names[start], self.names[end]
      );
    }
    self.residual.insert(start, end);
    Ok(())
  }

  /// Adds an edge from the source to every left vertex and from every right
  /// vertex to the sink. Must be called once, after all input edges are added.
  pub fn connect_terminals(&mut self) {
    if self.terminals_connected {
      warn!("Source and sink are already connected");
      return;
    }
    let source = self.source();
    let sink = self.sink();
    for v in self.left() {
      self.residual.insert(source, v);
    }
    for v in self.right() {
      self.residual.insert(v, sink);
    }
    self.terminals_connected = true;
  }

  /// Runs a breadth-first search from the source over the residual edges and
  /// returns the edges that advance exactly one level. Returns `None` when the
  /// sink cannot be reached, which means the current matching is maximum.
  pub fn build_level_graph(&self) -> Option<LevelGraph> {
    let n = self.names.len();
    let source = self.source();
    let sink = self.sink();
    let mut levels: Vec<Option<usize>> = vec![None; n];
    let mut edges = AdjacencyMatrix::new(n);
    let mut queue = VecDeque::with_capacity(n);
    levels[source] = Some(0);
    queue.push_back(source);
    while let Some(current) = queue.pop_front() {
      // Paths end at the sink, nothing beyond it is useful
      if current == sink {
        continue;
      }
      let next_level = levels[current].map(|l| l + 1);
      for next in self.residual.successors(current) {
        // The source sits on level 0 and never gains an incoming level edge
        if next == source {
          continue;
        }
        match levels[next] {
          None => {
            levels[next] = next_level;
            edges.insert(current, next);
            queue.push_back(next);
          }
          level if level == next_level => edges.insert(current, next),
          _ => {}
        }
      }
    }
    if levels[sink].is_none() {
      return None;
    }
    Some(LevelGraph::new(edges, levels))
  }

  /// Records the matching induced by an augmenting `path` running from the
  /// source to the sink. The vertex pairs at positions `(1, 2)`, `(3, 4)`, ...
  /// are the left to right edges the path traverses forward, and each one
  /// replaces any previous partner of its left vertex.
  pub fn augment(&mut self, path: &[Vertex]) {
    if path.len() < 2 {
      return;
    }
    debug_assert_eq!(path.len() % 2, 0, "augmenting path {:?}", path);
    for i in (1..path.len() - 1).step_by(2) {
      let (left, right) = (path[i], path[i + 1]);
      if self.partner[left].is_none() {
        self.match_order.push(left);
      }
      self.partner[left] = Some(right);
    }
  }

  /// Replaces every edge on `path` with its reverse edge
  pub fn reverse_edges(&mut self, path: &[Vertex]) {
    for pair in path.windows(2) {
      self.residual.remove(pair[0], pair[1]);
      self.residual.insert(pair[1], pair[0]);
    }
  }

  /// Returns the current matching with vertices resolved to their names
  pub fn matching(&self) -> Matching {
    let mut matching = Matching::new();
    for &left in &self.match_order {
      if let Some(right) = self.partner[left] {
        matching.push(&self.names[left], &self.names[right]);
      }
    }
    matching
  }

  /// Returns the right partner of `left`, if any
  pub fn partner(&self, left: Vertex) -> Option<Vertex> {
    self.partner[left]
  }

  pub fn matched_count(&self) -> usize {
    self.match_order.len()
  }

  pub fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
    self.residual.contains(from, to)
  }

  pub fn name(&self, v: Vertex) -> &str {
    &self.names[v]
  }

  pub fn source(&self) -> Vertex {
    0
  }

  pub fn sink(&self) -> Vertex {
    self.names.len() - 1
  }

  /// Number of named vertices, excluding the source and sink
  pub fn vertex_count(&self) -> usize {
    self.names.len() - 2
  }

  pub fn left(&self) -> Range<Vertex> {
    1..self.names.len() / 2
  }

  pub fn right(&self) -> Range<Vertex> {
    self.names.len() / 2..self.sink()
  }
}
