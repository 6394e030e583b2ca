//! # Dense 0/1 adjacency relation
//!
//! Both the residual network and the level graph store their edges in an
//! `AdjacencyMatrix`. The cells live in one flat row-major buffer indexed by
//! `n * from + to`.
use crate::Vertex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
  n: usize,
  cells: Vec<u8>,
}

impl AdjacencyMatrix {
  /// Returns an `n` by `n` matrix with no edges
  pub fn new(n: usize) -> Self {
    Self {
      n,
      cells: vec![0; n * n],
    }
  }

  pub fn len(&self) -> usize {
    self.n
  }

  pub fn is_empty(&self) -> bool {
    self.n == 0
  }

  pub fn contains(&self, from: Vertex, to: Vertex) -> bool {
    self.cells[self.n * from + to] != 0
  }

  pub fn insert(&mut self, from: Vertex, to: Vertex) {
    self.cells[self.n * from + to] = 1;
  }

  pub fn remove(&mut self, from: Vertex, to: Vertex) {
    self.cells[self.n * from + to] = 0;
  }

  /// Removes every edge leaving or entering `v`
  pub fn isolate(&mut self, v: Vertex) {
    let n = self.n;
    for cell in &mut self.cells[n * v..n * (v + 1)] {
      *cell = 0;
    }
    for u in 0..n {
      self.cells[n * u + v] = 0;
    }
  }

  /// Returns the heads of the edges leaving `from`, lowest index first
  pub fn successors<'a>(&'a self, from: Vertex) -> impl Iterator<Item = Vertex> + 'a {
    let row = &self.cells[self.n * from..self.n * (from + 1)];
    row
      .iter()
      .enumerate()
      .filter(|(_, cell)| **cell != 0)
      .map(|(to, _)| to)
  }

  /// Total number of edges present
  pub fn edge_count(&self) -> usize {
    self.cells.iter().filter(|&&cell| cell != 0).count()
  }
}

#[cfg(test)]
mod tests {
  use crate::adjacency::*;

  #[test]
  fn successors_are_ascending() {
    let mut m = AdjacencyMatrix::new(5);
    m.insert(1, 4);
    m.insert(1, 2);
    m.insert(1, 3);
    m.insert(2, 1);
    let succ: Vec<_> = m.successors(1).collect();
    assert_eq!(succ, vec![2, 3, 4]);
  }

  #[test]
  fn isolate_removes_both_directions() {
    let mut m = AdjacencyMatrix::new(4);
    m.insert(0, 1);
    m.insert(1, 2);
    m.insert(3, 1);
    m.insert(0, 3);
    m.isolate(1);
    assert!(!m.contains(0, 1));
    assert!(!m.contains(1, 2));
    assert!(!m.contains(3, 1));
    assert!(m.contains(0, 3));
    assert_eq!(m.edge_count(), 1);
  }

  #[test]
  fn remove_clears_a_single_direction() {
    let mut m = AdjacencyMatrix::new(3);
    m.insert(0, 2);
    m.insert(2, 0);
    m.remove(0, 2);
    assert!(!m.contains(0, 2));
    assert!(m.contains(2, 0));
  }
}
