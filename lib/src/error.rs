//! # Errors raised while building a flow network
use std::error::Error;
use std::fmt;

/// GraphError describes input that cannot be turned into a bipartite flow network.
/// Line numbers are 1-based and refer to the input text when one is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
  /// The input ended before the named section was read
  MissingLine(&'static str),
  /// A count line did not hold a non-negative integer
  BadCount { line: usize, text: String },
  /// An edge line did not hold two whitespace separated integers
  BadEdge { line: usize, text: String },
  /// Vertices are split in half between the partitions, so the count must be even
  OddVertexCount(usize),
  /// The number of names does not match the declared vertex count
  NameCountMismatch { expected: usize, found: usize },
  /// An edge endpoint lies outside `[1, vertex_count]`
  VertexOutOfRange { vertex: usize, vertex_count: usize },
  /// An edge does not run from the left partition to the right partition
  WrongPartition { start: usize, end: usize },
}

impl fmt::Display for GraphError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MissingLine(what) => write!(f, "input ended before {}", what),
      Self::BadCount { line, text } => {
        write!(f, "line {}: expected a count, found \"{}\"", line, text)
      }
      Self::BadEdge { line, text } => write!(
        f,
        "line {}: expected \"<left> <right>\" edge, found \"{}\"",
        line, text
      ),
      Self::OddVertexCount(n) => write!(
        f,
        "vertex count {} is odd, the left and right partitions must be the same size",
        n
      ),
      Self::NameCountMismatch { expected, found } => {
        write!(f, "expected {} vertex names, found {}", expected, found)
      }
      Self::VertexOutOfRange {
        vertex,
        vertex_count,
      } => write!(
        f,
        "vertex {} is out of range, expected 1..={}",
        vertex, vertex_count
      ),
      Self::WrongPartition { start, end } => write!(
        f,
        "edge {} {} must join a left vertex to a right vertex",
        start, end
      ),
    }
  }
}

impl Error for GraphError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    None
  }
}
