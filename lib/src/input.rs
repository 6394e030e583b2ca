//! # Graph input format
//!
//! ```text
//! <vertex count>
//! <vertex name>            one line per vertex, left partition first
//! <edge count>
//! <left index> <right index>   1-based positions into the name list
//! ```
use crate::error::GraphError;
use regex::Regex;
use std::str::FromStr;

/// GraphInput is the parsed, not yet validated, content of an input file
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInput {
  pub names: Vec<String>,
  /// Edges as 1-based `(left, right)` positions into `names`
  pub edges: Vec<(usize, usize)>,
}

impl GraphInput {
  pub fn vertex_count(&self) -> usize {
    self.names.len()
  }
}

fn parse_count(line: usize, text: &str) -> Result<usize, GraphError> {
  text.trim().parse::<usize>().map_err(|_| GraphError::BadCount {
    line,
    text: text.trim().to_string(),
  })
}

fn parse_edge(line: usize, text: &str) -> Result<(usize, usize), GraphError> {
  lazy_static! {
      static ref EDGE_LINE_REGEX: Regex =
          Regex::new(r"^\s*(?P<start>\d+)\s+(?P<end>\d+)\s*$")
              .expect("Failed to compile EDGE_LINE_REGEX regex");
  }
  let bad_edge = || GraphError::BadEdge {
    line,
    text: text.trim().to_string(),
  };
  let caps = EDGE_LINE_REGEX.captures(text).ok_or_else(bad_edge)?;
  let start = caps["start"].parse::<usize>().map_err(|_| bad_edge())?;
  let end = caps["end"].parse::<usize>().map_err(|_| bad_edge())?;
  Ok((start, end))
}

impl FromStr for GraphInput {
  type Err = GraphError;

  fn from_str(text: &str) -> Result<Self, Self::Err> {
    // Line numbers in errors are 1-based
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));
    let (line, count_text) = lines.next().ok_or(GraphError::MissingLine("the vertex count"))?;
    let vertex_count = parse_count(line, count_text)?;
    let mut names = Vec::new();
    for _ in 0..vertex_count {
      let (_, name) = lines.next().ok_or(GraphError::MissingLine("a vertex name"))?;
      names.push(name.trim().to_string());
    }
    let (line, count_text) = lines.next().ok_or(GraphError::MissingLine("the edge count"))?;
    let edge_count = parse_count(line, count_text)?;
    let mut edges = Vec::new();
    for _ in 0..edge_count {
      let (line, edge_text) = lines.next().ok_or(GraphError::MissingLine("an edge"))?;
      edges.push(parse_edge(line, edge_text)?);
    }
    let trailing = lines.filter(|(_, l)| !l.trim().is_empty()).count();
    if trailing > 0 {
      warn!(
        "Ignoring {} non-empty line(s) after the last declared edge",
        trailing
      );
    }
    debug!(
      "Parsed {} vertices and {} edges",
      names.len(),
      edges.len()
    );
    Ok(Self { names, edges })
  }
}
