//! # Matching results
use std::fmt;
use std::ops::Deref;

/// A left vertex paired with a right vertex, by display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedPair {
  pub left: String,
  pub right: String,
}

/// Matching is the name-resolved result of the engine, in the order
/// the left vertices were first matched
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matching {
  pub pairs: Vec<MatchedPair>,
}

impl Matching {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, left: &str, right: &str) {
    self.pairs.push(MatchedPair {
      left: left.to_string(),
      right: right.to_string(),
    });
  }

  /// Returns the right partner of the left vertex named `left`
  pub fn partner_of(&self, left: &str) -> Option<&str> {
    self
      .pairs
      .iter()
      .find(|p| p.left == left)
      .map(|p| p.right.as_str())
  }
}

impl Deref for Matching {
  type Target = [MatchedPair];

  fn deref(&self) -> &Self::Target {
    &self.pairs
  }
}

/// Renders one `<left> / <right>` line per pair followed by the total
impl fmt::Display for Matching {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for pair in &self.pairs {
      writeln!(f, "{} / {}", pair.left, pair.right)?;
    }
    writeln!(f, "{} total matches", self.pairs.len())
  }
}
