//! # Reference maximum bipartite matching
//!
//! A plain augmenting path search with no level graph: each left vertex in turn
//! looks for a free right vertex, or for one whose current partner can move
//! elsewhere. It runs in `O(V * E)` and is only used to cross-check the engine.

// - https://en.wikipedia.org/wiki/Ford%E2%80%93Fulkerson_algorithm
// - https://en.wikipedia.org/wiki/Hopcroft%E2%80%93Karp_algorithm
// - http://olympiad.cs.uct.ac.za/presentations/camp2_2017/bipartitematching-robin.pdf

use crate::input::GraphInput;

/// Returns the size of a maximum matching of `input`.
/// Edges that do not join the left half to the right half are skipped.
pub fn maximum_matching_size(input: &GraphInput) -> usize {
  let half = input.vertex_count() / 2;
  // edges[half * left + right], both 0-based within their partition
  let mut edges = vec![0u8; half * half];
  for &(start, end) in &input.edges {
    if (1..=half).contains(&start) && (half + 1..=2 * half).contains(&end) {
      edges[half * (start - 1) + (end - half - 1)] = 1;
    }
  }
  let mut seen = vec![false; half];
  let mut matches: Vec<Option<usize>> = vec![None; half];
  let mut match_count = 0;
  for left in 0..half {
    for s in seen.iter_mut() {
      *s = false;
    }
    if find_match(&edges, half, left, &mut seen, &mut matches) {
      match_count += 1;
    }
  }
  match_count
}

fn find_match(
  edges: &[u8],
  half: usize,
  left: usize,
  seen: &mut [bool],
  matches: &mut [Option<usize>],
) -> bool {
  for right in 0..half {
    if edges[half * left + right] == 0 || seen[right] {
      continue;
    }
    seen[right] = true;
    // Either right is free, or its partner can be moved to another right vertex
    let available = match matches[right] {
      None => true,
      Some(other) => find_match(edges, half, other, seen, matches),
    };
    if available {
      matches[right] = Some(left);
      return true;
    }
  }
  false
}

#[cfg(test)]
mod tests {
  use crate::bipartite::*;

  fn input(half: usize, edges: &[(usize, usize)]) -> GraphInput {
    GraphInput {
      names: (1..=2 * half).map(|i| i.to_string()).collect(),
      edges: edges.to_vec(),
    }
  }

  #[test]
  fn empty() {
    assert_eq!(maximum_matching_size(&input(0, &[])), 0);
    assert_eq!(maximum_matching_size(&input(3, &[])), 0);
  }

  #[test]
  fn perfect() {
    assert_eq!(maximum_matching_size(&input(3, &[(1, 4), (2, 5), (3, 6)])), 3);
  }

  #[test]
  fn shared_right_vertex() {
    assert_eq!(maximum_matching_size(&input(3, &[(1, 4), (2, 4), (3, 4)])), 1);
  }

  #[test]
  fn needs_a_rematch() {
    // 1 takes 3 first and has to move to 4 for 2
    assert_eq!(maximum_matching_size(&input(2, &[(1, 3), (1, 4), (2, 3)])), 2);
  }

  #[test]
  fn misdirected_edges_are_skipped() {
    assert_eq!(maximum_matching_size(&input(2, &[(3, 1), (1, 2), (1, 9)])), 0);
  }
}
