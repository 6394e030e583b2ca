//! # Blocking flow engine
//!
//! The engine finds a maximum matching with Dinic's algorithm specialized to
//! unit capacities. Each phase builds a level graph from the residual network,
//! then walks it depth first from the source, always advancing to the lowest
//! index neighbor:
//!
//! - reaching the sink augments the matching, flips the path in the residual
//!   network and removes the path's edges from the level graph,
//! - getting stuck at a vertex removes that vertex from the level graph and
//!   steps back one vertex (a retreat),
//! - getting stuck at the source ends the phase.
//!
//! The run ends when no level graph reaches the sink. The walk keeps its own
//! path stack, so call depth does not grow with the graph.
use crate::level_graph::LevelGraph;
use crate::matching::Matching;
use crate::network::FlowNetwork;
use crate::Vertex;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
  /// About to build the level graph for a new phase
  SearchingPhase,
  /// Extending the current path by one vertex
  Advancing,
  /// The current path reached the sink
  Augmenting,
  /// The current vertex has no edge left in the level graph
  Retreating,
  /// No augmenting path remains, the matching is maximum
  Done,
}

/// Stats counts the work done by a run
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
  /// Level graphs that reached the sink
  pub phases: usize,
  pub augmenting_paths: usize,
  pub retreats: usize,
}

impl Stats {
  pub fn new() -> Self {
    Self::default()
  }
}

pub struct Engine<'a> {
  network: &'a mut FlowNetwork,
  level_graph: Option<LevelGraph>,
  path: Vec<Vertex>,
  state: State,
  stats: Stats,
}

impl<'a> Engine<'a> {
  /// Returns an engine that will search `network` for augmenting paths.
  /// The network must already have its source and sink connected.
  pub fn new(network: &'a mut FlowNetwork) -> Self {
    let capacity = network.vertex_count() + 2;
    Self {
      network,
      level_graph: None,
      path: Vec::with_capacity(capacity),
      state: State::SearchingPhase,
      stats: Stats::new(),
    }
  }

  pub fn state(&self) -> State {
    self.state
  }

  pub fn stats(&self) -> Stats {
    self.stats
  }

  /// The vertices visited so far in the current phase, source first
  pub fn path(&self) -> &[Vertex] {
    &self.path
  }

  /// The level graph of the current phase, `None` before the first phase and once done
  pub fn level_graph(&self) -> Option<&LevelGraph> {
    self.level_graph.as_ref()
  }

  /// Performs a single transition and returns the new state.
  /// `Done` is absorbing.
  pub fn step(&mut self) -> State {
    self.state = match self.state {
      State::SearchingPhase => self.search_phase(),
      State::Advancing => self.advance(),
      State::Augmenting => self.augment(),
      State::Retreating => self.retreat(),
      State::Done => State::Done,
    };
    self.state
  }

  /// Steps until no augmenting path remains and returns the accumulated stats
  pub fn run(&mut self) -> Stats {
    while self.step() != State::Done {}
    info!(
      "Found {} matches in {} phases ({} augmenting paths, {} retreats)",
      self.network.matched_count(),
      self.stats.phases,
      self.stats.augmenting_paths,
      self.stats.retreats
    );
    self.stats
  }

  fn restart_path(&mut self) {
    self.path.clear();
    self.path.push(self.network.source());
  }

  fn current(&self) -> Vertex {
    *self
      .path
      .last()
      .expect("path always holds at least the source while a phase is active")
  }

  fn search_phase(&mut self) -> State {
    if let Some(lg) = &self.level_graph {
      debug!(
        "Phase {} exhausted, {} level graph edges left",
        self.stats.phases,
        lg.edge_count()
      );
    }
    self.level_graph = self.network.build_level_graph();
    match &self.level_graph {
      None => {
        self.path.clear();
        State::Done
      }
      Some(lg) => {
        self.stats.phases += 1;
        debug!(
          "Phase {}: level graph with {} edges, sink at level {:?}",
          self.stats.phases,
          lg.edge_count(),
          lg.level(self.network.sink())
        );
        self.restart_path();
        State::Advancing
      }
    }
  }

  fn advance(&mut self) -> State {
    let current = self.current();
    if current == self.network.sink() {
      return State::Augmenting;
    }
    let next = match &self.level_graph {
      Some(lg) => lg.first_neighbor(current),
      None => None,
    };
    match next {
      Some(next) => {
        self.path.push(next);
        State::Advancing
      }
      None if current == self.network.source() => State::SearchingPhase,
      None => State::Retreating,
    }
  }

  fn augment(&mut self) -> State {
    trace!("Augmenting along {:?}", self.path);
    self.network.augment(&self.path);
    self.network.reverse_edges(&self.path);
    if let Some(lg) = &mut self.level_graph {
      lg.delete_edges_on_path(&self.path);
    }
    self.stats.augmenting_paths += 1;
    self.restart_path();
    State::Advancing
  }

  fn retreat(&mut self) -> State {
    let dead_end = self.current();
    if let Some(lg) = &mut self.level_graph {
      lg.delete_vertex(dead_end);
    }
    self.path.pop();
    self.stats.retreats += 1;
    trace!("Retreating from {}", self.network.name(dead_end));
    State::Advancing
  }
}

/// Runs the engine to completion on `network` and returns the maximum matching
pub fn maximum_matching(network: &mut FlowNetwork) -> Matching {
  Engine::new(network).run();
  network.matching()
}

#[cfg(test)]
mod tests {
  use crate::bipartite::maximum_matching_size;
  use crate::engine::*;
  use crate::input::GraphInput;
  use rand::rngs::SmallRng;
  use rand::{Rng, SeedableRng};
  use std::collections::HashSet;

  fn network(text: &str) -> FlowNetwork {
    let input: GraphInput = text.parse().expect("valid input");
    FlowNetwork::from_input(&input).expect("valid network")
  }

  fn assert_valid(matching: &Matching) {
    let lefts: HashSet<_> = matching.iter().map(|p| &p.left).collect();
    let rights: HashSet<_> = matching.iter().map(|p| &p.right).collect();
    assert_eq!(lefts.len(), matching.len());
    assert_eq!(rights.len(), matching.len());
  }

  #[test]
  fn empty_graph_has_no_matches() {
    let mut n = network(include_str!("graphs/empty"));
    let mut engine = Engine::new(&mut n);
    let stats = engine.run();
    assert_eq!(stats, Stats::new());
    assert_eq!(n.matching().to_string(), "0 total matches\n");
  }

  #[test]
  fn graph_without_edges_has_no_matches() {
    let mut n = network(include_str!("graphs/no_edges"));
    assert!(maximum_matching(&mut n).is_empty());
  }

  #[test]
  fn perfect_matching() {
    let mut n = network(include_str!("graphs/perfect_3"));
    let matching = maximum_matching(&mut n);
    assert_eq!(
      matching.to_string(),
      "Anibel / Dax\nBrom / Elke\nCyra / Fenn\n3 total matches\n"
    );
  }

  #[test]
  fn second_phase_rematches_through_a_reverse_edge() {
    let mut n = network(include_str!("graphs/swap"));
    let stats = Engine::new(&mut n).run();
    assert_eq!(
      stats,
      Stats {
        phases: 2,
        augmenting_paths: 2,
        retreats: 2,
      }
    );
    // Anibel is recorded first, then moved from Cyra to Dax
    let matching = n.matching();
    assert_eq!(
      matching.to_string(),
      "Anibel / Dax\nBrom / Cyra\n2 total matches\n"
    );
    assert_eq!(matching.partner_of("Anibel"), Some("Dax"));
    assert_eq!(matching.partner_of("Brom"), Some("Cyra"));
  }

  #[test]
  fn level_graph_only_shrinks_within_a_phase() {
    for text in &[
      include_str!("graphs/swap"),
      include_str!("graphs/dead_ends"),
      include_str!("graphs/workshop"),
    ] {
      let mut n = network(text);
      let mut engine = Engine::new(&mut n);
      // (phase, edge count) after the previous step
      let mut previous: Option<(usize, usize)> = None;
      while engine.step() != State::Done {
        let lg = engine.level_graph().expect("a phase is active");
        let phase = engine.stats().phases;
        let edges = lg.edge_count();
        if let Some((last_phase, last_edges)) = previous {
          if last_phase == phase {
            assert!(edges <= last_edges, "phase {} grew to {} edges", phase, edges);
          }
        }
        previous = Some((phase, edges));
      }
      assert!(engine.level_graph().is_none());
    }
  }

  #[test]
  fn dead_ends_are_pruned() {
    let mut n = network(include_str!("graphs/dead_ends"));
    let stats = Engine::new(&mut n).run();
    assert_eq!(
      stats,
      Stats {
        phases: 1,
        augmenting_paths: 2,
        retreats: 2,
      }
    );
    assert_eq!(
      n.matching().to_string(),
      "Anibel / Dax\nBrom / Elke\n2 total matches\n"
    );
  }

  #[test]
  fn workshop_has_a_perfect_matching() {
    let text = include_str!("graphs/workshop");
    let mut n = network(text);
    let matching = maximum_matching(&mut n);
    assert_valid(&matching);
    assert_eq!(matching.len(), 8);
    let input: GraphInput = text.parse().unwrap();
    assert_eq!(maximum_matching_size(&input), 8);
  }

  #[test]
  fn steps_through_the_states() {
    let mut n = network(include_str!("graphs/perfect_3"));
    let mut engine = Engine::new(&mut n);
    assert_eq!(engine.state(), State::SearchingPhase);
    assert_eq!(engine.step(), State::Advancing);
    assert_eq!(engine.path(), &[0]);
    assert_eq!(engine.step(), State::Advancing);
    assert_eq!(engine.step(), State::Advancing);
    assert_eq!(engine.step(), State::Advancing);
    assert_eq!(engine.path(), &[0, 1, 4, 7]);
    assert_eq!(engine.step(), State::Augmenting);
    assert_eq!(engine.step(), State::Advancing);
    assert_eq!(engine.path(), &[0]);
    assert_eq!(engine.stats().augmenting_paths, 1);
    engine.run();
    assert_eq!(engine.state(), State::Done);
    assert_eq!(engine.step(), State::Done);
  }

  #[test]
  fn reruns_are_identical() {
    let text = include_str!("graphs/workshop");
    let first = maximum_matching(&mut network(text));
    let second = maximum_matching(&mut network(text));
    assert_eq!(first, second);
  }

  fn random_input(rng: &mut SmallRng) -> GraphInput {
    let half: usize = rng.gen_range(0, 9);
    let density: f64 = rng.gen_range(0.0, 1.0);
    let names = (0..2 * half).map(|i| format!("v{}", i + 1)).collect();
    let mut edges = Vec::new();
    for left in 1..=half {
      for right in half + 1..=2 * half {
        if rng.gen_bool(density) {
          edges.push((left, right));
        }
      }
    }
    GraphInput { names, edges }
  }

  #[test]
  fn matches_the_reference_on_random_graphs() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
      let input = random_input(&mut rng);
      let mut n = FlowNetwork::from_input(&input).expect("valid network");
      let matching = maximum_matching(&mut n);
      assert_valid(&matching);
      assert_eq!(matching.len(), maximum_matching_size(&input), "{:?}", input);
      for pair in matching.iter() {
        let left = input.names.iter().position(|n| *n == pair.left).unwrap() + 1;
        let right = input.names.iter().position(|n| *n == pair.right).unwrap() + 1;
        assert!(input.edges.contains(&(left, right)));
      }
    }
  }
}
