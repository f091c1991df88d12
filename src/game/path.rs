use rand::RngCore;

use crate::atlas::Atlas;
use crate::model::{Endpoint, ValidPair};

/// Result of one Country Path guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// The text matched no country.
    NotFound,
    /// The country is already on the path.
    AlreadyUsed(String),
    /// The country does not border the current end of the path.
    NotAdjacent(String),
    /// Appended; the path is still open.
    Added(String),
    /// Appended and the path now reaches the destination.
    Completed(String),
    /// The game was already finished.
    Finished,
}

/// Build a chain of bordering countries from `start` to `end`.
///
/// Each guess must border the last country on the path. Naming the destination,
/// or any country that borders it, closes the path.
#[derive(Debug, Clone)]
pub struct CountryPathGame {
    start: String,
    end: String,
    path: Vec<String>,
    guesses: u32,
    complete: bool,
}

impl CountryPathGame {
    /// Start on a specific pair. Both ends must resolve in the registry.
    pub fn new(pair: &ValidPair, atlas: &mut Atlas) -> Option<Self> {
        let start = atlas.registry.canonical_name(pair.start.trim())?.to_string();
        let end = atlas.registry.canonical_name(pair.end.trim())?.to_string();
        if start == end {
            return None;
        }

        atlas.registry.reset_all();
        atlas.registry.set_endpoint(&start, Endpoint::Start);
        atlas.registry.set_endpoint(&end, Endpoint::End);
        tracing::debug!("country path: {start} -> {end}");

        Some(Self {
            path: vec![start.clone()],
            start,
            end,
            guesses: 0,
            complete: false,
        })
    }

    /// Start on a curated pair, or a generated one if none are playable.
    pub fn random(atlas: &mut Atlas, rng: &mut dyn RngCore) -> Option<Self> {
        let pair = atlas.random_pair(rng)?;
        Self::new(&pair, atlas)
    }

    pub fn guess(&mut self, input: &str, atlas: &mut Atlas) -> PathOutcome {
        if self.complete {
            return PathOutcome::Finished;
        }
        let Some(name) = atlas.resolve_name(input).map(String::from) else {
            return PathOutcome::NotFound;
        };
        self.guesses += 1;

        if self.path.contains(&name) {
            return PathOutcome::AlreadyUsed(name);
        }
        let tail = self.tail().to_string();
        if !atlas.is_adjacent(&tail, &name) {
            return PathOutcome::NotAdjacent(name);
        }

        self.path.push(name.clone());
        if name == self.end {
            self.complete = true;
            return PathOutcome::Completed(name);
        }
        atlas.registry.set_highlight(&name, true);

        if atlas.is_adjacent(&name, &self.end) {
            self.path.push(self.end.clone());
            self.complete = true;
            return PathOutcome::Completed(name);
        }
        PathOutcome::Added(name)
    }

    pub fn start_name(&self) -> &str {
        &self.start
    }

    pub fn end_name(&self) -> &str {
        &self.end
    }

    /// Countries so far, start first.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn tail(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or(&self.start)
    }

    /// Resolved guesses, accepted or not.
    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// A fewest-hop solution, for revealing or grading.
    pub fn optimal_path(&self, atlas: &Atlas) -> Option<Vec<String>> {
        atlas.adjacency.shortest_path(&self.start, &self.end)
    }

    /// Hops beyond the optimum. `None` until complete or if no route exists.
    pub fn extra_steps(&self, atlas: &Atlas) -> Option<usize> {
        if !self.complete {
            return None;
        }
        let optimal = self.optimal_path(atlas)?;
        Some(self.path.len().saturating_sub(optimal.len()))
    }

    /// Clear the path back to the start and wipe highlights.
    pub fn reset(&mut self, atlas: &mut Atlas) {
        atlas.registry.reset_all();
        atlas.registry.set_endpoint(&self.start, Endpoint::Start);
        atlas.registry.set_endpoint(&self.end, Endpoint::End);
        self.path.truncate(1);
        self.guesses = 0;
        self.complete = false;
    }
}
