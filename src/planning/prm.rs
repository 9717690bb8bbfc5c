// MIT License
//
// Copyright (c) 2024 Erik Holum
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Probabilistic roadmap planning: a learning phase that samples the
//! configuration space into a [Roadmap], and a query phase that runs a
//! unit-cost shortest-path search over it.

use std::collections::VecDeque;
use std::f64::consts::TAU;

use linked_hash_set::LinkedHashSet;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::arm::Arm;
use crate::collision::{CollisionChecker, Obstacle};
use crate::configuration::{Configuration, Distance};
use crate::error::PlanError;
use crate::roadmap::Roadmap;

/// Default number of sampling attempts per roadmap build.
pub const DEFAULT_MAX_CONFIGS: usize = 10_000;

// Roadmap construction is reproducible by contract; builds always start from
// this seed unless the caller overrides it.
const DEFAULT_SEED: u64 = 1;

/// PRM planner for a planar arm among polygonal obstacles.
///
/// Owns the problem definition: arm geometry, start and goal poses, and the
/// obstacle set. [`build_roadmap`](PrmPlanner::build_roadmap) runs the
/// learning phase from scratch each call; [`query`](PrmPlanner::query) runs
/// the query phase over a previously built roadmap.
///
/// # Example
///
/// ```
/// use armplanning::configuration::Configuration;
/// use armplanning::planning::prm::PrmPlanner;
/// use geo::Polygon;
/// use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};
///
/// let planner: PrmPlanner<Polygon<f64>> = PrmPlanner::new(
///     2,
///     vec![8.0, 10.0],
///     Configuration::new(vec![FRAC_PI_2, FRAC_PI_2]),
///     Configuration::new(vec![FRAC_PI_4, FRAC_PI_3]),
///     Vec::new(),
/// )
/// .unwrap()
/// .with_max_configs(300);
///
/// let roadmap = planner.build_roadmap(12).unwrap();
/// let path = planner.query(&roadmap).unwrap();
/// assert!(path.is_some());
/// ```
#[derive(Debug)]
pub struct PrmPlanner<O> {
    arm: Arm,
    start: Configuration,
    goal: Configuration,
    obstacles: Vec<O>,
    max_configs: usize,
    seed: u64,
}

impl<O: Obstacle> PrmPlanner<O> {
    /// Construct a planner for the given problem.
    ///
    /// # Errors
    ///
    /// If the arm geometry is invalid (see [`Arm::new`]) or if the start or
    /// goal configuration does not have `num_joints` angles.
    pub fn new(
        num_joints: usize,
        link_lengths: Vec<f64>,
        start: Configuration,
        goal: Configuration,
        obstacles: Vec<O>,
    ) -> Result<Self, PlanError> {
        let arm = Arm::new(num_joints, link_lengths)?;
        for config in [&start, &goal] {
            if config.len() != num_joints {
                return Err(PlanError::MismatchedConfiguration {
                    expected: num_joints,
                    got: config.len(),
                });
            }
        }
        Ok(PrmPlanner {
            arm,
            start,
            goal,
            obstacles,
            max_configs: DEFAULT_MAX_CONFIGS,
            seed: DEFAULT_SEED,
        })
    }

    /// Override the number of sampling attempts per build.
    #[must_use]
    pub fn with_max_configs(mut self, max_configs: usize) -> Self {
        self.max_configs = max_configs;
        self
    }

    /// Override the sampling seed. Builds with the same seed, problem, and
    /// `k_neighbors` produce identical roadmaps.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The arm this planner was constructed with.
    #[must_use]
    pub fn arm(&self) -> &Arm {
        &self.arm
    }

    /// Learning phase: sample collision-free configurations and wire each to
    /// its nearest collision-free-reachable neighbors.
    ///
    /// Sampling always runs exactly `max_configs` attempts, drawing every
    /// joint angle uniformly from [0, 2π) and keeping candidates whose pose is
    /// collision-free. The start and goal poses are then appended as the two
    /// trailing nodes regardless of their own collision state. Each node gets
    /// directed edges to at most `k_neighbors` of its nearest peers by
    /// joint-angle distance, keeping only edges whose local motion is
    /// collision-free. Nodes with fewer than `k_neighbors` reachable peers
    /// simply get shorter adjacency lists.
    ///
    /// # Errors
    ///
    /// If `k_neighbors` is zero.
    pub fn build_roadmap(&self, k_neighbors: usize) -> Result<Roadmap, PlanError> {
        if k_neighbors == 0 {
            return Err(PlanError::InvalidNeighborCount);
        }

        let checker = CollisionChecker::new(&self.arm, &self.obstacles);
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut configs = Vec::new();
        for _ in 0..self.max_configs {
            let angles: Vec<f64> = (0..self.arm.num_joints())
                .map(|_| TAU * rng.gen::<f64>())
                .collect();
            let candidate = Configuration::new(angles);
            if !checker.in_collision(&candidate) {
                configs.push(candidate);
            }
        }

        // The trailing two nodes are the canonical search endpoints. Exact
        // duplicates earlier in the list are left alone and never used.
        let start = ensure_trailing(&mut configs, &self.start);
        let goal = ensure_trailing(&mut configs, &self.goal);

        // Full pairwise distances in raw joint-angle space.
        let n = configs.len();
        let mut distances = vec![0.0f64; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = configs[i].distance(&configs[j]);
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }

        let mut adjacency: Vec<LinkedHashSet<usize>> =
            (0..n).map(|_| LinkedHashSet::new()).collect();
        let mut order: Vec<usize> = (0..n).collect();
        for i in 0..n {
            // k nearest by distance, ties broken by index. Position 0 is the
            // node's own zero-distance entry and is skipped.
            order.sort_by_key(|&j| (OrderedFloat(distances[i * n + j]), j));
            for &neighbor in order.iter().skip(1).take(k_neighbors) {
                if neighbor != i && !checker.motion_collides(&configs[i], &configs[neighbor]) {
                    adjacency[i].insert(neighbor);
                }
            }
        }

        Ok(Roadmap::new(configs, adjacency, start, goal))
    }

    /// Query phase: minimum-hop path from the planner's start pose to its
    /// goal pose over the given roadmap.
    ///
    /// Returns `Ok(None)` when the goal is unreachable.
    ///
    /// # Errors
    ///
    /// If the roadmap does not contain its own start or goal node.
    pub fn query(&self, roadmap: &Roadmap) -> Result<Option<Vec<Configuration>>, PlanError> {
        shortest_path(roadmap)
    }
}

// Idempotently make `value` a trailing element of `configs`, returning its
// index. A pre-existing copy anywhere other than the tail is ignored.
fn ensure_trailing(configs: &mut Vec<Configuration>, value: &Configuration) -> usize {
    if configs.last() != Some(value) {
        configs.push(value.clone());
    }
    configs.len() - 1
}

/// Minimum-hop-count path between a roadmap's start and goal nodes.
///
/// Every edge costs one hop. The search is a first-in-first-out frontier
/// relaxation: popped nodes are finalized once, outgoing neighbors are
/// relaxed at cost + 1, and the search stops when the goal is finalized or
/// the reachable frontier is exhausted. Under uniform unit costs this yields
/// correct shortest hop counts; it is not a general weighted-graph search and
/// must not be reused with weighted edges without a priority-ordered
/// frontier. Only outgoing edges are traversed, matching the roadmap's
/// directed adjacency.
///
/// Returns `Ok(Some(path))` with the configurations from start to goal
/// inclusive, or `Ok(None)` when the goal is unreachable.
///
/// # Errors
///
/// If the roadmap's start or goal index refers to a node that does not exist.
pub fn shortest_path(roadmap: &Roadmap) -> Result<Option<Vec<Configuration>>, PlanError> {
    let start = roadmap.start_index();
    let goal = roadmap.goal_index();
    for index in [start, goal] {
        if !roadmap.contains(index) {
            return Err(PlanError::MalformedRoadmap { index });
        }
    }

    let n = roadmap.len();
    let mut visited = vec![false; n];
    let mut distance = vec![usize::MAX; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];

    let mut frontier = VecDeque::new();
    frontier.push_back((0usize, start));
    while let Some((cost, current)) = frontier.pop_front() {
        if visited[current] {
            continue;
        }
        visited[current] = true;

        if current == goal {
            break;
        }

        if let Some(neighbors) = roadmap.neighbors(current) {
            for neighbor in neighbors {
                let next_cost = cost + 1;
                frontier.push_back((next_cost, neighbor));

                if next_cost < distance[neighbor] {
                    distance[neighbor] = next_cost;
                    predecessor[neighbor] = Some(current);
                }
            }
        }
    }

    if !visited[goal] {
        return Ok(None);
    }

    // Walk predecessor links back from the goal. A missing link before the
    // start is reached means no complete path exists.
    let mut indices = vec![goal];
    let mut current = goal;
    while current != start {
        match predecessor[current] {
            Some(previous) => {
                indices.push(previous);
                current = previous;
            }
            None => return Ok(None),
        }
    }
    indices.reverse();

    Ok(Some(
        indices
            .into_iter()
            .map(|index| roadmap.config(index).clone())
            .collect(),
    ))
}

//
// Unit tests
//
