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

//! Connectivity graph over sampled configurations.

use linked_hash_set::LinkedHashSet;

use crate::configuration::Configuration;

/// The product of the PRM learning phase: a backing list of configurations
/// and, per node, the set of outgoing neighbors in insertion order.
///
/// Adjacency is directed. Each node's neighbors are chosen independently from
/// its own k-nearest list, so edges are not guaranteed symmetric; traversals
/// must follow outgoing edges only. The start and goal poses occupy the two
/// trailing indices by construction.
#[derive(Debug)]
pub struct Roadmap {
    configs: Vec<Configuration>,
    adjacency: Vec<LinkedHashSet<usize>>,
    start: usize,
    goal: usize,
}

impl Roadmap {
    /// Assemble a roadmap from its parts.
    ///
    /// Every neighbor index in `adjacency` must refer to a node in `configs`;
    /// `start` and `goal` are validated lazily at query time so a malformed
    /// graph surfaces as a query error rather than a construction panic.
    #[must_use]
    pub fn new(
        configs: Vec<Configuration>,
        adjacency: Vec<LinkedHashSet<usize>>,
        start: usize,
        goal: usize,
    ) -> Self {
        debug_assert_eq!(configs.len(), adjacency.len());
        debug_assert!(adjacency
            .iter()
            .all(|set| set.iter().all(|&n| n < configs.len())));
        Roadmap {
            configs,
            adjacency,
            start,
            goal,
        }
    }

    /// Number of nodes in the roadmap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Whether `index` refers to a node in the graph.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < self.adjacency.len()
    }

    /// The configuration backing node `index`.
    ///
    /// # Panics
    ///
    /// If `index` is out of range.
    #[must_use]
    pub fn config(&self, index: usize) -> &Configuration {
        &self.configs[index]
    }

    /// All configurations, in node-index order. The final two entries are the
    /// start and goal poses. External consumers (e.g. a renderer stepping
    /// through a path) read poses from here.
    #[must_use]
    pub fn configs(&self) -> &[Configuration] {
        &self.configs
    }

    /// Outgoing neighbors of node `index` in insertion order, or `None` if the
    /// node does not exist.
    pub fn neighbors(&self, index: usize) -> Option<impl Iterator<Item = usize> + '_> {
        self.adjacency.get(index).map(|set| set.iter().copied())
    }

    /// Index of the canonical start node.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start
    }

    /// Index of the canonical goal node.
    #[must_use]
    pub fn goal_index(&self) -> usize {
        self.goal
    }
}

//
// Unit tests
//

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(n: usize) -> Roadmap {
        let configs = (0..n).map(|i| Configuration::new(vec![i as f64])).collect();
        let mut adjacency: Vec<LinkedHashSet<usize>> = Vec::new();
        for i in 0..n {
            let mut set = LinkedHashSet::new();
            if i + 1 < n {
                set.insert(i + 1);
            }
            adjacency.push(set);
        }
        Roadmap::new(configs, adjacency, 0, n - 1)
    }

    #[test]
    fn test_accessors() {
        let roadmap = chain(4);
        assert_eq!(roadmap.len(), 4);
        assert!(!roadmap.is_empty());
        assert!(roadmap.contains(3));
        assert!(!roadmap.contains(4));
        assert_eq!(roadmap.start_index(), 0);
        assert_eq!(roadmap.goal_index(), 3);
        assert_eq!(roadmap.config(2), &Configuration::new(vec![2.0]));
    }

    #[test]
    fn test_neighbor_iteration_preserves_insertion_order() {
        let configs = vec![
            Configuration::new(vec![0.0]),
            Configuration::new(vec![1.0]),
            Configuration::new(vec![2.0]),
        ];
        let mut set = LinkedHashSet::new();
        set.insert(2);
        set.insert(1);
        let adjacency = vec![set, LinkedHashSet::new(), LinkedHashSet::new()];
        let roadmap = Roadmap::new(configs, adjacency, 1, 2);

        let order: Vec<usize> = roadmap.neighbors(0).unwrap().collect();
        assert_eq!(order, vec![2, 1]);
        assert!(roadmap.neighbors(3).is_none());
    }
}
