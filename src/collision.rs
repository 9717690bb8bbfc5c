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

//! Collision checks for single configurations and for local motions between
//! pairs of configurations.

use geo::{Coord, Intersects, Line, Polygon};

use crate::arm::Arm;
use crate::configuration::Configuration;

/// The single capability the planner requires of obstacle geometry.
pub trait Obstacle {
    /// Whether the obstacle intersects the given line segment.
    fn intersects(&self, segment: &Line<f64>) -> bool;
}

impl Obstacle for Polygon<f64> {
    fn intersects(&self, segment: &Line<f64>) -> bool {
        Intersects::intersects(self, segment)
    }
}

/// Answers collision queries for an arm among a fixed set of obstacles.
///
/// Holds references only; geometry is owned by the planner.
#[derive(Debug)]
pub struct CollisionChecker<'a, O> {
    arm: &'a Arm,
    obstacles: &'a [O],
}

impl<'a, O: Obstacle> CollisionChecker<'a, O> {
    #[must_use]
    pub fn new(arm: &'a Arm, obstacles: &'a [O]) -> Self {
        CollisionChecker { arm, obstacles }
    }

    /// Whether any link segment of the posed arm intersects any obstacle.
    ///
    /// Link segments run from the previous joint's endpoint (the origin for
    /// the first link) to the current joint's endpoint.
    #[must_use]
    pub fn in_collision(&self, config: &Configuration) -> bool {
        let mut joint = Coord { x: 0.0, y: 0.0 };
        for tip in self.arm.endpoints(config) {
            let link = Line::new(joint, tip);
            if self.obstacles.iter().any(|o| o.intersects(&link)) {
                return true;
            }
            joint = tip;
        }
        false
    }

    /// Whether moving the arm between two configurations crosses an obstacle.
    ///
    /// Only the tip of each link is swept: the check draws, per link, the
    /// straight segment between that link's endpoint under `from` and under
    /// `to`. The body of the link is not swept, so edge validity matches this
    /// approximation rather than a full swept-volume test.
    #[must_use]
    pub fn motion_collides(&self, from: &Configuration, to: &Configuration) -> bool {
        let from_points = self.arm.endpoints(from);
        let to_points = self.arm.endpoints(to);
        for (a, b) in from_points.into_iter().zip(to_points) {
            let sweep = Line::new(a, b);
            if self.obstacles.iter().any(|o| o.intersects(&sweep)) {
                return true;
            }
        }
        false
    }
}

//
// Unit tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;
    use std::f64::consts::FRAC_PI_2;

    fn square(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Polygon<f64> {
        polygon![
            (x: x_min, y: y_min),
            (x: x_min, y: y_max),
            (x: x_max, y: y_max),
            (x: x_max, y: y_min),
        ]
    }

    #[test]
    fn test_no_obstacles_is_collision_free() {
        let arm = Arm::new(2, vec![8.0, 10.0]).unwrap();
        let obstacles: Vec<Polygon<f64>> = Vec::new();
        let checker = CollisionChecker::new(&arm, &obstacles);
        assert!(!checker.in_collision(&Configuration::new(vec![1.0, -2.0])));
    }

    #[test]
    fn test_link_through_obstacle_collides() {
        // A single link along the x axis spans the square outright.
        let arm = Arm::new(1, vec![10.0]).unwrap();
        let obstacles = vec![square(2.0, -1.0, 4.0, 1.0)];
        let checker = CollisionChecker::new(&arm, &obstacles);
        assert!(checker.in_collision(&Configuration::new(vec![0.0])));
        assert!(!checker.in_collision(&Configuration::new(vec![FRAC_PI_2])));
    }

    #[test]
    fn test_motion_sweeps_link_tips() {
        // Both poses clear the square, but the tip chord between them cuts
        // straight through it.
        let arm = Arm::new(1, vec![10.0]).unwrap();
        let obstacles = vec![square(8.0, -2.0, 11.0, 2.0)];
        let checker = CollisionChecker::new(&arm, &obstacles);

        let above = Configuration::new(vec![0.3]);
        let below = Configuration::new(vec![-0.3]);
        assert!(!checker.in_collision(&above));
        assert!(!checker.in_collision(&below));
        assert!(checker.motion_collides(&above, &below));
    }

    #[test]
    fn test_motion_clear_of_obstacles() {
        let arm = Arm::new(1, vec![10.0]).unwrap();
        let obstacles = vec![square(8.0, -2.0, 11.0, 2.0)];
        let checker = CollisionChecker::new(&arm, &obstacles);

        let up = Configuration::new(vec![FRAC_PI_2]);
        let left = Configuration::new(vec![FRAC_PI_2 + 1.0]);
        assert!(!checker.motion_collides(&up, &left));
    }
}
