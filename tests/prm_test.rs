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

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

use geo::{polygon, Polygon};

use armplanning::collision::CollisionChecker;
use armplanning::configuration::Configuration;
use armplanning::planning::prm::PrmPlanner;

/// Obstacle course used throughout: three axis-aligned squares around the
/// arm's base.
fn obstacle_course() -> Vec<Polygon<f64>> {
    vec![
        polygon![(x: 10.0, y: 10.0), (x: 10.0, y: 20.0), (x: 20.0, y: 20.0), (x: 20.0, y: 10.0)],
        polygon![(x: -20.0, y: 0.0), (x: -10.0, y: 0.0), (x: -10.0, y: 5.0), (x: -20.0, y: 5.0)],
        polygon![(x: -18.0, y: 15.0), (x: -15.0, y: 15.0), (x: -15.0, y: 18.0), (x: -18.0, y: 18.0)],
    ]
}

#[test]
fn test_end_to_end_two_joint_arm() {
    let start = Configuration::new(vec![FRAC_PI_2, FRAC_PI_2]);
    let goal = Configuration::new(vec![FRAC_PI_4, FRAC_PI_3]);
    let obstacles: Vec<Polygon<f64>> = Vec::new();

    let planner = PrmPlanner::new(2, vec![8.0, 10.0], start.clone(), goal.clone(), obstacles)
        .unwrap()
        .with_max_configs(600);

    let roadmap = planner.build_roadmap(15).unwrap();
    let path = planner
        .query(&roadmap)
        .unwrap()
        .expect("an unobstructed arm must find a path");

    assert!(path.len() >= 2, "Path should visit at least both endpoints");
    assert_eq!(path[0], start, "Path should start at the start pose");
    assert_eq!(*path.last().unwrap(), goal, "Path should end at the goal pose");
}

#[test]
fn test_sampled_nodes_avoid_obstacles() {
    let start = Configuration::new(vec![FRAC_PI_2, FRAC_PI_2]);
    let goal = Configuration::new(vec![FRAC_PI_4, FRAC_PI_3]);
    let obstacles = obstacle_course();

    let planner = PrmPlanner::new(
        2,
        vec![8.0, 10.0],
        start,
        goal,
        obstacles.clone(),
    )
    .unwrap()
    .with_max_configs(300);

    let roadmap = planner.build_roadmap(10).unwrap();
    let checker = CollisionChecker::new(planner.arm(), &obstacles);

    // Every sampled node is collision-free; only the two trailing endpoint
    // nodes are exempt from the check.
    for index in 0..roadmap.start_index() {
        assert!(
            !checker.in_collision(roadmap.config(index)),
            "sampled node {index} is in collision"
        );
    }
}

#[test]
fn test_blocked_goal_yields_no_path() {
    // A wall separates the goal pose's tip position from every collision-free
    // sample: all motion chords toward the goal must cross it.
    let wall = polygon![
        (x: 1.0, y: -12.0),
        (x: 3.0, y: -12.0),
        (x: 3.0, y: 12.0),
        (x: 1.0, y: 12.0),
    ];
    let start = Configuration::new(vec![2.0]);
    let goal = Configuration::new(vec![0.0]);

    let planner = PrmPlanner::new(1, vec![10.0], start, goal, vec![wall])
        .unwrap()
        .with_max_configs(300);

    let roadmap = planner.build_roadmap(10).unwrap();
    let path = planner.query(&roadmap).unwrap();
    assert_eq!(path, None, "No path should exist through the wall");
}

#[test]
fn test_identical_problems_produce_identical_paths() {
    let make = || {
        PrmPlanner::new(
            2,
            vec![8.0, 10.0],
            Configuration::new(vec![FRAC_PI_2, FRAC_PI_2]),
            Configuration::new(vec![FRAC_PI_4, FRAC_PI_3]),
            obstacle_course(),
        )
        .unwrap()
        .with_max_configs(300)
    };

    let first_planner = make();
    let first_roadmap = first_planner.build_roadmap(10).unwrap();
    let second_planner = make();
    let second_roadmap = second_planner.build_roadmap(10).unwrap();

    assert_eq!(first_roadmap.configs(), second_roadmap.configs());
    assert_eq!(
        first_planner.query(&first_roadmap).unwrap(),
        second_planner.query(&second_roadmap).unwrap()
    );
}
