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

//! Plans a path for a four-joint arm through a field of rectangular obstacles
//! and prints each waypoint with its link endpoints. An external renderer can
//! consume the same sequence to animate the motion.

use std::f64::consts::PI;

use geo::polygon;

use armplanning::configuration::Configuration;
use armplanning::planning::prm::PrmPlanner;

pub fn main() {
    let obstacles = vec![
        polygon![(x: 10.0, y: 10.0), (x: 10.0, y: 20.0), (x: 20.0, y: 20.0), (x: 20.0, y: 10.0)],
        polygon![(x: -20.0, y: 0.0), (x: -10.0, y: 0.0), (x: -10.0, y: 5.0), (x: -20.0, y: 5.0)],
        polygon![(x: -18.0, y: 15.0), (x: -15.0, y: 15.0), (x: -15.0, y: 18.0), (x: -18.0, y: 18.0)],
    ];

    let start = Configuration::new(vec![3.0 * PI / 4.0, 2.0 * PI / 3.0, 3.0 * PI / 4.0, PI / 6.0]);
    let goal = Configuration::new(vec![PI / 4.0, PI / 6.0, PI / 6.0, PI / 6.0]);

    let planner = PrmPlanner::new(4, vec![8.0, 6.0, 5.0, 4.0], start, goal, obstacles)
        .expect("valid problem definition")
        .with_max_configs(1500);

    println!("Building roadmap...");
    let roadmap = planner
        .build_roadmap(10)
        .expect("valid neighbor count");
    println!("Roadmap has {} nodes", roadmap.len());

    match planner.query(&roadmap).expect("well-formed roadmap") {
        Some(path) => {
            println!("Path found with {} waypoints:", path.len());
            for (step, config) in path.iter().enumerate() {
                println!("  {step}: {config}");
                for (link, point) in planner.arm().endpoints(config).iter().enumerate() {
                    println!("     link {link} tip at ({:.2}, {:.2})", point.x, point.y);
                }
            }
        }
        None => {
            println!("No path found between the start and goal poses");
        }
    }
}
