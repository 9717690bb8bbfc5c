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

//! Planar serial-chain arm geometry and forward kinematics.

use std::f64::consts::TAU;

use geo::Coord;

use crate::configuration::Configuration;
use crate::error::PlanError;

/// A planar arm of rotational joints with fixed link lengths, anchored at the
/// origin. Immutable for the lifetime of a planning problem.
#[derive(Debug, Clone)]
pub struct Arm {
    lengths: Vec<f64>,
}

impl Arm {
    /// Construct an arm with the specified number of joints and link lengths.
    ///
    /// # Errors
    ///
    /// If `num_joints` is zero, if the number of lengths does not match
    /// `num_joints`, or if any length is not strictly positive.
    pub fn new(num_joints: usize, lengths: Vec<f64>) -> Result<Self, PlanError> {
        if num_joints == 0 {
            return Err(PlanError::InvalidJointCount);
        }
        if lengths.len() != num_joints {
            return Err(PlanError::MismatchedLinkCount {
                expected: num_joints,
                got: lengths.len(),
            });
        }
        for (index, &length) in lengths.iter().enumerate() {
            if length <= 0.0 {
                return Err(PlanError::NonPositiveLinkLength { index, length });
            }
        }
        Ok(Arm { lengths })
    }

    /// Number of rotational joints.
    #[must_use]
    pub fn num_joints(&self) -> usize {
        self.lengths.len()
    }

    /// Fixed link lengths, in joint order.
    #[must_use]
    pub fn link_lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Computes the far endpoint of every link for the given configuration.
    ///
    /// Iterative serial-chain kinematics: each joint angle is relative to the
    /// previous link's orientation. The running orientation accumulates each
    /// angle reduced mod 2π as it goes.
    #[must_use]
    pub fn endpoints(&self, config: &Configuration) -> Vec<Coord<f64>> {
        debug_assert_eq!(config.len(), self.lengths.len());

        let mut points = Vec::with_capacity(self.lengths.len());
        let mut base = Coord { x: 0.0, y: 0.0 };
        let mut orientation = 0.0;
        for (i, &length) in self.lengths.iter().enumerate() {
            let angle = config.angle(i);
            let tip = Coord {
                x: base.x + length * (orientation + angle).cos(),
                y: base.y + length * (orientation + angle).sin(),
            };
            points.push(tip);
            orientation += angle.rem_euclid(TAU);
            base = tip;
        }
        points
    }
}

//
// Unit tests
//
