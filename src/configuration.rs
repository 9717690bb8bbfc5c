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

//! Joint-angle configurations and the distance metric used to compare them.

use std::fmt;

use ordered_float::OrderedFloat;

/// Define a distance trait for configuration-space values.
pub trait Distance {
    fn distance(&self, other: &Self) -> f64;
}

/// A full description of the arm's pose as an ordered vector of joint angles.
///
/// Angles are in radians and are never normalized by the planner. Equality and
/// hashing are by exact value so that sampled configurations can back graph
/// nodes and start/goal poses can be matched against the sampled set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Configuration(Vec<OrderedFloat<f64>>);

impl Configuration {
    /// Construct a configuration from raw joint angles in radians.
    #[must_use]
    pub fn new(angles: Vec<f64>) -> Self {
        Configuration(angles.into_iter().map(OrderedFloat).collect())
    }

    /// Number of joints described by this configuration.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The angle of joint `i` in radians.
    ///
    /// # Panics
    ///
    /// If `i` is out of range.
    #[must_use]
    pub fn angle(&self, i: usize) -> f64 {
        self.0[i].into_inner()
    }

    /// Iterate over the joint angles in order.
    pub fn angles(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|a| a.into_inner())
    }
}

impl From<&[f64]> for Configuration {
    fn from(angles: &[f64]) -> Self {
        Configuration::new(angles.to_vec())
    }
}

// Norm distance in raw joint-angle space. Deliberately not a torus metric:
// nearest neighbors are selected on the unwrapped angle vector.
impl Distance for Configuration {
    fn distance(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| {
                let d = a.into_inner() - b.into_inner();
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }
}

// Handy for debugging
impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, a) in self.angles().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{a:.3}")?;
        }
        write!(f, ")")
    }
}

//
// Unit tests
//
