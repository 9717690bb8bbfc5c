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

use thiserror::Error;

/// Errors raised when constructing a planner or querying a roadmap.
///
/// An unreachable goal is not an error; queries report it as an absent path.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("an arm must have at least one joint")]
    InvalidJointCount,

    #[error("expected {expected} link lengths, got {got}")]
    MismatchedLinkCount { expected: usize, got: usize },

    #[error("link {index} has non-positive length {length}")]
    NonPositiveLinkLength { index: usize, length: f64 },

    #[error("expected {expected} joint angles, got {got}")]
    MismatchedConfiguration { expected: usize, got: usize },

    #[error("k_neighbors must be at least 1")]
    InvalidNeighborCount,

    #[error("roadmap has no node {index}")]
    MalformedRoadmap { index: usize },
}
