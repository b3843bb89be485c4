//! Error types.

use thiserror::Error;

/// A range was built with an end bound not strictly after its start bound.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid range: the end must be strictly after the start")]
pub struct InvalidRange;

/// Two ranges were combined while they do not overlap.
///
/// Returned by [`Range::union`](crate::Range::union) when the ranges neither
/// intersect nor touch, and by
/// [`Range::intersection`](crate::Range::intersection) when they do not
/// intersect.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("disjoint ranges")]
pub struct DisjointRanges;
