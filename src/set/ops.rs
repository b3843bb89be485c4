//! Operator shorthands for the set algebra.
//!
//! - `a | b` is [`RangeSet::union`],
//! - `a & b` is [`RangeSet::intersection`],
//! - `!a` is [`RangeSet::inverse`].
use super::RangeSet;
use crate::util::Domain;
use std::ops::{BitAnd, BitOr, Not};

impl<'a, T: Ord + Clone> BitOr<&'a RangeSet<T>> for &'a RangeSet<T> {
	type Output = RangeSet<T>;

	fn bitor(self, other: &'a RangeSet<T>) -> RangeSet<T> {
		self.union(other)
	}
}

impl<T: Ord + Clone> BitOr for RangeSet<T> {
	type Output = RangeSet<T>;

	fn bitor(self, other: RangeSet<T>) -> RangeSet<T> {
		let mut ranges = self.ranges;
		ranges.extend(other.ranges);
		RangeSet::from(ranges)
	}
}

impl<'a, T: Ord + Clone> BitAnd<&'a RangeSet<T>> for &'a RangeSet<T> {
	type Output = RangeSet<T>;

	fn bitand(self, other: &'a RangeSet<T>) -> RangeSet<T> {
		self.intersection(other)
	}
}

impl<T: Ord + Clone> BitAnd for RangeSet<T> {
	type Output = RangeSet<T>;

	fn bitand(self, other: RangeSet<T>) -> RangeSet<T> {
		self.intersection(&other)
	}
}

impl<'a, T: Domain> Not for &'a RangeSet<T> {
	type Output = RangeSet<T>;

	fn not(self) -> RangeSet<T> {
		self.inverse()
	}
}

impl<T: Domain> Not for RangeSet<T> {
	type Output = RangeSet<T>;

	fn not(self) -> RangeSet<T> {
		self.inverse()
	}
}
