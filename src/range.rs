use std::{
	cmp::{max, min},
	fmt,
};
use crate::{
	error::{DisjointRanges, InvalidRange},
	util::{Measure, Saturating},
};

/// Half-open range `[start, end)`.
///
/// A range is never empty: its end is always strictly after its start.
/// Ranges are ordered by start, then by end.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Range<T> {
	start: T,
	end: T,
}

impl<T> Range<T> {
	/// Creates the range `[start, end)`.
	///
	/// Fails if `end <= start`.
	pub fn new(start: T, end: T) -> Result<Range<T>, InvalidRange> where T: Ord {
		if end <= start {
			Err(InvalidRange)
		} else {
			Ok(Range { start, end })
		}
	}

	/// First instant of the range (included).
	pub fn start(&self) -> &T {
		&self.start
	}

	/// End of the range (excluded).
	pub fn end(&self) -> &T {
		&self.end
	}

	pub fn into_bounds(self) -> (T, T) {
		(self.start, self.end)
	}

	pub fn contains(&self, t: &T) -> bool where T: Ord {
		self.start <= *t && *t < self.end
	}

	/// Checks if the two ranges share at least one instant.
	///
	/// Ranges that only touch (`self.end == other.start`) do not intersect.
	pub fn intersects(&self, other: &Self) -> bool where T: Ord {
		other.start < self.end && other.end > self.start
	}

	/// Checks if the two ranges touch without intersecting.
	pub fn adjacent(&self, other: &Self) -> bool where T: Ord {
		!self.intersects(other) && (other.start == self.end || other.end == self.start)
	}

	/// Smallest range covering both ranges.
	///
	/// Only defined if the ranges intersect or are adjacent.
	pub fn union(&self, other: &Self) -> Result<Range<T>, DisjointRanges> where T: Ord + Clone {
		if self.intersects(other) || self.adjacent(other) {
			Ok(Range {
				start: min(&self.start, &other.start).clone(),
				end: max(&self.end, &other.end).clone(),
			})
		} else {
			Err(DisjointRanges)
		}
	}

	/// Instants covered by both ranges.
	///
	/// Only defined if the ranges intersect.
	pub fn intersection(&self, other: &Self) -> Result<Range<T>, DisjointRanges> where T: Ord + Clone {
		if self.intersects(other) {
			Ok(Range {
				start: max(&self.start, &other.start).clone(),
				end: min(&self.end, &other.end).clone(),
			})
		} else {
			Err(DisjointRanges)
		}
	}

	/// Duration of the range.
	pub fn size(&self) -> Saturating<T::Len> where T: Measure {
		self.start.distance(&self.end)
	}
}

impl<T: Ord> TryFrom<std::ops::Range<T>> for Range<T> {
	type Error = InvalidRange;

	fn try_from(range: std::ops::Range<T>) -> Result<Self, InvalidRange> {
		Range::new(range.start, range.end)
	}
}

impl<T> From<Range<T>> for std::ops::Range<T> {
	fn from(range: Range<T>) -> std::ops::Range<T> {
		range.start..range.end
	}
}

impl<T: fmt::Display> fmt::Display for Range<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} - {}", self.start, self.end)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	macro_rules! range {
		($a:literal .. $b:literal) => {
			Range::new($a, $b).unwrap()
		};
	}

	#[test]
	fn invalid() {
		assert_eq!(Range::new(0, 0), Err(InvalidRange));
		assert_eq!(Range::new(1, 0), Err(InvalidRange));
		assert_eq!(Range::try_from(4..2), Err(InvalidRange));
	}

	#[test]
	fn intersects() {
		assert!(range!(0..10).intersects(&range!(5..100)));
		assert!(range!(5..100).intersects(&range!(0..10)));
		assert!(range!(0..10).intersects(&range!(2..3)));
		assert!(range!(2..3).intersects(&range!(0..10)));
		assert!(range!(0..10).intersects(&range!(0..10)));
	}

	// Touching ranges are adjacent, not intersecting.
	#[test]
	fn touching() {
		assert!(!range!(0..10).intersects(&range!(10..20)));
		assert!(range!(0..10).adjacent(&range!(10..20)));
		assert!(range!(10..20).adjacent(&range!(0..10)));
	}

	#[test]
	fn not_adjacent() {
		assert!(!range!(0..10).adjacent(&range!(11..20)));
		assert!(!range!(0..10).adjacent(&range!(5..20)));
		assert!(!range!(0..10).adjacent(&range!(0..10)));
	}

	#[test]
	fn union() {
		assert_eq!(range!(0..10).union(&range!(5..20)), Ok(range!(0..20)));
		assert_eq!(range!(5..20).union(&range!(0..10)), Ok(range!(0..20)));
		assert_eq!(range!(0..10).union(&range!(10..20)), Ok(range!(0..20)));
		assert_eq!(range!(0..10).union(&range!(2..3)), Ok(range!(0..10)));
		assert_eq!(range!(0..10).union(&range!(11..20)), Err(DisjointRanges));
	}

	#[test]
	fn intersection() {
		assert_eq!(range!(0..10).intersection(&range!(5..20)), Ok(range!(5..10)));
		assert_eq!(range!(5..20).intersection(&range!(0..10)), Ok(range!(5..10)));
		assert_eq!(range!(0..10).intersection(&range!(2..3)), Ok(range!(2..3)));
		assert_eq!(range!(0..10).intersection(&range!(10..20)), Err(DisjointRanges));
	}

	#[test]
	fn ordering() {
		assert!(range!(0..10) < range!(1..2));
		assert!(range!(0..10) < range!(0..11));
		assert!(range!(3..4) > range!(0..11));
		assert_eq!(range!(0..10), range!(0..10));
	}

	#[test]
	fn contains() {
		assert!(range!(0..10).contains(&0));
		assert!(range!(0..10).contains(&9));
		assert!(!range!(0..10).contains(&10));
		assert!(!range!(0..10).contains(&-1));
	}

	#[test]
	fn size() {
		assert_eq!(range!(3..10).size(), Saturating::Sub(7u32));
		assert_eq!(Range::new(i64::MIN, i64::MAX).unwrap().size(), Saturating::Sub(u64::MAX));
	}

	#[test]
	fn display() {
		assert_eq!(range!(3..10).to_string(), "3 - 10");
	}
}
