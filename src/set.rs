use std::{fmt, ops::Index};
use crate::{
	util::{Domain, Measure, Saturating},
	Range,
};

mod iter;
mod ops;

pub use iter::{IntoIter, Iter};

/// How complements treat the space before the first range and after the last
/// one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Edges {
	/// Gaps are extended to the domain bounds [`Domain::min_bound`] and
	/// [`Domain::max_bound`].
	///
	/// The complement of the empty set is the whole domain.
	#[default]
	Extend,

	/// Only the gaps between two consecutive ranges are produced.
	///
	/// The complement of the empty set is empty.
	Exclude,
}

/// Normalized set of time ranges.
///
/// Ranges are sorted, never intersect and never touch: overlapping or adjacent
/// ranges are merged when the set is built. A set is an immutable value, every
/// operation returns a new set.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RangeSet<T> {
	ranges: Vec<Range<T>>,
}

impl<T> RangeSet<T> {
	/// Creates a new set covering the given ranges.
	///
	/// The input can be in any order and contain overlapping, adjacent or
	/// duplicate ranges.
	pub fn new<I: IntoIterator<Item = Range<T>>>(ranges: I) -> RangeSet<T> where T: Ord + Clone {
		RangeSet {
			ranges: normalize(ranges.into_iter().collect()),
		}
	}

	/// Creates a new empty set.
	pub const fn empty() -> RangeSet<T> {
		RangeSet { ranges: Vec::new() }
	}

	/// Number of (disjoint) ranges in the set.
	pub fn range_count(&self) -> usize {
		self.ranges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ranges.is_empty()
	}

	/// Total duration covered by the set.
	pub fn size(&self) -> Saturating<T::Len> where T: Measure {
		self.ranges.iter().map(Range::size).sum()
	}

	pub fn get(&self, index: usize) -> Option<&Range<T>> {
		self.ranges.get(index)
	}

	pub fn first(&self) -> Option<&Range<T>> {
		self.ranges.first()
	}

	pub fn last(&self) -> Option<&Range<T>> {
		self.ranges.last()
	}

	pub fn as_slice(&self) -> &[Range<T>] {
		&self.ranges
	}

	/// Iterates over the ranges, in ascending order.
	pub fn iter(&self) -> Iter<T> {
		Iter::new(self.ranges.iter())
	}

	pub fn contains(&self, t: &T) -> bool where T: Ord {
		self.range_containing(t).is_some()
	}

	/// Finds the range containing the given instant.
	pub fn range_containing(&self, t: &T) -> Option<&Range<T>> where T: Ord {
		binary_search(&self.ranges, t)
			.map(|i| &self.ranges[i])
			.filter(|range| range.contains(t))
	}

	/// Instants covered by either set.
	pub fn union(&self, other: &Self) -> RangeSet<T> where T: Ord + Clone {
		let mut ranges = Vec::with_capacity(self.ranges.len() + other.ranges.len());
		ranges.extend(self.ranges.iter().cloned());
		ranges.extend(other.ranges.iter().cloned());

		RangeSet {
			ranges: normalize(ranges),
		}
	}

	/// Instants covered by both sets.
	pub fn intersection(&self, other: &Self) -> RangeSet<T> where T: Ord + Clone {
		let (a, b) = (&self.ranges, &other.ranges);
		let mut ranges = Vec::new();

		// Both sides are sorted and disjoint, so the pairwise intersections
		// come out sorted, disjoint and non-adjacent.
		let (mut i, mut j) = (0, 0);
		while i < a.len() && j < b.len() {
			if let Ok(range) = a[i].intersection(&b[j]) {
				ranges.push(range)
			}

			// the range ending first cannot intersect anything further.
			if a[i].end() > b[j].end() {
				j += 1
			} else {
				i += 1
			}
		}

		log::trace!("intersection of {} and {} ranges: {} ranges", a.len(), b.len(), ranges.len());
		RangeSet { ranges }
	}

	/// Gaps between consecutive ranges of the set.
	///
	/// Same as [`inverse_with`](Self::inverse_with) with [`Edges::Exclude`],
	/// but without requiring domain bounds.
	pub fn gaps(&self) -> RangeSet<T> where T: Ord + Clone {
		RangeSet {
			ranges: self.inner_gaps().collect(),
		}
	}

	/// Complement of the set, extended to the whole domain.
	///
	/// Same as [`inverse_with`](Self::inverse_with) with [`Edges::Extend`].
	pub fn inverse(&self) -> RangeSet<T> where T: Domain {
		self.inverse_with(Edges::Extend)
	}

	/// Complement of the set, with the given edge policy.
	pub fn inverse_with(&self, edges: Edges) -> RangeSet<T> where T: Domain {
		let ranges: Vec<_> = match edges {
			Edges::Exclude => self.inner_gaps().collect(),
			Edges::Extend => match (self.ranges.first(), self.ranges.last()) {
				(Some(first), Some(last)) => {
					// edge gaps are skipped (invalid) when the set touches the domain bounds.
					let before = Range::new(T::min_bound(), first.start().clone()).ok();
					let after = Range::new(last.end().clone(), T::max_bound()).ok();
					before.into_iter().chain(self.inner_gaps()).chain(after).collect()
				}
				_ => Range::new(T::min_bound(), T::max_bound()).ok().into_iter().collect(),
			},
		};

		log::trace!("inverse ({:?}) of {} ranges: {} ranges", edges, self.ranges.len(), ranges.len());
		RangeSet { ranges }
	}

	fn inner_gaps(&self) -> impl Iterator<Item = Range<T>> + '_ where T: Ord + Clone {
		self.ranges
			.windows(2)
			.filter_map(|w| Range::new(w[0].end().clone(), w[1].start().clone()).ok())
	}
}

/// Sorts and merges the given ranges.
fn normalize<T: Ord + Clone>(mut ranges: Vec<Range<T>>) -> Vec<Range<T>> {
	ranges.sort_unstable();

	let input_len = ranges.len();
	let mut result = Vec::with_capacity(input_len);
	let mut items = ranges.into_iter();
	if let Some(mut current) = items.next() {
		for range in items {
			// `range` starts after `current`. If they are disjoint, so is
			// every range left since `current.end` only grows.
			match current.union(&range) {
				Ok(merged) => current = merged,
				Err(_) => result.push(std::mem::replace(&mut current, range)),
			}
		}

		result.push(current)
	}

	log::trace!("normalized {} ranges into {}", input_len, result.len());
	result
}

/// Search for the index of the last range starting before or at the given
/// instant.
fn binary_search<T: Ord>(ranges: &[Range<T>], t: &T) -> Option<usize> {
	if ranges.is_empty() || *t < *ranges[0].start() {
		None
	} else {
		let mut i = 0;
		let mut j = ranges.len() - 1;

		if *ranges[j].start() <= *t {
			return Some(j);
		}

		// invariants:
		// ranges[i].start <= t
		// ranges[j].start > t
		// j > i

		while j - i > 1 {
			let k = (i + j) / 2;

			if *t < *ranges[k].start() {
				j = k;
			} else {
				i = k;
			}
		}

		Some(i)
	}
}

impl<T> Default for RangeSet<T> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<T> Index<usize> for RangeSet<T> {
	type Output = Range<T>;

	fn index(&self, index: usize) -> &Range<T> {
		&self.ranges[index]
	}
}

impl<T> From<Range<T>> for RangeSet<T> {
	fn from(range: Range<T>) -> Self {
		RangeSet {
			ranges: vec![range],
		}
	}
}

impl<T: Ord + Clone> From<Vec<Range<T>>> for RangeSet<T> {
	fn from(ranges: Vec<Range<T>>) -> Self {
		RangeSet {
			ranges: normalize(ranges),
		}
	}
}

impl<T: Ord + Clone> FromIterator<Range<T>> for RangeSet<T> {
	fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
		Self::new(iter)
	}
}

impl<T: fmt::Display> fmt::Display for RangeSet<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "[")?;
		for (i, range) in self.ranges.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{}", range)?;
		}
		write!(f, "]")
	}
}
