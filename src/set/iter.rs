use super::RangeSet;
use crate::Range;

/// Iterator over the ranges of a [`RangeSet`], in ascending order.
pub struct Iter<'a, T> {
	inner: std::slice::Iter<'a, Range<T>>,
}

impl<'a, T> Iter<'a, T> {
	pub(crate) fn new(inner: std::slice::Iter<'a, Range<T>>) -> Self {
		Iter { inner }
	}
}

impl<'a, T> Clone for Iter<'a, T> {
	fn clone(&self) -> Self {
		Iter {
			inner: self.inner.clone(),
		}
	}
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a Range<T>;

	fn next(&mut self) -> Option<&'a Range<T>> {
		self.inner.next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
	fn next_back(&mut self) -> Option<&'a Range<T>> {
		self.inner.next_back()
	}
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> std::iter::FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a RangeSet<T> {
	type Item = &'a Range<T>;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Owning iterator over the ranges of a [`RangeSet`].
pub struct IntoIter<T> {
	inner: std::vec::IntoIter<Range<T>>,
}

impl<T> Iterator for IntoIter<T> {
	type Item = Range<T>;

	fn next(&mut self) -> Option<Range<T>> {
		self.inner.next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<T> DoubleEndedIterator for IntoIter<T> {
	fn next_back(&mut self) -> Option<Range<T>> {
		self.inner.next_back()
	}
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> std::iter::FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RangeSet<T> {
	type Item = Range<T>;
	type IntoIter = IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		IntoIter {
			inner: self.ranges.into_iter(),
		}
	}
}
