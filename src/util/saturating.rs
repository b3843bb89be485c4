use super::Len;
use std::fmt;

/// Length that may have exceeded what its type can represent.
///
/// Measuring a range can overflow the length type (e.g. the distance between
/// two large floats). Instead of wrapping or panicking, the length becomes
/// [`Saturating::Saturated`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Saturating<T> {
	Saturated,
	Sub(T),
}

impl<T> Saturating<T> {
	pub fn is_saturated(&self) -> bool {
		matches!(self, Self::Saturated)
	}

	/// Returns the length, if it did not saturate.
	pub fn finite(self) -> Option<T> {
		match self {
			Self::Saturated => None,
			Self::Sub(t) => Some(t),
		}
	}

	pub fn as_ref(&self) -> Saturating<&T> {
		match self {
			Self::Saturated => Saturating::Saturated,
			Self::Sub(t) => Saturating::Sub(t),
		}
	}
}

impl<T: Len> Default for Saturating<T> {
	fn default() -> Self {
		Self::Sub(T::zero())
	}
}

impl<T: Len> std::ops::Add for Saturating<T> {
	type Output = Self;

	fn add(self, other: Self) -> Self {
		match (self, other) {
			(Saturating::Saturated, _) => Self::Saturated,
			(_, Saturating::Saturated) => Self::Saturated,
			(Saturating::Sub(a), Saturating::Sub(b)) => a.saturating_add(b),
		}
	}
}

impl<T: Len> std::ops::Add<T> for Saturating<T> {
	type Output = Self;

	fn add(self, other: T) -> Self {
		match self {
			Saturating::Saturated => Self::Saturated,
			Saturating::Sub(t) => t.saturating_add(other),
		}
	}
}

impl<T: Len> std::iter::Sum for Saturating<T> {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::default(), |acc, len| acc + len)
	}
}

impl<T: fmt::Display> fmt::Display for Saturating<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Saturating::Saturated => write!(f, "saturated"),
			Saturating::Sub(t) => write!(f, "{}", t),
		}
	}
}
