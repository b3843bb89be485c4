use super::{Len, Saturating};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};

/// Distance between timestamps.
pub trait Measure: Ord {
	type Len: Len;

	/// Distance from `self` to `later`, where `self <= later`.
	fn distance(&self, later: &Self) -> Saturating<Self::Len>;
}

macro_rules! impl_measure {
	($ty:ty, $len:ty) => {
		impl Measure for $ty {
			type Len = $len;

			fn distance(&self, later: &$ty) -> Saturating<$len> {
				Saturating::Sub(self.abs_diff(*later))
			}
		}
	};
}

impl_measure!(u8, u8);
impl_measure!(u16, u16);
impl_measure!(u32, u32);
impl_measure!(u64, u64);
impl_measure!(u128, u128);
impl_measure!(usize, usize);
impl_measure!(i8, u8);
impl_measure!(i16, u16);
impl_measure!(i32, u32);
impl_measure!(i64, u64);
impl_measure!(i128, u128);
impl_measure!(isize, usize);

impl<Tz: TimeZone> Measure for DateTime<Tz> {
	type Len = TimeDelta;

	fn distance(&self, later: &Self) -> Saturating<TimeDelta> {
		Saturating::Sub(later.clone().signed_duration_since(self.clone()))
	}
}

impl Measure for NaiveDateTime {
	type Len = TimeDelta;

	fn distance(&self, later: &Self) -> Saturating<TimeDelta> {
		Saturating::Sub(later.signed_duration_since(*self))
	}
}

impl Measure for NaiveDate {
	type Len = TimeDelta;

	fn distance(&self, later: &Self) -> Saturating<TimeDelta> {
		Saturating::Sub(later.signed_duration_since(*self))
	}
}

#[cfg(feature = "ordered-float")]
impl Measure for ordered_float::OrderedFloat<f64> {
	type Len = ordered_float::OrderedFloat<f64>;

	fn distance(&self, later: &Self) -> Saturating<Self::Len> {
		let d = later.0 - self.0;
		if d.is_infinite() {
			Saturating::Saturated
		} else {
			Saturating::Sub(ordered_float::OrderedFloat(d))
		}
	}
}
