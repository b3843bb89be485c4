use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use range_traits::Bounded;

/// Timestamps with a representable minimum and maximum.
///
/// Complements extended to the edges of the domain (see
/// [`Edges::Extend`](crate::Edges::Extend)) start at `min_bound()` and end at
/// `max_bound()`.
pub trait Domain: Ord + Clone {
	fn min_bound() -> Self;

	fn max_bound() -> Self;
}

macro_rules! impl_bounded_domain {
	($($ty:ident),*) => {
		$(
			impl Domain for $ty {
				fn min_bound() -> Self {
					<$ty as Bounded>::min()
				}

				fn max_bound() -> Self {
					<$ty as Bounded>::max()
				}
			}
		)*
	};
}

impl_bounded_domain!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Domain for DateTime<Utc> {
	fn min_bound() -> Self {
		DateTime::<Utc>::MIN_UTC
	}

	fn max_bound() -> Self {
		DateTime::<Utc>::MAX_UTC
	}
}

impl Domain for NaiveDateTime {
	fn min_bound() -> Self {
		NaiveDateTime::MIN
	}

	fn max_bound() -> Self {
		NaiveDateTime::MAX
	}
}

impl Domain for NaiveDate {
	fn min_bound() -> Self {
		NaiveDate::MIN
	}

	fn max_bound() -> Self {
		NaiveDate::MAX
	}
}

/// The domain spans `-inf` to `+inf`.
///
/// `NaN` sorts above `+inf` in `OrderedFloat`, so it lies outside the domain
/// and a range ending at `NaN` has no trailing gap.
#[cfg(feature = "ordered-float")]
impl Domain for ordered_float::OrderedFloat<f64> {
	fn min_bound() -> Self {
		ordered_float::OrderedFloat(<f64 as Bounded>::min())
	}

	fn max_bound() -> Self {
		ordered_float::OrderedFloat(<f64 as Bounded>::max())
	}
}
