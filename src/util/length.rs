use super::Saturating;
use chrono::TimeDelta;

/// Type measuring the size of a range.
pub trait Len: Sized + Clone {
	fn zero() -> Self;

	fn saturating_add(self, other: Self) -> Saturating<Self>;
}

macro_rules! impl_len {
	($ty:ident) => {
		impl Len for $ty {
			fn zero() -> Self {
				0
			}

			fn saturating_add(self, other: Self) -> Saturating<Self> {
				match self.checked_add(other) {
					Some(result) => Saturating::Sub(result),
					None => Saturating::Saturated,
				}
			}
		}
	};
}

impl_len!(u8);
impl_len!(u16);
impl_len!(u32);
impl_len!(u64);
impl_len!(u128);
impl_len!(usize);

impl Len for TimeDelta {
	fn zero() -> Self {
		TimeDelta::zero()
	}

	fn saturating_add(self, other: Self) -> Saturating<Self> {
		match self.checked_add(&other) {
			Some(sum) => Saturating::Sub(sum),
			None => Saturating::Saturated,
		}
	}
}

#[cfg(feature = "ordered-float")]
impl Len for ordered_float::OrderedFloat<f64> {
	fn zero() -> Self {
		ordered_float::OrderedFloat(0.0)
	}

	fn saturating_add(self, other: Self) -> Saturating<Self> {
		let sum = self.0 + other.0;
		if sum.is_infinite() {
			Saturating::Saturated
		} else {
			Saturating::Sub(ordered_float::OrderedFloat(sum))
		}
	}
}
