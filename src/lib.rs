//! A *range set* is a set of instants stored as a sorted list of disjoint
//! time ranges. It is the natural representation of schedules, availability
//! windows or any union of time periods, and makes "free/busy" computations a
//! matter of set algebra.
//!
//! This library defines two types: `Range<T>`, a half-open range
//! `[start, end)`, and `RangeSet<T>`, a normalized set of ranges.
//!
//! ## Usage
//!
//! A `RangeSet<T>` is built from any list of ranges. Overlapping and adjacent
//! ranges are merged so that the set is always stored in its minimal form.
//!
//! ```
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use time_range_set::{Range, RangeSet};
//!
//! let t = Utc.with_ymd_and_hms(2024, 5, 6, 0, 0, 0).unwrap();
//! let h = |n| t + TimeDelta::hours(n);
//!
//! let busy = RangeSet::new([
//!   Range::new(h(9), h(10)).unwrap(),
//!   Range::new(h(13), h(15)).unwrap(),
//!   Range::new(h(14), h(16)).unwrap(),
//! ]);
//! assert_eq!(busy.range_count(), 2);
//! assert_eq!(busy.size(), time_range_set::util::Saturating::Sub(TimeDelta::hours(4)));
//! ```
//!
//! Sets can be combined with `union`, `intersection` and `inverse` (or the
//! `|`, `&` and `!` operators):
//!
//! ```
//! # use chrono::{TimeDelta, TimeZone, Utc};
//! # use time_range_set::{Range, RangeSet};
//! # let t = Utc.with_ymd_and_hms(2024, 5, 6, 0, 0, 0).unwrap();
//! # let h = |n| t + TimeDelta::hours(n);
//! # let busy = RangeSet::new([
//! #   Range::new(h(9), h(10)).unwrap(),
//! #   Range::new(h(13), h(16)).unwrap(),
//! # ]);
//! let office_hours = RangeSet::from(Range::new(h(8), h(17)).unwrap());
//!
//! // free time during office hours.
//! let free = &office_hours & &!&busy;
//! assert_eq!(free.range_count(), 3);
//! assert_eq!(free[1], Range::new(h(10), h(13)).unwrap());
//! ```
//!
//! ## Complements
//!
//! The complement of a set depends on what lies before its first range and
//! after its last one. The [`Edges`] policy makes this explicit:
//!
//! ```
//! use time_range_set::{Edges, Range, RangeSet};
//!
//! let set = RangeSet::new([Range::new(10i64, 20).unwrap(), Range::new(30, 40).unwrap()]);
//!
//! // only the gaps between ranges.
//! let gaps = set.inverse_with(Edges::Exclude);
//! assert_eq!(gaps.range_count(), 1);
//!
//! // gaps extended to the whole `i64` domain (the default).
//! let inverse = set.inverse();
//! assert_eq!(inverse.range_count(), 3);
//! assert_eq!(inverse[0], Range::new(i64::MIN, 10).unwrap());
//! assert_eq!(inverse.inverse(), set);
//! ```
//!
//! ## Timestamps
//!
//! Any totally ordered type can be used as timestamp. Measuring sets requires
//! the [`util::Measure`] trait and extended complements require the
//! [`util::Domain`] trait. Both are implemented for `chrono`'s
//! `DateTime<Utc>`, `NaiveDateTime` and `NaiveDate`, for primitive integers
//! and, with the `ordered-float` feature, for `OrderedFloat<f64>`.
use chrono::{DateTime, Utc};

pub mod error;
mod range;
mod set;
pub mod util;

#[cfg(feature = "serde")]
mod serde;

pub use error::{DisjointRanges, InvalidRange};
pub use range::*;
pub use set::*;

pub type UtcRange = Range<DateTime<Utc>>;
pub type UtcRangeSet = RangeSet<DateTime<Utc>>;
