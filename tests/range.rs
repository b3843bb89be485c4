use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use time_range_set::{util::Saturating, DisjointRanges, InvalidRange, Range};

fn now() -> NaiveDateTime {
	NaiveDate::from_ymd_opt(2021, 3, 14)
		.unwrap()
		.and_hms_opt(12, 0, 0)
		.unwrap()
}

fn span(a: i64, b: i64) -> Range<NaiveDateTime> {
	Range::new(now() + TimeDelta::hours(a), now() + TimeDelta::hours(b)).unwrap()
}

#[test]
fn new() {
	let r = span(0, 2);
	assert_eq!(*r.start(), now());
	assert_eq!(*r.end(), now() + TimeDelta::hours(2));
	assert_eq!(r.into_bounds(), (now(), now() + TimeDelta::hours(2)));
}

#[test]
fn new_invalid() {
	assert_eq!(Range::new(now(), now()), Err(InvalidRange));
	assert_eq!(Range::new(now(), now() - TimeDelta::hours(1)), Err(InvalidRange));
}

#[test]
fn size() {
	assert_eq!(span(2, 5).size(), Saturating::Sub(TimeDelta::hours(3)));
}

macro_rules! test_intersects {
	($name:ident: ($a:literal, $b:literal) $op:tt ($c:literal, $d:literal)) => {
		#[test]
		fn $name() {
			let x = span($a, $b);
			let y = span($c, $d);
			test_intersects!(@assert $op, x.intersects(&y));
			test_intersects!(@assert $op, y.intersects(&x));
		}
	};
	(@assert intersects, $e:expr) => {
		assert!($e)
	};
	(@assert disjoint, $e:expr) => {
		assert!(!$e)
	};
}

test_intersects!(intersects_end: (0, 2) intersects (1, 3));
test_intersects!(intersects_start: (0, 2) intersects (-1, 1));
test_intersects!(intersects_covering: (0, 2) intersects (-1, 3));
test_intersects!(intersects_nested: (0, 3) intersects (1, 2));
test_intersects!(intersects_after: (0, 3) disjoint (5, 7));
test_intersects!(intersects_before: (0, 3) disjoint (-5, -1));
test_intersects!(intersects_equal: (0, 3) intersects (0, 3));
test_intersects!(intersects_touching: (0, 3) disjoint (3, 5));

#[test]
fn adjacent() {
	assert!(span(0, 3).adjacent(&span(3, 5)));
	assert!(span(0, 3).adjacent(&span(-3, 0)));
	assert!(!span(0, 3).adjacent(&span(0, 3)));
	assert!(!span(0, 3).adjacent(&span(4, 7)));
	assert!(!span(0, 3).adjacent(&span(2, 5)));
	assert!(!span(0, 3).adjacent(&span(-5, -1)));
}

#[test]
fn union() {
	assert_eq!(span(0, 3).union(&span(1, 2)), Ok(span(0, 3)));
	assert_eq!(span(0, 3).union(&span(1, 4)), Ok(span(0, 4)));
	assert_eq!(span(0, 3).union(&span(-1, 2)), Ok(span(-1, 3)));
	assert_eq!(span(0, 3).union(&span(-1, 5)), Ok(span(-1, 5)));
	assert_eq!(span(0, 3).union(&span(3, 5)), Ok(span(0, 5)));
	assert_eq!(span(3, 5).union(&span(0, 3)), Ok(span(0, 5)));
}

#[test]
fn union_disjoint() {
	assert_eq!(span(0, 3).union(&span(5, 7)), Err(DisjointRanges));
	assert_eq!(span(0, 3).union(&span(-5, -1)), Err(DisjointRanges));
}

#[test]
fn intersection() {
	assert_eq!(span(0, 3).intersection(&span(-1, 2)), Ok(span(0, 2)));
	assert_eq!(span(0, 3).intersection(&span(1, 5)), Ok(span(1, 3)));
	assert_eq!(span(1, 5).intersection(&span(0, 3)), Ok(span(1, 3)));
}

#[test]
fn intersection_disjoint() {
	assert_eq!(span(0, 3).intersection(&span(4, 7)), Err(DisjointRanges));
	assert_eq!(span(0, 3).intersection(&span(-4, -2)), Err(DisjointRanges));
	assert_eq!(span(0, 3).intersection(&span(3, 4)), Err(DisjointRanges));
}

#[test]
fn ordering() {
	assert!(span(0, 3) < span(1, 2));
	assert!(span(0, 2) < span(0, 3));
	assert!(span(1, 2) > span(0, 3));
	assert!(span(0, 3) <= span(0, 3));
	assert!(span(0, 3) >= span(0, 3));
	assert_ne!(span(0, 3), span(0, 4));
}

#[test]
fn display() {
	assert_eq!(span(0, 1).to_string(), "2021-03-14 12:00:00 - 2021-03-14 13:00:00");
}

#[test]
fn std_range_conversion() {
	let r: Range<NaiveDateTime> = (now()..now() + TimeDelta::hours(1)).try_into().unwrap();
	assert_eq!(r, span(0, 1));

	let std_range: std::ops::Range<NaiveDateTime> = r.into();
	assert_eq!(std_range, now()..now() + TimeDelta::hours(1));
}
