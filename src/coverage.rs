// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Counting the integers covered by a set of closed ranges.
//!
//! Two independent algorithms compute the same total: [`total_coverage_merge`]
//! sorts and merges the ranges, [`total_coverage_sweep`] walks the sorted
//! open/close [`Event`]s keeping a running count of open ranges.


/// Closed interval `[start, end]` with `start <= end`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub(crate) struct Range<T = i64> {
	pub(crate) start: T,
	pub(crate) end: T,
}

impl Range<i64> {
	/// Number of integers in the range.
	pub(crate) fn size(&self) -> u64 {
		self.end.abs_diff(self.start) + 1
	}
}

impl<T: Copy + PartialOrd> Range<T> {
	pub(crate) fn contains(&self, n: T) -> bool {
		self.start <= n && n <= self.end
	}
}


/// Sorts by start (then end) and folds every range that starts at or before
/// the end of its predecessor into it. The result is sorted and disjoint.
pub(crate) fn merged(ranges: &[Range]) -> Vec<Range> {
	use itertools::Itertools as _;
	ranges.iter()
		.copied()
		.sorted()
		.coalesce(|running, r|
			if r.start <= running.end {
				Ok(Range { start: running.start.min(r.start), end: running.end.max(r.end) })
			} else {
				Err((running, r))
			})
		.collect()
}

pub(crate) fn total_coverage_merge(ranges: &[Range]) -> u64 {
	merged(ranges).iter().map(|r| r.size()).sum()
}

/// Whether `n` lies in one of the `merged` ranges, which must be sorted and
/// disjoint (as returned by [`merged`]).
pub(crate) fn covers(merged: &[Range], n: i64) -> bool {
	let i = merged.partition_point(|r| r.end < n);
	merged.get(i).map_or(false, |r| r.contains(n))
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub(crate) enum EventKind {
	// Variant order is the tie-break at equal points.
	Open,
	Close,
}

/// Point at which `count` ranges open or close.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Event {
	pub(crate) point: i64,
	pub(crate) kind: EventKind,
	pub(crate) count: usize,
}

/// All events, ascending by point, opens before closes at the same point.
pub(crate) fn events(ranges: &[Range]) -> Vec<Event> {
	use {std::collections::BTreeMap, itertools::Itertools as _};

	let mut opens = BTreeMap::<i64, usize>::new();
	let mut closes = BTreeMap::<i64, usize>::new();
	for r in ranges {
		*opens.entry(r.start).or_default() += 1;
		*closes.entry(r.end).or_default() += 1;
	}

	fn tagged(kind: EventKind) -> impl Fn((i64, usize)) -> Event {
		move |(point, count)| Event { point, kind, count }
	}
	opens.into_iter().map(tagged(EventKind::Open))
		.merge_by(closes.into_iter().map(tagged(EventKind::Close)),
			|a, b| (a.point, a.kind) <= (b.point, b.kind))
		.collect()
}

fn open_after(open: usize, event: &Event) -> usize {
	match event.kind {
		EventKind::Open => open + event.count,
		// Every range closing here was opened at or before this point.
		EventKind::Close => open - event.count,
	}
}

pub(crate) fn total_coverage_sweep(ranges: &[Range]) -> u64 {
	let mut events = events(ranges).into_iter();
	let Some(first) = events.next() else { return 0 };

	let mut left = first.point;
	let mut open = first.count;
	let mut left_counted = false;
	let mut total = 0;
	for right in events {
		if open > 0 {
			total += right.point.abs_diff(left) + u64::from(!left_counted);
			left_counted = true;
		} else {
			left_counted = false;
		}
		open = open_after(open, &right);
		left = right.point;
	}
	total
}

/// Largest number of ranges sharing a single point.
pub(crate) fn max_overlap(ranges: &[Range]) -> usize {
	events(ranges).iter()
		.scan(0, |open, event| {
			*open = open_after(*open, event);
			Some(*open)
		})
		.max()
		.unwrap_or(0)
}


pub(crate) mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Range;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RangeError {
		#[error("expected `start-end`")]
		NoHyphen,
		#[error("invalid start")]
		Start(#[source] ParseIntError),
		#[error("invalid end")]
		End(#[source] ParseIntError),
		#[error("range ends ({end}) before it starts ({start})")]
		Reversed { start: String, end: String },
	}

	impl<T> FromStr for Range<T>
	where T: FromStr<Err = ParseIntError> + PartialOrd + ToString {
		type Err = RangeError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (start, end) = s.split_once('-').ok_or(RangeError::NoHyphen)?;
			let start: T = start.parse().map_err(RangeError::Start)?;
			let end: T = end.parse().map_err(RangeError::End)?;
			if end < start { return Err(RangeError::Reversed {
				start: start.to_string(), end: end.to_string() }) }
			Ok(Range { start, end })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use {proptest::prelude::*, test_case::test_case};

	fn r(start: i64, end: i64) -> Range {
		Range { start, end }
	}

	#[test_case(&[] => 0; "empty")]
	#[test_case(&[(4, 4)] => 1; "single point")]
	#[test_case(&[(1, 5), (3, 7), (10, 12)] => 10; "overlap then gap")]
	#[test_case(&[(1, 3), (4, 6)] => 6; "adjacent")]
	#[test_case(&[(1, 3), (3, 5)] => 5; "shared endpoint")]
	#[test_case(&[(2, 9), (3, 4), (5, 5)] => 8; "nested")]
	#[test_case(&[(5, 5), (1, 5), (5, 5)] => 5; "repeated endpoint")]
	#[test_case(&[(-3, -1), (0, 2)] => 6; "negative")]
	#[test_case(&[(3, 5), (10, 14), (16, 20), (12, 18)] => 14; "ingredients")]
	fn total_coverage(pairs: &[(i64, i64)]) -> u64 {
		let ranges = pairs.iter().map(|&(s, e)| r(s, e)).collect::<Vec<_>>();
		let merge = total_coverage_merge(&ranges);
		assert_eq!(total_coverage_sweep(&ranges), merge);
		merge
	}

	#[test]
	fn merging() {
		assert_eq!(merged(&[r(10, 12), r(3, 7), r(1, 5)]), [r(1, 7), r(10, 12)]);
		assert_eq!(merged(&[r(1, 3), r(4, 6)]), [r(1, 3), r(4, 6)]);
		assert!(merged(&[]).is_empty());
	}

	#[test]
	fn event_order() {
		use EventKind::*;
		assert_eq!(events(&[r(3, 5), r(1, 3), r(3, 3)]), [
			Event { point: 1, kind: Open, count: 1 },
			Event { point: 3, kind: Open, count: 2 },
			Event { point: 3, kind: Close, count: 2 },
			Event { point: 5, kind: Close, count: 1 },
		]);
	}

	#[test]
	fn covering() {
		let m = merged(&[r(3, 5), r(10, 14), r(16, 20), r(12, 18)]);
		let covered = [1, 5, 8, 11, 17, 32].into_iter()
			.filter(|&n| covers(&m, n))
			.collect::<Vec<_>>();
		assert_eq!(covered, [5, 11, 17]);
		assert!(!covers(&[], 0));
	}

	#[test_case(&[] => 0; "empty")]
	#[test_case(&[(1, 3), (4, 6)] => 1; "adjacent")]
	#[test_case(&[(1, 3), (3, 6)] => 2; "shared endpoint")]
	#[test_case(&[(1, 10), (2, 3), (3, 4), (8, 9)] => 3; "nested")]
	fn overlap(pairs: &[(i64, i64)]) -> usize {
		max_overlap(&pairs.iter().map(|&(s, e)| r(s, e)).collect::<Vec<_>>())
	}

	#[test]
	fn range_parsing() {
		use parsing::RangeError;
		assert_eq!("3-5".parse::<Range>().unwrap(), r(3, 5));
		assert_eq!("7-7".parse::<Range<u64>>().unwrap(), Range { start: 7u64, end: 7 });
		assert!(matches!("35".parse::<Range>(), Err(RangeError::NoHyphen)));
		assert!(matches!("x-5".parse::<Range>(), Err(RangeError::Start(_))));
		assert!(matches!("3-".parse::<Range>(), Err(RangeError::End(_))));
		assert!(matches!("5-3".parse::<Range>(), Err(RangeError::Reversed { .. })));
	}

	fn arb_range() -> impl Strategy<Value = Range> {
		(-1_000i64..1_000, 0i64..200).prop_map(|(start, len)| r(start, start + len))
	}

	proptest! {
		#[test]
		fn merge_matches_sweep(ranges in prop::collection::vec(arb_range(), 0..40)) {
			prop_assert_eq!(total_coverage_merge(&ranges), total_coverage_sweep(&ranges));
		}

		#[test]
		fn single_range(range in arb_range()) {
			let expected = (range.end - range.start + 1) as u64;
			prop_assert_eq!(total_coverage_merge(&[range]), expected);
			prop_assert_eq!(total_coverage_sweep(&[range]), expected);
		}

		#[test]
		fn disjoint_ranges(gaps in prop::collection::vec((2i64..50, 0i64..50), 0..20)) {
			let mut at = 0;
			let ranges = gaps.iter().map(|&(gap, len)| {
				let range = r(at + gap, at + gap + len);
				at = range.end;
				range
			}).collect::<Vec<_>>();
			let expected = ranges.iter().map(|r| r.size()).sum::<u64>();
			prop_assert_eq!(total_coverage_merge(&ranges), expected);
			prop_assert_eq!(total_coverage_sweep(&ranges), expected);
		}

		#[test]
		fn merge_idempotent(ranges in prop::collection::vec(arb_range(), 0..40)) {
			let once = merged(&ranges);
			prop_assert_eq!(merged(&once), once.clone());
			prop_assert_eq!(total_coverage_merge(&once), total_coverage_merge(&ranges));
			prop_assert_eq!(total_coverage_sweep(&once), total_coverage_sweep(&ranges));
		}

		#[test]
		fn covers_matches_brute_force(
			ranges in prop::collection::vec(arb_range(), 0..10),
			n in -1_100i64..1_300,
		) {
			prop_assert_eq!(covers(&merged(&ranges), n), ranges.iter().any(|r| r.contains(n)));
		}
	}
}
