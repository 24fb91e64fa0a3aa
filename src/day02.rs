// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{cli::Config, coverage::Range};


fn digit_count(n: u64) -> u32 {
	n.checked_ilog10().map_or(1, |l| l + 1)
}

/// Whether the `len` digits of `n` are its leading `block` digits repeated
/// at least twice.
fn is_repeated_block(n: u64, len: u32, block: u32) -> bool {
	if block == 0 || block >= len || len % block != 0 { return false }
	let unit = 10u64.pow(block);
	let multiplier = (0..len / block).fold(0u64, |m, _| m * unit + 1);
	let head = n / 10u64.pow(len - block);
	head.checked_mul(multiplier) == Some(n)
}

fn is_doubled(n: u64) -> bool {
	let len = digit_count(n);
	len % 2 == 0 && is_repeated_block(n, len, len / 2)
}

fn is_periodic(n: u64) -> bool {
	let len = digit_count(n);
	(1..=len / 2).any(|block| is_repeated_block(n, len, block))
}

fn sum_matching(ranges: &[Range<u64>], pred: impl Fn(u64) -> bool) -> u64 {
	ranges.iter()
		.flat_map(|r| r.start..=r.end)
		.filter(|&n| pred(n))
		.sum()
}


fn input_ranges_from_str(s: &str) -> Result<Vec<Range<u64>>, parsing::RangesError> {
	let ranges = parsing::ranges_from_str(s).collect::<Result<Vec<_>, _>>()?;
	tracing::debug!(ranges = ranges.len(), "parsed product ID ranges");
	Ok(ranges)
}


fn part1_impl(input_ranges: &[Range<u64>]) -> u64 {
	sum_matching(input_ranges, is_doubled)
}

pub(crate) fn part1(input: &str, _config: &Config) -> Result<u64, parsing::RangesError> {
	Ok(part1_impl(&input_ranges_from_str(input)?))
}


fn part2_impl(input_ranges: &[Range<u64>]) -> u64 {
	sum_matching(input_ranges, is_periodic)
}

pub(crate) fn part2(input: &str, _config: &Config) -> Result<u64, parsing::RangesError> {
	Ok(part2_impl(&input_ranges_from_str(input)?))
}


mod parsing {
	use crate::coverage::{Range, parsing::RangeError};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RangesError {
		#[error("empty input")]
		Empty,
		#[error("invalid range #{index}")]
		Range { index: usize, source: RangeError },
	}

	pub(super) fn ranges_from_str(s: &str)
	-> impl Iterator<Item = Result<Range<u64>, RangesError>> + '_ {
		use {std::iter::once, either::Either::*};
		let s = s.trim();
		if s.is_empty() { return Left(once(Err(RangesError::Empty))) }
		Right(s.split(',')
			.enumerate()
			.map(|(i, range)| range.trim().parse()
				.map_err(|e| RangesError::Range { index: i + 1, source: e })))
	}
}
