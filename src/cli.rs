// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::path::PathBuf;
use clap::Parser;


#[derive(Parser)]
#[command(version, about = "Advent of Code 2025 solutions")]
pub(crate) struct Args {
	/// Puzzle day
	pub(crate) day: u8,

	/// Puzzle part (1 or 2)
	pub(crate) part: u8,

	/// Input file
	pub(crate) file: PathBuf,

	#[command(flatten)]
	pub(crate) config: Config,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub(crate) struct Config {
	/// Algorithm counting the integers covered by a set of ranges
	#[arg(long, env = "ADVENT_STRATEGY", value_enum, default_value_t)]
	pub(crate) strategy: Strategy,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Strategy {
	/// Sort the ranges and merge overlapping neighbours
	Merge,
	/// Walk sorted open/close events
	#[default]
	Sweep,
}

impl Strategy {
	pub(crate) fn total_coverage(self, ranges: &[crate::coverage::Range]) -> u64 {
		use crate::coverage::*;
		match self {
			Strategy::Merge => total_coverage_merge(ranges),
			Strategy::Sweep => total_coverage_sweep(ranges),
		}
	}
}
