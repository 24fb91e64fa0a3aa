// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{cli::Config, coverage::{self, Range}};


#[cfg_attr(test, derive(Debug))]
struct Inventory {
	fresh: Vec<Range>,
	available: Vec<i64>,
}

fn input_inventory_from_str(s: &str) -> Result<Inventory, parsing::InventoryError> {
	use itertools::Itertools as _;
	let lines = parsing::inventory_from_str(s).collect::<Result<Vec<_>, _>>()?;
	let (fresh, available) = lines.into_iter().partition_map(|line| line);
	let inventory = Inventory { fresh, available };
	tracing::debug!(
		fresh = inventory.fresh.len(),
		available = inventory.available.len(),
		max_overlap = coverage::max_overlap(&inventory.fresh),
		"parsed inventory");
	Ok(inventory)
}


fn part1_impl(inventory: &Inventory) -> usize {
	let fresh = coverage::merged(&inventory.fresh);
	inventory.available.iter()
		.filter(|&&id| coverage::covers(&fresh, id))
		.count()
}

pub(crate) fn part1(input: &str, _config: &Config) -> Result<u64, parsing::InventoryError> {
	Ok(part1_impl(&input_inventory_from_str(input)?) as u64)
}


fn part2_impl(inventory: &Inventory, config: &Config) -> u64 {
	tracing::debug!(strategy = ?config.strategy, "counting fresh IDs");
	config.strategy.total_coverage(&inventory.fresh)
}

pub(crate) fn part2(input: &str, config: &Config) -> Result<u64, parsing::InventoryError> {
	Ok(part2_impl(&input_inventory_from_str(input)?, config))
}


mod parsing {
	use {std::num::ParseIntError, either::Either};
	use crate::coverage::{Range, parsing::RangeError};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum InventoryError {
		#[error("invalid fresh ID range on line {line}")]
		Fresh { line: usize, source: RangeError },
		#[error("invalid available ID on line {line}")]
		Available { line: usize, source: ParseIntError },
	}

	/// Ranges up to the first blank line, IDs after it.
	pub(super) fn inventory_from_str(s: &str)
	-> impl Iterator<Item = Result<Either<Range, i64>, InventoryError>> + '_ {
		let mut in_ranges = true;
		s.lines()
			.enumerate()
			.filter_map(move |(l, line)| {
				let line = line.trim();
				if line.is_empty() { in_ranges = false; return None }
				Some(if in_ranges {
					line.parse().map(Either::Left)
						.map_err(|e| InventoryError::Fresh { line: l + 1, source: e })
				} else {
					line.parse().map(Either::Right)
						.map_err(|e| InventoryError::Available { line: l + 1, source: e })
				})
			})
	}
}
