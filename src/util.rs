// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Declares one `dayNN` module per argument and a `solve` function
/// dispatching `(day, part)` to its `part1`/`part2`.
macro_rules! mod_days { ( $( $day:literal ),* $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )*

	/// Runs `part` of `day` on `input`, or returns `None` if there is no such puzzle.
	pub(crate) fn solve(day: u8, part: u8, input: &str, config: &crate::cli::Config)
	-> Option<anyhow::Result<u64>> {
		match (day, part) {
			$(
				($day, 1) => Some([<day $day>]::part1(input, config).map_err(Into::into)),
				($day, 2) => Some([<day $day>]::part2(input, config).map_err(Into::into)),
			)*
			_ => None,
		}
	}
} } }

pub(crate) use mod_days;
