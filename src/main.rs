// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use anyhow::Context as _;
use clap::Parser as _;

mod cli;
mod coverage;
mod util;
util::mod_days![02, 05];


fn setup_tracing() -> anyhow::Result<()> {
	use tracing_subscriber::{
		EnvFilter, Layer as _, filter::LevelFilter,
		layer::SubscriberExt as _, util::SubscriberInitExt as _,
	};
	let env_filter = EnvFilter::builder()
		.with_default_directive(LevelFilter::WARN.into())
		.from_env_lossy();
	let fmt = tracing_subscriber::fmt::layer()
		.compact()
		.with_writer(std::io::stderr)
		.with_filter(env_filter);
	tracing_subscriber::registry().with(fmt).try_init()?;
	Ok(())
}

fn main() -> anyhow::Result<()> {
	let args = cli::Args::parse();
	setup_tracing()?;

	let input = std::fs::read_to_string(&args.file)
		.with_context(|| format!("reading {}", args.file.display()))?;

	let _span = tracing::info_span!("solve", day = args.day, part = args.part).entered();
	match solve(args.day, args.part, &input, &args.config) {
		Some(answer) => {
			let answer = answer.with_context(|| format!("parsing {}", args.file.display()))?;
			println!("{answer}");
		}
		None => tracing::info!("no such puzzle"),
	}
	Ok(())
}
