use anyhow::{Context, Result};
use clap::Parser;
use day11_12_15_16::{
    logger,
    warehouse::{self, CLIArgs},
};
use tracing::debug;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    logger::init_logger(args.debug);

    let (mut warehouse, moves) = warehouse::read_game(&args.path).with_context(|| {
        format!(
            "Failed to read warehouse and moves from given file({}).",
            args.path.display()
        )
    })?;
    debug!("Starting state of warehouse:\n{}", warehouse);

    let moved_n = warehouse.run(&moves);
    debug!("Robot moved {} of {} time(s).", moved_n, moves.len());
    println!("Sum of all boxes' GPS coordinates: {}", warehouse.gps_sum());

    Ok(())
}
