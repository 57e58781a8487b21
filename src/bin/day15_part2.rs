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

    let (warehouse, moves) = warehouse::read_game(&args.path).with_context(|| {
        format!(
            "Failed to read warehouse and moves from given file({}).",
            args.path.display()
        )
    })?;
    let mut wide_warehouse = warehouse.widen();
    debug!("Initial state of widened warehouse:\n{}", wide_warehouse);

    let moved_n = wide_warehouse.run(&moves);
    debug!("Robot moved {} of {} time(s).", moved_n, moves.len());
    println!(
        "Sum of all boxes' GPS coordinates: {}",
        wide_warehouse.gps_sum()
    );

    Ok(())
}
