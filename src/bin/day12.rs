use anyhow::{Context, Result};
use clap::Parser;
use day11_12_15_16::{
    garden::{self, CLIArgs, Pricing},
    logger,
};
use tracing::debug;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    logger::init_logger(args.debug);

    let garden = garden::read_garden(&args.path).with_context(|| {
        format!(
            "Failed to read garden map from given file({}).",
            args.path.display()
        )
    })?;
    debug!("Garden map:\n{}", garden);

    let pricing = if args.discount {
        Pricing::BulkDiscount
    } else {
        Pricing::Perimeter
    };
    println!("Total fencing price: {}", garden.total_price(pricing));

    Ok(())
}
