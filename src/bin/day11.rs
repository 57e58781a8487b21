use anyhow::{Context, Result};
use clap::Parser;
use day11_12_15_16::{
    logger,
    stone::{self, CLIArgs, StoneLine},
};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    logger::init_logger(args.debug);

    let mut stones = if let Some(path) = args.path.as_ref() {
        stone::read_stones(path).with_context(|| {
            format!("Failed to read stones from given file({}).", path.display())
        })?
    } else {
        StoneLine::try_from(args.input.as_str()).with_context(|| {
            format!("Failed to parse stones from given text({}).", args.input)
        })?
    };
    println!(
        "Blinking {} time(s) for the stone array {}",
        args.blinks, stones
    );

    stones
        .blink_n(args.blinks)
        .with_context(|| format!("Failed to blink {} time(s).", args.blinks))?;
    println!("Total number of resulting stones: {}", stones.total()?);

    Ok(())
}
