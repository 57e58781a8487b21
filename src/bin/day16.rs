use anyhow::{Context, Result};
use clap::Parser;
use day11_12_15_16::{
    logger,
    maze::{self, CLIArgs, Error},
};
use tracing::debug;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    logger::init_logger(args.debug);

    let maze = maze::read_maze(&args.path).with_context(|| {
        format!(
            "Failed to read maze from given file({}).",
            args.path.display()
        )
    })?;
    debug!("Maze:\n{}", maze);

    let routes = maze.find_shortest_routes().ok_or(Error::NoRouteToEnd)?;
    debug!("Tiles on shortest routes:\n{}", maze.render_routes(&routes));
    println!("Lowest possible score found to be {}", routes.score());
    println!("Tiles on shortest routes found to be {}", routes.tile_n());

    Ok(())
}
