use std::{
    collections::HashSet,
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::grid::{self, Direction, Grid, GridBuilder, Position};

#[derive(Debug)]
pub enum Error {
    Grid(grid::Error),
    EmptyGarden,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Grid(e) => write!(f, "Invalid garden map: {}", e),
            Error::EmptyGarden => write!(f, "Given garden map has no plots."),
        }
    }
}

impl error::Error for Error {}

impl From<grid::Error> for Error {
    fn from(value: grid::Error) -> Self {
        Error::Grid(value)
    }
}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// The path to the garden map
    #[arg(short, long)]
    pub path: PathBuf,
    /// Price each region by its number of sides instead of its perimeter
    #[arg(long)]
    pub discount: bool,
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pricing {
    Perimeter,
    BulkDiscount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    plant: char,
    area: usize,
    perimeter: usize,
    sides_n: usize,
}

impl Region {
    pub fn plant(&self) -> char {
        self.plant
    }

    pub fn area(&self) -> usize {
        self.area
    }

    pub fn perimeter(&self) -> usize {
        self.perimeter
    }

    pub fn sides_n(&self) -> usize {
        self.sides_n
    }

    pub fn price(&self, pricing: Pricing) -> usize {
        match pricing {
            Pricing::Perimeter => self.area * self.perimeter,
            Pricing::BulkDiscount => self.area * self.sides_n,
        }
    }
}

#[derive(Debug)]
pub struct Garden {
    plots: Grid<char>,
}

impl Display for Garden {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.plots)
    }
}

impl TryFrom<&str> for Garden {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut builder = GridBuilder::new();
        for line in grid::leading_block(value.lines()) {
            builder.add_row(line, |_, plant| Ok::<_, Error>(plant))?;
        }

        if builder.row_n() == 0 {
            return Err(Error::EmptyGarden);
        }

        Ok(Self {
            plots: builder.build(),
        })
    }
}

impl Garden {
    pub fn regions(&self) -> Vec<Region> {
        let mut regions = Vec::new();
        let mut visited = HashSet::new();
        for (pos, plant) in self.plots.tiles() {
            if visited.contains(&pos) {
                continue;
            }

            let region = self.flood_region(pos, *plant, &mut visited);
            debug!(
                plant = %region.plant,
                area = region.area,
                perimeter = region.perimeter,
                sides = region.sides_n,
                "Found region at {}.",
                pos
            );
            regions.push(region);
        }

        regions
    }

    pub fn total_price(&self, pricing: Pricing) -> usize {
        self.regions().iter().map(|r| r.price(pricing)).sum()
    }

    fn flood_region(
        &self,
        start_pos: Position,
        plant: char,
        visited: &mut HashSet<Position>,
    ) -> Region {
        let mut next_positions = vec![start_pos];
        visited.insert(start_pos);
        let mut area = 0;
        let mut perimeter = 0;
        let mut corner_n = 0;
        while let Some(cur_pos) = next_positions.pop() {
            area += 1;
            for dir in Direction::all_dirs().iter().copied() {
                match cur_pos
                    .neighbor(dir)
                    .filter(|neighbor| self.has_plant(neighbor, plant))
                {
                    Some(neighbor) => {
                        if visited.insert(neighbor) {
                            next_positions.push(neighbor);
                        }
                    }
                    None => perimeter += 1,
                }

                if self.is_corner(&cur_pos, dir, plant) {
                    corner_n += 1;
                }
            }
        }

        // A closed fence has as many straight sides as it has corners.
        Region {
            plant,
            area,
            perimeter,
            sides_n: corner_n,
        }
    }

    /// Whether `pos` has a fence corner between `dir` and the direction
    /// clockwise of it, either convex (both sides open) or concave (both
    /// sides in the region but the diagonal not).
    fn is_corner(&self, pos: &Position, dir: Direction, plant: char) -> bool {
        let side_dir = dir.turn_clockwise();
        let ahead = self.has_plant_toward(pos, dir, plant);
        let beside = self.has_plant_toward(pos, side_dir, plant);
        let diagonal = pos
            .neighbor(dir)
            .and_then(|p| p.neighbor(side_dir))
            .is_some_and(|p| self.has_plant(&p, plant));

        (!ahead && !beside) || (ahead && beside && !diagonal)
    }

    fn has_plant_toward(&self, pos: &Position, dir: Direction, plant: char) -> bool {
        pos.neighbor(dir)
            .is_some_and(|neighbor| self.has_plant(&neighbor, plant))
    }

    fn has_plant(&self, pos: &Position, plant: char) -> bool {
        self.plots.tile(pos).is_some_and(|c| *c == plant)
    }
}

pub fn read_garden<P: AsRef<Path>>(path: P) -> Result<Garden> {
    let text = grid::read_text(&path)?;
    Garden::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse garden map in given file({}).",
            path.as_ref().display()
        )
    })
}
