use std::{
    collections::HashSet,
    error,
    fmt::Display,
    iter,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::grid::{self, Direction, Grid, GridBuilder, Position};

#[derive(Debug)]
pub enum Error {
    Grid(grid::Error),
    InvalidCharForMap(char),
    MultipleRobots(Position, Position),
    NoRobotInMap,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Grid(e) => write!(f, "Invalid warehouse: {}", e),
            Error::InvalidCharForMap(c) => write!(f, "Invalid character({}) for map.", c),
            Error::MultipleRobots(last_pos, this_pos) => write!(
                f,
                "Given two robots in map({}, {}), expect only one.",
                last_pos, this_pos
            ),
            Error::NoRobotInMap => write!(f, "No robot found in given map, expect one."),
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
    /// The path to the warehouse map and robot moves
    #[arg(short, long)]
    pub path: PathBuf,
    /// Log the warehouse after every move
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
    Box,
    BoxLeft,
    BoxRight,
    Robot,
}

impl Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tile_char = match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Box => 'O',
            Tile::BoxLeft => '[',
            Tile::BoxRight => ']',
            Tile::Robot => '@',
        };

        write!(f, "{}", tile_char)
    }
}

#[derive(Debug, Clone)]
pub struct Warehouse {
    map: Grid<Tile>,
    robot_pos: Position,
}

impl Display for Warehouse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.map)
    }
}

impl Warehouse {
    pub fn robot_pos(&self) -> Position {
        self.robot_pos
    }

    pub fn tile(&self, pos: &Position) -> Option<Tile> {
        self.map.tile(pos).copied()
    }

    pub fn widen(&self) -> Warehouse {
        let map = self.map.widen_with(|tile| match tile {
            Tile::Wall => [Tile::Wall, Tile::Wall],
            Tile::Floor => [Tile::Floor, Tile::Floor],
            Tile::Box => [Tile::BoxLeft, Tile::BoxRight],
            Tile::Robot => [Tile::Robot, Tile::Floor],
            Tile::BoxLeft => [Tile::BoxLeft, Tile::BoxRight],
            Tile::BoxRight => [Tile::BoxLeft, Tile::BoxRight],
        });

        Warehouse {
            map,
            robot_pos: Position::new(self.robot_pos.r, self.robot_pos.c * 2),
        }
    }

    /// Moves the robot one step, pushing every box in its way. Nothing moves
    /// if any pushed tile would run into a wall.
    pub fn try_move(&mut self, dir: Direction) -> bool {
        let mut shifts = Vec::new();
        let mut pushed_positions = vec![self.robot_pos];
        let mut searched_positions = HashSet::from([self.robot_pos]);
        let mut ind = 0;
        while let Some(cur_pos) = pushed_positions.get(ind).copied() {
            ind += 1;
            let Some(next_pos) = cur_pos.neighbor(dir) else {
                return false;
            };
            shifts.push((cur_pos, next_pos));

            let other_half = match self.map.tile(&next_pos) {
                None | Some(Tile::Wall) | Some(Tile::Robot) => return false,
                Some(Tile::Floor) => continue,
                Some(Tile::BoxLeft) if dir.is_vertical() => next_pos.neighbor(Direction::Right),
                Some(Tile::BoxRight) if dir.is_vertical() => next_pos.neighbor(Direction::Left),
                Some(Tile::Box) | Some(Tile::BoxLeft) | Some(Tile::BoxRight) => None,
            };
            for pos in iter::once(next_pos).chain(other_half) {
                if searched_positions.insert(pos) {
                    pushed_positions.push(pos);
                }
            }
        }

        // Farthest tiles first, so every target is already vacated.
        for (from_pos, to_pos) in shifts.into_iter().rev() {
            let tile = self.map.tile(&from_pos).copied().unwrap_or(Tile::Floor);
            if let Some(to_tile) = self.map.tile_mut(&to_pos) {
                *to_tile = tile;
            }
            if let Some(from_tile) = self.map.tile_mut(&from_pos) {
                *from_tile = Tile::Floor;
            }
            if tile == Tile::Robot {
                self.robot_pos = to_pos;
            }
        }

        true
    }

    pub fn run(&mut self, moves: &[Direction]) -> usize {
        let mut moved_n = 0;
        for dir in moves.iter().copied() {
            if self.try_move(dir) {
                moved_n += 1;
            }
            debug!("Move {}:\n{}", dir, self);
        }

        moved_n
    }

    pub fn gps_sum(&self) -> usize {
        self.map
            .tiles()
            .filter(|(_, tile)| matches!(tile, Tile::Box | Tile::BoxLeft))
            .map(|(pos, _)| pos.r * 100 + pos.c)
            .sum()
    }
}

pub fn parse_game(text: &str) -> Result<(Warehouse, Vec<Direction>), Error> {
    let mut lines = text.lines();
    let mut builder = GridBuilder::new();
    let mut robot_pos = None;
    for line in grid::leading_block(lines.by_ref()) {
        builder.add_row(line, |pos, c| match c {
            '#' => Ok(Tile::Wall),
            '.' => Ok(Tile::Floor),
            'O' => Ok(Tile::Box),
            '@' => {
                if let Some(last_pos) = robot_pos {
                    return Err(Error::MultipleRobots(last_pos, pos));
                }
                robot_pos = Some(pos);
                Ok(Tile::Robot)
            }
            other => Err(Error::InvalidCharForMap(other)),
        })?;
    }
    let robot_pos = robot_pos.ok_or(Error::NoRobotInMap)?;

    let moves = lines
        .flat_map(|line| line.chars())
        .filter(|c| !c.is_whitespace())
        .map(Direction::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((
        Warehouse {
            map: builder.build(),
            robot_pos,
        },
        moves,
    ))
}

pub fn read_game<P: AsRef<Path>>(path: P) -> Result<(Warehouse, Vec<Direction>)> {
    let text = grid::read_text(&path)?;
    parse_game(&text).with_context(|| {
        format!(
            "Failed to parse warehouse and moves in given file({}).",
            path.as_ref().display()
        )
    })
}
