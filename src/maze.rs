use std::{
    collections::{HashMap, HashSet, VecDeque},
    error,
    fmt::{Display, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, trace};

use crate::grid::{self, Direction, Grid, GridBuilder, Position};

const STEP_SCORE: usize = 1;
const TURN_SCORE: usize = 1000;

#[derive(Debug)]
pub enum Error {
    Grid(grid::Error),
    InvalidCharForMap(char),
    MultipleStartPosition(Position, Position),
    MultipleEndPosition(Position, Position),
    NoStartPosition,
    NoEndPosition,
    NoRouteToEnd,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Grid(e) => write!(f, "Invalid maze: {}", e),
            Error::InvalidCharForMap(c) => write!(f, "Invalid character({}) for maze.", c),
            Error::MultipleStartPosition(last_pos, pos) => write!(
                f,
                "Expect only one start position, given two({}, {}).",
                last_pos, pos
            ),
            Error::MultipleEndPosition(last_pos, pos) => write!(
                f,
                "Expect only one end position, given two({}, {}).",
                last_pos, pos
            ),
            Error::NoStartPosition => write!(f, "No start position in maze."),
            Error::NoEndPosition => write!(f, "No end position in maze."),
            Error::NoRouteToEnd => write!(f, "There's no route from start to end in maze."),
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
    /// The path to the maze
    #[arg(short, long)]
    pub path: PathBuf,
    /// Log the maze and the tiles on the best routes
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reindeer {
    pos: Position,
    dir: Direction,
}

impl Reindeer {
    pub fn new(pos: Position, dir: Direction) -> Self {
        Self { pos, dir }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }
}

#[derive(Debug, Clone)]
pub struct ShortestRoutes {
    score: usize,
    tiles: HashSet<Position>,
}

impl ShortestRoutes {
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn tile_n(&self) -> usize {
        self.tiles.len()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.tiles.contains(pos)
    }
}

#[derive(Debug)]
pub struct Maze {
    map: Grid<Tile>,
    start_pos: Position,
    end_pos: Position,
}

impl Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render(f, |_| false)
    }
}

impl TryFrom<&str> for Maze {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut builder = GridBuilder::new();
        let mut start_pos = None;
        let mut end_pos = None;
        for line in grid::leading_block(value.lines()) {
            builder.add_row(line, |pos, c| match c {
                'S' => {
                    if let Some(last_pos) = start_pos.replace(pos) {
                        return Err(Error::MultipleStartPosition(last_pos, pos));
                    }
                    Ok(Tile::Floor)
                }
                'E' => {
                    if let Some(last_pos) = end_pos.replace(pos) {
                        return Err(Error::MultipleEndPosition(last_pos, pos));
                    }
                    Ok(Tile::Floor)
                }
                '#' => Ok(Tile::Wall),
                '.' => Ok(Tile::Floor),
                other => Err(Error::InvalidCharForMap(other)),
            })?;
        }

        let Some(start_pos) = start_pos else {
            return Err(Error::NoStartPosition);
        };
        let Some(end_pos) = end_pos else {
            return Err(Error::NoEndPosition);
        };

        Ok(Self {
            map: builder.build(),
            start_pos,
            end_pos,
        })
    }
}

impl Maze {
    pub fn start_pos(&self) -> Position {
        self.start_pos
    }

    pub fn end_pos(&self) -> Position {
        self.end_pos
    }

    /// Breadth-first search over (position, heading) states. A state is
    /// queued again only when its score drops; reaching it again with the
    /// same score just records one more predecessor. The tiles of all best
    /// routes are collected by walking predecessors back from the end.
    pub fn find_shortest_routes(&self) -> Option<ShortestRoutes> {
        let init_deer = self.init_deer();
        let mut min_scores = HashMap::from([(init_deer, 0)]);
        let mut src_deers = HashMap::<Reindeer, Vec<Reindeer>>::new();
        let mut search_states = VecDeque::from([(init_deer, 0)]);
        let mut expanded_n = 0usize;
        while let Some((cur_deer, cur_score)) = search_states.pop_front() {
            if min_scores
                .get(&cur_deer)
                .is_some_and(|min_score| cur_score > *min_score)
            {
                continue;
            }

            if cur_deer.pos == self.end_pos {
                continue;
            }

            trace!(deer = ?cur_deer, score = cur_score, "Expanding state.");
            expanded_n += 1;
            for (next_deer, step_score) in self.next_steps(&cur_deer) {
                let next_score = cur_score + step_score;
                match min_scores.get(&next_deer).copied() {
                    Some(min_score) if next_score > min_score => (),
                    Some(min_score) if next_score == min_score => {
                        src_deers.entry(next_deer).or_default().push(cur_deer)
                    }
                    _ => {
                        min_scores.insert(next_deer, next_score);
                        src_deers.insert(next_deer, vec![cur_deer]);
                        search_states.push_back((next_deer, next_score));
                    }
                }
            }
        }
        debug!(
            expanded = expanded_n,
            visited = min_scores.len(),
            "Finished searching maze."
        );

        let end_deers = Direction::all_dirs()
            .iter()
            .map(|dir| Reindeer::new(self.end_pos, *dir))
            .filter_map(|deer| min_scores.get(&deer).map(|score| (deer, *score)))
            .collect::<Vec<_>>();
        let min_score = end_deers.iter().map(|(_, score)| *score).min()?;

        let mut search_deers = end_deers
            .into_iter()
            .filter(|(_, score)| *score == min_score)
            .map(|(deer, _)| deer)
            .collect::<Vec<_>>();
        let mut searched_deers = search_deers.iter().copied().collect::<HashSet<_>>();
        while let Some(cur_deer) = search_deers.pop() {
            for src_deer in src_deers.get(&cur_deer).into_iter().flatten() {
                if searched_deers.insert(*src_deer) {
                    search_deers.push(*src_deer);
                }
            }
        }

        Some(ShortestRoutes {
            score: min_score,
            tiles: searched_deers.into_iter().map(|deer| deer.pos).collect(),
        })
    }

    pub fn render_routes(&self, routes: &ShortestRoutes) -> String {
        let mut text = String::new();
        // Writing into a String can't fail.
        let _ = self.render(&mut text, |pos| routes.contains(pos));

        text
    }

    fn render<W, F>(&self, out: &mut W, on_route: F) -> std::fmt::Result
    where
        W: Write,
        F: Fn(&Position) -> bool,
    {
        for (pos, tile) in self.map.tiles() {
            let tile_char = if on_route(&pos) {
                'O'
            } else if pos == self.start_pos {
                'S'
            } else if pos == self.end_pos {
                'E'
            } else if *tile == Tile::Wall {
                '#'
            } else {
                '.'
            };
            out.write_char(tile_char)?;
            if pos.c + 1 == self.map.col_n() {
                out.write_char('\n')?;
            }
        }

        Ok(())
    }

    fn next_steps(&self, deer: &Reindeer) -> impl Iterator<Item = (Reindeer, usize)> + '_ {
        let deer = *deer;
        [
            (deer.dir, STEP_SCORE),
            (deer.dir.turn_clockwise(), TURN_SCORE + STEP_SCORE),
            (deer.dir.turn_counterclockwise(), TURN_SCORE + STEP_SCORE),
        ]
        .into_iter()
        .filter_map(move |(dir, score)| {
            deer.pos
                .neighbor(dir)
                .filter(|pos| self.is_floor(pos))
                .map(|pos| (Reindeer::new(pos, dir), score))
        })
    }

    fn is_floor(&self, pos: &Position) -> bool {
        self.map.tile(pos).is_some_and(|tile| *tile == Tile::Floor)
    }

    fn init_deer(&self) -> Reindeer {
        Reindeer::new(self.start_pos, Direction::Right)
    }
}

pub fn read_maze<P: AsRef<Path>>(path: P) -> Result<Maze> {
    let text = grid::read_text(&path)?;
    Maze::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse maze in given file({}).",
            path.as_ref().display()
        )
    })
}
