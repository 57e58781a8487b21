use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use anyhow::{Context, Result};

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidCharForDirection(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidCharForDirection(c) => {
                write!(f, "Invalid character({}) for direction.", c)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    /// Neighbor one step away in `dir`, `None` when it would leave the first
    /// row or column. The far edges are checked by the grid itself.
    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::Right => Some(Self::new(self.r, self.c + 1)),
            Direction::Down => Some(Self::new(self.r + 1, self.c)),
            Direction::Left if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            '^' => Ok(Direction::Up),
            '>' => Ok(Direction::Right),
            'v' => Ok(Direction::Down),
            '<' => Ok(Direction::Left),
            other => Err(Error::InvalidCharForDirection(other)),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dir_char = match self {
            Direction::Up => '^',
            Direction::Right => '>',
            Direction::Down => 'v',
            Direction::Left => '<',
        };

        write!(f, "{}", dir_char)
    }
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];

        &ALL_DIRECTIONS
    }

    pub fn turn_clockwise(&self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub fn turn_counterclockwise(&self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Right => Direction::Up,
            Direction::Down => Direction::Right,
            Direction::Left => Direction::Down,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Rectangular grid stored row by row.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    tiles: Vec<T>,
    row_n: usize,
    col_n: usize,
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.tiles.chunks(self.col_n.max(1)) {
            for tile in row {
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl<T> Grid<T> {
    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn tile(&self, pos: &Position) -> Option<&T> {
        self.pos_to_ind(pos).and_then(|ind| self.tiles.get(ind))
    }

    pub fn tile_mut(&mut self, pos: &Position) -> Option<&mut T> {
        self.pos_to_ind(pos).and_then(|ind| self.tiles.get_mut(ind))
    }

    pub fn tiles(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(ind, tile)| (self.ind_to_pos(ind), tile))
    }

    /// Replaces every tile by `N` tiles laid out left to right.
    pub fn widen_with<U, const N: usize, F>(&self, f: F) -> Grid<U>
    where
        F: Fn(&T) -> [U; N],
    {
        Grid {
            tiles: self.tiles.iter().flat_map(f).collect(),
            row_n: self.row_n,
            col_n: self.col_n * N,
        }
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.r < self.row_n && pos.c < self.col_n {
            Some(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }

    fn ind_to_pos(&self, ind: usize) -> Position {
        Position::new(ind / self.col_n, ind % self.col_n)
    }
}

#[derive(Debug)]
pub struct GridBuilder<T> {
    tiles: Vec<T>,
    row_n: usize,
    col_n: Option<usize>,
}

impl<T> Default for GridBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GridBuilder<T> {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    fn push_row<I: IntoIterator<Item = T>>(&mut self, row: I) -> Result<(), Error> {
        let row = row.into_iter().collect::<Vec<_>>();
        let expect_col_n = *self.col_n.get_or_insert(row.len());
        if expect_col_n != row.len() {
            return Err(Error::InconsistentRow(expect_col_n, row.len()));
        }

        self.tiles.extend(row);
        self.row_n += 1;

        Ok(())
    }

    /// Parses one text row, handing every character and its position to `parse`.
    pub fn add_row<E, F>(&mut self, text: &str, mut parse: F) -> Result<(), E>
    where
        E: From<Error>,
        F: FnMut(Position, char) -> Result<T, E>,
    {
        let r = self.row_n;
        let row = text
            .chars()
            .enumerate()
            .map(|(c, tile_char)| parse(Position::new(r, c), tile_char))
            .collect::<Result<Vec<_>, E>>()?;
        self.push_row(row)?;

        Ok(())
    }

    pub fn build(self) -> Grid<T> {
        Grid {
            tiles: self.tiles,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}

/// Lines up to, not including, the first blank one.
pub fn leading_block<'a, I>(lines: I) -> impl Iterator<Item = &'a str>
where
    I: Iterator<Item = &'a str>,
{
    lines.take_while(|line| !line.trim().is_empty())
}

pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let mut text = String::new();
    BufReader::new(file)
        .read_to_string(&mut text)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;

    Ok(text)
}
