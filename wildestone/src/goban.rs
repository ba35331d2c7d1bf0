use std::collections::BTreeSet;
use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::group::Group;
use crate::ko::Position;
use crate::point::{COLUMN_LETTERS, MAX_SIZE, Point};
use crate::stone::{Cell, Stone};

/// Captures indexed by the color that made them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }

    fn sub(&mut self, stone: Stone, count: u32) {
        let total = match stone {
            Stone::Black => &mut self.black,
            Stone::White => &mut self.white,
        };
        *total = total
            .checked_sub(count)
            .expect("capture count went negative");
    }
}

/// A square Go board stored as a flat array, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Goban {
    board: Vec<Cell>,
    size: u8,
    captures: Captures,
}

impl Goban {
    /// Create an empty board. Panics when `size` is zero or above `MAX_SIZE`.
    pub fn new(size: u8) -> Self {
        assert!(
            (1..=MAX_SIZE).contains(&size),
            "board size must be between 1 and {MAX_SIZE}, got {size}"
        );

        Goban {
            board: vec![Cell::Empty; size as usize * size as usize],
            size,
            captures: Captures::new(),
        }
    }

    /// Create a goban from a square matrix of cells, row 0 first.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let size = rows.len();
        assert!(
            size > 0 && size <= MAX_SIZE as usize && rows.iter().all(|row| row.len() == size),
            "malformed board matrix"
        );

        Goban {
            board: rows.into_iter().flatten().collect(),
            size: size as u8,
            captures: Captures::new(),
        }
    }

    // -- Accessors --

    pub fn cells(&self) -> &[Cell] {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    /// Cell at `point`; off-board points read as empty.
    pub fn cell(&self, point: Point) -> Cell {
        if self.on_board(point) {
            self.board[self.idx(point)]
        } else {
            Cell::Empty
        }
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.cell(point).stone()
    }

    pub fn on_board(&self, point: Point) -> bool {
        point.col < self.size && point.row < self.size
    }

    pub fn is_empty(&self) -> bool {
        self.board.iter().all(|c| c.is_empty())
    }

    /// Every point on the board, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Point::new(col, row)))
    }

    pub fn empty_points(&self) -> Vec<Point> {
        self.points().filter(|&p| self.cell(p).is_empty()).collect()
    }

    /// Structural snapshot of the cells, used for repetition checks.
    pub fn position(&self) -> Position {
        Position::new(&self.board)
    }

    // -- Graph algorithms --

    /// Get the 4-connected neighbors that are on the board.
    pub fn neighbors(&self, Point { col, row }: Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if col > 0 {
            result.push(Point::new(col - 1, row));
        }
        if col + 1 < self.size {
            result.push(Point::new(col + 1, row));
        }
        if row > 0 {
            result.push(Point::new(col, row - 1));
        }
        if row + 1 < self.size {
            result.push(Point::new(col, row + 1));
        }
        result
    }

    /// The group containing `point`, or `None` when the point is empty or off the board.
    pub fn group(&self, point: Point) -> Option<Group> {
        let stone = self.stone_at(point)?;
        let chain = self.chain(point);
        assert!(!chain.is_empty(), "occupied point {point} has no group");

        let liberties = self.chain_liberties(&chain);
        Some(Group {
            stone,
            stones: chain.into_iter().collect(),
            liberties: liberties.into_iter().collect::<BTreeSet<_>>(),
        })
    }

    /// Flood-fill connected group of same-colored stones.
    pub fn chain(&self, point: Point) -> Vec<Point> {
        let mut visited = vec![false; self.board.len()];
        self.chain_from(point, &mut visited)
    }

    /// Liberties of the group containing `point`.
    pub fn liberties(&self, point: Point) -> Vec<Point> {
        let chain = self.chain(point);
        self.chain_liberties(&chain)
    }

    /// Liberties of a chain (pre-computed group of points), deduplicated.
    pub fn chain_liberties(&self, chain: &[Point]) -> Vec<Point> {
        let mut seen = vec![false; self.board.len()];
        let mut libs = Vec::new();
        for &p in chain {
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !seen[ni] && self.cell(n).is_empty() {
                    seen[ni] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    /// Chain flood-fill using a shared visited bitset. Each point is pushed
    /// at most once per color match, so the walk is bounded by the group size.
    fn chain_from(&self, point: Point, visited: &mut [bool]) -> Vec<Point> {
        let stone = match self.stone_at(point) {
            Some(s) => s,
            None => return Vec::new(),
        };

        let mut result = Vec::new();
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let vi = self.idx(p);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            result.push(p);
            for n in self.neighbors(p) {
                if self.stone_at(n) == Some(stone) && !visited[self.idx(n)] {
                    stack.push(n);
                }
            }
        }

        result
    }

    // -- Mutation --

    /// Remove every opposing group adjacent to `point` that has no liberties left.
    /// Returns the removed points and credits them to `stone`.
    pub(crate) fn resolve_captures(&mut self, point: Point, stone: Stone) -> Vec<Point> {
        let opponent = stone.opp();
        let mut visited = vec![false; self.board.len()];
        let mut dead = Vec::new();

        for n in self.neighbors(point) {
            if self.stone_at(n) != Some(opponent) || visited[self.idx(n)] {
                continue;
            }
            let chain = self.chain_from(n, &mut visited);
            if self.chain_liberties(&chain).is_empty() {
                dead.extend(chain);
            }
        }

        for &p in &dead {
            self.set_cell(p, Cell::Empty);
        }
        self.captures.add(stone, dead.len() as u32);

        dead
    }

    pub(crate) fn place(&mut self, point: Point, stone: Stone) {
        self.set_cell(point, stone.into());
    }

    /// Exact inverse of a committed placement: lift the played stone and put
    /// the captured stones back with the opponent's color.
    pub(crate) fn unplace(&mut self, point: Point, stone: Stone, captured: &[Point]) {
        assert_eq!(
            self.stone_at(point),
            Some(stone),
            "history out of sync with board at {point}"
        );
        self.set_cell(point, Cell::Empty);

        for &p in captured {
            assert!(self.cell(p).is_empty(), "captured point {p} is occupied");
            self.set_cell(p, stone.opp().into());
        }
        self.captures.sub(stone, captured.len() as u32);
    }

    // -- Internal helpers --

    #[inline]
    fn idx(&self, Point { col, row }: Point) -> usize {
        row as usize * self.size as usize + col as usize
    }

    fn set_cell(&mut self, point: Point, cell: Cell) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.board[i] = cell;
        }
    }
}

/// Renders the board with the highest row on top, `X` for Black and `O` for White.
impl fmt::Display for Goban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: Vec<String> = COLUMN_LETTERS
            .chars()
            .take(self.size as usize)
            .map(String::from)
            .collect();
        writeln!(f, "   {}", letters.join(" "))?;

        for row in (0..self.size).rev() {
            let cells: Vec<String> = (0..self.size)
                .map(|col| self.cell(Point::new(col, row)).symbol().to_string())
                .collect();
            writeln!(f, "{:>2} {}", row + 1, cells.join(" "))?;
        }

        Ok(())
    }
}
