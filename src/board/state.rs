//! Immutable board snapshots.

use std::fmt;

use super::error::{BoardError, MoveError};
use super::types::{Consequence, Coordinate, Dimensions, Piece, PieceType, Player};

/// Row-major grid of optional pieces. Row 0 is the far edge from White.
pub type Grid = Vec<Vec<Option<Piece>>>;

/// A single position: piece placement plus the in-check flag set by the
/// move generator for the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: Grid,
    dimensions: Dimensions,
    in_check: bool,
}

impl Board {
    /// Build a board from a rectangular grid.
    ///
    /// Every row must have the length of the first one. Empty grids and
    /// single rows are accepted as degenerate rectangles.
    pub fn new(grid: Grid) -> Result<Self, BoardError> {
        let width = grid.first().map_or(0, Vec::len);
        if let Some((row, cells)) = grid.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(BoardError::RaggedGrid {
                row,
                expected: width,
                found: cells.len(),
            });
        }
        let dimensions = Dimensions::new(width as i64, grid.len() as i64);
        Ok(Board {
            grid,
            dimensions,
            in_check: false,
        })
    }

    /// An empty board of the given size.
    #[must_use]
    pub fn empty(dimensions: Dimensions) -> Self {
        let width = dimensions.width.max(0) as usize;
        let height = dimensions.height.max(0) as usize;
        Board {
            grid: vec![vec![None; width]; height],
            dimensions: Dimensions::new(width as i64, height as i64),
            in_check: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.dimensions.contains(coordinate)
    }

    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The piece on `coordinate`, or `None` when empty or off the board.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, coordinate: Coordinate) -> Option<Piece> {
        if !self.contains(coordinate) {
            return None;
        }
        self.grid[coordinate.row() as usize][coordinate.column() as usize]
    }

    #[inline]
    #[must_use]
    pub fn has_piece(&self, coordinate: Coordinate) -> bool {
        self.piece_at(coordinate).is_some()
    }

    /// Like [`Board::piece_at`], but an empty square is an error.
    pub fn get_piece(&self, coordinate: Coordinate) -> Result<Piece, BoardError> {
        self.piece_at(coordinate)
            .ok_or(BoardError::NotFound { coordinate })
    }

    /// Returns true if `coordinate` holds a piece of `player`.
    #[inline]
    #[must_use]
    pub fn is_owned_by(&self, coordinate: Coordinate, player: Player) -> bool {
        self.piece_at(coordinate).is_some_and(|p| p.player == player)
    }

    /// All squares holding a `piece_type` of `player`, in row-major order.
    #[must_use]
    pub fn positions_of(&self, piece_type: PieceType, player: Player) -> Vec<Coordinate> {
        self.occupied()
            .filter(|(_, piece)| piece.is(piece_type, player))
            .map(|(c, _)| c)
            .collect()
    }

    /// All occupied squares with their pieces, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Coordinate(row as i64, col as i64), piece))
            })
        })
    }

    /// Returns true if `row` holds at least two `piece_type`s of `player`.
    #[must_use]
    pub fn rank_contains_multiple_of(
        &self,
        row: i64,
        piece_type: PieceType,
        player: Player,
    ) -> bool {
        let Some(cells) = usize::try_from(row).ok().and_then(|r| self.grid.get(r)) else {
            return false;
        };
        cells
            .iter()
            .flatten()
            .filter(|p| p.is(piece_type, player))
            .nth(1)
            .is_some()
    }

    /// Returns true if `column` holds at least two `piece_type`s of `player`.
    #[must_use]
    pub fn file_contains_multiple_of(
        &self,
        column: i64,
        piece_type: PieceType,
        player: Player,
    ) -> bool {
        let Ok(col) = usize::try_from(column) else {
            return false;
        };
        self.grid
            .iter()
            .filter_map(|cells| cells.get(col).copied().flatten())
            .filter(|p| p.is(piece_type, player))
            .nth(1)
            .is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn set_in_check(&mut self, in_check: bool) {
        self.in_check = in_check;
    }

    /// Replay `consequences` in order on a copy of this board.
    ///
    /// The resulting board starts with the in-check flag cleared.
    pub fn after(&self, consequences: &[Consequence]) -> Result<Board, MoveError> {
        let mut next = Board {
            grid: self.grid.clone(),
            dimensions: self.dimensions,
            in_check: false,
        };
        for consequence in consequences {
            next.apply(consequence)?;
        }
        Ok(next)
    }

    fn apply(&mut self, consequence: &Consequence) -> Result<(), MoveError> {
        match *consequence {
            Consequence::Move { from, to, .. } => {
                self.check_bounds(from)?;
                self.check_bounds(to)?;
                let piece = self
                    .take(from)
                    .ok_or(MoveError::MoveFromEmpty { from })?;
                if self.has_piece(to) {
                    self.put(from, Some(piece));
                    return Err(MoveError::MoveOntoOccupied { to });
                }
                self.put(to, Some(piece));
            }
            Consequence::Remove { coordinate } => {
                self.check_bounds(coordinate)?;
                self.take(coordinate)
                    .ok_or(MoveError::RemoveMissing { coordinate })?;
            }
            Consequence::Change {
                coordinate,
                piece_type,
            } => {
                self.check_bounds(coordinate)?;
                let piece = self
                    .piece_at(coordinate)
                    .ok_or(MoveError::ChangeMissing { coordinate })?;
                self.put(coordinate, Some(Piece::new(piece_type, piece.player)));
            }
        }
        Ok(())
    }

    /// Place or clear a square while a position is being set up.
    /// Returns false when `coordinate` is off the board.
    pub(crate) fn set_piece(&mut self, coordinate: Coordinate, piece: Option<Piece>) -> bool {
        if !self.contains(coordinate) {
            return false;
        }
        self.put(coordinate, piece);
        true
    }

    fn check_bounds(&self, coordinate: Coordinate) -> Result<(), MoveError> {
        if self.contains(coordinate) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds { coordinate })
        }
    }

    fn take(&mut self, coordinate: Coordinate) -> Option<Piece> {
        self.grid[coordinate.row() as usize][coordinate.column() as usize].take()
    }

    fn put(&mut self, coordinate: Coordinate, piece: Option<Piece>) {
        self.grid[coordinate.row() as usize][coordinate.column() as usize] = piece;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.grid {
            for cell in cells {
                match cell {
                    Some(piece) => write!(f, "{}", piece.to_diagram_char())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
