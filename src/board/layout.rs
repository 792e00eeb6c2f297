//! Starting positions.
//!
//! A layout is written either as a diagram, one string per row with `.` for
//! empty squares, or as `key: value` lines:
//!
//! ```text
//! name: Mini
//! w: 4
//! h: 4
//! turn: b
//! wK: a1
//! wP: a2 b2
//! bK: d4
//! ```
//!
//! Piece keys are a side letter (`w`/`b`) followed by a piece letter; their
//! value lists squares in algebraic notation for the layout's height. Width
//! and height must lie in `1..=Layout::MAX_DIMENSION`.

use std::fmt;
use std::str::FromStr;

use super::error::LayoutError;
use super::san::{coordinate_to_notation, notation_to_coordinate};
use super::state::{Board, Grid};
use super::types::{Coordinate, Dimensions, Piece, PieceType, Player};

const STANDARD_BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// A named starting position and the side to move first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    name: String,
    description: String,
    turn: Player,
    board: Board,
}

impl Layout {
    /// Wrap an existing grid.
    pub fn new(grid: Grid, turn: Player) -> Result<Self, LayoutError> {
        Ok(Layout {
            name: String::new(),
            description: String::new(),
            turn,
            board: Board::new(grid)?,
        })
    }

    /// Build a layout from diagram rows, row 0 first.
    pub fn from_diagram<S: AsRef<str>>(rows: &[S], turn: Player) -> Result<Self, LayoutError> {
        let grid = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .map(|c| match c {
                        '.' => Ok(None),
                        _ => Piece::from_diagram_char(c)
                            .map(Some)
                            .ok_or(LayoutError::UnknownPiece { char: c }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Grid, _>>()?;
        Layout::new(grid, turn)
    }

    /// The orthodox 8×8 starting position, White to move.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty(Dimensions::new(8, 8));
        for (column, piece_type) in STANDARD_BACK_RANK.iter().enumerate() {
            let column = column as i64;
            for (player, back, front) in [(Player::Black, 0, 1), (Player::White, 7, 6)] {
                let pawn = Piece::new(PieceType::Pawn, player);
                board.set_piece(Coordinate(back, column), Some(Piece::new(*piece_type, player)));
                board.set_piece(Coordinate(front, column), Some(pawn));
            }
        }
        Layout {
            name: "Standard".to_string(),
            description: "Orthodox chess starting position".to_string(),
            turn: Player::White,
            board,
        }
    }

    /// Largest width or height accepted by [`Layout::parse`].
    pub const MAX_DIMENSION: i64 = 1024;

    /// Parse the `key: value` format.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let mut width = None;
        let mut height = None;
        let mut name = String::new();
        let mut description = String::new();
        let mut turn = Player::White;
        let mut placements: Vec<(Piece, &str)> = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once(':')
                .ok_or(LayoutError::InvalidLine { line: index + 1 })?;
            let (key, value) = (key.trim(), value.trim());

            match key {
                "w" => width = Some(parse_dimension(key, value)?),
                "h" => height = Some(parse_dimension(key, value)?),
                "turn" => {
                    turn = parse_side(value).ok_or_else(|| LayoutError::InvalidTurn {
                        value: value.to_string(),
                    })?;
                }
                "name" => name = value.to_string(),
                "desc" => description = value.to_string(),
                _ => placements.push((parse_piece_key(key)?, value)),
            }
        }

        let (Some(width), Some(height)) = (width, height) else {
            return Err(LayoutError::MissingDimensions);
        };
        let mut board = Board::empty(Dimensions::new(width, height));
        for (piece, squares) in placements {
            for notation in squares.split_whitespace() {
                let coordinate = notation_to_coordinate(notation, height).map_err(|source| {
                    LayoutError::InvalidSquare {
                        notation: notation.to_string(),
                        source,
                    }
                })?;
                if !board.contains(coordinate) {
                    return Err(LayoutError::SquareOutOfBounds {
                        notation: notation.to_string(),
                    });
                }
                if board.has_piece(coordinate) {
                    return Err(LayoutError::SquareOccupied {
                        notation: notation.to_string(),
                    });
                }
                board.set_piece(coordinate, Some(piece));
            }
        }

        Ok(Layout {
            name,
            description,
            turn,
            board,
        })
    }

    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn turn(&self) -> Player {
        self.turn
    }

    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.board.dimensions()
    }

    /// A fresh copy of the starting board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board.clone()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.board.grid()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}

fn parse_dimension(key: &str, value: &str) -> Result<i64, LayoutError> {
    value
        .parse::<i64>()
        .ok()
        .filter(|n| (1..=Layout::MAX_DIMENSION).contains(n))
        .ok_or_else(|| LayoutError::InvalidDimension {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn parse_side(text: &str) -> Option<Player> {
    match text.to_ascii_lowercase().as_str() {
        "w" | "white" => Some(Player::White),
        "b" | "black" => Some(Player::Black),
        _ => None,
    }
}

fn side_letter(player: Player) -> char {
    match player {
        Player::White => 'w',
        Player::Black => 'b',
    }
}

fn parse_piece_key(key: &str) -> Result<Piece, LayoutError> {
    let invalid = || LayoutError::InvalidPieceKey {
        key: key.to_string(),
    };
    let mut chars = key.chars();
    let (Some(side), Some(letter), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };
    let player = match side {
        'w' => Player::White,
        'b' => Player::Black,
        _ => return Err(invalid()),
    };
    let piece_type = PieceType::from_char(letter).ok_or_else(invalid)?;
    Ok(Piece::new(piece_type, player))
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::parse(s)
    }
}

/// Writes the `key: value` format accepted by [`Layout::parse`].
impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.name.is_empty() {
            writeln!(f, "name: {}", self.name)?;
        }
        if !self.description.is_empty() {
            writeln!(f, "desc: {}", self.description)?;
        }
        let Dimensions { width, height } = self.dimensions();
        writeln!(f, "w: {width}")?;
        writeln!(f, "h: {height}")?;
        writeln!(f, "turn: {}", side_letter(self.turn))?;

        for player in Player::BOTH {
            for piece_type in PieceType::ALL {
                let squares: Vec<String> = self
                    .board
                    .positions_of(piece_type, player)
                    .into_iter()
                    .map(|c| coordinate_to_notation(c, height))
                    .collect();
                if !squares.is_empty() {
                    writeln!(f, "{}{}: {}", side_letter(player), piece_type, squares.join(" "))?;
                }
            }
        }
        Ok(())
    }
}
