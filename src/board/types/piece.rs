//! Piece and player types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    Queen,
    King,
    Bishop,
    Rook,
    Knight,
    Pawn,
}

impl PieceType {
    /// All piece types in index order
    pub const ALL: [PieceType; 6] = [
        PieceType::Queen,
        PieceType::King,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Pawn,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceType::Queen => 0,
            PieceType::King => 1,
            PieceType::Bishop => 2,
            PieceType::Rook => 3,
            PieceType::Knight => 4,
            PieceType::Pawn => 5,
        }
    }

    /// Parse a piece type from its letter, case-insensitively (q, k, b, r, n, p)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_uppercase() {
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'N' => Some(PieceType::Knight),
            'P' => Some(PieceType::Pawn),
            _ => None,
        }
    }

    /// Uppercase letter for this piece type
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Knight => 'N',
            PieceType::Pawn => 'P',
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::White, Player::Black];

    /// Returns the opposite side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// An immutable (type, owner) pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub piece_type: PieceType,
    pub player: Player,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(piece_type: PieceType, player: Player) -> Self {
        Piece { piece_type, player }
    }

    #[inline]
    #[must_use]
    pub fn is(self, piece_type: PieceType, player: Player) -> bool {
        self.piece_type == piece_type && self.player == player
    }

    /// Diagram character: uppercase for White, lowercase for Black.
    #[must_use]
    pub fn to_diagram_char(self) -> char {
        let c = self.piece_type.to_char();
        match self.player {
            Player::White => c,
            Player::Black => c.to_ascii_lowercase(),
        }
    }

    /// Inverse of [`Piece::to_diagram_char`].
    #[must_use]
    pub fn from_diagram_char(c: char) -> Option<Piece> {
        let piece_type = PieceType::from_char(c)?;
        let player = if c.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Some(Piece::new(piece_type, player))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_diagram_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_type_chars() {
        for piece_type in PieceType::ALL {
            assert_eq!(PieceType::from_char(piece_type.to_char()), Some(piece_type));
        }
        assert_eq!(PieceType::from_char('n'), Some(PieceType::Knight));
        assert_eq!(PieceType::from_char('x'), None);
    }

    #[test]
    fn test_diagram_chars() {
        let black_rook = Piece::new(PieceType::Rook, Player::Black);
        assert_eq!(black_rook.to_diagram_char(), 'r');
        assert_eq!(Piece::from_diagram_char('r'), Some(black_rook));
        assert_eq!(
            Piece::from_diagram_char('Q'),
            Some(Piece::new(PieceType::Queen, Player::White))
        );
        assert_eq!(Piece::from_diagram_char('.'), None);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent(), Player::White);
    }
}
