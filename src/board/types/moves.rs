//! Consequences and moves.
//!
//! A move is an ordered list of atomic board edits plus a tag describing any
//! special rule it realises. Replaying the edits in order against the board
//! the move was generated for yields the next position.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use super::piece::PieceType;
use crate::board::error::MoveError;

/// Whether a movement captures.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveType {
    Push,
    Attack,
    /// Request filter covering both pushes and attacks
    All,
}

impl MoveType {
    /// Returns true if a request for `self` covers `other`.
    #[inline]
    #[must_use]
    pub const fn includes(self, other: MoveType) -> bool {
        matches!(
            (self, other),
            (MoveType::All, _)
                | (MoveType::Push, MoveType::Push)
                | (MoveType::Attack, MoveType::Attack)
        )
    }
}

/// Whether a movement slides or steps.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveStyle {
    Ray,
    Jump,
    /// Request filter covering both rays and jumps
    All,
}

impl MoveStyle {
    /// Returns true if a request for `self` covers `other`.
    #[inline]
    #[must_use]
    pub const fn includes(self, other: MoveStyle) -> bool {
        matches!(
            (self, other),
            (MoveStyle::All, _)
                | (MoveStyle::Ray, MoveStyle::Ray)
                | (MoveStyle::Jump, MoveStyle::Jump)
        )
    }
}

/// Special semantics attached to a move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveProperty {
    #[default]
    None,
    DoubleMove,
    EnPassant,
    Castle,
    Promotion,
}

/// One atomic board edit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Consequence {
    /// Relocate the piece on `from` to the empty square `to`
    Move {
        from: Coordinate,
        to: Coordinate,
        move_type: MoveType,
        move_style: MoveStyle,
        vector: Coordinate,
    },
    /// Clear an occupied square
    Remove { coordinate: Coordinate },
    /// Replace the type of the piece on a square, keeping its owner
    Change {
        coordinate: Coordinate,
        piece_type: PieceType,
    },
}

impl fmt::Display for Consequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Consequence::Move { from, to, .. } => write!(f, "move {from} -> {to}"),
            Consequence::Remove { coordinate } => write!(f, "remove {coordinate}"),
            Consequence::Change {
                coordinate,
                piece_type,
            } => write!(f, "change {coordinate} to {piece_type}"),
        }
    }
}

/// An ordered list of consequences and a property tag.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    consequences: Vec<Consequence>,
    property: MoveProperty,
    promotion: Option<PieceType>,
}

impl Move {
    #[must_use]
    pub fn new(consequences: Vec<Consequence>, property: MoveProperty) -> Self {
        Move {
            consequences,
            property,
            promotion: None,
        }
    }

    /// A single movement, preceded by the removal of the captured piece when
    /// `capture` is set so the destination is empty by the time it is entered.
    #[must_use]
    pub fn basic(
        move_type: MoveType,
        move_style: MoveStyle,
        vector: Coordinate,
        from: Coordinate,
        to: Coordinate,
        capture: bool,
    ) -> Self {
        let mut consequences = Vec::with_capacity(2);
        if capture {
            consequences.push(Consequence::Remove { coordinate: to });
        }
        consequences.push(Consequence::Move {
            from,
            to,
            move_type,
            move_style,
            vector,
        });
        Move::new(consequences, MoveProperty::None)
    }

    #[inline]
    #[must_use]
    pub fn consequences(&self) -> &[Consequence] {
        &self.consequences
    }

    #[inline]
    #[must_use]
    pub const fn property(&self) -> MoveProperty {
        self.property
    }

    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<PieceType> {
        self.promotion
    }

    #[inline]
    pub(crate) fn retag(&mut self, property: MoveProperty) {
        self.property = property;
    }

    /// Same consequences under a different tag.
    #[must_use]
    pub(crate) fn retagged(mut self, property: MoveProperty) -> Self {
        self.retag(property);
        self
    }

    /// The first movement of the move: the piece that was picked up.
    #[must_use]
    pub fn primary(&self) -> Option<(Coordinate, Coordinate, MoveType)> {
        self.consequences.iter().find_map(|c| match *c {
            Consequence::Move {
                from, to, move_type, ..
            } => Some((from, to, move_type)),
            _ => None,
        })
    }

    #[must_use]
    pub fn from(&self) -> Option<Coordinate> {
        self.primary().map(|(from, _, _)| from)
    }

    #[must_use]
    pub fn to(&self) -> Option<Coordinate> {
        self.primary().map(|(_, to, _)| to)
    }

    /// Returns true if the primary movement is an attack.
    #[must_use]
    pub fn is_attack(&self) -> bool {
        matches!(self.primary(), Some((_, _, MoveType::Attack)))
    }

    /// Returns true if the move removes a piece.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured().is_some()
    }

    /// The square of the removed piece, if any.
    #[must_use]
    pub fn captured(&self) -> Option<Coordinate> {
        self.consequences.iter().find_map(|c| match *c {
            Consequence::Remove { coordinate } => Some(coordinate),
            _ => None,
        })
    }

    /// Returns true if any movement of this move lands on `coordinate`.
    #[must_use]
    pub fn moves_to(&self, coordinate: Coordinate) -> bool {
        self.consequences
            .iter()
            .any(|c| matches!(c, Consequence::Move { to, .. } if *to == coordinate))
    }

    /// Returns true for a castle toward increasing columns.
    #[must_use]
    pub fn is_castle_kingside(&self) -> bool {
        self.property == MoveProperty::Castle
            && self.primary().is_some_and(|(from, to, _)| to.column() > from.column())
    }

    /// Choose the piece type a promotion turns into.
    ///
    /// Appends the matching change consequence. Allowed once, on promotion
    /// moves only.
    pub fn set_promotion(&mut self, piece_type: PieceType) -> Result<(), MoveError> {
        if self.property != MoveProperty::Promotion {
            return Err(MoveError::NotPromotion);
        }
        if self.promotion.is_some() {
            return Err(MoveError::PromotionAlreadySet);
        }
        let (_, to, _) = self.primary().ok_or(MoveError::NotPromotion)?;
        self.consequences.push(Consequence::Change {
            coordinate: to,
            piece_type,
        });
        self.promotion = Some(piece_type);
        Ok(())
    }

    /// Builder form of [`Move::set_promotion`].
    pub fn with_promotion(mut self, piece_type: PieceType) -> Result<Self, MoveError> {
        self.set_promotion(piece_type)?;
        Ok(self)
    }

    /// Consequences without the change added by a chosen promotion.
    fn base_consequences(&self) -> &[Consequence] {
        match self.promotion {
            Some(_) => &self.consequences[..self.consequences.len() - 1],
            None => &self.consequences,
        }
    }

    /// Returns true if both moves perform the same action, disregarding any
    /// promotion choice.
    #[must_use]
    pub fn same_action(&self, other: &Move) -> bool {
        self.property == other.property && self.base_consequences() == other.base_consequences()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}[", self.property)?;
        for (i, consequence) in self.consequences.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{consequence}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(from: Coordinate, to: Coordinate) -> Move {
        Move::basic(
            MoveType::Push,
            MoveStyle::Jump,
            to - from,
            from,
            to,
            false,
        )
    }

    #[test]
    fn test_basic_capture_removes_first() {
        let mv = Move::basic(
            MoveType::Attack,
            MoveStyle::Ray,
            Coordinate::UP,
            Coordinate(4, 0),
            Coordinate(1, 0),
            true,
        );
        assert_eq!(
            mv.consequences()[0],
            Consequence::Remove {
                coordinate: Coordinate(1, 0)
            }
        );
        assert!(mv.is_attack());
        assert!(mv.is_capture());
        assert_eq!(mv.from(), Some(Coordinate(4, 0)));
        assert_eq!(mv.to(), Some(Coordinate(1, 0)));
    }

    #[test]
    fn test_set_promotion_once() {
        let mut mv = push(Coordinate(1, 0), Coordinate(0, 0)).retagged(MoveProperty::Promotion);
        assert_eq!(mv.set_promotion(PieceType::Queen), Ok(()));
        assert_eq!(mv.promotion(), Some(PieceType::Queen));
        assert_eq!(
            mv.consequences().last(),
            Some(&Consequence::Change {
                coordinate: Coordinate(0, 0),
                piece_type: PieceType::Queen
            })
        );
        assert_eq!(
            mv.set_promotion(PieceType::Rook),
            Err(MoveError::PromotionAlreadySet)
        );
    }

    #[test]
    fn test_set_promotion_rejects_plain_move() {
        let mut mv = push(Coordinate(2, 0), Coordinate(1, 0));
        assert_eq!(mv.set_promotion(PieceType::Queen), Err(MoveError::NotPromotion));
        assert!(mv.consequences().len() == 1);
    }

    #[test]
    fn test_same_action_ignores_promotion_choice() {
        let generated = push(Coordinate(1, 3), Coordinate(0, 3)).retagged(MoveProperty::Promotion);
        let chosen = generated.clone().with_promotion(PieceType::Knight).unwrap();
        assert!(chosen.same_action(&generated));
        assert!(generated.same_action(&chosen));
        assert!(!push(Coordinate(1, 3), Coordinate(0, 3)).same_action(&generated));
    }

    #[test]
    fn test_castle_direction() {
        let mv = Move::new(
            vec![
                Consequence::Move {
                    from: Coordinate(7, 4),
                    to: Coordinate(7, 6),
                    move_type: MoveType::Push,
                    move_style: MoveStyle::Jump,
                    vector: Coordinate(0, 2),
                },
                Consequence::Move {
                    from: Coordinate(7, 7),
                    to: Coordinate(7, 5),
                    move_type: MoveType::Push,
                    move_style: MoveStyle::Jump,
                    vector: Coordinate(0, -2),
                },
            ],
            MoveProperty::Castle,
        );
        assert!(mv.is_castle_kingside());
        assert!(mv.moves_to(Coordinate(7, 5)));
        assert!(!mv.is_capture());
    }

    #[test]
    fn test_request_filters() {
        assert!(MoveType::All.includes(MoveType::Attack));
        assert!(!MoveType::Push.includes(MoveType::Attack));
        assert!(MoveStyle::Ray.includes(MoveStyle::Ray));
        assert!(!MoveStyle::Jump.includes(MoveStyle::Ray));
    }
}
