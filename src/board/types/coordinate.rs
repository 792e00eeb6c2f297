//! Coordinate and vector types.
//!
//! A `Coordinate` is a signed `(row, column)` pair. The same type doubles as a
//! movement vector, so direction tables are plain coordinates and geometry is
//! ordinary vector arithmetic. Row 0 is the far edge from White's side.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Player;

/// A board position or a movement vector, as (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate(pub i64, pub i64);

impl Coordinate {
    pub const UP: Coordinate = Coordinate(-1, 0);
    pub const DOWN: Coordinate = Coordinate(1, 0);
    pub const LEFT: Coordinate = Coordinate(0, -1);
    pub const RIGHT: Coordinate = Coordinate(0, 1);
    pub const UP_LEFT: Coordinate = Coordinate(-1, -1);
    pub const UP_RIGHT: Coordinate = Coordinate(-1, 1);
    pub const DOWN_LEFT: Coordinate = Coordinate(1, -1);
    pub const DOWN_RIGHT: Coordinate = Coordinate(1, 1);

    /// The four straight directions.
    pub const ORTHOGONALS: [Coordinate; 4] = [
        Coordinate::UP,
        Coordinate::DOWN,
        Coordinate::LEFT,
        Coordinate::RIGHT,
    ];

    /// The four diagonal directions.
    pub const DIAGONALS: [Coordinate; 4] = [
        Coordinate::UP_LEFT,
        Coordinate::UP_RIGHT,
        Coordinate::DOWN_LEFT,
        Coordinate::DOWN_RIGHT,
    ];

    /// All eight directions, straight ones first.
    pub const ALL_DIRECTIONS: [Coordinate; 8] = [
        Coordinate::UP,
        Coordinate::DOWN,
        Coordinate::LEFT,
        Coordinate::RIGHT,
        Coordinate::UP_LEFT,
        Coordinate::UP_RIGHT,
        Coordinate::DOWN_LEFT,
        Coordinate::DOWN_RIGHT,
    ];

    #[inline]
    #[must_use]
    pub const fn new(row: i64, column: i64) -> Self {
        Coordinate(row, column)
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i64 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn column(self) -> i64 {
        self.1
    }

    /// Mirror a vector across the horizontal axis.
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Self {
        Coordinate(-self.0, self.1)
    }

    /// Express a White-perspective vector from `player`'s perspective.
    #[inline]
    #[must_use]
    pub const fn oriented(self, player: Player) -> Self {
        match player {
            Player::White => self,
            Player::Black => self.flip(),
        }
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn neg(self) -> Coordinate {
        Coordinate(-self.0, -self.1)
    }
}

impl Mul<i64> for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn mul(self, rhs: i64) -> Coordinate {
        Coordinate(self.0 * rhs, self.1 * rhs)
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((row, column): (i64, i64)) -> Self {
        Coordinate(row, column)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Mirror every vector in a table.
#[must_use]
pub fn flip_all(vectors: &[Coordinate]) -> Vec<Coordinate> {
    vectors.iter().map(|v| v.flip()).collect()
}

/// Board extent, as (width, height).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    pub width: i64,
    pub height: i64,
}

impl Dimensions {
    #[inline]
    #[must_use]
    pub const fn new(width: i64, height: i64) -> Self {
        Dimensions { width, height }
    }

    /// Returns true if `coordinate` lies on a board of this size.
    #[inline]
    #[must_use]
    pub const fn contains(self, coordinate: Coordinate) -> bool {
        coordinate.0 >= 0
            && coordinate.1 >= 0
            && coordinate.0 < self.height
            && coordinate.1 < self.width
    }

    /// Number of squares.
    #[inline]
    #[must_use]
    pub const fn area(self) -> i64 {
        self.width * self.height
    }

    /// Every coordinate in row-major order.
    pub fn coordinates(self) -> impl Iterator<Item = Coordinate> {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Coordinate(row, col)))
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
