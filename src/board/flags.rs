//! Dense per-square boolean grids.
//!
//! A `FlagBoard` represents a set of coordinates on a board of fixed size.
//! The move generator uses them for king danger squares, pin lines and the
//! capture/block restrictions that apply while in check.

use super::types::{Coordinate, Dimensions, Move};

/// Anything that can be filtered by a [`FlagBoard`].
pub trait Maskable {
    /// The square that decides whether the item passes the mask.
    fn mask_coordinate(&self) -> Option<Coordinate>;
}

impl Maskable for Coordinate {
    #[inline]
    fn mask_coordinate(&self) -> Option<Coordinate> {
        Some(*self)
    }
}

impl Maskable for Move {
    /// Moves are filtered on the destination of their primary movement.
    #[inline]
    fn mask_coordinate(&self) -> Option<Coordinate> {
        self.to()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagBoard {
    dimensions: Dimensions,
    flags: Vec<bool>,
}

impl FlagBoard {
    /// A board of the given size with every flag set to `value`.
    #[must_use]
    pub fn new(dimensions: Dimensions, value: bool) -> Self {
        let area = dimensions.area().max(0) as usize;
        FlagBoard {
            dimensions,
            flags: vec![value; area],
        }
    }

    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[inline]
    fn index(&self, coordinate: Coordinate) -> Option<usize> {
        self.dimensions
            .contains(coordinate)
            .then(|| (coordinate.row() * self.dimensions.width + coordinate.column()) as usize)
    }

    /// Off-board coordinates are never flagged.
    #[inline]
    #[must_use]
    pub fn is_flagged(&self, coordinate: Coordinate) -> bool {
        self.index(coordinate).is_some_and(|i| self.flags[i])
    }

    pub fn set(&mut self, coordinate: Coordinate, value: bool) {
        if let Some(i) = self.index(coordinate) {
            self.flags[i] = value;
        }
    }

    #[inline]
    pub fn flag(&mut self, coordinate: Coordinate) {
        self.set(coordinate, true);
    }

    #[inline]
    pub fn unflag(&mut self, coordinate: Coordinate) {
        self.set(coordinate, false);
    }

    pub fn flag_all<I: IntoIterator<Item = Coordinate>>(&mut self, coordinates: I) {
        for coordinate in coordinates {
            self.flag(coordinate);
        }
    }

    pub fn unflag_all<I: IntoIterator<Item = Coordinate>>(&mut self, coordinates: I) {
        for coordinate in coordinates {
            self.unflag(coordinate);
        }
    }

    pub fn set_all(&mut self, value: bool) {
        self.flags.fill(value);
    }

    /// Keep only the flags that are also in `coordinates`.
    pub fn restrict<I: IntoIterator<Item = Coordinate>>(&mut self, coordinates: I) {
        let mut keep = FlagBoard::new(self.dimensions, false);
        keep.flag_all(coordinates);
        self.intersect(&keep);
    }

    /// Keep only the flags that are also set in `other`.
    pub fn intersect(&mut self, other: &FlagBoard) {
        debug_assert_eq!(self.dimensions, other.dimensions);
        for (flag, keep) in self.flags.iter_mut().zip(&other.flags) {
            *flag &= *keep;
        }
    }

    /// Drop every item whose square is unflagged, or flagged when `invert`.
    pub fn mask<T: Maskable>(&self, items: &mut Vec<T>, invert: bool) {
        items.retain(|item| {
            item.mask_coordinate()
                .is_some_and(|c| self.is_flagged(c) != invert)
        });
    }

    /// Copying form of [`FlagBoard::mask`].
    #[must_use]
    pub fn masked<T: Maskable + Clone>(&self, items: &[T], invert: bool) -> Vec<T> {
        let mut kept = items.to_vec();
        self.mask(&mut kept, invert);
        kept
    }

    /// Every flagged coordinate in row-major order.
    #[must_use]
    pub fn flagged(&self) -> Vec<Coordinate> {
        self.dimensions
            .coordinates()
            .zip(&self.flags)
            .filter_map(|(c, flag)| flag.then_some(c))
            .collect()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::{MoveStyle, MoveType};

    #[test]
    fn test_flag_and_unflag() {
        let mut flags = FlagBoard::new(Dimensions::new(3, 2), false);
        flags.flag(Coordinate(1, 2));
        flags.flag(Coordinate(5, 5));
        assert!(flags.is_flagged(Coordinate(1, 2)));
        assert!(!flags.is_flagged(Coordinate(5, 5)));
        assert_eq!(flags.count(), 1);
        flags.unflag(Coordinate(1, 2));
        assert_eq!(flags.count(), 0);
    }

    #[test]
    fn test_restrict_intersects() {
        let mut flags = FlagBoard::new(Dimensions::new(4, 4), true);
        flags.unflag(Coordinate(0, 1));
        flags.restrict([Coordinate(0, 0), Coordinate(0, 1), Coordinate(3, 3)]);
        assert_eq!(flags.flagged(), vec![Coordinate(0, 0), Coordinate(3, 3)]);

        flags.restrict([Coordinate(3, 3)]);
        assert_eq!(flags.flagged(), vec![Coordinate(3, 3)]);
    }

    #[test]
    fn test_set_all() {
        let mut flags = FlagBoard::new(Dimensions::new(2, 2), false);
        flags.set_all(true);
        assert_eq!(flags.count(), 4);
        flags.set_all(false);
        assert!(flags.flagged().is_empty());
    }

    #[test]
    fn test_mask_coordinates_and_invert() {
        let mut flags = FlagBoard::new(Dimensions::new(3, 3), false);
        flags.flag_all([Coordinate(0, 0), Coordinate(1, 1)]);
        let cells = vec![Coordinate(0, 0), Coordinate(1, 1), Coordinate(2, 2)];

        assert_eq!(
            flags.masked(&cells, false),
            vec![Coordinate(0, 0), Coordinate(1, 1)]
        );
        assert_eq!(flags.masked(&cells, true), vec![Coordinate(2, 2)]);
    }

    #[test]
    fn test_mask_moves_by_destination() {
        let mut flags = FlagBoard::new(Dimensions::new(3, 3), false);
        flags.flag(Coordinate(1, 0));
        let origin = Coordinate(2, 0);
        let step = |vector: Coordinate| {
            Move::basic(MoveType::Push, MoveStyle::Jump, vector, origin, origin + vector, false)
        };
        let mut moves = vec![step(Coordinate::UP), step(Coordinate::RIGHT)];
        flags.mask(&mut moves, false);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to(), Some(Coordinate(1, 0)));
    }
}
