//! Algebraic notation for boards of any size.
//!
//! Files are bijective base-26 letter runs (`a` .. `z`, then `aa`, `ab`, ...),
//! ranks count up from the bottom row, so rank 1 is row `height - 1`.
//!
//! # Examples
//! ```
//! use chess_rules::board::{notation_to_coordinate, coordinate_to_notation, Coordinate};
//!
//! assert_eq!(coordinate_to_notation(Coordinate(7, 4), 8), "e1");
//! assert_eq!(notation_to_coordinate("aa10", 12).unwrap(), Coordinate(2, 26));
//! ```

use super::error::NotationError;
use super::types::{Coordinate, Move, MoveProperty, PieceType};
use super::Board;

/// Letters for a zero-based column.
///
/// Columns left of the board have no letters; a negative `column` renders
/// as `"a"` and trips a debug assertion.
#[must_use]
pub fn file_to_string(column: i64) -> String {
    debug_assert!(column >= 0, "no file for column {column}");
    let mut letters = Vec::new();
    let mut n = column.max(0) + 1;
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Rank number of a row on a board `height` rows tall.
#[inline]
#[must_use]
pub const fn rank_of(row: i64, height: i64) -> i64 {
    height - row
}

#[must_use]
pub fn coordinate_to_notation(coordinate: Coordinate, height: i64) -> String {
    format!(
        "{}{}",
        file_to_string(coordinate.column()),
        rank_of(coordinate.row(), height)
    )
}

fn parse_file(letters: &str, notation: &str) -> Result<i64, NotationError> {
    letters
        .bytes()
        .try_fold(0i64, |acc, b| {
            acc.checked_mul(26)?
                .checked_add(i64::from(b.to_ascii_lowercase() - b'a') + 1)
        })
        .map(|n| n - 1)
        .ok_or_else(|| NotationError::InvalidFile {
            notation: notation.to_string(),
        })
}

/// Parse `file letters + rank digits` into a coordinate.
///
/// Letters are case-insensitive and must all come before the digits. The
/// result is not bounds-checked against the board width.
pub fn notation_to_coordinate(notation: &str, height: i64) -> Result<Coordinate, NotationError> {
    if notation.is_empty() {
        return Err(NotationError::Empty);
    }

    let mut split = notation.len();
    for (i, c) in notation.char_indices() {
        if c.is_ascii_alphabetic() {
            if split != notation.len() {
                return Err(NotationError::LetterAfterDigit {
                    notation: notation.to_string(),
                });
            }
        } else if c.is_ascii_digit() {
            if split == notation.len() {
                split = i;
            }
        } else {
            return Err(NotationError::InvalidCharacter { char: c });
        }
    }

    let (letters, digits) = notation.split_at(split);
    if letters.is_empty() {
        return Err(NotationError::MissingFile {
            notation: notation.to_string(),
        });
    }
    if digits.is_empty() {
        return Err(NotationError::MissingRank {
            notation: notation.to_string(),
        });
    }

    let column = parse_file(letters, notation)?;
    let rank: i64 = digits.parse().map_err(|_| NotationError::InvalidRank {
        notation: notation.to_string(),
    })?;
    Ok(Coordinate(height - rank, column))
}

/// Split a trailing `<file><rank>` square off `text`.
///
/// An `x` followed by more letters is read as the capture marker.
fn split_square(text: &str) -> (&str, &str) {
    let after_last = |text: &str, keep: fn(&char) -> bool| {
        text.char_indices()
            .rev()
            .find(|(_, c)| !keep(c))
            .map_or(0, |(i, c)| i + c.len_utf8())
    };
    let digits_start = after_last(text, char::is_ascii_digit);
    let mut letters_start = after_last(&text[..digits_start], char::is_ascii_lowercase);
    let letters = &text.as_bytes()[letters_start..digits_start];
    if let Some(marker) = letters.iter().rposition(|&b| b == b'x') {
        if marker + 1 < letters.len() {
            letters_start += marker + 1;
        }
    }
    text.split_at(letters_start)
}

impl Board {
    /// Render a move played from this board, without check suffix.
    ///
    /// Returns "O-O" or "O-O-O" for castling and "-" when the origin is empty.
    #[must_use]
    pub fn move_notation(&self, mv: &Move) -> String {
        if mv.property() == MoveProperty::Castle {
            return if mv.is_castle_kingside() { "O-O" } else { "O-O-O" }.to_string();
        }

        let Some((from, to, _)) = mv.primary() else {
            return "-".to_string();
        };
        let Some(piece) = self.piece_at(from) else {
            return "-".to_string();
        };

        let height = self.dimensions().height;
        let capture = mv.is_capture();
        let mut notation = String::new();

        if piece.piece_type != PieceType::Pawn {
            notation.push(piece.piece_type.to_char());
        }

        let file_ambiguous =
            self.file_contains_multiple_of(from.column(), piece.piece_type, piece.player)
                || (piece.piece_type == PieceType::Pawn && capture);
        if file_ambiguous {
            notation.push_str(&file_to_string(from.column()));
        }
        if self.rank_contains_multiple_of(from.row(), piece.piece_type, piece.player) {
            notation.push_str(&rank_of(from.row(), height).to_string());
        }

        if capture {
            notation.push('x');
        }
        notation.push_str(&coordinate_to_notation(to, height));

        if let Some(promotion) = mv.promotion() {
            notation.push('=');
            notation.push(promotion.to_char());
        }
        notation
    }

    /// Resolve notation against `moves`, the legal moves of this board.
    ///
    /// Accepts the rendered form, plain algebraic with optional origin file
    /// or rank, castling as `O-O`/`0-0`, an optional `=X` promotion suffix
    /// and trailing `+`/`#`.
    pub fn parse_move(&self, notation: &str, moves: &[Move]) -> Result<Move, NotationError> {
        let text = notation.trim().trim_end_matches(['+', '#']);
        if text.is_empty() {
            return Err(NotationError::Empty);
        }
        if let Some(c) = text.chars().find(|c| !c.is_ascii()) {
            return Err(NotationError::InvalidCharacter { char: c });
        }

        let (base, promotion) = match text.rsplit_once('=') {
            Some((base, suffix)) => {
                let mut chars = suffix.chars();
                let (Some(c), None) = (chars.next(), chars.next()) else {
                    return Err(NotationError::InvalidPromotion {
                        char: suffix.chars().next().unwrap_or('='),
                    });
                };
                let piece_type =
                    PieceType::from_char(c).ok_or(NotationError::InvalidPromotion { char: c })?;
                (base, Some((c, piece_type)))
            }
            None => (text, None),
        };
        let base = if base.chars().all(|c| c == '0' || c == '-') {
            base.replace('0', "O")
        } else {
            base.to_string()
        };

        let mut matching: Vec<&Move> = moves
            .iter()
            .filter(|mv| self.move_notation(mv) == base)
            .collect();
        if matching.is_empty() && !base.starts_with("O-O") {
            matching = self.matching_components(&base, moves)?;
        }

        let mv = match matching.as_slice() {
            [] => {
                return Err(NotationError::NoMatchingMove {
                    notation: notation.to_string(),
                })
            }
            [mv] => (*mv).clone(),
            _ => {
                return Err(NotationError::AmbiguousMove {
                    notation: notation.to_string(),
                })
            }
        };

        match promotion {
            Some((c, piece_type)) => mv
                .with_promotion(piece_type)
                .map_err(|_| NotationError::InvalidPromotion { char: c }),
            None => Ok(mv),
        }
    }

    /// Match `[piece][file][rank][x]<square>` against `moves`.
    fn matching_components<'m>(
        &self,
        text: &str,
        moves: &'m [Move],
    ) -> Result<Vec<&'m Move>, NotationError> {
        let mut chars = text.chars();
        let (piece_type, rest) = match chars.next() {
            Some(c) if c.is_ascii_uppercase() => (
                PieceType::from_char(c).ok_or(NotationError::InvalidCharacter { char: c })?,
                chars.as_str(),
            ),
            _ => (PieceType::Pawn, text),
        };

        let height = self.dimensions().height;
        let (prefix, square) = split_square(rest);
        let to = notation_to_coordinate(square, height)?;

        let prefix = prefix.trim_end_matches('x');
        let (file_part, rank_part) = prefix.split_at(
            prefix
                .find(|c: char| c.is_ascii_digit())
                .unwrap_or(prefix.len()),
        );
        let file = match file_part {
            "" => None,
            letters if letters.bytes().all(|b| b.is_ascii_lowercase()) => {
                Some(parse_file(letters, text)?)
            }
            _ => {
                return Err(NotationError::NoMatchingMove {
                    notation: text.to_string(),
                })
            }
        };
        let row = match rank_part {
            "" => None,
            digits => Some(
                height
                    - digits.parse::<i64>().map_err(|_| NotationError::InvalidRank {
                        notation: text.to_string(),
                    })?,
            ),
        };

        Ok(moves
            .iter()
            .filter(|mv| mv.property() != MoveProperty::Castle)
            .filter(|mv| {
                mv.primary().is_some_and(|(from, dest, _)| {
                    dest == to
                        && self
                            .piece_at(from)
                            .is_some_and(|p| p.piece_type == piece_type)
                        && file.map_or(true, |f| from.column() == f)
                        && row.map_or(true, |r| from.row() == r)
                })
            })
            .collect())
    }
}
