//! Defines the error types needed by the fen module
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use super::Field;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The reason a FEN string was rejected.
///
/// Rank indices count from zero in the order the ranks are written, so index 0 is rank 8.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string does not have exactly six whitespace-separated fields
    FieldCount(usize),
    /// The string starts or ends with whitespace
    Whitespace,
    /// The piece placement does not have exactly eight ranks
    RankCount(usize),
    /// The rank at the given index is empty
    EmptyRank(usize),
    /// A character that is neither a piece letter nor a digit from 1 to 8
    InvalidPiece(char),
    /// Two digits next to each other in the rank at the given index
    AdjacentDigits(usize),
    /// The rank at the given index does not describe exactly eight squares
    RankWidth(usize, u32),
    /// Side to move is not "w" or "b"
    SideToMove,
    /// Castling rights are not "-" or an ordered subset of "KQkq"
    Castling,
    /// En-passant target is not "-" or a square on rank 3 or 6
    EnPassant,
    /// Half-move clock is not a number from 0 to 99
    HalfmoveClock,
    /// Full-move number is not a number from 1 to 99
    FullmoveNumber,
}

impl Error {
    /// Returns the field the error was found in, or `None` if the fields could not be split.
    pub fn field(self) -> Option<Field> {
        use Error::*;

        match self {
            FieldCount(_) | Whitespace => None,
            RankCount(_) | EmptyRank(_) | InvalidPiece(_) | AdjacentDigits(_) | RankWidth(..) => {
                Some(Field::Placement)
            }
            SideToMove => Some(Field::SideToMove),
            Castling => Some(Field::Castling),
            EnPassant => Some(Field::EnPassant),
            HalfmoveClock => Some(Field::HalfmoveClock),
            FullmoveNumber => Some(Field::FullmoveNumber),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            FieldCount(n) => write!(f, "expected 6 fields, found {}", n),
            Whitespace => f.write_str("leading or trailing whitespace"),
            RankCount(n) => write!(f, "expected 8 ranks, found {}", n),
            EmptyRank(i) => write!(f, "rank {} is empty", 8 - i),
            InvalidPiece(c) => write!(f, "invalid piece '{}'", c),
            AdjacentDigits(i) => write!(f, "adjacent digits in rank {}", 8 - i),
            RankWidth(i, w) => write!(f, "rank {} describes {} squares", 8 - i, w),
            SideToMove => f.write_str("side to move must be 'w' or 'b'"),
            Castling => f.write_str("invalid castling rights"),
            EnPassant => f.write_str("invalid en-passant square"),
            HalfmoveClock => f.write_str("half-move clock out of range"),
            FullmoveNumber => f.write_str("full-move number out of range"),
        }
    }
}

impl std::error::Error for Error { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Result type used by the `fen` module
pub type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_errors_belong_to_placement_field() {
        for err in &[Error::RankCount(7), Error::EmptyRank(0), Error::InvalidPiece('T'),
                Error::AdjacentDigits(2), Error::RankWidth(1, 9)] {
            assert_eq!(err.field(), Some(Field::Placement));
        }
    }

    #[test]
    fn splitting_errors_have_no_field() {
        assert_eq!(Error::FieldCount(5).field(), None);
        assert_eq!(Error::Whitespace.field(), None);
    }

    #[test]
    fn rank_numbers_are_displayed_as_written_on_the_board() {
        assert_eq!(Error::EmptyRank(0).to_string(), "rank 8 is empty");
        assert_eq!(Error::RankWidth(7, 9).to_string(), "rank 1 describes 9 squares");
        assert_eq!(Error::AdjacentDigits(2).to_string(), "adjacent digits in rank 6");
    }
}
