//! Validates strings written in Forsyth-Edwards Notation (FEN)
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;
use serde::Serialize;

pub mod error;
mod placement;
mod state;
mod clock;

pub use error::{Error, Result};
pub use placement::check_placement;
pub use state::{check_side_to_move, check_castling, check_en_passant};
pub use clock::{check_halfmove_clock, check_fullmove_number};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// One of the six fields of a FEN string
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    /// Piece placement, rank 8 to rank 1
    Placement,
    /// The side to move
    SideToMove,
    /// Castling availability
    Castling,
    /// En-passant target square
    EnPassant,
    /// Half-move clock for the 50-move rule
    HalfmoveClock,
    /// Full-move number
    FullmoveNumber,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Field::*;

        f.write_str(match self {
            Placement => "piece placement",
            SideToMove => "side to move",
            Castling => "castling rights",
            EnPassant => "en-passant square",
            HalfmoveClock => "half-move clock",
            FullmoveNumber => "full-move number",
        })
    }
}

lazy_static! {
    static ref SEPARATOR: Regex = Regex::new(r"\s+").expect("INFALLIBLE");
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The six fields of a FEN string, borrowed from the original string.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Fields<'a> {
    /// Piece placement
    pub placement: &'a str,
    /// Side to move
    pub side_to_move: &'a str,
    /// Castling rights
    pub castling: &'a str,
    /// En-passant target square
    pub en_passant: &'a str,
    /// Half-move clock
    pub halfmove_clock: &'a str,
    /// Full-move number
    pub fullmove_number: &'a str,
}

impl<'a> Fields<'a> {
    /// Splits `s` on runs of whitespace. Fails unless there are exactly six fields.
    ///
    /// Leading or trailing whitespace leaves an empty field at the start or end, so it is rejected.
    pub fn split(s: &'a str) -> Result<Fields<'a>> {
        let tokens: Vec<&str> = SEPARATOR.split(s).collect();
        let fields: Vec<&str> = tokens.iter().copied().filter(|token| !token.is_empty()).collect();

        if fields.len() == 6 && tokens.len() != 6 {
            return Err(Error::Whitespace);
        }

        match fields[..] {
            [placement, side_to_move, castling, en_passant, halfmove_clock, fullmove_number] => {
                Ok(Fields {
                    placement,
                    side_to_move,
                    castling,
                    en_passant,
                    halfmove_clock,
                    fullmove_number,
                })
            }
            _ => Err(Error::FieldCount(fields.len())),
        }
    }

    /// Returns the text of `field`
    pub fn get(&self, field: Field) -> &'a str {
        match field {
            Field::Placement => self.placement,
            Field::SideToMove => self.side_to_move,
            Field::Castling => self.castling,
            Field::EnPassant => self.en_passant,
            Field::HalfmoveClock => self.halfmove_clock,
            Field::FullmoveNumber => self.fullmove_number,
        }
    }

    /// Runs each field's checker in field order, stopping at the first failure.
    pub fn check(&self) -> Result<()> {
        check_placement(self.placement)?;
        check_side_to_move(self.side_to_move)?;
        check_castling(self.castling)?;
        check_en_passant(self.en_passant)?;
        check_halfmove_clock(self.halfmove_clock)?;
        check_fullmove_number(self.fullmove_number)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Checks `s` against the FEN grammar, returning the first rule it breaks.
pub fn check_fen(s: &str) -> Result<()> {
    let result = Fields::split(s).and_then(|fields| fields.check());

    match result {
        Ok(()) => trace!("valid fen: {}", s),
        Err(err) => debug!("invalid fen: {}: {}", s, err),
    }

    result
}

/// Returns true if `s` is a well formed FEN string.
///
/// Only the notation is checked. Whether the position could arise in a game, or even has a king
/// for each side, is not considered.
///
/// ```
/// use fencheck::validate_fen;
///
/// assert!(validate_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"));
/// assert!(!validate_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1"));
/// ```
pub fn validate_fen(s: &str) -> bool {
    check_fen(s).is_ok()
}
