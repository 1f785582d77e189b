//! Checks the side to move, castling rights and en-passant fields
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use lazy_static::lazy_static;
use regex::Regex;
use super::{Error, Result};

lazy_static! {
    // K, Q, k and q, each at most once and in that order. Also matches the empty string.
    static ref CASTLING: Regex = Regex::new(r"^(-|K?Q?k?q?)$").expect("INFALLIBLE");
    static ref EN_PASSANT: Regex = Regex::new(r"^(-|[a-h][36])$").expect("INFALLIBLE");
}

/// Checks the side to move, which must be "w" or "b".
pub fn check_side_to_move(side: &str) -> Result<()> {
    match side {
        "w" | "b" => Ok(()),
        _ => Err(Error::SideToMove),
    }
}

/// Checks the castling rights, which must be "-" or some of "KQkq" in that order, without
/// repeats.
///
/// Standard FEN doesn't require the letters to be in order, but they are always written that
/// way, so anything else is rejected.
pub fn check_castling(castling: &str) -> Result<()> {
    if !castling.is_empty() && CASTLING.is_match(castling) {
        Ok(())
    } else {
        Err(Error::Castling)
    }
}

/// Checks the en-passant target square, which must be "-" or a square on the 3rd or 6th rank.
pub fn check_en_passant(en_passant: &str) -> Result<()> {
    if EN_PASSANT.is_match(en_passant) {
        Ok(())
    } else {
        Err(Error::EnPassant)
    }
}
