//! Checks the piece placement field
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::{Error, Result};

/// Number of ranks on the board
const RANK_COUNT: usize = 8;
/// Number of squares in a rank
const FILE_COUNT: u32 = 8;

/// Checks the piece placement field: eight ranks separated by '/', each describing exactly eight
/// squares.
pub fn check_placement(placement: &str) -> Result<()> {
    let ranks: Vec<&str> = placement.split('/').collect();

    if ranks.len() != RANK_COUNT {
        return Err(Error::RankCount(ranks.len()));
    }

    for (index, rank) in ranks.iter().enumerate() {
        check_rank(index, rank)?;
    }

    Ok(())
}

/// Checks a single rank. `index` is only used for error reporting.
///
/// Digits count empty squares and letters count one square each. Two digits in a row are
/// rejected, since "11" or "17" is never a valid run of empty squares.
fn check_rank(index: usize, rank: &str) -> Result<()> {
    if rank.is_empty() {
        return Err(Error::EmptyRank(index));
    }

    let mut width = 0;
    let mut after_digit = false;

    for c in rank.chars() {
        match c {
            '1' ..= '8' => {
                if after_digit {
                    return Err(Error::AdjacentDigits(index));
                }
                width += c.to_digit(10).expect("INFALLIBLE");
                after_digit = true;
            }
            'p' | 'n' | 'b' | 'r' | 'q' | 'k' | 'P' | 'N' | 'B' | 'R' | 'Q' | 'K' => {
                width += 1;
                after_digit = false;
            }
            _ => return Err(Error::InvalidPiece(c)),
        }
    }

    if width != FILE_COUNT {
        return Err(Error::RankWidth(index, width));
    }

    Ok(())
}
