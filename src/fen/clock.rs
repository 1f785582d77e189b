//! Checks the half-move clock and full-move number fields
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::ops::RangeInclusive;
use super::{Error, Result};

const HALFMOVE_CLOCK: RangeInclusive<u32> = 0..=99;
const FULLMOVE_NUMBER: RangeInclusive<u32> = 1..=99;

/// Parses a counter made only of ASCII digits and checks that it is in `range`. Signs are not
/// accepted.
fn counter_in_range(s: &str, range: RangeInclusive<u32>) -> bool {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    match s.parse::<u32>() {
        Ok(n) => range.contains(&n),
        // only possible on overflow, which is out of range anyway
        Err(_) => false,
    }
}

/// Checks the half-move clock, which must be a number from 0 to 99.
pub fn check_halfmove_clock(clock: &str) -> Result<()> {
    if counter_in_range(clock, HALFMOVE_CLOCK) {
        Ok(())
    } else {
        Err(Error::HalfmoveClock)
    }
}

/// Checks the full-move number, which must be a number from 1 to 99.
pub fn check_fullmove_number(number: &str) -> Result<()> {
    if counter_in_range(number, FULLMOVE_NUMBER) {
        Ok(())
    } else {
        Err(Error::FullmoveNumber)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    /// Tests for check_halfmove_clock()
    mod check_halfmove_clock {
        use super::*;

        #[test]
        fn zero_to_ninety_nine_is_ok() {
            for clock in &["0", "1", "9", "10", "53", "66", "73", "99"] {
                assert_eq!(check_halfmove_clock(clock), Ok(()), "{}", clock);
            }
        }

        #[test]
        fn out_of_range_returns_error() {
            for clock in &["-20", "-0", "100", "222", "700", "4294967296"] {
                assert_eq!(check_halfmove_clock(clock), Err(Error::HalfmoveClock), "{}", clock);
            }
        }

        #[test]
        fn non_numeric_returns_error() {
            for clock in &["", "x", "+5", "5a", "1.0", "\u{0665}"] {
                assert_eq!(check_halfmove_clock(clock), Err(Error::HalfmoveClock), "{}", clock);
            }
        }

        #[test]
        fn leading_zeros_are_ok() {
            assert_eq!(check_halfmove_clock("05"), Ok(()));
            assert_eq!(check_halfmove_clock("00"), Ok(()));
        }
    }

    /// Tests for check_fullmove_number()
    mod check_fullmove_number {
        use super::*;

        #[test]
        fn one_to_ninety_nine_is_ok() {
            for number in &["1", "9", "10", "53", "66", "73", "99"] {
                assert_eq!(check_fullmove_number(number), Ok(()), "{}", number);
            }
        }

        #[test]
        fn zero_returns_error() {
            assert_eq!(check_fullmove_number("0"), Err(Error::FullmoveNumber));
            assert_eq!(check_fullmove_number("000"), Err(Error::FullmoveNumber));
        }

        #[test]
        fn out_of_range_returns_error() {
            for number in &["-20", "100", "222", "700", "99999999999"] {
                assert_eq!(check_fullmove_number(number), Err(Error::FullmoveNumber), "{}", number);
            }
        }

        #[test]
        fn non_numeric_returns_error() {
            for number in &["", "x", "+1", "1-"] {
                assert_eq!(check_fullmove_number(number), Err(Error::FullmoveNumber), "{}", number);
            }
        }
    }
}
