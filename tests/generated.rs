//! Tests piece placement checking on randomly generated ranks
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use rand::Rng;
use rand::seq::SliceRandom;
use fencheck::fen::{check_placement, check_fen, Error};

const PIECES: &[char] = &['p', 'n', 'b', 'r', 'q', 'k', 'P', 'N', 'B', 'R', 'Q', 'K'];
const SAMPLES: usize = 1000;

/// Generates a rank describing exactly eight squares, never with two digits in a row.
fn random_rank<R: Rng>(rng: &mut R) -> String {
    let mut rank = String::new();
    let mut remaining = 8;
    let mut after_digit = false;

    while remaining > 0 {
        if !after_digit && rng.gen_bool(0.5) {
            let empty = rng.gen_range(1, remaining + 1);
            rank.push(std::char::from_digit(empty, 10).expect("1 to 8"));
            remaining -= empty;
            after_digit = true;
        } else {
            rank.push(*PIECES.choose(rng).expect("not empty"));
            remaining -= 1;
            after_digit = false;
        }
    }

    rank
}

fn random_placement<R: Rng>(rng: &mut R) -> Vec<String> {
    (0..8).map(|_| random_rank(rng)).collect()
}

#[test]
fn generated_placements_are_valid() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let placement = random_placement(&mut rng).join("/");
        assert_eq!(check_placement(&placement), Ok(()), "{}", placement);

        let fen = format!("{} b - - 0 1", placement);
        assert_eq!(check_fen(&fen), Ok(()), "{}", fen);
    }
}

// splitting a run of empty squares in two keeps the width at eight, but is still rejected
#[test]
fn split_digits_are_rejected() {
    let mut rng = rand::thread_rng();
    let mut tested = 0;

    while tested < SAMPLES {
        let mut ranks = random_placement(&mut rng);
        let index = rng.gen_range(0, ranks.len());

        let digit = match ranks[index].char_indices()
            .find(|(_, c)| c.to_digit(10).map_or(false, |d| d >= 2)) {
            Some(digit) => digit,
            None => continue,
        };
        let (pos, c) = digit;
        let empty = c.to_digit(10).expect("digit");
        let first = rng.gen_range(1, empty);
        let split = format!("{}{}", first, empty - first);
        ranks[index].replace_range(pos..pos + 1, &split);

        let placement = ranks.join("/");
        assert_eq!(check_placement(&placement), Err(Error::AdjacentDigits(index)), "{}", placement);
        tested += 1;
    }
}

// replacing any square with a foreign character is rejected
#[test]
fn foreign_characters_are_rejected() {
    let mut rng = rand::thread_rng();
    let foreign = ['x', 'T', 'L', '0', '9', '-', 'a', 'h', '+', '#'];

    for _ in 0..SAMPLES {
        let mut ranks = random_placement(&mut rng);
        let index = rng.gen_range(0, ranks.len());
        let c = *foreign.choose(&mut rng).expect("not empty");

        let pos = rng.gen_range(0, ranks[index].len());
        ranks[index].replace_range(pos..pos + 1, &c.to_string());

        let placement = ranks.join("/");
        assert_eq!(check_placement(&placement), Err(Error::InvalidPiece(c)), "{}", placement);
    }
}
