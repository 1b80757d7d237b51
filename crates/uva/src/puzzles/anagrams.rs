//! Anagram enumeration in judge collation order `A < a < B < b < …`
//! (UVa 195).

use std::io::{Read, Write};

use crate::scan::Scanner;
use crate::Error;

/// Collation key: each uppercase letter sorts immediately before its
/// lowercase counterpart.
#[inline]
fn key(c: u8) -> u8 {
    if c.is_ascii_lowercase() {
        2 * (c - b'a') + 1
    } else {
        2 * (c - b'A')
    }
}

/// Rearrange `word` into the next permutation under the collation key.
/// Returns false when the permutations are exhausted. Equal letters are
/// never swapped with each other, so each distinct word appears once.
fn next_permutation(word: &mut [u8]) -> bool {
    if word.len() < 2 {
        return false;
    }
    let mut i = word.len() - 1;
    while i > 0 && key(word[i - 1]) >= key(word[i]) {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = word.len() - 1;
    while key(word[j]) <= key(word[i - 1]) {
        j -= 1;
    }
    word.swap(i - 1, j);
    word[i..].reverse();
    true
}

pub fn solve(input: impl Read, mut out: impl Write) -> Result<(), Error> {
    let mut scan = Scanner::from_reader(input)?;
    let n: usize = scan.next()?;
    for _ in 0..n {
        let word: String = scan.next()?;
        let mut word = word.into_bytes();
        word.sort_by_key(|&c| key(c));
        loop {
            out.write_all(&word)?;
            writeln!(out)?;
            if !next_permutation(&mut word) {
                break;
            }
        }
    }
    Ok(())
}
