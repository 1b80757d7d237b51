//! Dollars: coin/note combinations composing an amount (UVa 147).
//!
//! Amounts are multiples of 5 cents up to $300.00, terminated by `0.00`.
//! Working in 5-cent units, the classic coin-ordered counting table is
//! filled once; each query is then a lookup.

use std::io::{Read, Write};

use crate::scan::Scanner;
use crate::Error;

/// Denominations in 5-cent units: 5c, 10c, 20c, 50c, $1, $2, $5, $10, $20,
/// $50, $100.
const VALUES: [usize; 11] = [1, 2, 4, 10, 20, 40, 100, 200, 400, 1000, 2000];

/// $300.00 in 5-cent units.
const MAX_UNITS: usize = 6000;

fn combination_table() -> Vec<i64> {
    let mut ways = vec![0i64; MAX_UNITS + 1];
    ways[0] = 1;
    for value in VALUES {
        for units in value..=MAX_UNITS {
            ways[units] += ways[units - value];
        }
    }
    ways
}

pub fn solve(input: impl Read, mut out: impl Write) -> Result<(), Error> {
    let ways = combination_table();
    let mut scan = Scanner::from_reader(input)?;
    loop {
        let amount = match scan.try_next::<f64>()? {
            None => break,
            Some(amount) => amount,
        };
        if amount == 0.0 {
            break;
        }
        // Round, don't truncate: the nearest 5-cent multiple is immune to
        // float representation error.
        let units = (amount * 20.0).round() as usize;
        writeln!(out, "{amount:>6.2}{:>17}", ways[units])?;
    }
    Ok(())
}
