//! Maximum sub-rectangle sum of a square integer grid (UVa 108).
//!
//! Column sums accumulated over each row band, Kadane within the band. The
//! empty rectangle counts as 0, so an all-negative grid reports 0.

use std::io::{Read, Write};

use crate::scan::Scanner;
use crate::Error;

pub fn solve(input: impl Read, mut out: impl Write) -> Result<(), Error> {
    let mut scan = Scanner::from_reader(input)?;
    let size: usize = scan.next()?;
    let mut grid = vec![0i64; size * size];
    for cell in grid.iter_mut() {
        *cell = scan.next()?;
    }
    let mut best = 0i64;
    for top in 0..size {
        let mut cols = vec![0i64; size];
        for bottom in top..size {
            for (j, col) in cols.iter_mut().enumerate() {
                *col += grid[bottom * size + j];
            }
            let mut run = 0i64;
            for &col in &cols {
                run += col;
                if run < 0 {
                    run = 0;
                } else if run > best {
                    best = run;
                }
            }
        }
    }
    writeln!(out, "{best}")?;
    Ok(())
}
