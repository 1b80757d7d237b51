//! Fermat vs. Pythagoras: primitive triples and untouched numbers (UVa 106).
//!
//! Per bound `n`, counts the primitive Pythagorean triples with all members
//! `<= n`, and the numbers in `[1, n]` that belong to no triple at all
//! (primitive or multiple).

use std::io::{Read, Write};

use crate::scan::Scanner;
use crate::Error;

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

pub fn solve(input: impl Read, mut out: impl Write) -> Result<(), Error> {
    let mut scan = Scanner::from_reader(input)?;
    while let Some(n) = scan.try_next::<u64>()? {
        // in_triple[k] marks k+1 as a member of some triple.
        let mut in_triple = vec![false; n as usize];
        let mut primitives = 0u64;
        // Euclid's formula: x = j² − i², y = 2ij, z = j² + i², i < j.
        let limit = (n as f64).sqrt() as u64;
        for i in 1..=limit {
            for j in (i + 1)..=limit {
                let z = j * j + i * i;
                if z > n {
                    break;
                }
                let x = j * j - i * i;
                let y = 2 * i * j;
                let mut k = 1;
                while k * z <= n {
                    in_triple[(k * x - 1) as usize] = true;
                    in_triple[(k * y - 1) as usize] = true;
                    in_triple[(k * z - 1) as usize] = true;
                    k += 1;
                }
                // Primitive iff i, j are coprime with opposite parity.
                if (i + j) % 2 == 1 && gcd(i, j) == 1 {
                    primitives += 1;
                }
            }
        }
        let untouched = in_triple.iter().filter(|&&member| !member).count();
        writeln!(out, "{primitives} {untouched}")?;
    }
    Ok(())
}
