//! SCUD busters: total area of kingdoms struck by missiles (UVa 109).
//!
//! Input is a stream of kingdom blocks (`n`, then `n` site pairs) switched
//! permanently to missile pairs by the `-1` sentinel. Output is the summed
//! area of every kingdom containing at least one missile, 2 decimals.

use std::io::{Read, Write};

use crate::campaign::{Campaign, Kingdom};
use crate::geom::IVec2;
use crate::scan::Scanner;
use crate::Error;

pub fn solve(input: impl Read, mut out: impl Write) -> Result<(), Error> {
    let mut scan = Scanner::from_reader(input)?;
    let mut campaign = Campaign::default();
    while let Some(n) = scan.try_next::<i64>()? {
        if n == -1 {
            while let Some(x) = scan.try_next::<i64>()? {
                let y: i64 = scan.next()?;
                campaign.strike(IVec2::new(x, y));
            }
            break;
        }
        // No capacity hint: `n` is untrusted until the pairs actually arrive.
        let mut sites = Vec::new();
        for _ in 0..n {
            let x: i64 = scan.next()?;
            let y: i64 = scan.next()?;
            sites.push(IVec2::new(x, y));
        }
        campaign.push(Kingdom::new(sites));
    }
    writeln!(out, "{:.2}", campaign.struck_area())?;
    Ok(())
}
