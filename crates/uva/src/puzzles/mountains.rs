//! Sunny Mountains: illuminated slope length of a ridge line (UVa 920).
//!
//! The sun shines horizontally from the right. Walking peaks right to left,
//! a peak adds the part of its right slope above the running maximum height
//! to its right; similar triangles give the horizontal extent of that part.

use std::io::{Read, Write};

use crate::scan::Scanner;
use crate::Error;

pub fn solve(input: impl Read, mut out: impl Write) -> Result<(), Error> {
    let mut scan = Scanner::from_reader(input)?;
    let tests: usize = scan.next()?;
    for _ in 0..tests {
        let n: usize = scan.next()?;
        let mut points = Vec::with_capacity(n);
        for _ in 0..n {
            let x: i64 = scan.next()?;
            let y: i64 = scan.next()?;
            points.push((x, y));
        }
        points.sort_by_key(|&(x, _)| x);
        let mut lit = 0.0f64;
        let mut max_right = 0i64;
        // Peaks sit at every other point from the end; the last point is a
        // foot of the ridge.
        let mut idx = n as i64 - 2;
        while idx >= 0 {
            let (px, py) = points[idx as usize];
            let (fx, fy) = points[idx as usize + 1];
            if py > max_right {
                let dy = (py - max_right) as f64;
                let dx = (fx - px) as f64 * dy / (py - fy) as f64;
                lit += (dx * dx + dy * dy).sqrt();
                max_right = py;
            }
            idx -= 2;
        }
        writeln!(out, "{lit:.2}")?;
    }
    Ok(())
}
