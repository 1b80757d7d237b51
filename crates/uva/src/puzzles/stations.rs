//! Krochanska is in!: most central important station of a line network
//! (UVa 11792).
//!
//! Stations served by at least two lines are "important". Adjacent important
//! stations along a line are linked by the number of stops between them (the
//! minimum kept when a pair repeats); Floyd–Warshall runs over that reduced
//! graph with unreached pairs costing `n_stations - 1`, and the important
//! station with the smallest distance sum wins, lowest number on ties.

use std::io::{Read, Write};

use crate::scan::Scanner;
use crate::Error;

pub fn solve(input: impl Read, mut out: impl Write) -> Result<(), Error> {
    let mut scan = Scanner::from_reader(input)?;
    let tests: usize = scan.next()?;
    for _ in 0..tests {
        let n_stations: usize = scan.next()?;
        let n_lines: usize = scan.next()?;
        let mut seen = vec![0u32; n_stations];
        let mut lines: Vec<Vec<usize>> = Vec::with_capacity(n_lines);
        for _ in 0..n_lines {
            // Each line is a 0-terminated station list; lines never repeat
            // a station within themselves.
            let mut stations = Vec::new();
            loop {
                let station: usize = scan.next()?;
                if station == 0 {
                    break;
                }
                seen[station - 1] += 1;
                stations.push(station);
            }
            lines.push(stations);
        }
        // rank[s] = index of station s+1 among the important ones.
        let mut rank: Vec<Option<usize>> = vec![None; n_stations];
        let mut important = Vec::new();
        for s in 0..n_stations {
            if seen[s] > 1 {
                rank[s] = Some(important.len());
                important.push(s + 1);
            }
        }
        let m = important.len();
        let unreached = (n_stations as i64) - 1;
        let mut dist = vec![unreached; m * m];
        for s in 0..m {
            dist[s * m + s] = 0;
        }
        for stations in &lines {
            let mut prev: Option<usize> = None;
            let mut steps = 0i64;
            for &station in stations {
                if let Some(r) = rank[station - 1] {
                    if let Some(p) = prev {
                        if steps < dist[p * m + r] {
                            dist[p * m + r] = steps;
                            dist[r * m + p] = steps;
                        }
                    }
                    prev = Some(r);
                    steps = 0;
                }
                if prev.is_some() {
                    steps += 1;
                }
            }
        }
        for k in 0..m {
            for s in 0..m {
                for t in 0..m {
                    let through = dist[s * m + k] + dist[k * m + t];
                    if through < dist[s * m + t] {
                        dist[s * m + t] = through;
                    }
                }
            }
        }
        let mut best_sum = unreached * m as i64;
        let mut best_station = 0;
        for s in 0..m {
            let sum: i64 = dist[s * m..(s + 1) * m].iter().sum();
            if sum < best_sum {
                best_sum = sum;
                best_station = important[s];
            }
        }
        writeln!(out, "Krochanska is in: {best_station}")?;
    }
    Ok(())
}
