//! 3n+1: maximum Collatz cycle length over a closed range (UVa 100).

use std::io::{Read, Write};

use crate::scan::Scanner;
use crate::Error;

fn cycle_length(start: u64) -> u64 {
    let mut n = start;
    let mut count = 1;
    while n != 1 {
        n = if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
        count += 1;
    }
    count
}

pub fn solve(input: impl Read, mut out: impl Write) -> Result<(), Error> {
    let mut scan = Scanner::from_reader(input)?;
    while let Some(a) = scan.try_next::<u64>()? {
        let b: u64 = scan.next()?;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let max = (lo..=hi).map(cycle_length).max().unwrap_or(1);
        writeln!(out, "{a} {b} {max}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        let mut out = Vec::new();
        solve(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn judge_sample() {
        assert_eq!(
            run("1 10\n100 200\n201 210\n900 1000\n"),
            "1 10 20\n100 200 125\n201 210 89\n900 1000 174\n"
        );
    }

    #[test]
    fn bounds_echo_in_input_order() {
        assert_eq!(run("10 1\n"), "10 1 20\n");
    }

    #[test]
    fn cycle_of_one_is_one() {
        assert_eq!(cycle_length(1), 1);
        assert_eq!(cycle_length(2), 2);
        assert_eq!(cycle_length(22), 16);
    }
}
