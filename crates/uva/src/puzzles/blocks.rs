//! Blocks world: `move`/`pile` commands over `n` single-block stacks (UVa 101).
//!
//! Illegal commands (same block, or both blocks already in one stack) are
//! ignored. `move` first returns everything above the moved block to its home
//! stack; `onto` also clears above the target; `pile` carries the tower.

use std::io::{Read, Write};

use crate::scan::Scanner;
use crate::Error;

struct World {
    stacks: Vec<Vec<usize>>,
    /// Stack currently holding each block.
    stack_of: Vec<usize>,
    /// Height of each block within its stack.
    height_of: Vec<usize>,
}

impl World {
    fn new(n: usize) -> Self {
        Self {
            stacks: (0..n).map(|i| vec![i]).collect(),
            stack_of: (0..n).collect(),
            height_of: vec![0; n],
        }
    }

    /// Return every block stacked above `block` to its home stack.
    fn clear_above(&mut self, block: usize) {
        let s = self.stack_of[block];
        let returned = self.stacks[s].split_off(self.height_of[block] + 1);
        for b in returned {
            self.stack_of[b] = b;
            self.height_of[b] = self.stacks[b].len();
            self.stacks[b].push(b);
        }
    }

    /// Move `block` and everything still above it onto the stack holding
    /// `target`.
    fn carry(&mut self, block: usize, target: usize) {
        let src = self.stack_of[block];
        let dst = self.stack_of[target];
        let carried = self.stacks[src].split_off(self.height_of[block]);
        for b in carried {
            self.stack_of[b] = dst;
            self.height_of[b] = self.stacks[dst].len();
            self.stacks[dst].push(b);
        }
    }
}

pub fn solve(input: impl Read, mut out: impl Write) -> Result<(), Error> {
    let mut scan = Scanner::from_reader(input)?;
    let n: usize = scan.next()?;
    let mut world = World::new(n);
    loop {
        let verb: String = scan.next()?;
        if verb == "quit" {
            break;
        }
        let a: usize = scan.next()?;
        let prep: String = scan.next()?;
        let b: usize = scan.next()?;
        if a == b || world.stack_of[a] == world.stack_of[b] {
            continue;
        }
        if verb == "move" {
            world.clear_above(a);
        }
        if prep == "onto" {
            world.clear_above(b);
        }
        world.carry(a, b);
    }
    for (i, stack) in world.stacks.iter().enumerate() {
        write!(out, "{i}:")?;
        for block in stack {
            write!(out, " {block}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
