//! One module per judge problem, each exposing `solve(input, out)`.

pub mod anagrams;
pub mod blocks;
pub mod cycles;
pub mod dollars;
pub mod kingdoms;
pub mod maxsum;
pub mod mountains;
pub mod stations;
pub mod triples;
