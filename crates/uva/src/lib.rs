//! Solvers for a small set of programming-judge puzzles.
//!
//! The heart of the crate is the exact integer geometry pipeline behind the
//! missile/kingdom puzzle: orientation predicate → clockwise convex hull →
//! boundary-inclusive containment with incremental twice-area (`geom`),
//! composed into a one-shot spatial join (`campaign`). The remaining puzzles
//! are self-contained solvers sharing only the token scanner and error type.
//!
//! Every solver has the same shape: `puzzles::<name>::solve(input, output)`
//! reads one whitespace-tokenized judge input to its end and writes the
//! answer. Malformed input is a precondition violation and surfaces as a
//! fatal scan error; there are no recoverable-error paths.

pub mod campaign;
pub mod geom;
pub mod puzzles;
pub mod scan;

mod error;
pub use error::Error;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::campaign::{Campaign, Kingdom};
    pub use crate::geom::{locate, orientation, Containment, Hull, IVec2};
    pub use crate::scan::{ScanError, Scanner};
    pub use crate::Error;
}
