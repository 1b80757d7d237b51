//! Exact integer planar geometry for the missile/kingdom pipeline.
//!
//! Purpose
//! - One orientation predicate (`point::orientation`) and everything the
//!   spatial join needs on top of it: clockwise convex hulls (`hull`) and
//!   boundary-inclusive containment with incremental twice-area (`classify`).
//! - `sample` provides seeded site generators for tests and benches.
//!
//! Why exact integers
//! - Every predicate reduces to the sign of an `i64` cross product; there is
//!   no epsilon tuning and no false degeneracy on collinear triples.

pub mod classify;
pub mod hull;
pub mod point;
pub mod sample;

pub use classify::{locate, Containment};
pub use hull::Hull;
pub use point::{orientation, IVec2};

#[cfg(test)]
mod tests;
