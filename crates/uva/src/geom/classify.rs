//! Point-in-convex-polygon with incremental twice-area.

use super::hull::Hull;
use super::point::{orientation, IVec2};

/// Where a query point sits relative to a hull.
///
/// The variant split keeps the x-span fast path observable: a query outside
/// the hull's x-extent is rejected before any edge is scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containment {
    /// Query x lies outside the hull's x-extent; no edge was scanned.
    /// Degenerate hulls always land here.
    OutsideSpan,
    /// Index of the first clockwise edge with the query strictly to its left.
    OutsideEdge(usize),
    /// Boundary-inclusive hit, with the hull's exact integer twice-area.
    Inside { twice_area: i64 },
}

/// Locate `query` relative to `hull`.
///
/// Scans the clockwise edges `(verts[i], verts[i+1 mod n])`; a strict
/// `orientation < 0` rejects, so points exactly on an edge count as inside.
/// The shoelace twice-area accumulates during the same scan in the
/// vertex-centered form `Σ xᵢ·(y_{i−1} − y_{i+1})`, positive for the
/// clockwise vertex order.
pub fn locate(hull: &Hull, query: IVec2) -> Containment {
    if hull.is_degenerate() {
        return Containment::OutsideSpan;
    }
    let (x_min, x_max) = hull.x_span();
    if query.x < x_min || query.x > x_max {
        return Containment::OutsideSpan;
    }
    let verts = hull.vertices();
    let n = verts.len();
    let mut twice_area = 0i64;
    for i in 0..n {
        let prev = verts[(i + n - 1) % n];
        let here = verts[i];
        let next = verts[(i + 1) % n];
        if orientation(here, next, query) < 0 {
            return Containment::OutsideEdge(i);
        }
        twice_area += here.x * (prev.y - next.y);
    }
    Containment::Inside { twice_area }
}
