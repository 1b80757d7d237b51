//! Clockwise convex hulls over pre-sorted integer sites.

use super::point::{orientation, IVec2};

/// Convex hull of a site set: vertices in clockwise order starting at the
/// leftmost-bottommost site, with collinear edge-interior points excluded.
///
/// Hulls with fewer than 3 vertices are degenerate: they have zero area and
/// never contain anything (see `classify::locate`).
#[derive(Clone, Debug)]
pub struct Hull {
    verts: Vec<IVec2>,
    /// Index of the rightmost vertex, the seam between the two chains.
    rightmost: usize,
}

impl Hull {
    /// Build the hull from sites sorted ascending by `(x, y)`.
    ///
    /// Andrew's monotone chain, specialized to the clockwise convention: the
    /// upper chain walks left to right, the lower chain back, each popping
    /// while the last turn fails to be strictly clockwise (`orientation <=
    /// 0`), so collinear edge-interior points and duplicate sites never
    /// survive into the vertex sequence.
    pub fn of_sorted(sites: &[IVec2]) -> Self {
        if sites.len() <= 2 {
            return Self {
                verts: sites.to_vec(),
                rightmost: sites.len().saturating_sub(1),
            };
        }
        let mut upper: Vec<IVec2> = Vec::with_capacity(sites.len());
        for &p in sites {
            while upper.len() >= 2
                && orientation(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0
            {
                upper.pop();
            }
            upper.push(p);
        }
        let rightmost = upper.len() - 1;
        let mut lower: Vec<IVec2> = Vec::with_capacity(sites.len());
        for &p in sites.iter().rev() {
            while lower.len() >= 2
                && orientation(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0
            {
                lower.pop();
            }
            lower.push(p);
        }
        // The seam vertices (leftmost, rightmost) appear in both chains.
        let mut verts = upper;
        verts.extend_from_slice(&lower[1..lower.len() - 1]);
        Self { verts, rightmost }
    }

    #[inline]
    pub fn vertices(&self) -> &[IVec2] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// A point or a segment: zero area, matches no query point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.verts.len() < 3
    }

    /// X-extent of the hull, which is also the x-extent of its site set.
    ///
    /// Panics on an empty hull; callers check `is_empty` (or the stronger
    /// `is_degenerate`) first.
    #[inline]
    pub fn x_span(&self) -> (i64, i64) {
        (self.verts[0].x, self.verts[self.rightmost].x)
    }
}
