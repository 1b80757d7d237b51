//! The missile campaign: kingdoms as a working set with a struck-area tally.
//!
//! Purpose
//! - `Kingdom` pairs a sorted site set with the hull built once from it.
//! - `Campaign` owns the kingdoms still standing, scans them per missile and
//!   swap-removes a kingdom the moment a missile lands inside it. Kingdoms
//!   never overlap, so a missile strikes at most one.

use crate::geom::{locate, Containment, Hull, IVec2};

/// A kingdom: its sites sorted ascending by `(x, y)` plus the clockwise hull
/// over them. Immutable after construction.
#[derive(Clone, Debug)]
pub struct Kingdom {
    sites: Vec<IVec2>,
    hull: Hull,
}

impl Kingdom {
    /// Sort the sites and build the border hull.
    ///
    /// Fewer than 3 effective hull vertices (a lone site, a segment, all
    /// sites collinear) produce a degenerate kingdom: zero area, never
    /// struck, never an error.
    pub fn new(mut sites: Vec<IVec2>) -> Self {
        sites.sort_by_key(|p| (p.x, p.y));
        let hull = Hull::of_sorted(&sites);
        Self { sites, hull }
    }

    #[inline]
    pub fn sites(&self) -> &[IVec2] {
        &self.sites
    }

    #[inline]
    pub fn hull(&self) -> &Hull {
        &self.hull
    }
}

/// Working set of standing kingdoms plus the accumulated twice-area of the
/// struck ones.
#[derive(Clone, Debug, Default)]
pub struct Campaign {
    kingdoms: Vec<Kingdom>,
    twice_area_struck: i64,
}

impl Campaign {
    pub fn push(&mut self, kingdom: Kingdom) {
        self.kingdoms.push(kingdom);
    }

    /// Kingdoms not yet struck. Their order is unspecified after any hit:
    /// removal swaps the last kingdom into the freed slot.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.kingdoms.len()
    }

    /// Land one missile. The first standing kingdom containing it is credited
    /// to the tally and removed; the removed kingdom is returned.
    pub fn strike(&mut self, missile: IVec2) -> Option<Kingdom> {
        for i in 0..self.kingdoms.len() {
            if let Containment::Inside { twice_area } = locate(self.kingdoms[i].hull(), missile) {
                self.twice_area_struck += twice_area;
                return Some(self.kingdoms.swap_remove(i));
            }
        }
        None
    }

    /// Total area of struck kingdoms: half the accumulated twice-area.
    /// Half-integers render exactly with two decimals.
    #[inline]
    pub fn struck_area(&self) -> f64 {
        self.twice_area_struck as f64 * 0.5
    }
}
