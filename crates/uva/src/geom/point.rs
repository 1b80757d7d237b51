//! Integer 2D points and the orientation primitive.

use nalgebra::Vector2;

/// Exact integer point/vector in the plane.
pub type IVec2 = Vector2<i64>;

/// Orientation of the triple `(a, b, c)`: positive when they turn clockwise,
/// negative when counterclockwise, zero when collinear.
///
/// This is the sole predicate the hull builder and the point classifier are
/// built from, and it is antisymmetric in its last two arguments.
#[inline]
pub fn orientation(a: IVec2, b: IVec2, c: IVec2) -> i64 {
    let ab = b - a;
    let ac = c - a;
    ab.y * ac.x - ac.y * ab.x
}
