//! Definition of the triangle shape.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::utils;
use na::Unit;

/// A triangle shape.
///
/// In this crate, triangles mostly appear as the faces of a [`Tetrahedron`](crate::shape::Tetrahedron).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// A vector normal to this triangle, with a length equal to twice its area.
    ///
    /// It points toward the side from which `a`, `b`, `c` appear counter-clockwise.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = utils::subtract(&self.b, &self.a);
        let ac = utils::subtract(&self.c, &self.a);
        utils::cross_product(&ab, &ac)
    }

    /// The unit normal of this triangle.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_normal(), DEFAULT_EPSILON)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        let ab = utils::subtract(&self.b, &self.a);
        let ac = utils::subtract(&self.c, &self.a);
        utils::triangle_area(&ab, &ac)
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&[self.a, self.b, self.c])
    }

    /// The signed distance from `pt` to the plane of this triangle.
    ///
    /// The distance is positive on the side the normal points to. Returns `None` if the
    /// triangle is degenerate.
    pub fn distance_to_plane(&self, pt: &Point<Real>) -> Option<Real> {
        self.normal()
            .map(|n| utils::dot_product(&n, &utils::subtract(pt, &self.a)))
    }
}
