//! Elementary vector algebra on points and vectors.
//!
//! These are thin wrappers over nalgebra's operators. The algorithms of this crate are
//! written in terms of them so that every edge vector, area and volume is derived the
//! same way.

use crate::math::{Point, Real, Vector};

/// The displacement vector going from `q` to `p`, i.e., `p - q`.
#[inline]
pub fn subtract(p: &Point<Real>, q: &Point<Real>) -> Vector<Real> {
    p - q
}

/// The Euclidean norm of `v`.
///
/// This is zero for the null vector and positive otherwise.
#[inline]
pub fn length(v: &Vector<Real>) -> Real {
    v.norm()
}

/// The right-handed cross product `a × b`.
///
/// Its magnitude is twice the area of the triangle spanned by `a` and `b`.
#[inline]
pub fn cross_product(a: &Vector<Real>, b: &Vector<Real>) -> Vector<Real> {
    a.cross(b)
}

/// The inner product of `a` and `b`.
#[inline]
pub fn dot_product(a: &Vector<Real>, b: &Vector<Real>) -> Real {
    a.dot(b)
}

/// The area of the triangle with edge vectors `a` and `b` starting from a shared vertex.
#[inline]
pub fn triangle_area(a: &Vector<Real>, b: &Vector<Real>) -> Real {
    length(&cross_product(a, b)) / 2.0
}
