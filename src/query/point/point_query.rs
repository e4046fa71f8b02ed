use crate::math::{Point, Real, DEFAULT_EPSILON};

/// Trait of objects that can be tested for point inclusion.
pub trait PointQuery {
    /// Tests if the given point is inside of `self`, or on its boundary up to `epsilon`.
    ///
    /// The meaning of `epsilon` is shape-specific. It must be non-negative.
    fn contains_point_with_tolerance(&self, pt: &Point<Real>, epsilon: Real) -> bool;

    /// Tests if the given point is inside of `self`, or on its boundary up to `DEFAULT_EPSILON`.
    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.contains_point_with_tolerance(pt, DEFAULT_EPSILON)
    }
}
