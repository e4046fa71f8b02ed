use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::Tetrahedron;

impl PointQuery for Tetrahedron {
    /// Tests if `pt` lies inside of this tetrahedron using signed volumes.
    ///
    /// Replacing each vertex by `pt` in turn yields four sub-tetrahedra. The point is
    /// inside if all of them have the same orientation as the tetrahedron itself, each
    /// sub-volume being allowed to be off by `epsilon` toward the wrong sign. Points on
    /// the boundary are therefore considered inside.
    ///
    /// A tetrahedron with a volume smaller than `epsilon` contains no point.
    fn contains_point_with_tolerance(&self, pt: &Point<Real>, epsilon: Real) -> bool {
        let vols = self.signed_sub_volumes(pt);

        if vols.abcd.abs() <= epsilon {
            return false;
        }

        if vols.abcd > 0.0 {
            vols.acdp > -epsilon
                && vols.abdp > -epsilon
                && vols.abcp > -epsilon
                && vols.bcdp() > -epsilon
        } else {
            vols.acdp < epsilon
                && vols.abdp < epsilon
                && vols.abcp < epsilon
                && vols.bcdp() < epsilon
        }
    }
}
