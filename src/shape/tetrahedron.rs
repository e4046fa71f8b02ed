//! Definition of the tetrahedron shape.

use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::query::TetrahedronError;
use crate::shape::Triangle;
use crate::utils;
use core::mem;

/// A tetrahedron with 4 vertices.
///
/// No orientation is assumed: the sign of [`Tetrahedron::signed_volume`] tells whether
/// `d` lies on the side of the plane `(a, b, c)` pointed to by its counter-clockwise normal.
/// Flat (coplanar) tetrahedra are valid values; queries that cannot give them a meaning
/// either return `false` or [`TetrahedronError::DegenerateGeometry`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Tetrahedron {
    /// The tetrahedron first point.
    pub a: Point<Real>,
    /// The tetrahedron second point.
    pub b: Point<Real>,
    /// The tetrahedron third point.
    pub c: Point<Real>,
    /// The tetrahedron fourth point.
    pub d: Point<Real>,
}

/// The signed volumes involved in locating a point relative to a tetrahedron `ABCD`.
///
/// Each sub-volume is the volume of `ABCD` with one of its vertices replaced by the
/// query point `P`, so all of them share the sign of `abcd` when `P` is inside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct SignedSubVolumes {
    pub abcd: Real,
    pub acdp: Real,
    pub abdp: Real,
    pub abcp: Real,
}

impl SignedSubVolumes {
    /// The sub-volume where `A` is replaced by `P`, i.e., the one facing the face `BCD`.
    #[inline]
    pub fn bcdp(&self) -> Real {
        self.abcd - self.acdp - self.abdp - self.abcp
    }
}

impl Tetrahedron {
    /// Creates a tetrahedron from four points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>, d: Point<Real>) -> Tetrahedron {
        Tetrahedron { a, b, c, d }
    }

    /// Creates the reference to a tetrahedron from the reference to an array of four points.
    pub fn from_array(arr: &[Point<Real>; 4]) -> &Tetrahedron {
        // SAFETY: `Tetrahedron` is `repr(C)` and made of exactly four points.
        unsafe { mem::transmute(arr) }
    }

    /// The four vertices of this tetrahedron, in the order `[a, b, c, d]`.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Returns the face of this tetrahedron opposite to its `i`-th vertex.
    ///
    /// The 0-th face is the triangle BCD.
    /// The 1-st face is the triangle ACD.
    /// The 2-nd face is the triangle ABD.
    /// The 3-rd face is the triangle ABC.
    pub fn face(&self, i: usize) -> Triangle {
        let (i1, i2, i3) = Self::face_ids(i);
        let pts = self.vertices();
        Triangle::new(pts[i1], pts[i2], pts[i3])
    }

    /// Returns the indices of the vertices of the face opposite to the `i`-th vertex.
    ///
    /// See [`Tetrahedron::face`] for the face ordering.
    pub fn face_ids(i: usize) -> (usize, usize, usize) {
        match i {
            0 => (1, 2, 3),
            1 => (0, 2, 3),
            2 => (0, 1, 3),
            3 => (0, 1, 2),
            _ => panic!("Tetrahedron face index out of bounds (must be < 4)."),
        }
    }

    /// The areas of the four faces, each one stored at the index of the vertex it doesn't touch.
    ///
    /// That is `[S_BCD, S_ACD, S_ABD, S_ABC]`.
    #[inline]
    pub fn face_areas(&self) -> [Real; 4] {
        [
            self.face(0).area(),
            self.face(1).area(),
            self.face(2).area(),
            self.face(3).area(),
        ]
    }

    /// Computes the volume of this tetrahedron.
    #[inline]
    pub fn volume(&self) -> Real {
        self.signed_volume().abs()
    }

    /// Computes the signed volume of this tetrahedron.
    ///
    /// If it is positive, `d` is on the half-space pointed by the normal of the oriented triangle
    /// `(a, b, c)`.
    #[inline]
    pub fn signed_volume(&self) -> Real {
        let ab = utils::subtract(&self.b, &self.a);
        let ac = utils::subtract(&self.c, &self.a);
        let ad = utils::subtract(&self.d, &self.a);

        utils::dot_product(&ab, &utils::cross_product(&ac, &ad)) / 6.0
    }

    /// Returns `true` if the four vertices are coplanar, up to `DEFAULT_EPSILON`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.signed_volume().abs() <= DEFAULT_EPSILON
    }

    /// Computes the center of this tetrahedron.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&self.vertices())
    }

    /// Computes the barycentric coordinates of the given point in the coordinate system of this tetrahedron.
    ///
    /// The coordinates are ordered like the vertices they weight (`a`, `b`, `c`, `d`) and sum to 1.
    /// They are all non-negative if, and only if, `pt` lies inside of the tetrahedron.
    ///
    /// Returns [`TetrahedronError::DegenerateGeometry`] if this tetrahedron is flat.
    pub fn barycentric_coordinates(&self, pt: &Point<Real>) -> Result<[Real; 4], TetrahedronError> {
        let vols = self.signed_sub_volumes(pt);
        Self::check_volume(vols.abcd)?;

        let inv_vol = 1.0 / vols.abcd;
        Ok([
            vols.bcdp() * inv_vol,
            vols.acdp * inv_vol,
            vols.abdp * inv_vol,
            vols.abcp * inv_vol,
        ])
    }

    pub(crate) fn signed_sub_volumes(&self, pt: &Point<Real>) -> SignedSubVolumes {
        let ab = utils::subtract(&self.b, &self.a);
        let ac = utils::subtract(&self.c, &self.a);
        let ad = utils::subtract(&self.d, &self.a);
        let ap = utils::subtract(pt, &self.a);

        let ac_x_ad = utils::cross_product(&ac, &ad);

        SignedSubVolumes {
            abcd: utils::dot_product(&ab, &ac_x_ad) / 6.0,
            acdp: utils::dot_product(&ap, &ac_x_ad) / 6.0,
            abdp: utils::dot_product(&ap, &utils::cross_product(&ad, &ab)) / 6.0,
            abcp: utils::dot_product(&ap, &utils::cross_product(&ab, &ac)) / 6.0,
        }
    }

    /// Fails with `DegenerateGeometry` if `signed_volume` is zero up to `DEFAULT_EPSILON`.
    pub(crate) fn check_volume(signed_volume: Real) -> Result<(), TetrahedronError> {
        if signed_volume.abs() <= DEFAULT_EPSILON {
            log::debug!(
                "Rejecting degenerate tetrahedron with signed volume {}.",
                signed_volume
            );
            Err(TetrahedronError::DegenerateGeometry { signed_volume })
        } else {
            Ok(())
        }
    }
}
