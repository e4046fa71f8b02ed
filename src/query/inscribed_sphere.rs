use crate::math::{Point, Real};
use crate::query::TetrahedronError;
use crate::shape::Tetrahedron;
use approx::{AbsDiffEq, RelativeEq};

/// The sphere inscribed in a tetrahedron, i.e., tangent to its four faces.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InscribedSphere {
    /// The center of the sphere: the point of the tetrahedron furthest away from its faces.
    pub center: Point<Real>,
    /// The radius of the sphere: the distance between its center and each face of the tetrahedron.
    pub radius: Real,
}

impl InscribedSphere {
    /// Creates a new inscribed sphere description.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Self {
        Self { center, radius }
    }
}

impl AbsDiffEq for InscribedSphere {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.center.abs_diff_eq(&other.center, epsilon)
            && self.radius.abs_diff_eq(&other.radius, epsilon)
    }
}

impl RelativeEq for InscribedSphere {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.center.relative_eq(&other.center, epsilon, max_relative)
            && self.radius.relative_eq(&other.radius, epsilon, max_relative)
    }
}

/// Computes the center of the sphere inscribed in the given tetrahedron.
///
/// This is the average of the vertices, each weighted by the area of the face it doesn't
/// belong to. It is the point of the tetrahedron at maximum distance from its boundary.
///
/// Returns [`TetrahedronError::DegenerateGeometry`] if the tetrahedron is flat.
///
/// # Example
///
/// ```
/// use tetra3d::math::Point;
/// use tetra3d::query::{self, PointQuery};
/// use tetra3d::shape::Tetrahedron;
///
/// let tetra = Tetrahedron::new(
///     Point::new(0.0, 2.0, 3.0),
///     Point::new(-2.0, 8.0, 9.0),
///     Point::new(5.0, 0.0, 7.0),
///     Point::new(3.0, 4.0, 2.0),
/// );
///
/// let center = query::inscribed_sphere_center(&tetra).unwrap();
/// assert!(tetra.contains_point(&center));
/// ```
pub fn inscribed_sphere_center(tetra: &Tetrahedron) -> Result<Point<Real>, TetrahedronError> {
    inscribed_sphere(tetra).map(|sphere| sphere.center)
}

/// Computes the sphere inscribed in the given tetrahedron.
///
/// See [`inscribed_sphere_center`] for the center. The radius is `3V / S` where `V` is the
/// volume of the tetrahedron and `S` the sum of the areas of its faces.
///
/// Returns [`TetrahedronError::DegenerateGeometry`] if the tetrahedron is flat.
pub fn inscribed_sphere(tetra: &Tetrahedron) -> Result<InscribedSphere, TetrahedronError> {
    let signed_volume = tetra.signed_volume();
    Tetrahedron::check_volume(signed_volume)?;

    let [s_bcd, s_acd, s_abd, s_abc] = tetra.face_areas();
    let total_area = s_bcd + s_acd + s_abd + s_abc;

    let weighted = tetra.a.coords * s_bcd
        + tetra.b.coords * s_acd
        + tetra.c.coords * s_abd
        + tetra.d.coords * s_abc;

    Ok(InscribedSphere::new(
        Point::from(weighted / total_area),
        3.0 * signed_volume.abs() / total_area,
    ))
}
