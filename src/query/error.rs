use crate::math::Real;

/// Errors that can occur when computing geometric properties of a tetrahedron.
///
/// Flat tetrahedra are valid values but many of their properties (insphere, barycentric
/// coordinates) are undefined. Instead of silently producing NaN or infinite values,
/// queries on such a tetrahedron return this error.
///
/// # Example
///
/// ```
/// use tetra3d::math::Point;
/// use tetra3d::query::{self, TetrahedronError};
/// use tetra3d::shape::Tetrahedron;
///
/// // Four points on the plane `z = 0`.
/// let flat = Tetrahedron::new(
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(1.0, 1.0, 0.0),
/// );
///
/// match query::inscribed_sphere_center(&flat) {
///     Err(TetrahedronError::DegenerateGeometry { signed_volume }) => {
///         assert_eq!(signed_volume, 0.0);
///     }
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum TetrahedronError {
    /// The four vertices of the tetrahedron are coplanar, up to `DEFAULT_EPSILON`.
    #[error("the tetrahedron is degenerate: its vertices are coplanar (signed volume: {signed_volume}).")]
    DegenerateGeometry {
        /// The signed volume of the rejected tetrahedron.
        signed_volume: Real,
    },
}
