//! Non-persistent geometric queries on tetrahedra.
//!
//! * [`query::inscribed_sphere()`](crate::query::inscribed_sphere()) and
//!   [`query::inscribed_sphere_center()`](crate::query::inscribed_sphere_center()) locate the
//!   point of a tetrahedron furthest away from its faces.
//! * [`query::PointQuery`](crate::query::PointQuery) tests whether a point lies inside of a shape.

pub use self::error::TetrahedronError;
pub use self::inscribed_sphere::{inscribed_sphere, inscribed_sphere_center, InscribedSphere};
pub use self::point::PointQuery;

mod error;
mod inscribed_sphere;
pub mod point;
