//! Point inclusion.

pub use self::point_query::PointQuery;

mod point_query;
mod point_tetrahedron;
