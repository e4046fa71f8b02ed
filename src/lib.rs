/*!
tetra3d
========

**tetra3d** is a small 3-dimensional geometric library written with
the rust programming language. It answers two questions about a tetrahedron:
where the center of its inscribed sphere lies, and whether a given point lies
inside of it.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![deny(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The default tolerance used for geometric operations.
    ///
    /// Volumes with an absolute value below this threshold are considered zero, and
    /// barycentric sub-volumes are allowed to be this much negative while still
    /// counting as inside.
    pub const DEFAULT_EPSILON: Real = 1.0e-10;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
