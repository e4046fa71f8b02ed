//! Shapes supported by tetra3d.

pub use self::tetrahedron::Tetrahedron;
pub use self::triangle::Triangle;

mod tetrahedron;
mod triangle;
