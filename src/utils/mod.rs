//! Various unsorted geometrical operators.

pub use self::center::center;
pub use self::vector_ops::{cross_product, dot_product, length, subtract, triangle_area};

mod center;
mod vector_ops;
