use tetra3d::math::Point;
use tetra3d::query::{self, PointQuery};
use tetra3d::shape::Tetrahedron;

fn print_coordinates(pt: &Point<f64>) {
    println!("x: {}", pt.x);
    println!("y: {}", pt.y);
    println!("z: {}", pt.z);
}

fn contains_point_demo() {
    let tetra = Tetrahedron::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(5.0, 0.0, 0.0),
        Point::new(0.0, 5.0, 0.0),
        Point::new(0.0, 0.0, 5.0),
    );
    let p = Point::new(2.0, 2.0, 1.0);

    if tetra.contains_point(&p) {
        println!("Point \"p\" lies inside the tetrahedron");
    } else {
        println!("Point \"p\" does not lie inside the tetrahedron");
    }
}

fn inscribed_sphere_demo() {
    let tetra = Tetrahedron::new(
        Point::new(0.0, 2.0, 3.0),
        Point::new(-2.0, 8.0, 9.0),
        Point::new(5.0, 0.0, 7.0),
        Point::new(3.0, 4.0, 2.0),
    );

    match query::inscribed_sphere_center(&tetra) {
        Ok(center) => {
            println!("Coordinates of point inside tetrahedron, located at maximum distance from its surface: ");
            print_coordinates(&center);
        }
        Err(err) => println!("{err}"),
    }
}

fn main() {
    contains_point_demo();
    inscribed_sphere_demo();
}
