use super::{random_tetrahedron, vertex_permutations};
use na::Point3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tetra3d::query::{self, PointQuery, TetrahedronError};
use tetra3d::shape::Tetrahedron;

fn skewed() -> Tetrahedron {
    Tetrahedron::new(
        Point3::new(0.0, 2.0, 3.0),
        Point3::new(-2.0, 8.0, 9.0),
        Point3::new(5.0, 0.0, 7.0),
        Point3::new(3.0, 4.0, 2.0),
    )
}

#[test]
fn skewed_tetrahedron_incenter_regression() {
    let center = query::inscribed_sphere_center(&skewed()).unwrap();
    let expected = Point3::new(1.6289366765286257, 3.101640432247629, 4.215994491302461);

    assert_relative_eq!(center, expected, epsilon = 1.0e-9);
}

#[test]
fn skewed_tetrahedron_inradius() {
    let tetra = skewed();
    let sphere = query::inscribed_sphere(&tetra).unwrap();

    assert_relative_eq!(tetra.signed_volume(), 35.0, epsilon = 1.0e-9);
    assert_relative_eq!(sphere.radius, 1.1786528376720455, epsilon = 1.0e-9);
}

#[test]
fn incenter_is_contained() {
    let mut rng = StdRng::seed_from_u64(10);

    for _ in 0..200 {
        let tetra = random_tetrahedron(&mut rng, 1.0);
        let center = query::inscribed_sphere_center(&tetra).unwrap();
        assert!(tetra.contains_point(&center), "{:?}", tetra);
    }
}

#[test]
fn incenter_is_equidistant_from_faces() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..200 {
        let tetra = random_tetrahedron(&mut rng, 1.0);
        let sphere = query::inscribed_sphere(&tetra).unwrap();

        for i in 0..4 {
            let dist = tetra.face(i).distance_to_plane(&sphere.center).unwrap();
            assert_relative_eq!(dist.abs(), sphere.radius, epsilon = 1.0e-9);
        }
    }
}

#[test]
fn incenter_does_not_depend_on_vertex_labels() {
    let tetra = skewed();
    let expected = query::inscribed_sphere(&tetra).unwrap();

    for permuted in vertex_permutations(&tetra) {
        let sphere = query::inscribed_sphere(&permuted).unwrap();
        assert_relative_eq!(sphere, expected, epsilon = 1.0e-9);
    }
}

#[test]
fn degenerate_tetrahedron_is_reported() {
    let flat = Tetrahedron::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(2.0, 2.0, 2.0),
        Point3::new(3.0, -1.0, 0.5),
    );

    let err = query::inscribed_sphere_center(&flat).unwrap_err();
    assert!(matches!(err, TetrahedronError::DegenerateGeometry { .. }));
    assert!(err.to_string().contains("degenerate"));
}
