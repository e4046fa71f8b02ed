use super::random_point;
use na::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tetra3d::utils::{cross_product, dot_product, length, subtract, triangle_area};

#[test]
fn cross_product_antisymmetry() {
    let mut rng = StdRng::seed_from_u64(20);

    for _ in 0..100 {
        let a = random_point(&mut rng).coords;
        let b = random_point(&mut rng).coords;
        assert_eq!(cross_product(&a, &b), -cross_product(&b, &a));
    }
}

#[test]
fn cross_product_is_orthogonal_to_its_operands() {
    let mut rng = StdRng::seed_from_u64(21);

    for _ in 0..100 {
        let a = random_point(&mut rng).coords;
        let b = random_point(&mut rng).coords;
        let axb = cross_product(&a, &b);

        assert_relative_eq!(dot_product(&axb, &a), 0.0, epsilon = 1.0e-9);
        assert_relative_eq!(dot_product(&axb, &b), 0.0, epsilon = 1.0e-9);
    }
}

#[test]
fn length_is_non_negative() {
    let mut rng = StdRng::seed_from_u64(22);

    assert_eq!(length(&Vector3::zeros()), 0.0);

    for _ in 0..100 {
        let p = random_point(&mut rng);
        let q = random_point(&mut rng);
        let pq = subtract(&q, &p);

        assert!(length(&pq) > 0.0);
        assert_relative_eq!(length(&pq), na::distance(&p, &q), epsilon = 1.0e-12);
    }
}

#[test]
fn triangle_area_is_half_the_parallelogram() {
    let a = Vector3::new(3.0, 0.0, 0.0);
    let b = Vector3::new(1.0, 2.0, 0.0);

    assert_relative_eq!(triangle_area(&a, &b), 3.0);
    assert_relative_eq!(triangle_area(&b, &a), 3.0);
}
