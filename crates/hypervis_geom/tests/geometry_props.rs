//! Property-based tests across the geometry generators
//!
//! Exercises the cross-generator invariants: structural validity for every
//! supported dimension, root-count formulas, hull coverage on root systems,
//! and cross-section behavior over arbitrary slice values.

use proptest::prelude::*;

use hypervis_geom::{
    cross_section, extract_hull_faces, generate_cross_polytope, generate_hypercube,
    generate_root_system, generate_simplex, root_count, RootSystemConfig, RootType,
};

fn arb_root_config() -> impl Strategy<Value = (RootType, usize)> {
    prop_oneof![
        (3usize..=11).prop_map(|d| (RootType::A, d)),
        (4usize..=11).prop_map(|d| (RootType::D, d)),
        Just((RootType::E8, 8)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn polytopes_validate_in_every_dimension(dim in 3usize..=11, scale in 0.1f64..10.0) {
        for g in [
            generate_hypercube(dim.min(8), scale).unwrap(),
            generate_simplex(dim, scale).unwrap(),
            generate_cross_polytope(dim, scale).unwrap(),
        ] {
            prop_assert!(g.validate().is_ok());
            prop_assert!(g.vertex_count() > 0);
            prop_assert!(g.edge_count() > 0);
        }
    }

    #[test]
    fn root_systems_match_closed_form_counts((root_type, dim) in arb_root_config(),
                                             scale in 0.5f64..4.0) {
        let config = RootSystemConfig { root_type, scale };
        let g = generate_root_system(dim, &config).unwrap();
        prop_assert_eq!(g.vertex_count(), root_count(root_type, dim).unwrap());
        prop_assert!(g.validate().is_ok());
        for v in &g.vertices {
            prop_assert!((v.length() - scale).abs() < 1e-9);
        }
    }

    #[test]
    fn tesseract_slices_pin_the_axis(value in -2.0f64..2.0) {
        let tesseract = generate_hypercube(4, 1.0).unwrap();
        let result = cross_section(&tesseract, 3, value);
        if value.abs() > 1.0 {
            prop_assert!(!result.has_intersection);
            prop_assert!(result.points.is_empty());
        } else {
            prop_assert!(result.has_intersection);
            for p in &result.points {
                prop_assert_eq!(p.get(3), value);
                prop_assert!(p.is_finite());
            }
            for &[a, b] in &result.edges {
                prop_assert!(a < result.points.len());
                prop_assert!(b < result.points.len());
            }
        }
    }
}

#[test]
fn root_system_hulls_cover_every_root() {
    // Roots all lie on a sphere, so each must appear in at least one face
    for (root_type, dim) in [(RootType::A, 4), (RootType::D, 4), (RootType::D, 5)] {
        let config = RootSystemConfig {
            root_type,
            scale: 1.0,
        };
        let g = generate_root_system(dim, &config).unwrap();
        let faces = extract_hull_faces(&g.vertices);
        assert!(!faces.is_empty());

        let mut covered = vec![false; g.vertex_count()];
        for face in &faces {
            for &i in &face.indices {
                assert!(i < g.vertex_count());
                covered[i] = true;
            }
        }
        assert!(
            covered.iter().all(|&c| c),
            "{} root in no hull face for {:?} dim {}",
            covered.iter().filter(|&&c| !c).count(),
            root_type,
            dim
        );
    }
}

#[test]
fn a3_root_system_is_the_cuboctahedron() {
    // A3 roots are the 12 cuboctahedron vertices; its hull has 20 triangles
    // when the 6 squares triangulate into 2 each (8 triangle faces + 12)
    let config = RootSystemConfig {
        root_type: RootType::A,
        scale: 1.0,
    };
    let g = generate_root_system(4, &config).unwrap();
    assert_eq!(g.vertex_count(), 12);
    // Each root has 4 neighbors at 60 degrees in A3: 24 edges
    assert_eq!(g.edge_count(), 24);
}

#[test]
fn simplex_hull_recovers_all_boundary_triangles() {
    let g = generate_simplex(3, 1.0).unwrap();
    let faces = extract_hull_faces(&g.vertices);
    assert_eq!(faces.len(), 4);
}
