use proptest::prelude::*;

use super::*;

/// Twice the absolute polygon area, coded independently of the classifier's
/// incremental form: plain cross-product shoelace over closed vertex pairs.
fn shoelace_twice_area(verts: &[IVec2]) -> i64 {
    let n = verts.len();
    let mut acc = 0i64;
    for i in 0..n {
        let p = verts[i];
        let q = verts[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    acc.abs()
}

fn hull_of(mut sites: Vec<IVec2>) -> Hull {
    sites.sort_by_key(|p| (p.x, p.y));
    Hull::of_sorted(&sites)
}

fn square_4x4() -> Hull {
    hull_of(vec![
        IVec2::new(4, 4),
        IVec2::new(0, 0),
        IVec2::new(4, 0),
        IVec2::new(0, 4),
    ])
}

#[test]
fn orientation_signs() {
    let a = IVec2::new(0, 0);
    let b = IVec2::new(0, 2);
    let c = IVec2::new(2, 2);
    assert!(orientation(a, b, c) > 0); // right turn: clockwise
    assert!(orientation(a, c, b) < 0);
    assert_eq!(orientation(a, b, IVec2::new(0, 5)), 0);
}

#[test]
fn square_hull_clockwise_from_leftmost_bottom() {
    let hull = hull_of(vec![
        IVec2::new(4, 4),
        IVec2::new(0, 0),
        IVec2::new(4, 0),
        IVec2::new(0, 4),
        IVec2::new(2, 2), // interior site
    ]);
    let expect = [
        IVec2::new(0, 0),
        IVec2::new(0, 4),
        IVec2::new(4, 4),
        IVec2::new(4, 0),
    ];
    assert_eq!(hull.vertices(), expect);
    assert_eq!(hull.x_span(), (0, 4));
}

#[test]
fn collinear_edge_points_are_excluded() {
    let hull = hull_of(vec![
        IVec2::new(0, 0),
        IVec2::new(2, 0),
        IVec2::new(4, 0),
        IVec2::new(4, 4),
        IVec2::new(0, 4),
        IVec2::new(0, 2),
    ]);
    assert_eq!(hull.len(), 4);
}

#[test]
fn duplicate_sites_are_tolerated() {
    let hull = hull_of(vec![
        IVec2::new(0, 0),
        IVec2::new(0, 0),
        IVec2::new(4, 0),
        IVec2::new(0, 4),
        IVec2::new(4, 0),
    ]);
    assert_eq!(hull.len(), 3);
}

#[test]
fn collinear_sites_give_degenerate_hull() {
    let hull = hull_of(vec![IVec2::new(0, 0), IVec2::new(1, 1), IVec2::new(2, 2)]);
    assert!(hull.is_degenerate());
    // Degenerate hulls match nothing, not even their own sites.
    assert_eq!(locate(&hull, IVec2::new(1, 1)), Containment::OutsideSpan);
}

#[test]
fn x_span_filter_rejects_without_an_edge_scan() {
    let hull = square_4x4();
    assert_eq!(locate(&hull, IVec2::new(-1, 2)), Containment::OutsideSpan);
    assert_eq!(locate(&hull, IVec2::new(5, 2)), Containment::OutsideSpan);
    // Inside the span but above the hull: a specific edge rejects instead.
    assert_eq!(locate(&hull, IVec2::new(2, 5)), Containment::OutsideEdge(1));
    assert_eq!(locate(&hull, IVec2::new(2, -1)), Containment::OutsideEdge(3));
}

#[test]
fn boundary_points_count_as_inside() {
    let hull = square_4x4();
    for q in [
        IVec2::new(0, 2), // edge interior
        IVec2::new(0, 0), // vertex
        IVec2::new(4, 2),
        IVec2::new(2, 4),
    ] {
        assert!(matches!(locate(&hull, q), Containment::Inside { .. }));
    }
}

#[test]
fn classifier_area_matches_independent_shoelace() {
    let triangle = hull_of(vec![IVec2::new(0, 0), IVec2::new(4, 0), IVec2::new(0, 4)]);
    let square = square_4x4();
    let hexagon = hull_of(vec![
        IVec2::new(0, 0),
        IVec2::new(2, -1),
        IVec2::new(4, 0),
        IVec2::new(5, 2),
        IVec2::new(3, 4),
        IVec2::new(1, 3),
    ]);
    assert_eq!(hexagon.len(), 6);
    for (hull, inside) in [
        (triangle, IVec2::new(1, 1)),
        (square, IVec2::new(2, 2)),
        (hexagon, IVec2::new(2, 1)),
    ] {
        match locate(&hull, inside) {
            Containment::Inside { twice_area } => {
                assert_eq!(twice_area, shoelace_twice_area(hull.vertices()));
            }
            other => panic!("expected containment, got {other:?}"),
        }
    }
}

fn site_vec() -> impl Strategy<Value = Vec<IVec2>> {
    prop::collection::vec(
        (-50i64..=50, -50i64..=50).prop_map(|(x, y)| IVec2::new(x, y)),
        1..40,
    )
}

proptest! {
    #[test]
    fn orientation_is_antisymmetric(
        coords in (-1000i64..1000, -1000i64..1000, -1000i64..1000,
                   -1000i64..1000, -1000i64..1000, -1000i64..1000)
    ) {
        let (ax, ay, bx, by, cx, cy) = coords;
        let (a, b, c) = (IVec2::new(ax, ay), IVec2::new(bx, by), IVec2::new(cx, cy));
        prop_assert_eq!(orientation(a, b, c), -orientation(a, c, b));
    }

    #[test]
    fn every_site_lands_inside_or_on_its_hull(sites in site_vec()) {
        let hull = hull_of(sites.clone());
        prop_assume!(!hull.is_degenerate());
        for &s in &sites {
            let contained = matches!(locate(&hull, s), Containment::Inside { .. });
            prop_assert!(contained, "site {s:?} not inside its own hull");
        }
    }

    #[test]
    fn hull_triples_turn_strictly_clockwise(sites in site_vec()) {
        let hull = hull_of(sites);
        prop_assume!(!hull.is_degenerate());
        let v = hull.vertices();
        let n = v.len();
        for i in 0..n {
            prop_assert!(orientation(v[(i + n - 1) % n], v[i], v[(i + 1) % n]) > 0);
        }
    }

    #[test]
    fn hull_vertices_are_input_sites(sites in site_vec()) {
        let hull = hull_of(sites.clone());
        for v in hull.vertices() {
            prop_assert!(sites.contains(v));
        }
    }
}
