use super::*;
use crate::geom2::rand::{draw_cloud, reference_points, CloudCfg, CloudShape, PointCount, ReplayToken};
use crate::geom2::{direction, Point, COORD_LIMIT};
use proptest::prelude::*;

fn p(x: i64, y: i64) -> Point {
    Point::new(x, y)
}

fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| p(x, y)).collect()
}

fn sorted_coords<'a>(it: impl IntoIterator<Item = &'a Point>) -> Vec<(i64, i64)> {
    let mut v: Vec<_> = it.into_iter().map(|q| (q.x, q.y)).collect();
    v.sort_unstable();
    v
}

#[test]
fn reference_scenario_pop_order() {
    let hull = graham_scan(&reference_points()).unwrap();
    let got: Vec<_> = hull.pop_order().copied().collect();
    assert_eq!(got, pts(&[(0, 3), (4, 4), (4, 1), (0, 0)]));
    assert_eq!(hull.kind(), HullKind::Polygon);
    assert_eq!(hull.pivot(), p(0, 0));
}

#[test]
fn reference_scenario_report() {
    let hull = graham_scan(&reference_points()).unwrap();
    let expected = "Convex Hull\n x: 0 y: 3\n x: 4 y: 4\n x: 4 y: 1\n x: 0 y: 0\n";
    assert_eq!(hull.to_string(), expected);
}

#[test]
fn collinear_points_on_an_edge_are_pruned() {
    let hull = graham_scan(&pts(&[(0, 0), (1, 0), (2, 0), (1, 1)])).unwrap();
    assert_eq!(sorted_coords(hull.ccw()), vec![(0, 0), (1, 1), (2, 0)]);
    assert_eq!(hull.ccw(), pts(&[(0, 0), (2, 0), (1, 1)]).as_slice());
}

#[test]
fn collinear_points_on_the_last_ray_are_pruned() {
    // (0,1) and (0,2) share the final ray from the pivot; only the far one survives.
    let hull = graham_scan(&pts(&[(0, 2), (2, 0), (0, 0), (0, 1), (1, 1)])).unwrap();
    assert_eq!(hull.ccw(), pts(&[(0, 0), (2, 0), (0, 2)]).as_slice());
}

#[test]
fn single_point_is_a_point_hull() {
    let hull = graham_scan(&pts(&[(5, -3)])).unwrap();
    assert_eq!(hull.kind(), HullKind::Point);
    assert_eq!(hull.into_vertices(), pts(&[(5, -3)]));
}

#[test]
fn two_points_form_a_segment() {
    let hull = graham_scan(&pts(&[(3, 3), (1, 1)])).unwrap();
    assert_eq!(hull.kind(), HullKind::Segment);
    assert!(hull.is_degenerate());
    assert_eq!(hull.into_vertices(), pts(&[(3, 3), (1, 1)]));
}

#[test]
fn coincident_points_collapse_to_a_point_kind() {
    let hull = graham_scan(&pts(&[(2, 2), (2, 2), (2, 2)])).unwrap();
    assert_eq!(hull.kind(), HullKind::Point);
    assert!(hull.ccw().iter().all(|q| *q == p(2, 2)));
}

#[test]
fn all_collinear_keeps_the_extremes() {
    let hull = graham_scan(&pts(&[(2, 2), (0, 0), (4, 4), (1, 1), (3, 3)])).unwrap();
    assert_eq!(hull.kind(), HullKind::Segment);
    assert_eq!(hull.ccw(), pts(&[(0, 0), (4, 4)]).as_slice());

    let row = graham_scan(&pts(&[(3, 7), (-1, 7), (9, 7), (0, 7)])).unwrap();
    assert_eq!(row.ccw(), pts(&[(-1, 7), (9, 7)]).as_slice());
}

#[test]
fn duplicate_pivot_does_not_survive() {
    let hull = graham_scan(&pts(&[(0, 0), (2, 0), (0, 0), (1, 2)])).unwrap();
    assert_eq!(hull.ccw(), pts(&[(0, 0), (2, 0), (1, 2)]).as_slice());
}

#[test]
fn empty_input_is_invalid() {
    assert!(matches!(graham_scan(&[]), Err(HullError::InvalidInput { .. })));
}

#[test]
fn strict_cfg_rejects_degenerate_hulls() {
    let err = graham_scan_with(&pts(&[(0, 0), (1, 1), (2, 2)]), HullCfg::strict()).unwrap_err();
    assert_eq!(
        err,
        HullError::DegenerateHull {
            kind: HullKind::Segment,
            vertices: 2
        }
    );
    assert!(graham_scan_with(&reference_points(), HullCfg::strict()).is_ok());
}

#[test]
fn strict_rejection_still_reorders_in_place() {
    let mut input = pts(&[(2, 2), (1, 1), (0, 0)]);
    let err = graham_scan_in_place(&mut input, HullCfg::strict()).unwrap_err();
    assert!(matches!(err, HullError::DegenerateHull { .. }));
    assert_eq!(input, pts(&[(0, 0), (1, 1), (2, 2)]));
}

#[test]
fn out_of_range_coordinates_are_rejected_untouched() {
    let mut input = pts(&[(1, 1), (0, 0), (COORD_LIMIT + 1, 5)]);
    let before = input.clone();
    let err = graham_scan_in_place(&mut input, HullCfg::default()).unwrap_err();
    assert!(matches!(err, HullError::OverflowRisk { x, y: 5, .. } if x == COORD_LIMIT + 1));
    assert_eq!(input, before);
}

#[test]
fn extreme_coordinates_are_exact() {
    let l = COORD_LIMIT;
    let hull = graham_scan(&pts(&[(-l, -l), (l, -l), (l, l), (-l, l), (0, 0)])).unwrap();
    assert_eq!(hull.len(), 4);
    assert_eq!(hull.twice_area(), 2 * (2 * l as i128) * (2 * l as i128));
    assert!(hull.contains(p(0, 0)));
    assert!(!hull.contains(p(i64::MAX, 0)));
}

#[test]
fn in_place_leaves_pivot_first_and_rest_sorted() {
    let mut input = reference_points();
    graham_scan_in_place(&mut input, HullCfg::default()).unwrap();
    assert_eq!(input[0], p(0, 0));
    let order = polar_order(input[0]);
    assert!(input[1..]
        .windows(2)
        .all(|w| order(&w[0], &w[1]) != std::cmp::Ordering::Greater));
    assert_eq!(
        input,
        pts(&[(0, 0), (4, 1), (4, 2), (1, 1), (2, 2), (3, 3), (4, 4), (1, 2), (0, 2), (0, 3)])
    );
}

#[test]
fn select_pivot_breaks_ties_by_x() {
    let mut input = pts(&[(3, 1), (5, 0), (2, 0), (1, 4)]);
    assert_eq!(select_pivot(&mut input), Some(p(2, 0)));
    assert_eq!(input, pts(&[(2, 0), (5, 0), (3, 1), (1, 4)]));
    assert_eq!(select_pivot(&mut []), None);
}

#[test]
fn scan_keeps_only_left_turns() {
    let sorted = pts(&[(0, 0), (2, 0), (1, 1), (2, 2), (0, 2)]);
    assert_eq!(scan(&sorted), pts(&[(0, 0), (2, 0), (2, 2), (0, 2)]));
}

#[test]
fn contains_handles_segment_and_point_hulls() {
    let seg = graham_scan(&pts(&[(0, 0), (4, 2)])).unwrap();
    assert!(seg.contains(p(2, 1)));
    assert!(seg.contains(p(4, 2)));
    assert!(!seg.contains(p(6, 3)));
    assert!(!seg.contains(p(2, 2)));
    let pt = graham_scan(&pts(&[(1, 1)])).unwrap();
    assert!(pt.contains(p(1, 1)));
    assert!(!pt.contains(p(1, 2)));
}

#[test]
fn sampled_clouds_satisfy_hull_properties() {
    for index in 0..20 {
        let cfg = CloudCfg {
            count: PointCount::Uniform { min: 3, max: 200 },
            radius: 10_000,
            shape: if index % 2 == 0 {
                CloudShape::Disk
            } else {
                CloudShape::Square
            },
        };
        let cloud = draw_cloud(cfg, ReplayToken { seed: 2025, index }).unwrap();
        let hull = graham_scan(&cloud).unwrap();
        check_hull(&cloud, &hull).unwrap();
    }
}

/// Vertex origin, convexity (pop order turns clockwise), containment, pivot membership.
fn check_hull(input: &[Point], hull: &Hull) -> Result<(), String> {
    for v in hull.ccw() {
        if !input.contains(v) {
            return Err(format!("vertex {v:?} is not an input point"));
        }
    }
    let popped: Vec<Point> = hull.pop_order().copied().collect();
    let n = popped.len();
    if n >= 3 {
        for i in 0..n {
            let d = direction(popped[i], popped[(i + 1) % n], popped[(i + 2) % n]);
            if d >= 0 {
                return Err(format!("non-clockwise turn at {i} in pop order"));
            }
        }
    }
    if let Some(q) = input.iter().find(|q| !hull.contains(**q)) {
        return Err(format!("input point {q:?} outside hull"));
    }
    let lowest = input.iter().min_by_key(|q| (q.y, q.x)).copied();
    if lowest != Some(hull.pivot()) {
        return Err("pivot mismatch".into());
    }
    Ok(())
}

fn cloud(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-30i64..30, -30i64..30), 1..max_len)
        .prop_map(|raw| raw.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

proptest! {
    #[test]
    fn hull_properties_hold(input in cloud(60)) {
        let hull = graham_scan(&input).unwrap();
        prop_assert_eq!(check_hull(&input, &hull), Ok(()));
    }

    #[test]
    fn permutations_give_the_same_hull((input, shuffled) in cloud(40).prop_flat_map(|v| {
        let w = Just(v.clone()).prop_shuffle();
        (Just(v), w)
    })) {
        let a = graham_scan(&input).unwrap();
        let b = graham_scan(&shuffled).unwrap();
        prop_assert_eq!(sorted_coords(a.ccw()), sorted_coords(b.ccw()));
        prop_assert_eq!(a.kind(), b.kind());
    }

    #[test]
    fn twice_area_is_nonnegative_and_zero_only_when_degenerate(input in cloud(40)) {
        let hull = graham_scan(&input).unwrap();
        let area = hull.twice_area();
        prop_assert!(area >= 0);
        prop_assert_eq!(area == 0, hull.is_degenerate());
    }
}
