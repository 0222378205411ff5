use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn bisector_point_of_two_sites() {
    let sites = [vector![0.0, 0.0], vector![4.0, 0.0]];
    let d = -2.0;
    assert_eq!(evaluate_parabola(sites[0], d, 2.0), 0.0);
    assert_eq!(evaluate_parabola(sites[1], d, 2.0), 0.0);
    let grid = SampleGrid::new(0.0, 4.0, 5);
    assert_eq!(grid.x(2), 2.0);
    let env = sample_envelope(&sites, d, &grid);
    assert_eq!(env.heights()[2], 0.0);
    // Ties keep the lower index.
    assert_eq!(env.owners()[2], Some(0));
    assert_eq!(env.owners()[4], Some(1));
}

#[test]
fn site_on_directrix_is_degenerate_not_nan() {
    let focus = vector![0.0, 10.0];
    for x in [-3.0, -1e-12, 1e-9, 1.0, 250.0] {
        assert_eq!(evaluate_parabola(focus, 10.0, x), f64::INFINITY);
    }
    assert_eq!(evaluate_parabola(focus, 10.0, 0.0), 10.0);
    assert!(is_active(focus, 10.0));
    let grid = SampleGrid::new(-1.0, 1.0, 4);
    let env = sample_envelope(&[focus], 10.0, &grid);
    assert!(env.heights().iter().all(|h| *h == f64::INFINITY));
    assert!(env.is_unbounded());
    assert!(env.arc_spans().is_empty());
}

#[test]
fn no_active_sites_means_infinite_envelope() {
    let sites = [vector![0.0, 0.0], vector![1.0, 5.0]];
    let grid = SampleGrid::new(-2.0, 2.0, 9);
    let env = sample_envelope(&sites, 6.0, &grid);
    assert!(env.heights().iter().all(|h| h.is_infinite() && *h > 0.0));
    assert!(env.owners().iter().all(Option::is_none));
    assert!(revealed_points(&env, &sites).is_empty());
    let empty = sample_envelope(&[], 0.0, &grid);
    assert!(empty.is_unbounded());
}

#[test]
fn grid_columns_and_clamping() {
    let g = SampleGrid::new(0.0, 10.0, 11);
    assert_eq!(g.len(), 11);
    assert_eq!(g.step(), 1.0);
    assert_eq!(g.x(3), 3.0);
    assert_eq!(g.x(10), 10.0);
    assert_eq!(g.column_of(3.4), 3);
    assert_eq!(g.column_of(3.6), 4);
    assert_eq!(g.column_of(-5.0), 0);
    assert_eq!(g.column_of(10.0 + 1e-9), 10);
    assert_eq!(g.column_of(f64::INFINITY), 10);
    assert_eq!(g.column_of(f64::NAN), 0);
    let single = SampleGrid::new(3.0, 7.0, 0);
    assert_eq!(single.len(), 1);
    assert_eq!(single.x(0), 3.0);
    assert_eq!(single.column_of(100.0), 0);
    let flat = SampleGrid::new(2.0, 2.0, 16);
    assert_eq!(flat.column_of(5.0), 0);
    assert_eq!(SampleGrid::new(5.0, 1.0, 3).min_x(), 1.0);
}

#[test]
fn visibility_and_edge_policies() {
    let site = vector![0.0, 0.0];
    let grid = SampleGrid::new(-4.0, 4.0, 9);
    // y = x²/4 - 1
    let env = sample_envelope(&[site], -2.0, &grid);
    assert_eq!(env.height_at(0.0), -1.0);
    assert_eq!(env.height_at(2.0), 0.0);
    assert!(is_revealed(&env, site));
    assert!(is_revealed(&env, vector![0.0, -1.0]));
    assert!(!is_revealed(&env, vector![0.0, -1.5]));
    // Out-of-span abscissa clamps to the edge column (x = 4, height 3).
    assert!(is_revealed(&env, vector![4.3, 3.0]));
    assert!(!is_revealed(&env, vector![4.3, 2.9]));

    let (start, end) = (vector![0.0, 0.0], vector![0.0, -3.0]);
    assert!(!is_edge_revealed(&env, start, end, EdgePolicy::BothEndpoints));
    assert!(is_edge_revealed(&env, start, end, EdgePolicy::StartEndpoint));
    assert!(!is_edge_revealed(&env, end, start, EdgePolicy::StartEndpoint));
    let starts = [start, vector![1.0, 5.0]];
    let ends = [end, vector![-1.0, 0.0]];
    assert_eq!(revealed_edges(&env, &starts, &ends, EdgePolicy::BothEndpoints), vec![1]);
    assert_eq!(revealed_edges(&env, &starts, &ends, EdgePolicy::StartEndpoint), vec![0, 1]);
    assert_eq!(EdgePolicy::default(), EdgePolicy::BothEndpoints);
}

#[test]
fn exact_reveal_directrix_matches_boundary() {
    let sites = [vector![0.0, 0.0], vector![10.0, 10.0]];
    let p = vector![0.0, -1.0];
    let d = reveal_directrix(p, &sites).unwrap();
    assert_eq!(d, -2.0);
    let grid = SampleGrid::new(-4.0, 4.0, 9);
    assert!(is_revealed(&sample_envelope(&sites, d, &grid), p));
    assert!(!is_revealed(&sample_envelope(&sites, d + 0.1, &grid), p));
    assert!(reveal_directrix(p, &[]).is_none());
}

#[test]
fn breakpoint_cases() {
    // Equal ordinates: midpoint, only in left-to-right order.
    let bp = breakpoint(vector![0.0, 0.0], vector![4.0, 0.0], -2.0).unwrap();
    assert_eq!(bp, vector![2.0, 0.0]);
    assert!(breakpoint(vector![4.0, 0.0], vector![0.0, 0.0], -2.0).is_none());
    // Focus on the directrix pins the breakpoint under it.
    let bp = breakpoint(vector![1.0, 0.0], vector![4.0, 1.0], 0.0).unwrap();
    assert_eq!(bp, vector![1.0, 5.0]);
    // Inactive or doubly degenerate.
    assert!(breakpoint(vector![0.0, -1.0], vector![4.0, 1.0], 0.0).is_none());
    assert!(breakpoint(vector![0.0, 0.0], vector![4.0, 0.0], 0.0).is_none());
    // General position: both arcs agree, and swapping picks the other crossing.
    let (l, r) = (vector![0.0, 2.0], vector![2.0, 1.0]);
    let a = breakpoint(l, r, 0.0).unwrap();
    let b = breakpoint(r, l, 0.0).unwrap();
    assert!(close(a.x, 4.0 - 10f64.sqrt(), 1e-12));
    assert!(close(b.x, 4.0 + 10f64.sqrt(), 1e-12));
    for p in [a, b] {
        assert!(close(evaluate_parabola(l, 0.0, p.x), p.y, 1e-9));
        assert!(close(evaluate_parabola(r, 0.0, p.x), p.y, 1e-9));
    }
}

#[test]
fn arc_spans_follow_sampled_owners() {
    let sites = [vector![0.0, 2.0], vector![2.0, 1.0]];
    let grid = SampleGrid::new(-10.0, 20.0, 3001);
    let env = sample_envelope(&sites, 0.0, &grid);
    let spans = env.arc_spans();
    assert_eq!(spans.iter().map(|s| s.site).collect::<Vec<_>>(), vec![0, 1, 0]);
    assert_eq!(spans[0].first, 0);
    assert_eq!(spans[2].last, grid.len() - 1);
    let bps = env.breakpoints(&sites);
    assert_eq!(bps.len(), 2);
    for (bp, span) in bps.iter().zip(&spans[1..]) {
        assert!((grid.x(span.first) - bp.x).abs() <= grid.step());
    }
}

#[test]
fn sample_arc_matches_evaluator() {
    let grid = SampleGrid::new(-1.0, 1.0, 5);
    let focus = vector![0.5, 3.0];
    let arc = sample_arc(focus, 1.0, &grid);
    assert_eq!(arc.len(), 5);
    for (x, h) in grid.xs().zip(arc) {
        assert_eq!(h, evaluate_parabola(focus, 1.0, x));
    }
}

fn point() -> impl Strategy<Value = Vector2<f64>> {
    (-50.0..50.0f64, -50.0..50.0f64).prop_map(|(x, y)| Vector2::new(x, y))
}

proptest! {
    #[test]
    fn arc_grows_away_from_focus(
        f in point(),
        gap in 1e-3..100.0f64,
        a in 0.0..100.0f64,
        b in 0.0..100.0f64,
    ) {
        let d = f.y - gap;
        let (x1, x2) = (f.x + a.min(b), f.x + a.max(b));
        prop_assert!(evaluate_parabola(f, d, x2) >= evaluate_parabola(f, d, x1));
    }

    #[test]
    fn envelope_is_columnwise_minimum(
        sites in prop::collection::vec(point(), 0..12),
        d in -60.0..60.0f64,
        cols in 1usize..64,
    ) {
        let grid = SampleGrid::new(-50.0, 50.0, cols);
        let env = sample_envelope(&sites, d, &grid);
        prop_assert_eq!(env.heights().len(), cols);
        for (col, x) in grid.xs().enumerate() {
            let expect = sites
                .iter()
                .filter(|s| is_active(**s, d))
                .map(|s| evaluate_parabola(*s, d, x))
                .fold(f64::INFINITY, f64::min);
            prop_assert_eq!(env.heights()[col], expect);
            prop_assert!(!env.heights()[col].is_nan());
        }
    }

    #[test]
    fn sampled_predicate_agrees_with_exact_on_columns(
        sites in prop::collection::vec(point(), 1..8),
        col in 0usize..101,
        py in -50.0..50.0f64,
        d in -150.0..50.0f64,
    ) {
        let grid = SampleGrid::new(-50.0, 50.0, 101);
        let p = Vector2::new(grid.x(col), py);
        let exact = reveal_directrix(p, &sites).unwrap();
        prop_assume!((d - exact).abs() > 1e-4);
        let env = sample_envelope(&sites, d, &grid);
        prop_assert_eq!(is_revealed(&env, p), d < exact);
    }
}
