use approx::assert_relative_eq;
use nalgebra::Point2;

use crate::error::LatheError;

use super::{sample_profile, ControlPoint, CurveConfig, CurveKind, MIN_SAMPLE_DIVISIONS};

fn vase() -> Vec<ControlPoint<f64>> {
    vec![
        ControlPoint::new(30., -180.),
        ControlPoint::new(80., -120.),
        ControlPoint::new(70., -20.),
        ControlPoint::new(60., 60.),
        ControlPoint::new(18., 180.),
    ]
}

#[test]
fn empty_control_points_give_empty_profile() {
    let empty: Vec<ControlPoint<f64>> = vec![];
    assert!(sample_profile(&empty, &CurveConfig::bezier()).is_empty());
    assert!(sample_profile(&empty, &CurveConfig::bspline(3)).is_empty());
}

#[test]
fn bezier_profile_spans_end_points() {
    let points = vase();
    let profile = sample_profile(&points, &CurveConfig::bezier().with_sample_count(40));
    assert_eq!(profile.len(), 41);
    assert_eq!(profile[0], points[0].position());
    assert_eq!(profile[40], points[4].position());
}

#[test]
fn sample_count_has_a_floor() {
    let points = vase();
    for kind in [CurveKind::Bezier, CurveKind::BSpline] {
        let config = CurveConfig::default().with_kind(kind).with_sample_count(1);
        assert_eq!(config.divisions(), MIN_SAMPLE_DIVISIONS);
        let profile = sample_profile(&points, &config);
        assert_eq!(profile.len(), MIN_SAMPLE_DIVISIONS + 1);
    }
}

#[test]
fn single_control_point_repeats() {
    let points = vec![ControlPoint::new(4., 2.)];
    let profile = sample_profile(&points, &CurveConfig::bezier().with_sample_count(8));
    assert_eq!(profile.len(), 9);
    assert!(profile.iter().all(|p| *p == Point2::new(4., 2.)));
}

#[test]
fn bspline_profile_is_clamped() {
    let points = vase();
    let profile = sample_profile(&points, &CurveConfig::bspline(3).with_sample_count(64));
    assert_eq!(profile.len(), 65);
    assert_relative_eq!(profile[0], points[0].position(), epsilon = 1e-9);
    assert_relative_eq!(profile[64], points[4].position(), epsilon = 1e-4);
}

#[test]
fn bspline_with_too_few_points_falls_back_to_polyline() {
    let points = vec![
        ControlPoint::new(0., 0.),
        ControlPoint::new(5., 5.),
        ControlPoint::new(10., 0.),
    ];
    let profile = sample_profile(&points, &CurveConfig::bspline(3));
    let expected: Vec<_> = points.iter().map(|p| p.position()).collect();
    assert_eq!(profile, expected);
}

#[test]
fn bspline_degree_zero_is_treated_as_linear() {
    let points = vec![ControlPoint::new(0., 0.), ControlPoint::new(8., 0.)];
    let config = CurveConfig::bspline(0).with_sample_count(8);
    assert_eq!(config.effective_degree(), 1);
    let profile = sample_profile(&points, &config);
    assert_eq!(profile.len(), 9);
    assert_relative_eq!(profile[4], Point2::new(4., 0.), epsilon = 1e-9);
}

#[test]
fn weight_does_not_change_the_curve() {
    let points = vase();
    let weighted: Vec<_> = points
        .iter()
        .enumerate()
        .map(|(i, p)| p.with_weight(1. + i as f64))
        .collect();
    for config in [CurveConfig::bezier(), CurveConfig::bspline(2)] {
        assert_eq!(
            sample_profile(&points, &config),
            sample_profile(&weighted, &config)
        );
    }
}

#[test]
fn curve_kind_from_str() {
    assert_eq!("bezier".parse::<CurveKind>(), Ok(CurveKind::Bezier));
    assert_eq!("BSpline".parse::<CurveKind>(), Ok(CurveKind::BSpline));
    assert_eq!("spline".parse::<CurveKind>(), Ok(CurveKind::BSpline));
    assert_eq!(
        "nurbs".parse::<CurveKind>(),
        Err(LatheError::InvalidCurveKind("nurbs".to_string()))
    );
    assert_eq!(CurveKind::BSpline.to_string(), "bspline");
}
