use approx::assert_relative_eq;
use lathe::prelude::*;

fn profile_points() -> Vec<ControlPoint<f64>> {
    vec![
        ControlPoint::new(30., -180.),
        ControlPoint::new(120., -60.),
        ControlPoint::new(20., 60.),
        ControlPoint::new(80., 180.),
    ]
}

#[test]
fn test_bezier_revolution() {
    let revolution = Revolution::try_generate(
        profile_points(),
        CurveConfig::default(),
        RevolutionConfig::default(),
    )
    .unwrap();
    let mesh = revolution.mesh();
    assert_eq!(mesh.rows(), 81);
    assert_eq!(mesh.cols(), 64);
    assert_eq!(mesh.triangle_count(), 80 * 64 * 2);
    for n in mesh.normals() {
        assert_relative_eq!(n.norm(), 1., epsilon = 1e-6);
    }

    // the first row is the first control point swept around Y
    let radius = 30.;
    for c in 0..mesh.cols() {
        let p = mesh.positions()[mesh.vertex_index(0, c)];
        assert_relative_eq!(p.y, 180., epsilon = 1e-9);
        assert_relative_eq!((p.x * p.x + p.z * p.z).sqrt(), radius, epsilon = 1e-9);
    }
}

#[test]
fn test_bspline_open_revolution() {
    let revolution = Revolution::try_generate(
        profile_points(),
        CurveConfig::bspline(2).with_sample_count(20),
        RevolutionConfig::new(Axis::X, 120., 10),
    )
    .unwrap();
    let mesh = revolution.mesh();
    assert_eq!(mesh.rows(), 21);
    assert_eq!(mesh.cols(), 11);
    assert_eq!(mesh.indices().len(), 20 * 10 * 6);
    assert!(mesh
        .indices()
        .iter()
        .all(|i| (*i as usize) < mesh.vertex_count()));
}

#[test]
fn test_single_point_bspline_fails() {
    let result = Revolution::try_generate(
        vec![ControlPoint::new(10., 10.)],
        CurveConfig::bspline(3),
        RevolutionConfig::default(),
    );
    assert!(matches!(
        result,
        Err(LatheError::InvalidMeshParameters(_))
    ));
}

#[test]
fn test_export_formats() {
    let revolution = Revolution::try_generate(
        profile_points(),
        CurveConfig::bezier().with_sample_count(10),
        RevolutionConfig::new(Axis::Y, 360., 16),
    )
    .unwrap();

    let mut obj = vec![];
    revolution.export(MeshFormat::Obj, &mut obj).unwrap();
    let obj = String::from_utf8(obj).unwrap();
    assert_eq!(
        obj.lines().filter(|l| l.starts_with("f ")).count(),
        revolution.mesh().triangle_count()
    );

    let format = MeshFormat::from_extension("stl").unwrap();
    let mut stl = vec![];
    revolution.export(format, &mut stl).unwrap();
    let stl = String::from_utf8(stl).unwrap();
    assert_eq!(stl.matches("endfacet").count(), revolution.mesh().triangle_count());
}

#[test]
fn test_cast_to_f32() {
    let revolution = Revolution::try_generate(
        profile_points(),
        CurveConfig::bezier().with_sample_count(8),
        RevolutionConfig::new(Axis::Z, 360., 8),
    )
    .unwrap();
    let mesh = revolution.mesh().cast::<f32>();
    assert_eq!(mesh.vertex_count(), revolution.mesh().vertex_count());
    assert_eq!(mesh.indices(), revolution.mesh().indices());
}
