use super::{Spline2D, SplineAxis};
use crate::core::{CurveError, PointSet};
use approx::assert_relative_eq;

// ── SplineAxis ──

#[test]
fn axis_interpolates_values_at_integer_knots() {
    let values = [0.1f32, 0.9, 0.3, 0.7, 0.2];
    let axis = SplineAxis::new(&values).expect("Solver sollte loesen");

    for (i, &v) in values.iter().enumerate() {
        assert_relative_eq!(axis.eval(i as f32), v, epsilon = 1e-5);
    }
}

#[test]
fn axis_keeps_natural_boundary_condition() {
    let values = [0.0f32, 0.5, 0.25, 1.0, 0.1, 0.4];
    let axis = SplineAxis::new(&values).unwrap();

    // Natürlicher Spline: zweite Ableitung an beiden Rändern 0.
    assert_eq!(axis.c[0], 0.0);
    assert_eq!(axis.c[axis.num], 0.0);
}

#[test]
fn axis_rejects_degenerate_input() {
    assert!(matches!(
        SplineAxis::new(&[1.0]),
        Err(CurveError::InvalidInput(_))
    ));
    assert!(matches!(
        SplineAxis::new(&[]),
        Err(CurveError::InvalidInput(_))
    ));
}

#[test]
fn axis_two_points_is_linear_segment() {
    let axis = SplineAxis::new(&[0.0, 1.0]).unwrap();

    assert_relative_eq!(axis.eval(0.5), 0.5, epsilon = 1e-6);
    // Klemmen toleriert kleinen Überlauf hinter dem letzten Knoten.
    assert_relative_eq!(axis.eval(1.001), 1.001, epsilon = 1e-3);
}

#[test]
fn axis_eval_clamps_segment_index() {
    let axis = SplineAxis::new(&[0.0, 1.0, 0.0]).unwrap();

    // Weit außerhalb: Segment-Index bleibt im gültigen Bereich, kein Panic.
    let left = axis.eval(-3.0);
    let right = axis.eval(7.0);
    assert!(left.is_finite());
    assert!(right.is_finite());
}

// ── Spline2D ──

/// Gauss-Werte für sigma = 1 an x = 0..=5 (Referenzszenario).
fn gauss_sigma1_samples() -> (Vec<f32>, Vec<f32>) {
    let xs: Vec<f32> = (0..6).map(|i| i as f32).collect();
    let ys: Vec<f32> = xs.iter().map(|&x| (-x * x / 2.0).exp()).collect();
    (xs, ys)
}

#[test]
fn spline_reproduces_gauss_samples_at_knots() {
    let (xs, ys) = gauss_sigma1_samples();
    assert_relative_eq!(ys[1], 0.6065, epsilon = 1e-4);
    assert_relative_eq!(ys[2], 0.1353, epsilon = 1e-4);
    assert_relative_eq!(ys[3], 0.0111, epsilon = 1e-4);

    let spline = Spline2D::new(PointSet::from_axes(&xs, &ys).unwrap()).unwrap();

    for i in 0..xs.len() {
        assert_relative_eq!(spline.x.eval(i as f32), xs[i], epsilon = 1e-4);
        assert_relative_eq!(spline.y.eval(i as f32), ys[i], epsilon = 1e-4);
    }
}

#[test]
fn sample_curve_extends_short_curve_to_domain_end() {
    // Kurve endet bei x = 0.4 — das letzte Segment wird linear bis x = 1 verlängert.
    let ps = PointSet::from_axes(&[0.0, 0.2, 0.4], &[1.0, 0.6, 0.2]).unwrap();
    let spline = Spline2D::new(ps).unwrap();

    let data = spline.sample_curve();
    let last = data.last().expect("Abtastung darf nicht leer sein");
    assert_relative_eq!(last.x, 1.0, epsilon = 1e-5);
}

#[test]
fn weight_has_requested_length_and_fixed_first_sample() {
    let (xs, ys) = gauss_sigma1_samples();
    let spline = Spline2D::new(PointSet::from_axes(&xs, &ys).unwrap()).unwrap();

    for size in [1usize, 4, 8, 25, 64] {
        let w = spline.weight(size).expect("Extraktion sollte gelingen");
        assert_eq!(w.len(), size);
        assert_eq!(w[0], 1.0);
    }
}

#[test]
fn weight_rejects_zero_size() {
    let ps = PointSet::from_axes(&[0.0, 1.0], &[1.0, 0.0]).unwrap();
    let spline = Spline2D::new(ps).unwrap();
    assert!(matches!(
        spline.weight(0),
        Err(CurveError::InvalidInput(_))
    ));
}

#[test]
fn weight_zero_pads_when_samples_stop_short() {
    // Senkrechtes x-Profil: die Abtastung kommt nie über x = 0.5 hinaus,
    // dahinter wird mit 0 aufgefüllt.
    let ps = PointSet::from_axes(&[0.5, 0.5], &[1.0, 0.0]).unwrap();
    let spline = Spline2D::new(ps).unwrap();

    let w = spline.weight(8).unwrap();
    assert_eq!(w.len(), 8);
    assert_eq!(&w[4..], &[0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn weight_surfaces_non_monotonic_sampling() {
    // Unsortierte x-Werte erzeugen eine rückläufige parametrische Kurve.
    let ps = PointSet::from_axes(&[0.0, 0.9, 0.1], &[1.0, 0.5, 0.2]).unwrap();
    let spline = Spline2D::new(ps).unwrap();

    assert!(matches!(
        spline.weight(16),
        Err(CurveError::NonMonotonicSample { .. })
    ));
}

#[test]
fn re_calc_follows_point_mutation() {
    let ps = PointSet::from_axes(&[0.0, 1.0, 2.0], &[1.0, 0.5, 0.0]).unwrap();
    let mut spline = Spline2D::new(ps).unwrap();

    spline.points_mut().set_y(1, 0.9).unwrap();
    spline.re_calc().unwrap();

    assert_relative_eq!(spline.y.eval(1.0), 0.9, epsilon = 1e-5);
}
