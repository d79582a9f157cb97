use super::*;

#[test]
fn from_fn_samples_interior_points_only() {
    let c = Curve::from_fn(4, |t| t);
    assert_eq!(c.samples(), &[0.25, 0.5, 0.75]);
    assert_eq!(c.len(), 3);
}

#[test]
fn degenerate_counts_give_empty_curves() {
    assert!(Curve::from_fn(0, |t| t).is_empty());
    assert!(Curve::from_fn(1, |t| t).is_empty());
}

#[test]
fn from_ease_matches_apply() {
    let c = Curve::from_ease(Ease::InQuad, 60);
    assert_eq!(c.len(), 59);
    assert_eq!(c.samples()[29], Ease::InQuad.apply(30.0 / 60.0));
}

#[test]
fn non_finite_samples_are_located() {
    assert_eq!(Curve::from([0.1, f64::NAN, 0.3]).first_non_finite(), Some(1));
    assert_eq!(Curve::from(vec![0.1, 0.2]).first_non_finite(), None);
}
