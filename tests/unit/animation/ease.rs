use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::InQuad.apply(-3.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(7.0), 1.0);
}

#[test]
fn names_are_snake_case_in_json() {
    let e: Ease = serde_json::from_str("\"in_out_sine\"").unwrap();
    assert_eq!(e, Ease::InOutSine);
}

#[test]
fn out_and_in_out_mirror_the_in_shape() {
    for t in [0.1, 0.3, 0.5, 0.8] {
        assert!((Ease::OutQuad.apply(t) - (1.0 - (1.0 - t) * (1.0 - t))).abs() < 1e-12);
        assert!((Ease::OutCubic.apply(t) - (1.0 - (1.0 - t).powi(3))).abs() < 1e-12);
    }
    assert!((Ease::InOutQuad.apply(0.25) - 0.125).abs() < 1e-12);
    assert!((Ease::InOutCubic.apply(0.75) - 0.9375).abs() < 1e-12);
    assert!((Ease::InOutSine.apply(0.5) - 0.5).abs() < 1e-12);
}
