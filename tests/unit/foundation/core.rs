use super::*;

#[test]
fn presets_are_opaque() {
    for c in [
        Color::BLACK,
        Color::WHITE,
        Color::RED,
        Color::GREEN,
        Color::BLUE,
        Color::YELLOW,
        Color::CYAN,
        Color::MAGENTA,
        Color::ORANGE,
    ] {
        assert!(c.is_opaque());
    }
    assert_eq!(Color::ORANGE, Color::rgb(255, 165, 0));
    assert!(!Color::ORANGE.with_alpha(100).is_opaque());
}

#[test]
fn color_conversions_from_tuples() {
    assert_eq!(Color::from((10, 20, 30)), Color::rgba(10, 20, 30, 255));
    assert_eq!(Color::from((10, 20, 30, 128)).a, 128);
    assert_eq!(Color::gray(7), Color::rgb(7, 7, 7));
}

#[test]
fn color_alpha_defaults_when_missing_from_json() {
    let c: Color = serde_json::from_str(r#"{"r": 1, "g": 2, "b": 3}"#).unwrap();
    assert_eq!(c, Color::rgb(1, 2, 3));
}

#[test]
fn alignment_letter_codes() {
    assert_eq!(Alignment::Begin.to_char(), 'B');
    assert_eq!(Alignment::Center.to_char(), 'C');
    assert_eq!(Alignment::End.to_char(), 'E');
    assert_eq!(Alignment::from_char('E'), Alignment::End);
    assert_eq!(Alignment::from_char('x'), Alignment::Center);
    assert_eq!(
        Align2::from(('B', 'E')),
        Align2::new(Alignment::Begin, Alignment::End)
    );
}
