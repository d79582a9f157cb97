use super::*;
use crate::scene::Scene;

#[test]
fn settings_lines_follow_fixed_order() {
    let (scene, sink) = Scene::in_memory();
    scene
        .init()
        .flipy(true)
        .speed(30.0)
        .in_betweens(60)
        .svg_width(0.08)
        .size(80.0, 60.0)
        .font(2.5)
        .width(1.0)
        .shift(1.0, -1.0);
    assert_eq!(
        sink.lines(),
        vec![
            "size (80,60)",
            "width 1",
            "svgwidth 0.08",
            "font 2.5",
            "speed 30",
            "shift (1,-1)",
            "in_betweens 60",
            "flipy 1",
        ]
    );
}

#[test]
fn unset_settings_emit_nothing() {
    let (scene, sink) = Scene::in_memory();
    scene.init();
    assert!(sink.is_empty());
}

#[test]
fn parses_json_settings() {
    let s = InitSettings::from_json(r#"{"size": [30, 20], "speed": 1.5, "flipy": false}"#)
        .unwrap();
    assert_eq!(s.size, Some((30.0, 20.0)));
    assert_eq!(s.speed, Some(1.5));
    assert_eq!(s.flipy, Some(false));
    assert_eq!(s.font, None);
}

#[test]
fn rejects_unknown_and_invalid_settings() {
    assert!(matches!(
        InitSettings::from_json(r#"{"colour": 1}"#),
        Err(SceneError::Serde(_))
    ));
    assert!(matches!(
        InitSettings::from_json(r#"{"size": [0, 20]}"#),
        Err(SceneError::Validation(_))
    ));
    assert!(matches!(
        InitSettings::from_json(r#"{"in_betweens": 0}"#),
        Err(SceneError::Validation(_))
    ));
    assert!(matches!(
        InitSettings::from_json(r#"{"speed": -2}"#),
        Err(SceneError::Validation(_))
    ));
}

#[test]
fn or_prefers_own_fields() {
    let base = InitSettings {
        size: Some((10.0, 10.0)),
        speed: Some(2.0),
        ..InitSettings::default()
    };
    let merged = InitSettings {
        speed: Some(5.0),
        ..InitSettings::default()
    }
    .or(&base);
    assert_eq!(merged.size, Some((10.0, 10.0)));
    assert_eq!(merged.speed, Some(5.0));
}

#[test]
fn init_with_emits_prefilled_settings() {
    let (scene, sink) = Scene::in_memory();
    let settings = InitSettings {
        font: Some(3.0),
        ..InitSettings::default()
    };
    scene.init_with(settings).speed(4.0);
    assert_eq!(sink.lines(), vec!["font 3", "speed 4"]);
}
