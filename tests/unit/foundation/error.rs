use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SceneError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SceneError::registry("x")
            .to_string()
            .contains("registry error:")
    );
    assert!(
        SceneError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    let io = SceneError::from(std::io::Error::other("pipe"));
    assert!(io.to_string().starts_with("io error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SceneError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err = serde_json::from_str::<u32>("nope").unwrap_err();
    assert!(matches!(SceneError::from(err), SceneError::Serde(_)));
}
