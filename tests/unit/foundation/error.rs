use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        IntentionError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        IntentionError::invalid_image("x")
            .to_string()
            .contains("invalid image:")
    );
    assert!(
        IntentionError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn missing_font_names_face_and_path() {
    let err = IntentionError::missing_font("LiberationSans-Bold", "fonts/LiberationSans-Bold.ttf");
    let msg = err.to_string();
    assert!(msg.contains("LiberationSans-Bold"));
    assert!(msg.contains("fonts/LiberationSans-Bold.ttf"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = IntentionError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
