use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BezringError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BezringError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        BezringError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BezringError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: BezringError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, BezringError::Serde(_)));
}
