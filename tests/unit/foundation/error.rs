use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SigilError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SigilError::not_found("x").to_string().contains("not found:"));
    assert!(
        SigilError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(SigilError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SigilError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
