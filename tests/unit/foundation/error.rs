use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DotcalError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        DotcalError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(DotcalError::render("x").to_string().contains("render error:"));
    assert!(
        DotcalError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DotcalError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: DotcalError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, DotcalError::Serde(_)));
}
