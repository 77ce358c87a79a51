use condense_core::errors::*;

#[test]
fn unknown_mode_error_names_the_mode() {
    let err = StrategyError::UnknownMode {
        mode: "turbo".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("unknown compression mode"));
    assert!(msg.contains("turbo"));
}

#[test]
fn unavailable_error_carries_mode_and_reason() {
    let err = StrategyError::Unavailable {
        mode: "llm".into(),
        reason: "no provider configured".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("llm"));
    assert!(msg.contains("not available"));
    assert!(msg.contains("no provider configured"));
}

#[test]
fn strategy_error_converts_transparently() {
    let err: CondenseError = StrategyError::UnknownMode {
        mode: "turbo".into(),
    }
    .into();
    assert!(matches!(
        err,
        CondenseError::StrategyError(StrategyError::UnknownMode { .. })
    ));
    assert_eq!(err.to_string(), "unknown compression mode: turbo");
}

#[test]
fn serde_json_error_converts_to_serialization_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: CondenseError = json_err.into();
    assert!(matches!(err, CondenseError::SerializationError(_)));
}
