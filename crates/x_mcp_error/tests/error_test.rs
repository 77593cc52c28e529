use x_mcp_error::{
    ConfigError, DraftError, HttpError, StorageError, StorageErrorKind, ValidationError,
    ValidationErrorKind, XApiError, XApiErrorKind, XMcpError, XMcpResult,
};

#[test]
fn test_categories_cover_every_kind() {
    let cases: Vec<(XMcpError, &str)> = vec![
        (ConfigError::new("missing").into(), "configuration"),
        (DraftError::not_found("draft-1").into(), "not_found"),
        (
            ValidationError::new(ValidationErrorKind::EmptyDraft).into(),
            "validation",
        ),
        (
            XApiError::new(XApiErrorKind::Unauthorized("bad token".into())).into(),
            "upstream",
        ),
        (HttpError::new("connection reset").into(), "upstream"),
        (
            StorageError::new(StorageErrorKind::FileRead("drafts".into())).into(),
            "storage",
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(err.kind().category(), expected, "{}", err);
    }
}

#[test]
fn test_question_mark_converts_concern_errors() {
    fn fails() -> XMcpResult<()> {
        Err(ValidationError::new(ValidationErrorKind::MediaNotFound(
            "/nope.png".into(),
        )))?
    }

    let err = fails().unwrap_err();
    assert!(err.is_validation());
    assert!(!err.is_not_found());
    assert!(err.to_string().contains("/nope.png"));
}

#[test]
fn test_errors_record_call_site() {
    let err = ConfigError::new("x");
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
}

#[test]
fn test_rate_limit_display_handles_unknown_reset() {
    let err = XApiError::new(XApiErrorKind::RateLimited { retry_after: None });
    assert!(err.to_string().contains("retry time unknown"));
}

#[test]
fn test_validation_messages_name_the_segment() {
    let err = ValidationError::new(ValidationErrorKind::TextTooLong {
        segment: 2,
        length: 300,
        max: 280,
    });
    let text = err.to_string();
    assert!(text.contains("Segment 2"));
    assert!(text.contains("300"));
    assert!(text.contains("280"));
}

#[test]
fn test_message_omits_source_location() {
    let err: XMcpError = DraftError::not_found("draft-9").into();
    let message = err.kind().message();
    assert!(message.contains("draft-9"));
    assert!(!message.contains(" at line "));
    assert!(err.to_string().contains(" at line "));
}
