use bobext_util::errors::BobExtError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = BobExtError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_io_error_keeps_kind() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: BobExtError = io_err.into();
    match err {
        BobExtError::Io(inner) => assert_eq!(inner.kind(), std::io::ErrorKind::PermissionDenied),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn test_pattern_error_from_regex() {
    let regex_err = regex::Regex::new("(unclosed").unwrap_err();
    let err = BobExtError::from(regex_err);
    assert!(matches!(err, BobExtError::Pattern(_)));
    assert!(err.to_string().starts_with("Invalid pattern:"), "got: {err}");
}

#[test]
fn test_config_error_display() {
    let err = BobExtError::Config {
        message: "bad table".to_string(),
    };
    assert_eq!(err.to_string(), "Configuration error: bad table");
}
