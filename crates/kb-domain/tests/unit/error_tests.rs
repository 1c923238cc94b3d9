//! Unit tests for domain error types

use kb_domain::Error;

#[test]
fn test_validation_error_displays_message_verbatim() {
    let error = Error::validation("Missing query parameter");
    assert_eq!(error.to_string(), "Missing query parameter");
}

#[test]
fn test_not_found_error() {
    let error = Error::not_found("Document 7");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "Document 7"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("k must be at least 1");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "k must be at least 1"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_dimension_mismatch_error() {
    let error = Error::dimension_mismatch(10, 5);
    assert!(matches!(
        error,
        Error::DimensionMismatch {
            expected: 10,
            actual: 5
        }
    ));
    assert_eq!(
        Error::dimension_mismatch(10, 5).to_string(),
        "Dimension mismatch: expected 10, got 5"
    );
}

#[test]
fn test_store_unavailable_error_keeps_source() {
    let io = std::io::Error::other("disk gone");
    let error = Error::store_unavailable_with_source("backing store offline", io);
    match &error {
        Error::StoreUnavailable { message, source } => {
            assert_eq!(message, "backing store offline");
            assert!(source.is_some());
        }
        _ => panic!("Expected StoreUnavailable error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_io_error_keeps_source() {
    let error = Error::Io {
        message: "Failed to read upload".to_string(),
        source: Some(Box::new(std::io::Error::other("disk gone"))),
    };
    assert_eq!(error.to_string(), "I/O error: Failed to read upload");
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("port must be non-zero");
    assert_eq!(
        error.to_string(),
        "Configuration error: port must be non-zero"
    );
}

#[test]
fn test_server_side_errors_render_their_cause() {
    assert_eq!(
        Error::store_unavailable("offline").to_string(),
        "Store unavailable: offline"
    );
    assert_eq!(Error::not_found("Document 3").to_string(), "Not found: Document 3");
}
