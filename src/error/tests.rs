use crate::error::format::format_error_with_color;
use crate::error::*;

#[test]
fn test_error_context_validation_error() {
    let error = PurError::ValidationError("outdated must be 'on', 'off' or empty".to_string());
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_some());
    assert!(context.suggestion.unwrap().contains("--outdated"));
    assert!(context.details.unwrap().contains("before any request"));
}

#[test]
fn test_error_context_network_error_with_status() {
    let error = PurError::NetworkError {
        status: Some(503),
        message: "Service Unavailable".to_string(),
    };
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("try again later"));
    assert_eq!(
        context.details,
        Some("HTTP status 503: Service Unavailable".to_string())
    );
}

#[test]
fn test_error_context_network_error_without_status() {
    let error = PurError::NetworkError {
        status: None,
        message: "Connection refused".to_string(),
    };
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("internet connection"));
    assert_eq!(context.details, Some("Connection refused".to_string()));
}

#[test]
fn test_error_context_parse_error() {
    let error = PurError::ParseError("expected a JSON array".to_string());
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("layout"));
    assert_eq!(context.details, Some("expected a JSON array".to_string()));
}

#[test]
fn test_error_context_with_custom_suggestion() {
    let error = PurError::ParseError("bad table".to_string());
    let context = ErrorContext::new(&error).with_suggestion("Report a bug.".to_string());

    assert_eq!(context.suggestion, Some("Report a bug.".to_string()));
}

#[test]
fn test_error_context_io_has_no_hints() {
    let error = PurError::Io(std::io::Error::other("disk on fire"));
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_none());
    assert!(context.details.is_none());
}

#[test]
fn test_error_context_validation_error_other_option() {
    let error = "sideways".parse::<crate::api::query::SortOrder>().unwrap_err();
    let context = ErrorContext::new(&error);

    let suggestion = context.suggestion.unwrap();
    assert!(suggestion.contains("pur --usage"));
    assert!(!suggestion.contains("--outdated"));
}

#[test]
fn test_error_context_validation_error_from_outdated_parse() {
    let error = "maybe".parse::<crate::api::query::Outdated>().unwrap_err();
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("--outdated"));
}

#[test]
fn test_exit_codes() {
    assert_eq!(
        get_exit_code(&PurError::ValidationError("x".to_string())),
        2
    );
    assert_eq!(get_exit_code(&PurError::ConfigError("x".to_string())), 2);
    assert_eq!(
        get_exit_code(&PurError::NetworkError {
            status: Some(500),
            message: "x".to_string()
        }),
        20
    );
    assert_eq!(get_exit_code(&PurError::ParseError("x".to_string())), 1);
}

#[test]
fn test_format_error_chain() {
    let error = PurError::ValidationError("outdated 'maybe' is not allowed".to_string());
    let formatted = format_error_chain(&error);

    assert!(formatted.starts_with("Error: Validation error: outdated 'maybe' is not allowed"));
    assert!(formatted.contains("Details:"));
    assert!(formatted.contains("Suggestion:"));
}

#[test]
fn test_format_error_with_color() {
    let error = PurError::ParseError("expected a JSON array".to_string());

    let plain = format_error_with_color(&error, false);
    assert!(plain.starts_with("Error: Failed to parse response"));
    assert!(!plain.contains("\x1b["));

    let colored = format_error_with_color(&error, true);
    assert!(colored.contains("\x1b[31m"));
    assert!(colored.ends_with("\x1b[0m"));
}
