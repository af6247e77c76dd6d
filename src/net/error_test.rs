use super::*;

// =============================================================
// from_response
// =============================================================

#[test]
fn from_response_extracts_json_message() {
    let err = ApiError::from_response(401, r#"{"message":"Invalid credentials"}"#);
    assert_eq!(
        err,
        ApiError::Http {
            status: 401,
            message: "Invalid credentials".to_owned(),
        }
    );
}

#[test]
fn from_response_empty_body_falls_back() {
    let err = ApiError::from_response(500, "");
    assert_eq!(
        err,
        ApiError::Http {
            status: 500,
            message: "HTTP error! status: 500".to_owned(),
        }
    );
}

#[test]
fn from_response_non_json_body_falls_back() {
    let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
    assert_eq!(
        err,
        ApiError::Http {
            status: 502,
            message: "HTTP error! status: 502".to_owned(),
        }
    );
}

#[test]
fn from_response_json_without_message_field_falls_back() {
    let err = ApiError::from_response(404, r#"{"error":"not found"}"#);
    assert_eq!(
        err,
        ApiError::Http {
            status: 404,
            message: "HTTP error! status: 404".to_owned(),
        }
    );
}

#[test]
fn from_response_extra_fields_still_parse() {
    let err = ApiError::from_response(422, r#"{"message":"title required","field":"title"}"#);
    assert_eq!(
        err,
        ApiError::Http {
            status: 422,
            message: "title required".to_owned(),
        }
    );
}

// =============================================================
// status
// =============================================================

#[test]
fn status_present_for_http_failures() {
    let err = ApiError::from_response(401, "{}");
    assert_eq!(err.status(), Some(401));
}

#[test]
fn status_absent_for_network_failures() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.status(), None);
}

// =============================================================
// Display
// =============================================================

#[test]
fn http_failure_displays_message_only() {
    let err = ApiError::from_response(401, r#"{"message":"Invalid credentials"}"#);
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn network_failure_displays_cause() {
    let err = ApiError::Network("timed out".to_owned());
    assert_eq!(err.to_string(), "network error: timed out");
}
