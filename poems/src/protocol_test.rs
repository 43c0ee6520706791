use super::*;

#[test]
fn endpoints_map_to_documented_routes() {
    assert_eq!(Endpoint::Generate.path(), "/generate");
    assert_eq!(Endpoint::Save.path(), "/save");
    assert_eq!(Endpoint::List.path(), "/poems");
    assert_eq!(Endpoint::Import.path(), "/import");
    assert_eq!(Endpoint::List.method(), Method::Get);
    assert_eq!(Endpoint::Delete("x").method(), Method::Delete);
    assert_eq!(Endpoint::Import.method(), Method::Post);
}

#[test]
fn poem_paths_escape_titles() {
    assert_eq!(Endpoint::Fetch("spring rain").path(), "/poem/spring%20rain");
    assert_eq!(Endpoint::Delete("a/b?").path(), "/poem/a%2Fb%3F");
    assert_eq!(Endpoint::Fetch("静夜思").path(), "/poem/%E9%9D%99%E5%A4%9C%E6%80%9D");
}

#[test]
fn url_joins_base_without_double_slash() {
    assert_eq!(Endpoint::List.url("http://localhost:8080/"), "http://localhost:8080/poems");
    assert_eq!(Endpoint::List.url(""), "/poems");
}

#[test]
fn form_body_escapes_fields() {
    let body = form_body(&[("title", "a & b"), ("content", "line one\nline two")]);
    assert_eq!(body, "title=a%20%26%20b&content=line%20one%0Aline%20two");
}

#[test]
fn decode_lines_returns_data_in_order() {
    let body = r#"{"status":"success","message":"ok","data":["a","b","c"]}"#;
    assert_eq!(decode_lines(200, body).unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn decode_ack_accepts_missing_data_and_message() {
    assert_eq!(decode_ack(200, r#"{"status":"success"}"#), Ok(()));
}

#[test]
fn error_envelope_carries_remote_message() {
    let body = r#"{"status":"error","message":"save failed","data":[]}"#;
    assert_eq!(decode_ack(200, body), Err(RemoteError::Rejected { message: "save failed".to_owned() }));
}

#[test]
fn failing_status_without_envelope_reports_status() {
    assert_eq!(decode_ack(503, "<html>bad gateway</html>"), Err(RemoteError::Status(503)));
}

#[test]
fn failing_status_with_error_envelope_keeps_message() {
    let body = r#"{"status":"error","message":"boom"}"#;
    assert_eq!(decode_ack(500, body), Err(RemoteError::Rejected { message: "boom".to_owned() }));
}

#[test]
fn malformed_body_is_a_decode_error() {
    assert!(matches!(decode_lines(200, "not json"), Err(RemoteError::Decode(_))));
    assert!(matches!(decode_lines(200, r#"{"status":"maybe"}"#), Err(RemoteError::Decode(_))));
}

#[test]
fn rejected_fetch_maps_to_not_found() {
    let body = r#"{"status":"error","message":"no such poem"}"#;
    assert_eq!(
        decode_poem("gone", 200, body),
        Err(RemoteError::NotFound { title: "gone".to_owned(), message: "no such poem".to_owned() })
    );
    assert_eq!(
        decode_poem("gone", 404, ""),
        Err(RemoteError::NotFound { title: "gone".to_owned(), message: String::new() })
    );
}
