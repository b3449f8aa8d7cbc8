mod common;

use common::{body_text, get, handle, post};
use http::StatusCode;
use http::header::{ALLOW, CONTENT_TYPE};

const BODY_ROUTES: [&str; 5] = [
    "/request-body-string-v1",
    "/request-body-string-v2",
    "/request-body-string-v3",
    "/request-body-string-v3v1",
    "/request-body-string-v4",
];

#[tokio::test]
async fn every_variant_logs_body_and_answers_ok() {
    for route in BODY_ROUTES {
        let (res, logs) = handle(post(route, "hello")).await;
        assert_eq!(res.status_code(), StatusCode::OK, "{route}");
        assert_eq!(body_text(&res), "ok", "{route}");
        assert!(logs.contains("message_body=hello"), "{route}: {logs}");
    }
}

#[tokio::test]
async fn non_ascii_bodies_are_logged_whole() {
    for route in BODY_ROUTES {
        let (res, logs) = handle(post(route, "안녕 café, second part")).await;
        assert_eq!(res.status_code(), StatusCode::OK, "{route}");
        assert!(logs.contains("message_body=안녕 café, second part"), "{route}: {logs}");
    }
}

#[tokio::test]
async fn empty_body_decodes_to_empty_string() {
    for route in BODY_ROUTES {
        let (res, logs) = handle(post(route, "")).await;
        assert_eq!(body_text(&res), "ok", "{route}");
        assert!(
            logs.lines().any(|line| line.ends_with("message_body=")),
            "{route}: {logs}"
        );
    }
}

#[tokio::test]
async fn malformed_utf8_is_replaced() {
    for route in BODY_ROUTES {
        let (res, logs) = handle(post(route, &b"ab\xffcd"[..])).await;
        assert_eq!(res.status_code(), StatusCode::OK, "{route}");
        assert!(logs.contains("message_body=ab\u{fffd}cd"), "{route}: {logs}");
    }
}

#[tokio::test]
async fn stream_and_writer_variants_send_no_content_type() {
    for route in &BODY_ROUTES[..2] {
        let (res, _) = handle(post(route, "x")).await;
        assert!(res.headers().get(CONTENT_TYPE).is_none(), "{route}");
    }
}

#[tokio::test]
async fn entity_and_text_variants_send_plain_text() {
    for route in &BODY_ROUTES[2..] {
        let (res, _) = handle(post(route, "x")).await;
        assert_eq!(res.headers()[CONTENT_TYPE], "text/plain; charset=utf-8", "{route}");
    }
}

#[tokio::test]
async fn body_routes_only_accept_post() {
    let (res, _) = handle(get("/request-body-string-v4")).await;
    assert_eq!(res.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers()[ALLOW], "POST");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (res, _) = handle(post("/request-body-string-v9", "hello")).await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}
