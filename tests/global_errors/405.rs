//! tests/global_errors/405.rs
//! Only GET is registered on `/`; other methods are rejected by the router.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn returns_405_for_post_on_root() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/", base_url))
        .body(r#"{"message":"ignored"}"#)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
