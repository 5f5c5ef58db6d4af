use std::cell::RefCell;

use client::api::FORGOT_PASSWORD_PATH;
use client::flows::request_reset::{self, RequestResetForm, RequestResetStatus, FAILURE_MESSAGE};
use client::links::local_reset_path;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common;

fn form_with_email(email: &str, dev_reset_links: bool) -> RefCell<RequestResetForm> {
    let mut form = RequestResetForm::new(dev_reset_links);
    form.set_email(email);
    RefCell::new(form)
}

#[tokio::test]
async fn test_request_sends_trimmed_email_once() {
    let (server, api) = common::mock_backend().await;
    common::mount_json(
        &server,
        FORGOT_PASSWORD_PATH,
        200,
        json!({ "message": "If an account with that email exists, a password reset link has been sent." }),
        1,
    )
    .await;

    let form = form_with_email("  user@example.com  ", false);
    assert!(request_reset::submit(&api, &form).await);

    assert_eq!(
        common::received_bodies(&server).await,
        vec![json!({ "email": "user@example.com" })]
    );
    assert!(matches!(
        form.borrow().status(),
        RequestResetStatus::Sent { reset_link: None, message } if message.contains("reset link")
    ));
    server.verify().await;
}

#[tokio::test]
async fn test_dev_reset_link_is_shown_with_host_stripped() {
    let (server, api) = common::mock_backend().await;
    common::mount_json(
        &server,
        FORGOT_PASSWORD_PATH,
        200,
        json!({ "message": "sent", "reset_link": "http://host/reset?token=abc" }),
        1,
    )
    .await;

    let form = form_with_email("user@example.com", true);
    request_reset::submit(&api, &form).await;

    let link = match form.borrow().status() {
        RequestResetStatus::Sent {
            reset_link: Some(link),
            ..
        } => link.clone(),
        other => panic!("expected a sent state with a link, got {other:?}"),
    };
    assert_eq!(link, "http://host/reset?token=abc");
    assert_eq!(local_reset_path(&link).as_deref(), Some("/reset?token=abc"));
}

#[tokio::test]
async fn test_reset_link_hidden_without_dev_flag() {
    let (server, api) = common::mock_backend().await;
    common::mount_json(
        &server,
        FORGOT_PASSWORD_PATH,
        200,
        json!({ "message": "sent", "reset_link": "http://host/reset?token=abc" }),
        1,
    )
    .await;

    let form = form_with_email("user@example.com", false);
    request_reset::submit(&api, &form).await;

    assert_eq!(
        form.borrow().status(),
        &RequestResetStatus::Sent {
            message: "sent".into(),
            reset_link: None
        }
    );
}

#[tokio::test]
async fn test_server_detail_is_displayed() {
    let (server, api) = common::mock_backend().await;
    common::mount_json(
        &server,
        FORGOT_PASSWORD_PATH,
        429,
        json!({ "detail": "Too many reset requests" }),
        1,
    )
    .await;

    let form = form_with_email("user@example.com", false);
    assert!(request_reset::submit(&api, &form).await);

    let form = form.borrow();
    assert_eq!(form.error(), Some("Too many reset requests"));
    assert!(!form.is_sending());
}

#[tokio::test]
async fn test_validation_list_detail_is_displayed() {
    let (server, api) = common::mock_backend().await;
    common::mount_json(
        &server,
        FORGOT_PASSWORD_PATH,
        422,
        json!({ "detail": [{
            "loc": ["body", "email"],
            "msg": "value is not a valid email address",
            "type": "value_error"
        }] }),
        1,
    )
    .await;

    let form = form_with_email("not-an-email", false);
    request_reset::submit(&api, &form).await;

    assert_eq!(
        form.borrow().error(),
        Some("value is not a valid email address")
    );
}

#[tokio::test]
async fn test_unreachable_backend_uses_fallback() {
    let api = common::unreachable_backend();
    let form = form_with_email("user@example.com", false);

    assert!(request_reset::submit(&api, &form).await);
    assert_eq!(form.borrow().error(), Some(FAILURE_MESSAGE));
}

#[tokio::test]
async fn test_blank_email_makes_no_request() {
    let (server, api) = common::mock_backend().await;
    common::forbid_requests(&server).await;

    let form = form_with_email("   ", false);
    assert!(!request_reset::submit(&api, &form).await);
    assert!(form.borrow().error().is_some());
    server.verify().await;
}

#[tokio::test]
async fn test_send_another_allows_a_new_request() {
    let (server, api) = common::mock_backend().await;
    common::mount_json(&server, FORGOT_PASSWORD_PATH, 200, json!({}), 2).await;

    let form = form_with_email("first@example.com", false);
    request_reset::submit(&api, &form).await;
    // Sent is terminal: a further submit is ignored.
    assert!(!request_reset::submit(&api, &form).await);

    form.borrow_mut().send_another();
    form.borrow_mut().set_email("second@example.com");
    assert!(request_reset::submit(&api, &form).await);

    assert_eq!(
        common::received_bodies(&server).await,
        vec![
            json!({ "email": "first@example.com" }),
            json!({ "email": "second@example.com" })
        ]
    );
    server.verify().await;
}
