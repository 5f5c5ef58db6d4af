use std::cell::{Cell, RefCell};
use std::future::Future;
use std::time::Duration;

use client::api::RESET_PASSWORD_PATH;
use client::flows::confirm_reset::{self, ConfirmResetStatus};
use client::schedule::{Clock, Fired, TokioClock, ViewScope};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::ResetConfig;
use tokio::time::Instant;

use crate::common;

/// Tokio clock that remembers every delay it was asked for.
#[derive(Default)]
struct RecordingClock {
    delays: RefCell<Vec<Duration>>,
}

impl Clock for RecordingClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.delays.borrow_mut().push(duration);
        TokioClock.sleep(duration)
    }
}

fn redirect_delay() -> Duration {
    Duration::from_millis(ResetConfig::default().redirect_delay_ms)
}

#[tokio::test(start_paused = true)]
async fn test_successful_reset_navigates_once_after_delay() {
    let (server, api) = common::mock_backend().await;
    common::mount_json(&server, RESET_PASSWORD_PATH, 200, json!({}), 1).await;

    let form = RefCell::new(common::filled_form("abc", "Passw0rd", "Passw0rd"));
    let scope = ViewScope::new();
    let clock = RecordingClock::default();
    let navigations = Cell::new(0);
    let started = Instant::now();

    let fired = confirm_reset::submit_then_redirect(
        &api,
        &form,
        &scope,
        &clock,
        redirect_delay(),
        || navigations.set(navigations.get() + 1),
    )
    .await;

    assert_eq!(fired, Some(Fired::Ran));
    assert_eq!(navigations.get(), 1);
    assert_eq!(*clock.delays.borrow(), vec![Duration::from_millis(3_000)]);
    assert!(started.elapsed() >= redirect_delay());

    // The form is terminal now: submitting again schedules nothing.
    let again = confirm_reset::submit_then_redirect(
        &api,
        &form,
        &scope,
        &clock,
        redirect_delay(),
        || navigations.set(navigations.get() + 1),
    )
    .await;
    assert_eq!(again, None);
    assert_eq!(navigations.get(), 1);
    server.verify().await;
}

#[tokio::test(start_paused = true)]
async fn test_failed_reset_never_schedules_redirect() {
    let (server, api) = common::mock_backend().await;
    common::mount_json(
        &server,
        RESET_PASSWORD_PATH,
        400,
        json!({ "detail": "Token expired" }),
        1,
    )
    .await;

    let form = RefCell::new(common::filled_form("abc", "Passw0rd", "Passw0rd"));
    let clock = RecordingClock::default();
    let navigations = Cell::new(0);

    let fired = confirm_reset::submit_then_redirect(
        &api,
        &form,
        &ViewScope::new(),
        &clock,
        redirect_delay(),
        || navigations.set(navigations.get() + 1),
    )
    .await;

    assert_eq!(fired, None);
    assert_eq!(navigations.get(), 0);
    assert!(clock.delays.borrow().is_empty());
    assert_eq!(form.borrow().error(), Some("Token expired"));
}

#[tokio::test(start_paused = true)]
async fn test_invalid_password_never_schedules_redirect() {
    let (server, api) = common::mock_backend().await;
    common::forbid_requests(&server).await;

    let form = RefCell::new(common::filled_form("abc", "short", "short"));
    let clock = RecordingClock::default();
    let navigations = Cell::new(0);

    let fired = confirm_reset::submit_then_redirect(
        &api,
        &form,
        &ViewScope::new(),
        &clock,
        redirect_delay(),
        || navigations.set(navigations.get() + 1),
    )
    .await;

    assert_eq!(fired, None);
    assert_eq!(navigations.get(), 0);
    assert!(clock.delays.borrow().is_empty());
    server.verify().await;
}

#[tokio::test(start_paused = true)]
async fn test_closing_the_view_cancels_pending_redirect() {
    let (server, api) = common::mock_backend().await;
    common::mount_json(&server, RESET_PASSWORD_PATH, 200, json!({}), 1).await;

    let form = RefCell::new(common::filled_form("abc", "Passw0rd", "Passw0rd"));
    let scope = ViewScope::new();
    let navigations = Cell::new(0);

    let (fired, ()) = tokio::join!(
        confirm_reset::submit_then_redirect(
            &api,
            &form,
            &scope,
            &TokioClock,
            redirect_delay(),
            || navigations.set(navigations.get() + 1),
        ),
        async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            scope.close();
        }
    );

    assert_eq!(fired, Some(Fired::Cancelled));
    assert_eq!(navigations.get(), 0);
    assert!(matches!(
        form.borrow().status(),
        ConfirmResetStatus::Succeeded { .. }
    ));

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(navigations.get(), 0);
}
