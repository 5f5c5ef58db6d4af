use std::future::Future;
use std::time::Duration;

use client::schedule::Clock;
use dioxus::prelude::*;

/// Timer backed by `setTimeout` in the page's JavaScript context, which
/// exists on every renderer (web, desktop and mobile webviews).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        let script = format!(
            "await new Promise((resolve) => setTimeout(resolve, {})); return true;",
            duration.as_millis()
        );
        async move {
            if let Err(e) = document::eval(&script).join::<bool>().await {
                // Without a timer the delay never elapses; the page still
                // offers a manual link.
                tracing::warn!(error = ?e, "browser timer unavailable");
                std::future::pending::<()>().await;
            }
        }
    }
}
