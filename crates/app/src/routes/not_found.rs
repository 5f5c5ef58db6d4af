use dioxus::prelude::*;
use shared_ui::{Alert, AlertVariant, Card, CardContent, CardHeader, CardTitle};

use crate::routes::Route;

/// Anything outside the two reset pages. Most often a reset link that was
/// cut short by a mail client.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Link not recognised" }
                }

                CardContent {
                    MissingPageMessage { path: format!("/{}", route.join("/")) }
                    Link { to: Route::ForgotPassword {}, class: "auth-submit button",
                        "Request a new reset link"
                    }
                }
            }
        }
    }
}

#[component]
fn MissingPageMessage(path: String) -> Element {
    rsx! {
        Alert { variant: AlertVariant::Info,
            "Nothing lives at "
            code { "{path}" }
            "."
        }
        p { class: "auth-hint",
            "If you followed a password reset link, copy the whole address from the email or ask for a new one."
        }
    }
}
