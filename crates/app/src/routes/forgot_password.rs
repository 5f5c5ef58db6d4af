use client::flows::request_reset::{self, RequestResetForm, RequestResetStatus};
use client::links::local_reset_path;
use client::HttpAuthApi;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLock;
use dioxus_free_icons::Icon;
use shared_types::AppConfig;
use shared_ui::{
    Alert, AlertVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, Input, Label,
};

use crate::form_store::SignalStore;
use crate::routes::{route_for_path, Route};

/// Forgot password page: asks the backend to send a reset link for an email.
#[component]
pub fn ForgotPassword() -> Element {
    let config: AppConfig = use_context();
    let api: HttpAuthApi = use_context();
    let mut state = use_signal(|| RequestResetForm::new(config.features.dev_reset_links));
    let login_path = config.routes.login.clone();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            request_reset::submit(&api, &SignalStore(state)).await;
        }
    };

    let (sent, error, sending) = {
        let form = state.read();
        let sent = match form.status() {
            RequestResetStatus::Sent {
                message,
                reset_link,
            } => Some((message.clone(), reset_link.clone())),
            _ => None,
        };
        (sent, form.error().map(str::to_string), form.is_sending())
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    div { class: "auth-icon",
                        Icon::<LdLock> { icon: LdLock, width: 22, height: 22 }
                    }
                    CardTitle { "Reset Password" }
                    CardDescription { "Enter your email to receive a password reset link" }
                }

                CardContent {
                    if let Some((message, reset_link)) = sent {
                        SentNotice { state, message, reset_link }
                    } else {
                        if let Some(err) = error {
                            Alert { variant: AlertVariant::Error, "{err}" }
                        }

                        form { onsubmit: handle_submit,
                            div { class: "auth-field",
                                Label { html_for: "email", "Email" }
                                Input {
                                    input_type: "email",
                                    id: "email",
                                    placeholder: "user@example.com",
                                    autocomplete: "email",
                                    required: true,
                                    value: state.read().email().to_string(),
                                    on_input: move |e: FormEvent| state.write().set_email(e.value()),
                                }
                            }
                            Button {
                                button_type: "submit",
                                class: "auth-submit",
                                disabled: sending,
                                if sending { "Sending..." } else { "Send Reset Link" }
                            }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Remember your password? "
                        a { href: "{login_path}", "Sign in" }
                    }
                }
            }
        }
    }
}

/// Confirmation shown once the backend accepted the request.
#[component]
fn SentNotice(
    mut state: Signal<RequestResetForm>,
    message: String,
    reset_link: Option<String>,
) -> Element {
    rsx! {
        Alert { variant: AlertVariant::Success, "{message}" }
        p { class: "auth-hint", "Check your inbox and follow the link to choose a new password." }

        if let Some(link) = reset_link {
            DevResetLink { link }
        }

        Button {
            variant: ButtonVariant::Outline,
            class: "auth-submit",
            onclick: move |_| state.write().send_another(),
            "Send another link"
        }
    }
}

/// The live reset link a development backend returns. Only rendered when
/// `features.dev_reset_links` is on.
#[component]
fn DevResetLink(link: String) -> Element {
    let route = local_reset_path(&link).and_then(|path| route_for_path(&path));

    rsx! {
        div { class: "auth-dev-link",
            span { class: "auth-dev-link-label", "Development mode: reset link" }
            if let Some(route) = route {
                Link { to: route, class: "auth-dev-link-anchor", "{link}" }
            } else {
                a { href: "{link}", class: "auth-dev-link-anchor", "{link}" }
            }
        }
    }
}
