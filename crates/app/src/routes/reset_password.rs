use std::time::Duration;

use client::flows::confirm_reset::{self, ConfirmResetForm, ConfirmResetStatus};
use client::schedule::ViewScope;
use client::HttpAuthApi;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLockOpen;
use dioxus_free_icons::Icon;
use shared_types::{password, AppConfig};
use shared_ui::{
    Alert, AlertVariant, Button, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Input, Label,
};

use crate::clock::BrowserClock;
use crate::form_store::SignalStore;
use crate::routes::Route;

/// Reset password page. Receives a token from the email link as a query
/// param and lets the user set a new password. Redirects to the login view
/// after a successful reset.
#[component]
pub fn ResetPassword(token: Option<String>) -> Element {
    let config: AppConfig = use_context();
    let api: HttpAuthApi = use_context();
    let nav = navigator();
    let mut state = use_signal(|| ConfirmResetForm::new(token.clone()));

    // Closed on unmount so a pending redirect never fires for a page that is
    // gone.
    let scope = use_hook(ViewScope::new);
    use_drop({
        let scope = scope.clone();
        move || scope.close()
    });

    let login_path = config.routes.login.clone();
    let delay_ms = config.reset.redirect_delay_ms;

    let handle_submit = {
        let login_path = login_path.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            let scope = scope.clone();
            let login_path = login_path.clone();
            async move {
                confirm_reset::submit_then_redirect(
                    &api,
                    &SignalStore(state),
                    &scope,
                    &BrowserClock,
                    Duration::from_millis(delay_ms),
                    move || {
                        nav.push(NavigationTarget::<Route>::External(login_path));
                    },
                )
                .await;
            }
        }
    };

    let (status, submitting, requirements) = {
        let form = state.read();
        (
            form.status().clone(),
            form.is_submitting(),
            password::requirements(&form.password),
        )
    };
    let invalid_link = status == ConfirmResetStatus::InvalidLink;
    let succeeded = match &status {
        ConfirmResetStatus::Succeeded { message } => Some(message.clone()),
        _ => None,
    };
    let error = match status {
        ConfirmResetStatus::Editing { error } => error,
        _ => None,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    div { class: "auth-icon",
                        Icon::<LdLockOpen> { icon: LdLockOpen, width: 22, height: 22 }
                    }
                    CardTitle { "Set New Password" }
                    CardDescription { "Enter your new password below" }
                }

                CardContent {
                    if invalid_link {
                        InvalidLinkNotice {}
                    } else {
                        if let Some(message) = succeeded {
                            SuccessNotice {
                                message,
                                login_path: login_path.clone(),
                                delay_secs: delay_ms.div_ceil(1000),
                            }
                        } else {
                            if let Some(err) = error {
                                Alert { variant: AlertVariant::Error, "{err}" }
                            }

                            form { onsubmit: handle_submit,
                                div { class: "auth-field",
                                    Label { html_for: "new_password", "New Password" }
                                    Input {
                                        input_type: "password",
                                        id: "new_password",
                                        placeholder: "At least 8 characters",
                                        autocomplete: "new-password",
                                        required: true,
                                        value: state.read().password.clone(),
                                        on_input: move |e: FormEvent| state.write().password = e.value(),
                                    }
                                }

                                ul { class: "auth-requirements",
                                    for req in requirements {
                                        li {
                                            key: "{req.label}",
                                            class: if req.met { "auth-requirement met" } else { "auth-requirement" },
                                            "{req.label}"
                                        }
                                    }
                                }

                                div { class: "auth-field",
                                    Label { html_for: "confirm_password", "Confirm Password" }
                                    Input {
                                        input_type: "password",
                                        id: "confirm_password",
                                        placeholder: "Re-enter your password",
                                        autocomplete: "new-password",
                                        required: true,
                                        value: state.read().confirm_password.clone(),
                                        on_input: move |e: FormEvent| state.write().confirm_password = e.value(),
                                    }
                                }

                                Button {
                                    button_type: "submit",
                                    class: "auth-submit",
                                    disabled: submitting,
                                    if submitting { "Resetting..." } else { "Reset Password" }
                                }
                            }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        a { href: "{login_path}", "Back to sign in" }
                    }
                }
            }
        }
    }
}

/// Terminal state for a link without a token.
#[component]
fn InvalidLinkNotice() -> Element {
    rsx! {
        InvalidLinkMessage {}
        Link { to: Route::ForgotPassword {}, class: "auth-submit button", "Request a new reset link" }
    }
}

#[component]
fn InvalidLinkMessage() -> Element {
    rsx! {
        Alert { variant: AlertVariant::Error,
            "This password reset link is invalid or incomplete."
        }
        p { class: "auth-hint", "Request a new link to try again." }
    }
}

#[component]
fn SuccessNotice(message: String, login_path: String, delay_secs: u64) -> Element {
    rsx! {
        Alert { variant: AlertVariant::Success, "{message}" }
        p { class: "auth-hint", "Redirecting to sign in in {delay_secs} seconds..." }
        a { class: "auth-submit button", href: "{login_path}", "Sign in now" }
    }
}
