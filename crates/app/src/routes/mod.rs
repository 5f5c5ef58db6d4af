pub mod forgot_password;
pub mod not_found;
pub mod reset_password;

use dioxus::prelude::*;

use forgot_password::ForgotPassword;
use not_found::NotFound;
use reset_password::ResetPassword;

/// Application routes.
///
/// The login view is not one of them: it belongs to the main site and is
/// reached through the configured `routes.login` path.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[redirect("/", || Route::ForgotPassword {})]
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset-password?:token")]
    ResetPassword { token: Option<String> },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Resolve an in-app path, as produced by `client::links::local_reset_path`,
/// to one of this app's pages. Paths only the 404 catch-all would match
/// resolve to `None`.
pub fn route_for_path(path: &str) -> Option<Route> {
    match path.parse::<Route>() {
        Ok(Route::NotFound { .. }) | Err(_) => None,
        Ok(route) => Some(route),
    }
}
