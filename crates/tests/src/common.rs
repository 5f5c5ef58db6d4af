use client::flows::confirm_reset::ConfirmResetForm;
use client::HttpAuthApi;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a mock authentication backend and a client pointed at it.
pub async fn mock_backend() -> (MockServer, HttpAuthApi) {
    let server = MockServer::start().await;
    let api = HttpAuthApi::new(server.uri());
    (server, api)
}

/// A client whose backend refuses connections.
pub fn unreachable_backend() -> HttpAuthApi {
    HttpAuthApi::new("http://127.0.0.1:9")
}

/// Mount a POST handler on `route` answering `status` with a JSON body,
/// expected to be hit exactly `times` times.
pub async fn mount_json(server: &MockServer, route: &str, status: u16, body: Value, times: u64) {
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Fail the test if any request reaches the backend.
pub async fn forbid_requests(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// JSON bodies of every request the backend received.
pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|req| serde_json::from_slice(&req.body).unwrap_or(Value::Null))
        .collect()
}

/// A confirmation form with a token and both password fields filled.
pub fn filled_form(token: &str, password: &str, confirm: &str) -> ConfirmResetForm {
    let mut form = ConfirmResetForm::new(Some(token.to_string()));
    form.password = password.to_string();
    form.confirm_password = confirm.to_string();
    form
}
