//! Request handlers for the inspector endpoints.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Deserialize;

use crate::diagnostics::DiagnosticsSnapshot;
use crate::http::router::InspectorState;
use crate::security::session::{SESSION_COOKIE, SESSION_TTL};

/// Serve the frozen diagnostics snapshot as an ordered JSON object.
pub async fn version(State(state): State<InspectorState>) -> Json<DiagnosticsSnapshot> {
    metrics::counter!("inspector_requests_total", "outcome" => "served").increment(1);
    Json((*state.snapshot).clone())
}

/// Credential submitted by the login form.
#[derive(Deserialize)]
pub struct LoginForm {
    password: String,
}

/// Render the credential form.
pub async fn login_form(State(state): State<InspectorState>) -> Html<String> {
    Html(render_login_page(&state.options.base_path, false))
}

/// Validate the submitted credential. Success mints a session cookie and
/// redirects to the version endpoint; failure re-renders the form with an
/// error indicator.
pub async fn login_submit(
    State(state): State<InspectorState>,
    Form(form): Form<LoginForm>,
) -> Response {
    let Some(guard) = &state.guard else {
        // The login routes are only mounted when a guard is configured.
        return StatusCode::NOT_FOUND.into_response();
    };

    if !guard.authorize(Some(&form.password)) {
        tracing::debug!("login attempt rejected");
        return (
            StatusCode::UNAUTHORIZED,
            Html(render_login_page(&state.options.base_path, true)),
        )
            .into_response();
    }

    let token = state.sessions.issue();
    let cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; Max-Age={}; HttpOnly; SameSite=Strict",
        SESSION_TTL.as_secs()
    );
    let version_path = format!("{}/version", state.options.base_path);
    let mut response = Redirect::to(&version_path).into_response();
    response.headers_mut().insert(
        header::SET_COOKIE,
        header::HeaderValue::from_str(&cookie).unwrap(),
    );
    response
}

fn render_login_page(base_path: &str, failed: bool) -> String {
    let error_banner = if failed {
        "<p class=\"error\">Invalid password, try again.</p>\n"
    } else {
        ""
    };
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Version access</title></head>\n\
         <body>\n\
         <h1>Version access</h1>\n\
         {error_banner}\
         <form method=\"post\" action=\"{base_path}/version-login\">\n\
         <label for=\"password\">Password</label>\n\
         <input type=\"password\" id=\"password\" name=\"password\" autofocus>\n\
         <button type=\"submit\">Unlock</button>\n\
         </form>\n\
         </body>\n\
         </html>\n"
    )
}
