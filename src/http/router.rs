//! Route table and host integration.
//!
//! # Responsibilities
//! - Build the Axum routes for the version and login endpoints
//! - Wire the credential middleware and the CORS layer
//! - Nest everything under the configured base path
//! - Expose the one-call `with_inspector` merge for host applications

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::config::builder::{Inspector, InspectorBuilder};
use crate::config::schema::EndpointOptions;
use crate::diagnostics::DiagnosticsSnapshot;
use crate::http::{auth, handlers};
use crate::security::{AccessGuard, SessionStore};

/// Shared state injected into the inspector handlers.
///
/// Everything except the session store is frozen at startup and read
/// concurrently without locks.
#[derive(Clone)]
pub struct InspectorState {
    pub snapshot: Arc<DiagnosticsSnapshot>,
    pub guard: Option<AccessGuard>,
    pub sessions: Arc<SessionStore>,
    pub options: EndpointOptions,
}

/// Build the inspector routes, mounted under the configured base path.
pub(crate) fn build_router(state: InspectorState) -> Router {
    let mut routes: Router<InspectorState> = Router::new()
        .route("/version", get(handlers::version))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_authorization,
        ));

    // Permissive cross-origin headers unless restricted. When restricted no
    // CORS layer is mounted at all, so no Access-Control-Allow-Origin is
    // ever emitted and preflight requests fall through to a 405.
    if !state.options.restrict_cross_origin {
        routes = routes.layer(CorsLayer::permissive());
    }

    // The login form only exists when there is something to log in to.
    if state.guard.is_some() {
        routes = routes.route(
            "/version-login",
            get(handlers::login_form).post(handlers::login_submit),
        );
    }

    let routes = routes.with_state(state.clone());
    if state.options.base_path.is_empty() {
        routes
    } else {
        Router::new().nest(&state.options.base_path, routes)
    }
}

/// Host-pipeline integration for the inspector.
pub trait InspectorExt {
    /// Configure an inspector and merge its routes, leaving every other
    /// route of the host untouched.
    fn with_inspector(self, configure: impl FnOnce(&mut InspectorBuilder)) -> Self;
}

impl InspectorExt for Router {
    fn with_inspector(self, configure: impl FnOnce(&mut InspectorBuilder)) -> Self {
        self.merge(Inspector::build(configure).into_router())
    }
}
