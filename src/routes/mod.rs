use std::{path::Path, sync::Arc};

use axum::{Router, routing::get, routing::post};
use jetfuel_contact::ContactRelay;
use tower_http::services::{ServeDir, ServeFile};

use crate::assistant::Assistant;

mod assistant;
mod contact;
mod fixtures;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub relay: ContactRelay,
    pub assistant: Arc<dyn Assistant>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/contact",
            post(contact::action).fallback(contact::method_not_allowed),
        )
        .route("/api/assistant", post(assistant::action))
        .route("/api/fixtures/user", get(fixtures::user))
        .route("/api/fixtures/admin", get(fixtures::admin))
        .route("/api/fixtures/projects", get(fixtures::projects))
        .route("/api/fixtures/leads", get(fixtures::leads))
        .with_state(app_state)
}

/// Serve the built presentation shell, falling back to `index.html` for
/// client-side views.
pub fn with_static(router: Router, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    let index = static_dir.join("index.html");

    router.fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
}
