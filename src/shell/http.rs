// Top-level router assembly.
//
// The same CRUD router is nested once per injected backend; the database
// branch only exists when the Postgres store came up during startup.

use axum::Router;
use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::shell::state::SharedContactStore;
use crate::use_cases::approximate_pi;
use crate::use_cases::manage_contacts;
use crate::use_cases::service_info;

pub fn router(
    memory: SharedContactStore,
    database: Option<SharedContactStore>,
    instance_id: String,
) -> Router {
    let mut app = Router::new()
        .nest("/memory/contacts", manage_contacts::http::routes(memory))
        .merge(approximate_pi::http::routes())
        .merge(service_info::http::routes(instance_id));

    if let Some(store) = database {
        app = app.nest("/database/contacts", manage_contacts::http::routes(store));
    }

    // The original frontend demo calls this API cross-origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE]);

    app.layer(cors).layer(TraceLayer::new_for_http())
}
