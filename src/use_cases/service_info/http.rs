// Inbound HTTP adapter exposing the process instance id.
//
// Demonstration endpoint: lets a caller tell which instance answered when the
// service runs behind a load balancer.

use axum::{Router, extract::State, routing::get};

pub async fn handle(State(instance_id): State<String>) -> String {
    instance_id
}

pub fn routes(instance_id: String) -> Router {
    Router::new()
        .route("/info", get(handle))
        .with_state(instance_id)
}
