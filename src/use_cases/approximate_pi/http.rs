// Inbound HTTP adapter for the pi approximation.

use axum::{Json, Router, extract::Query, routing::get};
use serde::Serialize;
use std::collections::HashMap;

use crate::use_cases::approximate_pi::engine;

#[derive(Serialize)]
pub struct PiResponse {
    pub pi: f64,
    pub n: u64,
}

/// An absent, unparsable or negative `n` is normalized to 0 before the engine
/// runs. No upper bound is applied.
pub async fn handle(Query(params): Query<HashMap<String, String>>) -> Json<PiResponse> {
    let n = params
        .get("n")
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(0);
    let pi = engine::approximate(n).await;
    Json(PiResponse { pi, n })
}

pub fn routes() -> Router {
    Router::new().route("/pi", get(handle))
}
