use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};
use uuid::Uuid;

use contacts::adapters::in_memory::InMemoryContactStore;
use contacts::adapters::postgres::PostgresContactStore;
use contacts::core::contact::{Contact, Contacts};
use contacts::shell::config::Config;
use contacts::shell::http::router;
use contacts::shell::state::SharedContactStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env();
    let instance_id = Uuid::now_v7().to_string();

    let memory: SharedContactStore = Arc::new(InMemoryContactStore::with_contacts(demo_contacts()));
    let database = connect_database(&config).await;

    let app = router(memory, database, instance_id);

    let addr = config.listen_addr();
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// A failed connection or schema setup disables the database routes instead of
/// taking the whole service down; the memory routes keep serving.
async fn connect_database(config: &Config) -> Option<SharedContactStore> {
    let url = config.database_url.as_deref()?;
    match PostgresContactStore::connect(url).await {
        Ok(store) => Some(Arc::new(store)),
        Err(err) => {
            tracing::warn!(%err, "could not set up the database store, serving memory routes only");
            None
        }
    }
}

/// Seed data for the in memory store, in the spirit of the browser demo this
/// service was originally written for.
fn demo_contacts() -> Contacts {
    [
        ("ada-lovelace", "Ada Lovelace", "Engineering", "Analytical Engines Ltd"),
        ("grace-hopper", "Grace Hopper", "Compilers", "UNIVAC"),
        ("alan-turing", "Alan Turing", "Research", "NPL"),
        ("margaret-hamilton", "Margaret Hamilton", "Software", "MIT"),
    ]
    .into_iter()
    .map(|(id, name, department, company)| {
        (
            id.to_string(),
            Contact {
                id: id.to_string(),
                name: name.to_string(),
                department: department.to_string(),
                company: company.to_string(),
            },
        )
    })
    .collect()
}
