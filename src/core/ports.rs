// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the storage capability every backend must provide as a trait.
//
// Responsibilities
// - Keep callers independent of any concrete database by coding against the trait.
// - Carry the closed error set stores are allowed to surface.
//
// Boundaries
// - No concrete storage here. Backends implement this trait in the adapters layer.
// - No transport knowledge: mapping errors to HTTP status codes is the inbound
//   adapter's job.
//
// Testing guidance
// - The in memory implementation doubles as the test store; the Postgres
//   implementation is exercised by ignored integration tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::contact::{Contact, Contacts};

/// The closed set of failures a contact store may report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("contact not found")]
    NotFound,

    #[error("a contact with this id already exists")]
    Conflict,

    #[error("stored contact could not be decoded: {0}")]
    Invalid(String),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Storage capability every backend variant must satisfy with the same external
/// semantics, whatever its internal mechanics.
///
/// `update` takes the *prior* id next to the replacement record so that a call
/// site moving a contact to a new id is a single operation the backend can make
/// atomic: no concurrent reader may observe the gap between removing the old
/// entry and inserting the new one.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Every contact currently stored. Never a silently truncated result: any
    /// backend failure surfaces as an error instead.
    async fn fetch_all(&self) -> Result<Contacts, StoreError>;

    /// The contact stored under `id`, or `NotFound`.
    async fn get_one(&self, id: &str) -> Result<Contact, StoreError>;

    /// Insert `contact` keyed by its own id. Duplicate-id behavior is
    /// backend-defined: the in memory store overwrites silently, the Postgres
    /// store reports `Conflict` from its uniqueness constraint.
    async fn create(&self, contact: Contact) -> Result<(), StoreError>;

    /// Replace the contact stored under `id` with `contact`. When
    /// `contact.id != id` the entry moves to the new key in one atomic step.
    /// A missing `id` is not reported here; existence checking is the caller's
    /// responsibility.
    async fn update(&self, id: &str, contact: Contact) -> Result<(), StoreError>;

    /// Remove the contact stored under `id`. Deleting an absent id is a no-op,
    /// not an error.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
