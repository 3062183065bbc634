// In memory implementation of the ContactStore port.
//
// Purpose
// - Serve as the default backend and support tests without a database.
//
// Responsibilities
// - Hold the whole contact collection behind one lock so concurrent requests
//   never tear a read or lose a write, including the remove-then-insert pair
//   inside an id-moving update.

use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::core::contact::{Contact, Contacts};
use crate::core::ports::{ContactStore, StoreError};

pub struct InMemoryContactStore {
    contacts: RwLock<Contacts>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self {
            contacts: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_contacts(contacts: Contacts) -> Self {
        Self {
            contacts: RwLock::new(contacts),
        }
    }
}

impl Default for InMemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ContactStore for InMemoryContactStore {
    async fn fetch_all(&self) -> Result<Contacts, StoreError> {
        // Snapshot copy: callers must not assume they can mutate the live map.
        Ok(self.contacts.read().await.clone())
    }

    async fn get_one(&self, id: &str) -> Result<Contact, StoreError> {
        self.contacts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, contact: Contact) -> Result<(), StoreError> {
        // Last write wins. No uniqueness check here; the Postgres store rejects
        // duplicate ids instead.
        self.contacts
            .write()
            .await
            .insert(contact.id.clone(), contact);
        Ok(())
    }

    async fn update(&self, id: &str, contact: Contact) -> Result<(), StoreError> {
        let mut contacts = self.contacts.write().await;
        if id != contact.id {
            contacts.remove(id);
        }
        contacts.insert(contact.id.clone(), contact);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.contacts.write().await.remove(id);
        Ok(())
    }
}
