// The contact entity and its collection type.
//
// Purpose
// - Define the one domain record this service manages.
//
// Boundaries
// - No storage or transport knowledge here. Stores and HTTP handlers depend on
//   this module, never the other way around.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single entry in the contact directory.
///
/// The id is caller-supplied and keys the contact inside a store; it is never
/// generated by a backend. The empty string is an unusual but legal id. Fields
/// missing from a JSON body decode to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub department: String,
    pub company: String,
}

/// All contacts held by one store, keyed by id. Insertion order carries no meaning.
pub type Contacts = HashMap<String, Contact>;
