use std::sync::Arc;

use crate::core::ports::ContactStore;

/// The backend handle injected into the contact routers. Which concrete store
/// sits behind it is decided once, at assembly time.
pub type SharedContactStore = Arc<dyn ContactStore>;
