// Composition root for the contacts service.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate concrete store implementations.
// - Wire stores into the HTTP routers and start the server.

pub mod config;
pub mod http;
pub mod state;
