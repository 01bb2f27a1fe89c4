//! Wire contracts shared between the browser client and the document server.
//!
//! Field names follow the server's JSON exactly (Portuguese keys, `apiKey`).

pub mod system;
pub mod usecases;
