//! Session handling against the server's cookie-based login

pub mod api;
pub mod session;
