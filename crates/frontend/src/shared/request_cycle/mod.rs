//! The request cycle shared by every page controller:
//! trigger, validate, mark busy, send, classify, render, mark idle.
//!
//! - `reply`: what the network layer hands back and how it can fail
//! - `busy`: the busy flag and the guard that always releases it
//! - `status`: a one-line status message with its tone

pub mod busy;
pub mod reply;
pub mod status;

pub use busy::{BusyControl, BusyGuard};
pub use reply::{server_message, HttpReply, InteractionResult, TransportError};
pub use status::{StatusLine, StatusTone};
