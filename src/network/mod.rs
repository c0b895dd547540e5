//! Network Module
//!
//! HTTP transport for the router.
//!
//! ## Architecture
//! - axum listener on a tokio multi-thread runtime
//! - One task per request; the store never awaits
//! - A single fallback handler converts requests for the Router

mod server;
mod handler;

pub use server::{BoundServer, Server};
