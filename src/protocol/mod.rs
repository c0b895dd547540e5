//! Protocol Module
//!
//! HTTP-shaped request/response descriptors passed between the transport
//! and the router, plus the pluggable body codec.
//!
//! ## Request
//! ```text
//! ┌──────────┬──────────┬──────────────────┬─────────────────┐
//! │  Method  │   Path   │  Query (k=v)*    │   Body bytes    │
//! └──────────┴──────────┴──────────────────┴─────────────────┘
//! ```
//!
//! ## Response
//! ```text
//! ┌──────────┬──────────────┬─────────────────────────────────┐
//! │  Status  │ Content-Type │             Body                │
//! └──────────┴──────────────┴─────────────────────────────────┘
//! ```
//!
//! ### Status Codes
//! - 200 OK, 201 Created, 204 No Content
//! - 400 Bad Request, 404 Not Found, 405 Method Not Allowed
//! - 409 Conflict, 500 Internal Server Error
//!
//! Oversized bodies are rejected with 413 by the transport before routing.

mod request;
mod response;
mod codec;

pub use request::{Method, Request};
pub use response::{Response, Status, TEXT_PLAIN};
pub use codec::{Codec, JsonCodec, APPLICATION_JSON};
