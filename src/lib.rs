//! # userstore
//!
//! A small HTTP service exposing CRUD over in-memory user records:
//! - Auto-incrementing ids that are never reused
//! - Single-writer/multi-reader store behind one RwLock
//! - Transport-agnostic router with a pluggable body codec
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   HTTP Server (axum)                         │
//! │                 (one task per request)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ protocol::Request
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Router                                 │
//! │         (path × method dispatch, body codec)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │   UserStore   │
//!               │ (RwLock over  │
//!               │ map + next_id)│
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod protocol;
pub mod router;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{UserStoreError, Result};
pub use config::Config;
pub use store::{NewUser, User, UserStore};
pub use router::Router;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of userstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
