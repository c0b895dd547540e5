//! Store Module
//!
//! In-memory owner of all user records and the id counter.
//!
//! ## Responsibilities
//! - Map user ids to records
//! - Assign sequential ids when the caller does not supply one
//! - Existence checks and mutation as one atomic unit
//!
//! ## Data Structure Choice
//! A HashMap and the `next_id` counter live together in one struct behind a
//! single RwLock, so "does id exist" and "insert id" can never interleave
//! with another writer.

mod table;

pub use table::UserStore;

use serde::{Deserialize, Serialize};

/// A user record as stored and as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Input for `UserStore::create`
///
/// `id: None` asks the store to auto-assign the next sequential id.
/// `Some(n)` is used verbatim and does not move the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: Option<i64>,
    pub name: String,
}

impl NewUser {
    /// A record whose id will be auto-assigned
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// A record with a caller-chosen id
    pub fn with_id(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}
