//! UserStore implementation
//!
//! HashMap-based store with a parking_lot RwLock for concurrency.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::{NewUser, User};
use crate::error::{Result, UserStoreError};

/// Map and counter, always locked together
#[derive(Debug)]
struct StoreState {
    users: HashMap<i64, User>,
    next_id: i64,

    /// Set once `i64::MAX` has been handed out
    ids_exhausted: bool,
}

/// Concurrency-safe in-memory user store
///
/// ## Concurrency Model
///
/// - **Reads** (get): shared lock, any number in parallel
/// - **Writes** (create/update/delete): exclusive lock held across the
///   existence check and the mutation
///
/// Nothing inside a critical section blocks or awaits.
#[derive(Debug)]
pub struct UserStore {
    state: RwLock<StoreState>,
}

impl UserStore {
    /// Create an empty store whose first auto-assigned id is 1
    pub fn new() -> Self {
        Self::with_records(Vec::new(), 1)
    }

    /// Create a store seeded with `records` and the given counter value
    ///
    /// Later records win if two share an id.
    pub fn with_records(records: impl IntoIterator<Item = User>, next_id: i64) -> Self {
        let users = records
            .into_iter()
            .map(|user| (user.id, user))
            .collect::<HashMap<_, _>>();

        Self {
            state: RwLock::new(StoreState {
                users,
                next_id,
                ids_exhausted: false,
            }),
        }
    }

    /// Get a user by id (read lock)
    pub fn get(&self, id: i64) -> Result<User> {
        let state = self.state.read();
        state
            .users
            .get(&id)
            .cloned()
            .ok_or(UserStoreError::NotFound(id))
    }

    /// Insert a new user (write lock)
    ///
    /// An auto-assigned id consumes the counter even if the insert then
    /// conflicts with a caller-inserted record, so no id is handed out twice.
    pub fn create(&self, new_user: NewUser) -> Result<User> {
        if new_user.name.is_empty() {
            return Err(UserStoreError::EmptyName);
        }

        let mut state = self.state.write();

        let id = match new_user.id {
            Some(id) => id,
            None => {
                if state.ids_exhausted {
                    return Err(UserStoreError::IdsExhausted);
                }
                let id = state.next_id;
                match id.checked_add(1) {
                    Some(next) => state.next_id = next,
                    // Counter stays at i64::MAX; no later auto-assign can reuse it
                    None => state.ids_exhausted = true,
                }
                id
            }
        };

        if state.users.contains_key(&id) {
            return Err(UserStoreError::Conflict(id));
        }

        let user = User {
            id,
            name: new_user.name,
        };
        state.users.insert(id, user.clone());

        Ok(user)
    }

    /// Replace an existing user wholesale (write lock)
    ///
    /// No name validation: an empty name overwrites the stored one.
    pub fn update(&self, user: User) -> Result<User> {
        let mut state = self.state.write();

        match state.users.get_mut(&user.id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(user)
            }
            None => Err(UserStoreError::NotFound(user.id)),
        }
    }

    /// Remove a user (write lock)
    pub fn delete(&self, id: i64) -> Result<User> {
        let mut state = self.state.write();
        state.users.remove(&id).ok_or(UserStoreError::NotFound(id))
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of live records
    pub fn len(&self) -> usize {
        self.state.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().users.is_empty()
    }

    /// Whether a record with this id exists
    pub fn contains(&self, id: i64) -> bool {
        self.state.read().users.contains_key(&id)
    }

    /// The id the next auto-assigning create will receive
    pub fn next_id(&self) -> i64 {
        self.state.read().next_id
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
