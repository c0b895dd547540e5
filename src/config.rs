//! Configuration for userstore
//!
//! Centralized configuration with sensible defaults.

use std::collections::HashSet;

use crate::error::{Result, UserStoreError};
use crate::store::User;

/// Main configuration for a userstore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Largest accepted request body (bytes); bigger bodies get 413
    pub max_body_bytes: usize,

    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Records present when the store is created
    pub seed_users: Vec<User>,

    /// First id handed out by auto-assignment
    pub next_id: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3333".to_string(),
            max_body_bytes: 1024 * 1024, // 1 MiB
            seed_users: vec![User::new(1, "Test User1")],
            next_id: 2,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Convert a body limit given in KB to bytes
    pub fn body_limit_from_kb(kb: usize) -> Result<usize> {
        kb.checked_mul(1024).ok_or_else(|| {
            UserStoreError::Config(format!("body limit of {} KB is too large", kb))
        })
    }

    /// Check the seed data against the store invariants
    ///
    /// Seed ids must be unique and `next_id` must be past every positive
    /// seed id, otherwise the first auto-assigned create would conflict.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.seed_users.len());
        for user in &self.seed_users {
            if !seen.insert(user.id) {
                return Err(UserStoreError::Config(format!(
                    "duplicate seed user id {}",
                    user.id
                )));
            }
        }

        if let Some(max_id) = self.seed_users.iter().map(|u| u.id).max() {
            if max_id >= self.next_id {
                return Err(UserStoreError::Config(format!(
                    "next_id {} must be greater than the largest seed id {}",
                    self.next_id, max_id
                )));
            }
        }

        if self.max_body_bytes == 0 {
            return Err(UserStoreError::Config(
                "max_body_bytes must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the request body size limit (in bytes)
    pub fn max_body_bytes(mut self, size: usize) -> Self {
        self.config.max_body_bytes = size;
        self
    }

    /// Replace the seed records
    pub fn seed_users(mut self, users: Vec<User>) -> Self {
        self.config.seed_users = users;
        self
    }

    /// Start with an empty store (next_id = 1)
    pub fn no_seed(mut self) -> Self {
        self.config.seed_users.clear();
        self.config.next_id = 1;
        self
    }

    /// Set the first auto-assigned id
    pub fn next_id(mut self, id: i64) -> Self {
        self.config.next_id = id;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
