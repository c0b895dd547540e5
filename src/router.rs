//! Router Module
//!
//! Dispatches a request descriptor to the store and maps the outcome back to
//! an HTTP-shaped response.
//!
//! ## Routing Table
//!
//! | Path     | Method  | Action                         |
//! |----------|---------|--------------------------------|
//! | `/`      | any     | root greeting                  |
//! | `/hello` | GET     | hello greeting                 |
//! | `/user`  | GET     | get by `id` query parameter    |
//! | `/user`  | POST    | create from body               |
//! | `/user`  | PATCH   | replace from body              |
//! | `/user`  | DELETE  | delete by `id` query parameter |
//!
//! Other methods on `/hello` and `/user` get 405; other paths get 404.

use std::sync::Arc;

use crate::error::{Result, UserStoreError};
use crate::protocol::{Codec, JsonCodec, Method, Request, Response, Status};
use crate::store::{User, UserStore};

/// Body of `/`
pub const ROOT_GREETING: &str = "This is a simple HTTP server :)\n";

/// Body of `/hello`
pub const HELLO_GREETING: &str = "Hello, HTTP!\n";

const MISSING_ID: &str = "Missing user ID";
const INVALID_ID: &str = "Invalid user ID";
const INVALID_DATA: &str = "Invalid user data";
const DELETE_NOT_FOUND: &str = "User not found :<";

/// Request router over a shared store
///
/// Cheap to clone; every clone serves the same store.
pub struct Router<C: Codec = JsonCodec> {
    store: Arc<UserStore>,
    codec: Arc<C>,
}

impl<C: Codec> Clone for Router<C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            codec: Arc::clone(&self.codec),
        }
    }
}

impl Router<JsonCodec> {
    /// Create a router with the JSON codec
    pub fn new(store: Arc<UserStore>) -> Self {
        Self::with_codec(store, JsonCodec)
    }
}

impl<C: Codec> Router<C> {
    /// Create a router with a custom body codec
    pub fn with_codec(store: Arc<UserStore>, codec: C) -> Self {
        Self {
            store,
            codec: Arc::new(codec),
        }
    }

    /// The store this router serves
    pub fn store(&self) -> &Arc<UserStore> {
        &self.store
    }

    /// Handle one request; always produces a response
    pub fn handle(&self, request: Request) -> Response {
        tracing::debug!(
            method = request.method.as_str(),
            path = %request.path,
            "Handling request"
        );

        let response = match request.path.as_str() {
            "/" => Response::text(Status::Ok, ROOT_GREETING),
            "/hello" => self.hello(&request),
            "/user" => self.user(&request),
            _ => UserStoreError::RouteNotFound.into(),
        };

        if response.status.code() >= 400 {
            tracing::debug!(
                status = response.status.code(),
                reason = %response.body_text().trim_end(),
                "Request rejected"
            );
        }

        response
    }

    fn hello(&self, request: &Request) -> Response {
        match request.method {
            Method::Get => Response::text(Status::Ok, HELLO_GREETING),
            _ => UserStoreError::MethodNotAllowed.into(),
        }
    }

    fn user(&self, request: &Request) -> Response {
        match request.method {
            Method::Get => self.get_user(request),
            Method::Post => self.create_user(request),
            Method::Patch => self.update_user(request),
            Method::Delete => self.delete_user(request),
            _ => UserStoreError::MethodNotAllowed.into(),
        }
    }

    // =========================================================================
    // /user handlers
    // =========================================================================

    fn get_user(&self, request: &Request) -> Response {
        let id = match parse_id(request) {
            Ok(id) => id,
            Err(e) => return e.into(),
        };

        match self.store.get(id) {
            Ok(user) => self.encode(Status::Ok, &user),
            Err(e) => e.into(),
        }
    }

    fn create_user(&self, request: &Request) -> Response {
        let new_user = match self.codec.decode_new_user(&request.body) {
            Ok(new_user) => new_user,
            Err(_) => return Response::error(Status::BadRequest, INVALID_DATA),
        };

        if new_user.name.is_empty() {
            return UserStoreError::EmptyName.into();
        }

        match self.store.create(new_user) {
            Ok(user) => {
                tracing::info!(id = user.id, "Created user");
                self.encode(Status::Created, &user)
            }
            Err(e) => e.into(),
        }
    }

    fn update_user(&self, request: &Request) -> Response {
        let user = match self.codec.decode_user(&request.body) {
            Ok(user) => user,
            Err(_) => return Response::error(Status::BadRequest, INVALID_DATA),
        };

        match self.store.update(user) {
            Ok(user) => {
                tracing::info!(id = user.id, "Updated user");
                self.encode(Status::Ok, &user)
            }
            Err(e) => e.into(),
        }
    }

    fn delete_user(&self, request: &Request) -> Response {
        let id = match parse_id(request) {
            Ok(id) => id,
            Err(e) => return e.into(),
        };

        match self.store.delete(id) {
            Ok(_) => {
                tracing::info!(id, "Deleted user");
                Response::no_content()
            }
            Err(UserStoreError::NotFound(_)) => {
                Response::error(Status::NotFound, DELETE_NOT_FOUND)
            }
            Err(e) => e.into(),
        }
    }

    fn encode(&self, status: Status, user: &User) -> Response {
        match self.codec.encode_user(user) {
            Ok(body) => Response::encoded(status, self.codec.content_type(), body),
            Err(e) => {
                tracing::warn!(id = user.id, "Failed to encode user: {}", e);
                Response::error(Status::InternalServerError, "Failed to encode user")
            }
        }
    }
}

/// Parse the `id` query parameter
fn parse_id(request: &Request) -> Result<i64> {
    let raw = request
        .query_param("id")
        .ok_or_else(|| UserStoreError::BadRequest(MISSING_ID.to_string()))?;

    raw.parse::<i64>()
        .map_err(|_| UserStoreError::BadRequest(INVALID_ID.to_string()))
}
