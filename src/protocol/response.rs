//! Response definitions
//!
//! Represents responses handed back to the transport.

use bytes::Bytes;

use crate::error::UserStoreError;

/// Content type of plain-text bodies
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Status {
    Ok = 200,
    Created = 201,
    NoContent = 204,
    BadRequest = 400,
    NotFound = 404,
    MethodNotAllowed = 405,
    Conflict = 409,
    InternalServerError = 500,
}

impl Status {
    pub fn code(self) -> u16 {
        self as u16
    }
}

/// A response to send to the client
#[derive(Debug, Clone)]
pub struct Response {
    pub status: Status,

    /// None for bodiless responses
    pub content_type: Option<&'static str>,

    pub body: Bytes,
}

impl Response {
    /// A plain-text response
    pub fn text(status: Status, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: Some(TEXT_PLAIN),
            body: body.into(),
        }
    }

    /// An encoded record body
    pub fn encoded(status: Status, content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type: Some(content_type),
            body: Bytes::from(body),
        }
    }

    /// A 204 with empty body
    pub fn no_content() -> Self {
        Self {
            status: Status::NoContent,
            content_type: None,
            body: Bytes::new(),
        }
    }

    /// A plain-text error: the message followed by a newline
    pub fn error(status: Status, message: &str) -> Self {
        Self::text(status, format!("{}\n", message))
    }

    /// Body as UTF-8 text (lossy), for logging and tests
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl From<UserStoreError> for Response {
    fn from(err: UserStoreError) -> Self {
        Response::error(err.status(), &err.to_string())
    }
}
