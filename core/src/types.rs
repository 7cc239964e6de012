//! Domain types for the todo API.
//!
//! # Design
//! `Todo` is the wire shape returned to clients. Its `id` is a `TodoId`, a
//! thin wrapper over a MongoDB `ObjectId` that serializes as the 24-character
//! hex string rather than BSON's extended-JSON `{"$oid": ...}` form.
//!
//! Creation goes through two types: `CreateTodo` is whatever the client sent,
//! and `NewTodo` is the validated payload. Stores only accept `NewTodo`, so a
//! todo with an empty body can never reach the collection.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Store-assigned identifier of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoId(ObjectId);

impl TodoId {
    /// Generate a fresh identifier, as the store would on insert.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for TodoId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for TodoId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| ValidationError::InvalidId(s.to_string()))
    }
}

impl TryFrom<String> for TodoId {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TodoId> for String {
    fn from(id: TodoId) -> Self {
        id.0.to_hex()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

/// A single todo item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub body: String,
    pub completed: bool,
}

/// Request payload for creating a todo.
///
/// Only `body` is read. Any `id` or `completed` the client sends is ignored,
/// and a missing `body` deserializes as empty so validation can reject it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub body: String,
}

impl CreateTodo {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn validate(self) -> Result<NewTodo, ValidationError> {
        if self.body.is_empty() {
            return Err(ValidationError::EmptyBody);
        }
        Ok(NewTodo { body: self.body })
    }
}

/// A validated todo ready to be inserted. Always has a non-empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    body: String,
}

impl NewTodo {
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }
}
