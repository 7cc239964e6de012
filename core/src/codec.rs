//! Mapping between stored todo documents and the wire `Todo`.
//!
//! Documents live in MongoDB as `{_id, body, completed}`. `_id` is left out
//! of freshly built documents so the server assigns it on insert.

use mongodb::bson::{oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::types::{NewTodo, Todo, TodoId};

/// The persisted form of a todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoDocument {
    /// Build the document inserted for a new todo.
    pub fn new(todo: NewTodo) -> Self {
        Self {
            id: None,
            body: todo.into_body(),
            completed: false,
        }
    }

    /// Attach the identifier the store generated for this document.
    pub fn with_inserted_id(mut self, inserted_id: &Bson) -> Result<Self, StoreError> {
        let oid = inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::UnexpectedId(inserted_id.to_string()))?;
        self.id = Some(oid);
        Ok(self)
    }
}

impl TryFrom<TodoDocument> for Todo {
    type Error = StoreError;

    fn try_from(doc: TodoDocument) -> Result<Self, Self::Error> {
        let id = doc
            .id
            .ok_or_else(|| StoreError::UnexpectedId("missing _id".to_string()))?;
        Ok(Todo {
            id: TodoId::from(id),
            body: doc.body,
            completed: doc.completed,
        })
    }
}
