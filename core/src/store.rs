//! The storage seam behind the HTTP handlers.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{NewTodo, Todo, TodoId};

/// One collection of todos.
///
/// Every method maps to exactly one store call. Implementations must be safe
/// to share across concurrent requests.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Every todo in store-default order.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Insert a todo and return it with the store-assigned id.
    async fn insert(&self, todo: NewTodo) -> Result<Todo, StoreError>;

    /// Set `completed = true` on the matching todo. Returns the number of
    /// todos matched, which is zero when the id is unknown.
    async fn complete(&self, id: TodoId) -> Result<u64, StoreError>;

    /// Remove the matching todo. Returns the number of todos deleted.
    async fn delete(&self, id: TodoId) -> Result<u64, StoreError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release the underlying connection. Called once when the server stops.
    async fn shutdown(&self);
}
