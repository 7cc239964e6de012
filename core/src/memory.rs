//! In-process `TodoStore` backed by a vector.
//!
//! Preserves insertion order on `list`, the same order a fresh MongoDB
//! collection returns. Once `shutdown` is called every operation fails with
//! `StoreError::Unavailable`, matching a driver whose client has been closed.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::TodoStore;
use crate::types::{NewTodo, Todo, TodoId};

#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: RwLock<Vec<Todo>>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StoreError::unavailable("store has been shut down"));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        self.ensure_open()?;
        Ok(self.todos.read().await.clone())
    }

    async fn insert(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        self.ensure_open()?;
        let todo = Todo {
            id: TodoId::generate(),
            body: todo.into_body(),
            completed: false,
        };
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn complete(&self, id: TodoId) -> Result<u64, StoreError> {
        self.ensure_open()?;
        let mut todos = self.todos.write().await;
        match todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = true;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: TodoId) -> Result<u64, StoreError> {
        self.ensure_open()?;
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        Ok((before - todos.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.ensure_open()
    }

    async fn shutdown(&self) {
        self.closed.store(true, Ordering::Release);
    }
}
