//! Todo model and storage for the todo service.
//!
//! # Overview
//! A single collection of todos, each with a store-assigned id, a non-empty
//! body, and a completion flag. The HTTP layer talks to storage only through
//! the `TodoStore` trait.
//!
//! # Design
//! - `MongoStore` is the production backend; `MemoryStore` keeps the same
//!   contract in process memory for tests and local runs.
//! - `codec` owns the stored document shape, so the wire `Todo` never
//!   carries BSON details.
//! - Completing or deleting an unknown id is not an error; stores return
//!   match counts and leave the decision to the caller.

pub mod codec;
pub mod error;
pub mod memory;
pub mod mongo;
pub mod store;
pub mod types;

pub use codec::TodoDocument;
pub use error::{StoreError, ValidationError};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::TodoStore;
pub use types::{CreateTodo, NewTodo, Todo, TodoId};
