//! MongoDB-backed `TodoStore`.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use tracing::{debug, info};

use crate::codec::TodoDocument;
use crate::error::StoreError;
use crate::store::TodoStore;
use crate::types::{NewTodo, Todo, TodoId};

/// Handle to one collection of todo documents.
///
/// The driver pools connections internally, so a single `MongoStore` is
/// shared by every request for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    database: Database,
    collection: Collection<TodoDocument>,
}

impl MongoStore {
    /// Connect to `uri` and verify the deployment answers a ping before
    /// handing out the collection.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(database);
        let store = Self {
            collection: database.collection(collection),
            database,
            client,
        };
        store.ping().await?;
        info!(
            database = %store.database.name(),
            collection = %store.collection.name(),
            "Connected to MongoDB"
        );
        Ok(store)
    }
}

#[async_trait]
impl TodoStore for MongoStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let documents: Vec<TodoDocument> = self.collection.find(doc! {}).await?.try_collect().await?;
        documents.into_iter().map(Todo::try_from).collect()
    }

    async fn insert(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        let document = TodoDocument::new(todo);
        let result = self.collection.insert_one(&document).await?;
        document.with_inserted_id(&result.inserted_id)?.try_into()
    }

    async fn complete(&self, id: TodoId) -> Result<u64, StoreError> {
        let result = self
            .collection
            .update_one(doc! { "_id": id.object_id() }, doc! { "$set": { "completed": true } })
            .await?;
        debug!(%id, matched = result.matched_count, modified = result.modified_count, "update_one");
        Ok(result.matched_count)
    }

    async fn delete(&self, id: TodoId) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": id.object_id() }).await?;
        debug!(%id, deleted = result.deleted_count, "delete_one");
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        info!("Disconnected from MongoDB");
    }
}
