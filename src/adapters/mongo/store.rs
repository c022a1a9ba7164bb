//! MongoDB client wrapper.

use bson::doc;
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::domain::foundation::DomainError;

/// Shared MongoDB handle, opened once at process start.
///
/// Cloning is cheap: the underlying driver client is reference-counted and
/// serializes concurrent writes at its own layer.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Connects to MongoDB and verifies the connection with a ping.
    ///
    /// A bounded server-selection timeout keeps startup from hanging on an
    /// unreachable store.
    pub async fn connect(url: &str, db_name: &str) -> Result<Self, DomainError> {
        info!("Connecting to MongoDB at {}", url);

        let timeout_url = if url.contains('?') {
            format!("{url}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000")
        } else {
            format!("{url}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000")
        };

        let client = Client::with_uri_str(&timeout_url)
            .await
            .map_err(|e| DomainError::store(format!("Failed to connect to MongoDB: {e}")))?;

        let database = client.database(db_name);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DomainError::store(format!("MongoDB ping failed: {e}")))?;

        info!("Connected to MongoDB database '{}'", db_name);

        Ok(Self { client, database })
    }

    /// Returns a typed collection handle.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Returns the raw driver client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}
