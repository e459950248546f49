use futures::TryStreamExt;
use mongodb::bson::Document;
use mongodb::{Client, Collection, Database, IndexModel};

use crate::utils::AppError;

// Collection names used by the resource routes
pub const USERS: &str = "users";
pub const LISTINGS: &str = "listings";
pub const DONATIONS: &str = "donations";
pub const ADOPTION_REQUESTS: &str = "adoptionRequests";
pub const ORDERS: &str = "orders";

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, AppError> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mongodb = Self { db };

        mongodb.ensure_indexes().await;

        Ok(mongodb)
    }

    /// Creates secondary indexes on the fields the list filters and the
    /// latest-pets sort touch. Failures are logged, not fatal: the routes
    /// work unindexed, just slower.
    async fn ensure_indexes(&self) {
        log::info!("🔧 Creating database indexes...");

        let indexes = [
            (USERS, "email"),
            (LISTINGS, "email"),
            (LISTINGS, "date"),
            (DONATIONS, "email"),
            (ADOPTION_REQUESTS, "ownerEmail"),
            (ORDERS, "buyer_email"),
        ];

        for (collection_name, field) in indexes {
            let mut keys = Document::new();
            keys.insert(field, 1);
            let index = IndexModel::builder().keys(keys).build();

            let collection = self.collection::<Document>(collection_name);
            match collection.create_index(index).await {
                Ok(_) => log::info!("   ✅ Index created: {}({})", collection_name, field),
                Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
            }
        }

        log::info!("✅ Database indexes ready");
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Runs a filtered find on a collection and drains the cursor.
    pub async fn find_all(
        &self,
        name: &str,
        filter: Document,
    ) -> mongodb::error::Result<Vec<Document>> {
        self.collection::<Document>(name)
            .find(filter)
            .await?
            .try_collect()
            .await
    }

    /// Most recent documents by the given sort, newest first.
    pub async fn find_latest(
        &self,
        name: &str,
        sort: Document,
        limit: i64,
    ) -> mongodb::error::Result<Vec<Document>> {
        self.collection::<Document>(name)
            .find(Document::new())
            .sort(sort)
            .limit(limit)
            .await?
            .try_collect()
            .await
    }
}
