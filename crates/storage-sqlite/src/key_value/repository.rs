use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::AppStorageDB;
use crate::db::{self, get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::app_storage::dsl::*;
use sparksave_core::errors::Result;
use sparksave_core::storage::KeyValueStoreTrait;

pub struct SqliteKeyValueStore {
    pool: Arc<DbPool>,
}

impl SqliteKeyValueStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteKeyValueStore { pool }
    }

    /// Prepares the database file, builds a pool and applies migrations.
    pub fn open(db_path: &str) -> Result<Self> {
        let db_path = db::init(db_path)?;
        let pool = db::create_pool(&db_path)?;
        db::run_migrations(&pool)?;
        debug!("Key-value storage ready at {}", db_path);
        Ok(Self::new(pool))
    }
}

impl KeyValueStoreTrait for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let value = app_storage
            .filter(storage_key.eq(key))
            .select(storage_value)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::ReadFailed)?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(app_storage)
            .values(&AppStorageDB {
                storage_key: key.to_string(),
                storage_value: value.to_string(),
            })
            .execute(&mut conn)
            .map_err(StorageError::WriteFailed)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::delete(app_storage.filter(storage_key.eq(key)))
            .execute(&mut conn)
            .map_err(StorageError::WriteFailed)?;
        Ok(())
    }
}
