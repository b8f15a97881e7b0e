//! Database model for stored key-value entries.

use diesel::prelude::*;

/// One stored value, e.g. the serialized goal collection.
#[derive(Queryable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::app_storage)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AppStorageDB {
    pub storage_key: String,
    pub storage_value: String,
}
