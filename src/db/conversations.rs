// src/db/conversations.rs
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, params_from_iter, Connection, Row};
use std::path::Path;
use tracing::warn;

use crate::db::connection::{init_db, Database};
use crate::db::query::{insert_sql, update_sql, TableQuery};
use crate::domain::{Category, ConversationRecord, Region, Source, Status};
use crate::errors::StoreError;
use crate::store::StoragePort;

pub const TABLE: &str = "conversations";

const COLUMNS: &[&str] = &[
    "id",
    "name",
    "phone",
    "category",
    "region",
    "source",
    "description",
    "conversation_date",
    "status",
    "created_at",
    "updated_at",
];

const SEARCH_COLUMNS: &[&str] = &["name", "phone", "category", "region"];

/// Row-store backend: one row per conversation in the `conversations` table.
pub struct RemoteQueryStore {
    db: Database,
}

/// A row as stored; enum columns are still text.
struct ConversationRow {
    id: String,
    name: String,
    phone: String,
    category: String,
    region: String,
    source: String,
    description: String,
    conversation_date: NaiveDate,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ConversationRow {
    fn from_row(r: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: r.get(0)?,
            name: r.get(1)?,
            phone: r.get(2)?,
            category: r.get(3)?,
            region: r.get(4)?,
            source: r.get(5)?,
            description: r.get(6)?,
            conversation_date: r.get(7)?,
            status: r.get(8)?,
            created_at: r.get(9)?,
            updated_at: r.get(10)?,
        })
    }

    fn into_record(self) -> Result<ConversationRecord, String> {
        Ok(ConversationRecord {
            category: Category::from_label(&self.category)
                .ok_or_else(|| format!("unknown category {:?}", self.category))?,
            region: Region::from_code(&self.region)
                .ok_or_else(|| format!("unknown region {:?}", self.region))?,
            source: Source::from_label(&self.source)
                .ok_or_else(|| format!("unknown source {:?}", self.source))?,
            status: Status::from_label(&self.status)
                .ok_or_else(|| format!("unknown status {:?}", self.status))?,
            id: self.id,
            name: self.name,
            phone: self.phone,
            description: self.description,
            conversation_date: self.conversation_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl RemoteQueryStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = Database::new(path.as_ref());
        init_db(&db)?;
        Ok(Self { db })
    }

    fn select(&self, query: TableQuery<'_>) -> Result<Vec<ConversationRecord>, StoreError> {
        let (sql, values) = query.to_sql();
        self.db
            .with_conn(|conn| query_records(conn, &sql, &values))
    }
}

fn query_records(
    conn: &Connection,
    sql: &str,
    values: &[String],
) -> Result<Vec<ConversationRecord>, StoreError> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| StoreError::RemoteCall(format!("prepare failed: {e}")))?;

    let rows = stmt
        .query_map(params_from_iter(values.iter()), ConversationRow::from_row)
        .map_err(|e| StoreError::RemoteCall(format!("select failed: {e}")))?;

    let mut records = Vec::new();
    for row in rows {
        let row = row.map_err(|e| StoreError::RemoteCall(format!("row read failed: {e}")))?;
        let id = row.id.clone();
        match row.into_record() {
            Ok(record) => records.push(record),
            Err(reason) => warn!(id = %id, reason = %reason, "skipping malformed conversation row"),
        }
    }

    Ok(records)
}

impl StoragePort for RemoteQueryStore {
    fn describe(&self) -> String {
        format!("row store ({}, table {TABLE})", self.db.path().display())
    }

    fn load_all(&self) -> Result<Vec<ConversationRecord>, StoreError> {
        self.select(
            TableQuery::table(TABLE)
                .select(COLUMNS)
                .order_desc("updated_at"),
        )
    }

    fn insert(&self, record: &ConversationRecord) -> Result<(), StoreError> {
        let sql = insert_sql(TABLE, COLUMNS);
        self.db.with_conn(|conn| {
            conn.execute(
                &sql,
                params![
                    record.id,
                    record.name,
                    record.phone,
                    record.category.label(),
                    record.region.code(),
                    record.source.label(),
                    record.description,
                    record.conversation_date,
                    record.status.label(),
                    record.created_at,
                    record.updated_at,
                ],
            )
            .map_err(|e| StoreError::RemoteCall(format!("insert failed: {e}")))?;
            Ok(())
        })
    }

    fn update_status(
        &self,
        id: &str,
        status: Status,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let sql = update_sql(TABLE, &["status", "updated_at"], "id");
        let changed = self.db.with_conn(|conn| {
            conn.execute(&sql, params![status.label(), updated_at, id])
                .map_err(|e| StoreError::RemoteCall(format!("update failed: {e}")))
        })?;

        if changed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn find(&self, id: &str) -> Result<Option<ConversationRecord>, StoreError> {
        let mut found = self.select(TableQuery::table(TABLE).select(COLUMNS).eq("id", id))?;
        Ok(found.pop())
    }

    fn search(&self, query: &str) -> Result<Vec<ConversationRecord>, StoreError> {
        self.select(
            TableQuery::table(TABLE)
                .select(COLUMNS)
                .or_ilike(SEARCH_COLUMNS, query)
                .order_desc("updated_at"),
        )
    }
}
