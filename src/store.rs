//! SQLite-backed persistence for memos.

use chrono::Local;
use diesel::prelude::*;
use diesel::r2d2::ConnectionManager;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::ServerError;
use crate::models::{Memo, NewMemo};
use crate::schema::memos;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Second-granularity local timestamps, stored as text.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

type DbConn = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

/// Owns the connection pool for one memo database. Constructed once and
/// handed to the request handlers; tests build their own instances on
/// throwaway files.
#[derive(Clone)]
pub struct MemoStore {
    pool: r2d2::Pool<ConnectionManager<SqliteConnection>>,
}

impl MemoStore {
    /// Open (or create) the database at `database_url` and ensure the
    /// memos table exists. Safe to call on every process start.
    pub fn open(database_url: &str) -> Result<Self, ServerError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let pool = r2d2::Pool::builder().build(manager)?;
        let store = MemoStore { pool };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<(), ServerError> {
        let mut conn = self.conn()?;
        conn.run_pending_migrations(MIGRATIONS).map_err(|err| {
            log::error!("running migrations: {}", err);
            ServerError::MigrationError
        })?;
        Ok(())
    }

    fn conn(&self) -> Result<DbConn, ServerError> {
        Ok(self.pool.get()?)
    }

    /// Append a memo stamped with the current local time. Content must be
    /// non-empty; that is the only precondition.
    pub fn create(&self, content: &str) -> Result<(), ServerError> {
        if content.is_empty() {
            return Err(ServerError::EmptyContent);
        }
        let new_memo = NewMemo {
            content: content.to_owned(),
            created_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        };
        let mut conn = self.conn()?;
        diesel::insert_into(memos::table)
            .values(&new_memo)
            .execute(&mut conn)?;
        Ok(())
    }

    /// Every stored memo, newest first (id descending).
    pub fn list_all(&self) -> Result<Vec<Memo>, ServerError> {
        let mut conn = self.conn()?;
        let rows = memos::table
            .order(memos::id.desc())
            .load::<Memo>(&mut conn)?;
        Ok(rows)
    }

    /// Remove the memo with the given id. Unknown ids are a no-op.
    pub fn delete_by_id(&self, id: i32) -> Result<(), ServerError> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(memos::table.filter(memos::id.eq(id))).execute(&mut conn)?;
        if deleted == 0 {
            log::debug!("delete for missing memo id {}", id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, MemoStore) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("memos.db");
        let store = MemoStore::open(path.to_str().unwrap()).expect("open store");
        (dir, store)
    }

    #[test]
    fn test_create_lists_newest_first() {
        let (_dir, store) = temp_store();
        store.create("first").unwrap();
        store.create("second").unwrap();
        store.create("third").unwrap();

        let memos = store.list_all().unwrap();
        assert_eq!(memos.len(), 3);
        assert_eq!(memos[0].content, "third");
        assert_eq!(memos[1].content, "second");
        assert_eq!(memos[2].content, "first");
        assert!(memos[0].id > memos[1].id);
        assert!(memos[1].id > memos[2].id);
    }

    #[test]
    fn test_create_rejects_empty_content() {
        let (_dir, store) = temp_store();
        assert!(matches!(store.create(""), Err(ServerError::EmptyContent)));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_created_at_matches_format() {
        let (_dir, store) = temp_store();
        store.create("stamped").unwrap();

        let memos = store.list_all().unwrap();
        assert!(NaiveDateTime::parse_from_str(&memos[0].created_at, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_delete_removes_only_target() {
        let (_dir, store) = temp_store();
        store.create("keep me").unwrap();
        store.create("drop me").unwrap();
        store.create("keep me too").unwrap();

        let target = store.list_all().unwrap()[1].id;
        store.delete_by_id(target).unwrap();

        let memos = store.list_all().unwrap();
        assert_eq!(memos.len(), 2);
        assert_eq!(memos[0].content, "keep me too");
        assert_eq!(memos[1].content, "keep me");
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let (_dir, store) = temp_store();
        store.create("still here").unwrap();

        store.delete_by_id(9999).unwrap();

        let memos = store.list_all().unwrap();
        assert_eq!(memos.len(), 1);
        assert_eq!(memos[0].content, "still here");
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let (_dir, store) = temp_store();
        store.create("first").unwrap();
        let old_id = store.list_all().unwrap()[0].id;

        store.delete_by_id(old_id).unwrap();
        store.create("second").unwrap();

        let new_id = store.list_all().unwrap()[0].id;
        assert!(new_id > old_id);
    }

    #[test]
    fn test_reopen_keeps_rows() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("memos.db");
        let path = path.to_str().unwrap();

        let store = MemoStore::open(path).expect("first open");
        store.create("survives reopen").unwrap();
        drop(store);

        let store = MemoStore::open(path).expect("second open");
        let memos = store.list_all().unwrap();
        assert_eq!(memos.len(), 1);
        assert_eq!(memos[0].content, "survives reopen");
    }
}
