mod analytics_ops;
mod episodes_ops;
mod episodes_types;
mod music_ops;
mod music_types;

pub use episodes_types::*;
pub use music_types::*;

mod error;
pub use error::Error;

const MIGRATIONS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS episodes (
        id TEXT PRIMARY KEY,
        status TEXT NOT NULL,
        episode_number INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        doc TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS music_library (
        id TEXT PRIMARY KEY,
        category TEXT NOT NULL,
        created_at TEXT NOT NULL,
        doc TEXT NOT NULL
    )",
];

/// Episode and music-library store. Records are JSON documents with a few
/// indexed columns for ordering and counting.
#[derive(Clone)]
pub struct Database {
    conn: libsql::Connection,
}

impl Database {
    pub async fn file(path: impl AsRef<std::path::Path>) -> Result<Self, Error> {
        let db = libsql::Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let database = Self { conn };
        database.migrate().await?;
        Ok(database)
    }

    pub async fn memory() -> Result<Self, Error> {
        Self::file(":memory:").await
    }

    pub(crate) fn conn(&self) -> Result<libsql::Connection, Error> {
        Ok(self.conn.clone())
    }

    async fn migrate(&self) -> Result<(), Error> {
        let conn = self.conn()?;
        for sql in MIGRATIONS {
            conn.execute(sql, ()).await?;
        }
        Ok(())
    }
}
