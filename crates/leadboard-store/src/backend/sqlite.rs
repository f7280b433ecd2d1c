use crate::backend::LeadBackend;
use crate::error::{Result, StoreError};
use leadboard_core::Lead;
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Key of the slot holding the serialized collection.
pub const LEADS_KEY: &str = "leads_data";

/// Layout version recorded in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 1;

const SLOTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS slots (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL
);";

/// Keeps the whole collection as one JSON blob under [`LEADS_KEY`].
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Opens (or creates) the slot file. A new file is readable by its owner only.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        owner_only(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.busy_timeout(Duration::from_secs(2))?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        let found = user_version(&conn)?;
        if found > SCHEMA_VERSION {
            return Err(StoreError::UnsupportedSchema {
                found,
                supported: SCHEMA_VERSION,
            });
        }
        conn.execute_batch(SLOTS_TABLE)?;
        if found < SCHEMA_VERSION {
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        }
        Ok(Self { conn })
    }

    pub fn schema_version(&self) -> Result<i64> {
        user_version(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn read_raw(&self) -> Result<Option<String>> {
        let raw = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [LEADS_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(raw)
    }

    pub fn write_raw(&self, value: &str) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at;",
            params![LEADS_KEY, value, now],
        )?;
        Ok(())
    }
}

impl LeadBackend for SqliteBackend {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn load(&mut self) -> Result<Option<Vec<Lead>>> {
        match self.read_raw()? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, leads: &[Lead]) -> Result<()> {
        let raw = serde_json::to_string(leads)?;
        self.write_raw(&raw)
    }
}

fn user_version(conn: &Connection) -> Result<i64> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

#[cfg(unix)]
fn owner_only(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn owner_only(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{SqliteBackend, SCHEMA_VERSION};
    use crate::error::StoreErrorKind;
    use tempfile::TempDir;

    #[test]
    fn reopening_keeps_schema_version() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("leadboard.sqlite3");

        let backend = SqliteBackend::open(&path).expect("open");
        assert_eq!(backend.schema_version().expect("version"), SCHEMA_VERSION);
        backend.write_raw("[]").expect("write");
        drop(backend);

        let backend = SqliteBackend::open(&path).expect("reopen");
        assert_eq!(backend.schema_version().expect("version"), SCHEMA_VERSION);
        assert_eq!(backend.read_raw().expect("raw").as_deref(), Some("[]"));
    }

    #[test]
    fn newer_schema_is_refused() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("leadboard.sqlite3");
        let backend = SqliteBackend::open(&path).expect("open");
        backend
            .connection()
            .pragma_update(None, "user_version", SCHEMA_VERSION + 1)
            .expect("bump version");
        drop(backend);

        let err = SqliteBackend::open(&path).err().expect("refused");
        assert_eq!(err.kind(), StoreErrorKind::UnsupportedSchema);
    }

    #[cfg(unix)]
    #[test]
    fn slot_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("leadboard.sqlite3");
        SqliteBackend::open(&path).expect("open");
        let mode = std::fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
