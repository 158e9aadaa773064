//! Versioned schema changes layered on top of the base tables.
//!
//! The three base tables are created with `CREATE TABLE IF NOT EXISTS` every
//! time the database is opened (see [`super::db`]). Anything added after that
//! (indices, new columns) is registered here as a numbered migration and
//! recorded in the `migrations` table once applied.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hrdesk::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("employee.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
#[cfg(debug_assertions)]
use crate::{msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    down: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: lookups by employee and day for clock-out and state queries.
        // Not unique: repeated clock-ins on the same day are kept as separate rows.
        self.add_migration(
            1,
            "add_attendance_indices",
            |tx| {
                tx.execute(
                    "CREATE INDEX IF NOT EXISTS idx_attendance_employee_date ON attendance_logs(employee_id, date)",
                    [],
                )?;
                Ok(())
            },
            |tx| {
                tx.execute("DROP INDEX IF EXISTS idx_attendance_employee_date", [])?;
                Ok(())
            },
        );

        // Version 2: per-employee vacation listing
        self.add_migration(
            2,
            "add_vacation_indices",
            |tx| {
                tx.execute("CREATE INDEX IF NOT EXISTS idx_vacations_employee ON vacations(employee_id)", [])?;
                Ok(())
            },
            |tx| {
                tx.execute("DROP INDEX IF EXISTS idx_vacations_employee", [])?;
                Ok(())
            },
        );
    }

    fn add_migration(
        &mut self,
        version: u32,
        name: &'static str,
        up: fn(&Transaction) -> Result<()>,
        down: fn(&Transaction) -> Result<()>,
    ) {
        self.migrations.push(Migration { version, name, up, down });
    }

    /// Applies every migration newer than the recorded version in one transaction.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }
        tx.commit()?;

        msg_debug!(Message::AllMigrationsCompleted);
        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn
            .query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))
            .unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let count: i32 = conn.query_row(
            "SELECT COUNT(*) FROM migrations WHERE version = ?1",
            params![version],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    /// Reverts every applied migration above `target_version`, newest first,
    /// in one transaction. Reverted migrations run again on next open.
    #[cfg(debug_assertions)]
    pub fn rollback_to(&self, conn: &mut Connection, target_version: u32) -> Result<()> {
        let current_version = self.get_current_version(conn)?;

        if target_version >= current_version {
            msg_info!(Message::NothingToRollback);
            return Ok(());
        }

        msg_info!(Message::RollingBack(current_version, target_version));
        let tx = conn.transaction()?;
        for migration in self
            .migrations
            .iter()
            .rev()
            .filter(|m| m.version > target_version && m.version <= current_version)
        {
            msg_debug!(Message::RevertingMigration(migration.version, migration.name.to_string()));
            (migration.down)(&tx)?;
            tx.execute("DELETE FROM migrations WHERE version = ?1", params![migration.version])?;
        }
        tx.commit()?;

        msg_success!(Message::RollbackCompleted(target_version));
        Ok(())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    Ok(current < manager.latest_version())
}
