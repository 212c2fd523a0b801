//! Schema revisions.
//!
//! SQL lives in `migrations/` as reversible `<version>_<name>.{up,down}.sql`
//! pairs and is embedded at compile time. [`upgrade`] and [`downgrade`] go
//! through the tracked `_sqlx_migrations` table; [`apply_step`] and
//! [`revert_step`] run a single revision's SQL with no bookkeeping, so any
//! conflict with the current schema comes back as the database error.

use crate::error::Result;
use sqlx::migrate::{Migrate, MigrateError, Migration, Migrator};
use sqlx::{Executor, PgPool};
use tracing::info;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// `pizza_category` and `pizza` tables.
pub const PIZZA_CATALOG: i64 = 20240901120000;
/// `"user"` table plus the nullable `pizza.user_id` foreign key.
pub const PIZZA_USER_RELATION: i64 = 20240907174237;

/// Applies every pending revision in order. Fails if the database carries a
/// revision this build does not know, or one whose checksum changed.
pub async fn upgrade(pool: &PgPool) -> Result<()> {
    info!(head = ?head_revision(), "Applying pending migrations");
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Reverts applied revisions newer than `target`, newest first.
pub async fn downgrade(pool: &PgPool, target: i64) -> Result<()> {
    info!(target, "Reverting migrations");
    MIGRATOR.undo(pool, target).await?;
    Ok(())
}

pub async fn applied_revisions(pool: &PgPool) -> Result<Vec<i64>> {
    let mut conn = pool.acquire().await?;
    conn.ensure_migrations_table().await?;
    let mut versions: Vec<i64> = conn
        .list_applied_migrations()
        .await?
        .into_iter()
        .map(|applied| applied.version)
        .collect();
    versions.sort_unstable();
    Ok(versions)
}

pub fn revisions() -> Vec<i64> {
    let mut versions: Vec<i64> = MIGRATOR
        .iter()
        .filter(|m| !m.migration_type.is_down_migration())
        .map(|m| m.version)
        .collect();
    versions.sort_unstable();
    versions
}

pub fn head_revision() -> Option<i64> {
    revisions().last().copied()
}

pub fn predecessor(revision: i64) -> Option<i64> {
    let versions = revisions();
    let idx = versions.iter().position(|&v| v == revision)?;
    idx.checked_sub(1).map(|prev| versions[prev])
}

pub fn description(revision: i64) -> Option<&'static str> {
    MIGRATOR
        .iter()
        .find(|m| m.version == revision && !m.migration_type.is_down_migration())
        .map(|m| &*m.description)
}

/// Runs one revision's forward SQL in a transaction.
pub async fn apply_step(pool: &PgPool, revision: i64) -> Result<()> {
    run_step(pool, find(revision, false)?).await
}

/// Runs one revision's backward SQL in a transaction.
pub async fn revert_step(pool: &PgPool, revision: i64) -> Result<()> {
    run_step(pool, find(revision, true)?).await
}

fn find(revision: i64, down: bool) -> std::result::Result<&'static Migration, MigrateError> {
    MIGRATOR
        .iter()
        .find(|m| m.version == revision && m.migration_type.is_down_migration() == down)
        .ok_or(MigrateError::VersionMissing(revision))
}

async fn run_step(pool: &PgPool, migration: &Migration) -> Result<()> {
    info!(
        revision = migration.version,
        description = %migration.description,
        down = migration.migration_type.is_down_migration(),
        "Running migration step"
    );
    let mut tx = pool.begin().await?;
    (&mut *tx).execute(&*migration.sql).await?;
    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn revision_chain_is_ordered() {
        assert_eq!(revisions(), vec![PIZZA_CATALOG, PIZZA_USER_RELATION]);
        assert_eq!(head_revision(), Some(PIZZA_USER_RELATION));
        assert_eq!(predecessor(PIZZA_USER_RELATION), Some(PIZZA_CATALOG));
        assert_eq!(predecessor(PIZZA_CATALOG), None);
        assert_eq!(predecessor(1), None);
    }

    #[test]
    fn every_revision_is_reversible() {
        for version in revisions() {
            assert!(find(version, true).is_ok(), "no down migration for {}", version);
        }
    }

    #[test]
    fn descriptions_come_from_file_names() {
        assert_eq!(description(PIZZA_USER_RELATION), Some("pizza user relation"));
        assert_eq!(description(PIZZA_CATALOG), Some("pizza catalog"));
    }

    #[test]
    fn relation_down_drops_in_reverse_order() {
        let down: &str = &find(PIZZA_USER_RELATION, true).unwrap().sql;
        let fk = down.find("DROP CONSTRAINT pizza_user_id_fkey").unwrap();
        let column = down.find("DROP COLUMN user_id").unwrap();
        let table = down.find("DROP TABLE \"user\"").unwrap();
        assert!(fk < column && column < table);
    }

    #[test]
    fn unknown_revision_is_version_missing() {
        let err = Error::from(find(42, false).unwrap_err());
        assert!(matches!(
            err,
            Error::Migration(MigrateError::VersionMissing(42))
        ));
    }
}
