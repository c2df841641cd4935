//! Embedded schema migrations.
//!
//! `diesel_migrations` runs on a synchronous connection, so startup hands
//! the work to a blocking thread.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failure while applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to connect for migrations: {0}")]
    Connect(#[from] diesel::ConnectionError),
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
    #[error("migration task did not complete: {message}")]
    Join { message: String },
}

fn apply_pending(database_url: &str) -> Result<usize, MigrationError> {
    let mut conn = PgConnection::establish(database_url)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    Ok(applied.len())
}

/// Apply every pending migration to `database_url`.
///
/// # Errors
///
/// Returns [`MigrationError`] when the database is unreachable or a
/// migration fails.
pub async fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || apply_pending(&url))
        .await
        .map_err(|err| MigrationError::Join {
            message: err.to_string(),
        })??;
    info!(applied, "database migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    const CREATE_RECORDS: &str =
        include_str!("../../../migrations/2025-01-01-000000_create_records/up.sql");

    /// The domain caps no text lengths, so the schema must not either.
    #[rstest]
    fn text_columns_are_unbounded() {
        let upper = CREATE_RECORDS.to_ascii_uppercase();
        assert!(!upper.contains("VARCHAR"), "bounded column in:\n{CREATE_RECORDS}");
        assert!(!upper.contains("CHAR("), "bounded column in:\n{CREATE_RECORDS}");
    }
}
