//! Schema migrations
//!
//! Idempotent CREATE TABLE statements, run at every startup.

use sqlx::PgPool;
use tracing::info;

/// Create the customers and reservations tables if missing.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id         BIGSERIAL PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name  TEXT NOT NULL,
            phone      TEXT,
            notes      TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id          BIGSERIAL PRIMARY KEY,
            customer_id BIGINT NOT NULL REFERENCES customers(id),
            num_guests  INTEGER NOT NULL,
            start_at    TIMESTAMPTZ NOT NULL,
            notes       TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("database migrations complete");
    Ok(())
}
