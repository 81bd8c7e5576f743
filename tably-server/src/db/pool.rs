//! Database connection pool management

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Create a PostgreSQL connection pool.
///
/// Every repository operation runs a single statement on one pooled
/// connection; `max_connections` bounds concurrent requests at the
/// database, not in the application.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database:
    // DATABASE_URL=postgres://... cargo test -p tably-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_round_trips_a_query() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, 2).await.expect("pool creation failed");

        let row: (i64,) = sqlx::query_as("SELECT $1::bigint")
            .bind(42_i64)
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(row.0, 42);
    }
}
