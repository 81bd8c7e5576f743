//! Customer repository
//!
//! Finders return fully constructed [`Customer`] values; `save` is an
//! insert-or-update keyed on whether the model already has an id.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::models::{Customer, Reservation};

use super::reservations::ReservationRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Customer repository
pub struct CustomerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All customers, ordered by last then first name. No pagination.
    pub async fn all(&self) -> Result<Vec<Customer>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, phone, notes
            FROM customers
            ORDER BY last_name, first_name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(customer_from_row).collect())
    }

    /// The ten customers with the most reservations, busiest first.
    ///
    /// Inner join: customers with no reservations never appear.
    pub async fn top_ten(&self) -> Result<Vec<Customer>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.first_name, c.last_name, c.phone, c.notes
            FROM customers AS c
                JOIN reservations AS r ON r.customer_id = c.id
            GROUP BY c.id
            ORDER BY COUNT(r.id) DESC
            LIMIT 10
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(customer_from_row).collect())
    }

    /// Get a single customer by id.
    pub async fn get(&self, id: i64) -> Result<Customer, DbError> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, phone, notes
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "customer",
            id: id.to_string(),
        })?;

        Ok(customer_from_row(&row))
    }

    /// Customers whose "first last" name contains `term`,
    /// case-insensitively, ordered by last then first name.
    ///
    /// An empty term matches everyone; routing an absent term to
    /// [`all`](Self::all) is the caller's job.
    pub async fn search(&self, term: &str) -> Result<Vec<Customer>, DbError> {
        let pattern = format!("%{}%", term);

        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, phone, notes
            FROM customers
            WHERE first_name || ' ' || last_name ILIKE $1
            ORDER BY last_name, first_name
            "#,
        )
        .bind(&pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(customer_from_row).collect())
    }

    /// Insert a new customer or update an existing one.
    ///
    /// Inserting writes the generated id back into the model. Updating
    /// overwrites every mutable column; last writer wins.
    pub async fn save(&self, customer: &mut Customer) -> Result<(), DbError> {
        match customer.id() {
            None => {
                let row = sqlx::query(
                    r#"
                    INSERT INTO customers (first_name, last_name, phone, notes)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(customer.first_name())
                .bind(customer.last_name())
                .bind(customer.phone())
                .bind(customer.notes())
                .fetch_one(self.pool)
                .await?;

                customer.set_id(row.get("id"));
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE customers
                    SET first_name = $1,
                        last_name  = $2,
                        phone      = $3,
                        notes      = $4
                    WHERE id = $5
                    "#,
                )
                .bind(customer.first_name())
                .bind(customer.last_name())
                .bind(customer.phone())
                .bind(customer.notes())
                .bind(id)
                .execute(self.pool)
                .await?;
            }
        }

        Ok(())
    }

    /// Reservations for one customer, in storage order.
    pub async fn reservations(&self, customer_id: i64) -> Result<Vec<Reservation>, DbError> {
        ReservationRepo::new(self.pool).for_customer(customer_id).await
    }
}

fn customer_from_row(row: &PgRow) -> Customer {
    Customer::from_row(
        row.get("id"),
        row.get("first_name"),
        row.get("last_name"),
        row.get("phone"),
        row.get("notes"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, pool::create_pool};

    // Integration tests - run with DATABASE_URL set:
    // DATABASE_URL=postgres://... cargo test -p tably-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, 2).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn save_then_get_round_trips() {
        let pool = test_pool().await;
        let repo = CustomerRepo::new(&pool);

        let mut customer = Customer::new("Ada", "Lovelace", Some("555-0100".into()), None);
        repo.save(&mut customer).await.expect("insert failed");
        let id = customer.id().expect("id assigned on insert");

        let loaded = repo.get(id).await.expect("get failed");
        assert_eq!(loaded.first_name(), "Ada");
        assert_eq!(loaded.last_name(), "Lovelace");
        assert_eq!(loaded.phone(), Some("555-0100"));
        assert_eq!(loaded.notes(), "");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_overwrites_mutable_columns() {
        let pool = test_pool().await;
        let repo = CustomerRepo::new(&pool);

        let mut customer = Customer::new("Grace", "Hopper", None, None);
        repo.save(&mut customer).await.expect("insert failed");
        let id = customer.id().expect("id assigned on insert");

        customer.set_phone(Some("555-0123".into()));
        customer.set_notes(Some("prefers the corner table".into()));
        repo.save(&mut customer).await.expect("update failed");

        let loaded = repo.get(id).await.expect("get failed");
        assert_eq!(loaded.phone(), Some("555-0123"));
        assert_eq!(loaded.notes(), "prefers the corner table");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_missing_customer_is_not_found() {
        let pool = test_pool().await;
        let err = CustomerRepo::new(&pool).get(-1).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "customer", .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn all_is_ordered_by_last_then_first() {
        let pool = test_pool().await;
        let repo = CustomerRepo::new(&pool);

        let mut zoe = Customer::new("Zoe", "Bordertest", None, None);
        let mut amy = Customer::new("Amy", "Bordertest", None, None);
        let mut cal = Customer::new("Cal", "Aordertest", None, None);
        for c in [&mut zoe, &mut amy, &mut cal] {
            repo.save(c).await.expect("insert failed");
        }

        let all = repo.all().await.expect("all failed");
        let position = |wanted: Option<i64>| {
            all.iter()
                .position(|c| c.id() == wanted)
                .expect("inserted customer is listed")
        };

        // Last name sorts first, then first name breaks the tie.
        assert!(position(cal.id()) < position(amy.id()));
        assert!(position(amy.id()) < position(zoe.id()));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn search_matches_across_the_full_name() {
        let pool = test_pool().await;
        let repo = CustomerRepo::new(&pool);

        let mut customer = Customer::new("Zyxwvu", "Tsrqpo", None, None);
        repo.save(&mut customer).await.expect("insert failed");

        // Case-insensitive, substring spanning first and last name.
        let hits = repo.search("wvu tsr").await.expect("search failed");
        assert!(hits.iter().any(|c| c.id() == customer.id()));

        let hits = repo.search("WVU TSR").await.expect("search failed");
        assert!(hits.iter().any(|c| c.id() == customer.id()));

        let hits = repo.search("no-customer-matches-this").await.expect("search failed");
        assert!(hits.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn top_ten_excludes_customers_without_reservations() {
        let pool = test_pool().await;
        let repo = CustomerRepo::new(&pool);

        let mut without = Customer::new("Quiet", "Diner", None, None);
        repo.save(&mut without).await.expect("insert failed");

        let mut with = Customer::new("Busy", "Regular", None, None);
        repo.save(&mut with).await.expect("insert failed");
        let with_id = with.id().expect("id assigned on insert");

        let mut reservation =
            Reservation::new(Some(with_id), 2, "2026-08-07T18:30:00Z", None).expect("valid");
        ReservationRepo::new(&pool)
            .save(&mut reservation)
            .await
            .expect("reservation insert failed");

        let top = repo.top_ten().await.expect("top_ten failed");
        assert!(top.len() <= 10);
        assert!(!top.iter().any(|c| c.id() == without.id()));
    }
}
