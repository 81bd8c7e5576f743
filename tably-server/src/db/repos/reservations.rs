//! Reservation repository

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::models::Reservation;

use super::DbError;

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a single reservation by id.
    pub async fn get(&self, id: i64) -> Result<Reservation, DbError> {
        let row = sqlx::query(
            r#"
            SELECT id, customer_id, num_guests, start_at, notes
            FROM reservations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "reservation",
            id: id.to_string(),
        })?;

        Ok(reservation_from_row(&row))
    }

    /// All reservations for one customer. No ORDER BY; storage order.
    pub async fn for_customer(&self, customer_id: i64) -> Result<Vec<Reservation>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, customer_id, num_guests, start_at, notes
            FROM reservations
            WHERE customer_id = $1
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(reservation_from_row).collect())
    }

    /// Insert a new reservation or update an existing one.
    ///
    /// Inserting writes the generated id back into the model. Updating
    /// targets the reservations table keyed by reservation id. A missing
    /// customer id surfaces as the foreign-key violation from Postgres.
    pub async fn save(&self, reservation: &mut Reservation) -> Result<(), DbError> {
        match reservation.id() {
            None => {
                let row = sqlx::query(
                    r#"
                    INSERT INTO reservations (customer_id, num_guests, start_at, notes)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(reservation.customer_id())
                .bind(reservation.num_guests())
                .bind(reservation.start_at())
                .bind(reservation.notes())
                .fetch_one(self.pool)
                .await?;

                reservation.set_id(row.get("id"));
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE reservations
                    SET customer_id = $1,
                        num_guests  = $2,
                        start_at    = $3,
                        notes       = $4
                    WHERE id = $5
                    "#,
                )
                .bind(reservation.customer_id())
                .bind(reservation.num_guests())
                .bind(reservation.start_at())
                .bind(reservation.notes())
                .bind(id)
                .execute(self.pool)
                .await?;
            }
        }

        Ok(())
    }
}

fn reservation_from_row(row: &PgRow) -> Reservation {
    Reservation::from_row(
        row.get("id"),
        row.get("customer_id"),
        row.get("num_guests"),
        row.get("start_at"),
        row.get("notes"),
    )
}
