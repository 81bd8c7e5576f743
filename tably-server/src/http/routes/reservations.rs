//! Reservation endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::ReservationRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Reservation;

/// Update reservation request
#[derive(Deserialize)]
pub struct UpdateReservationRequest {
    pub num_guests: i32,
    pub start_at: String,
    pub notes: Option<String>,
    /// Refused with 401 when it differs from the stored customer;
    /// the owning customer is write-once.
    pub customer_id: Option<i64>,
}

/// Reservation response
#[derive(Serialize)]
pub struct ReservationResponse {
    pub id: i64,
    pub customer_id: i64,
    pub num_guests: i32,
    pub start_at: String,
    pub start_at_display: String,
    pub notes: String,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id().expect("stored reservation has an id"),
            customer_id: r.customer_id().expect("stored reservation has a customer"),
            num_guests: r.num_guests(),
            start_at: r.start_at().to_rfc3339(),
            start_at_display: r.formatted_start_at(),
            notes: r.notes().to_owned(),
        }
    }
}

/// GET /reservations/{id} - a single reservation
async fn get_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let reservation = ReservationRepo::new(&state.pool).get(id).await?;
    Ok(Json(reservation.into()))
}

/// PUT /reservations/{id} - update party size, time, or notes
async fn update_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateReservationRequest>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let repo = ReservationRepo::new(&state.pool);
    let mut reservation = repo.get(id).await?;

    if let Some(customer_id) = req.customer_id {
        if reservation.customer_id() != Some(customer_id) {
            reservation.set_customer_id(customer_id)?;
        }
    }
    reservation.set_num_guests(req.num_guests)?;
    reservation.set_start_at(&req.start_at)?;
    reservation.set_notes(req.notes);

    repo.save(&mut reservation).await?;
    Ok(Json(reservation.into()))
}

/// Reservation routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/reservations/{id}",
        get(get_reservation).put(update_reservation),
    )
}
