//! Customer endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{CustomerRepo, ReservationRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Customer, Reservation};

use super::reservations::ReservationResponse;

/// Create/update customer request
#[derive(Deserialize)]
pub struct CustomerPayload {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

/// Create reservation request (customer comes from the path)
#[derive(Deserialize)]
pub struct CreateReservationRequest {
    pub num_guests: i32,
    pub start_at: String,
    pub notes: Option<String>,
}

/// Customer response
#[derive(Serialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub notes: String,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id().expect("stored customer has an id"),
            full_name: c.full_name().to_owned(),
            phone: c.phone().map(str::to_owned),
            notes: c.notes().to_owned(),
            first_name: c.first_name().to_owned(),
            last_name: c.last_name().to_owned(),
        }
    }
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
}

/// GET /customers - all customers, or a name search when ?search= is present
async fn list_customers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let repo = CustomerRepo::new(&state.pool);

    let customers = match query.search.as_deref() {
        Some(term) if !term.is_empty() => repo.search(term).await?,
        _ => repo.all().await?,
    };

    Ok(Json(customers.into_iter().map(CustomerResponse::from).collect()))
}

/// GET /customers/top-ten - the ten customers with the most reservations
async fn top_ten(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = CustomerRepo::new(&state.pool).top_ten().await?;
    Ok(Json(customers.into_iter().map(CustomerResponse::from).collect()))
}

/// GET /customers/{id} - a single customer
async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = CustomerRepo::new(&state.pool).get(id).await?;
    Ok(Json(customer.into()))
}

/// POST /customers - create a customer
async fn create_customer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CustomerPayload>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    let mut customer = Customer::new(req.first_name, req.last_name, req.phone, req.notes);
    CustomerRepo::new(&state.pool).save(&mut customer).await?;

    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// PUT /customers/{id} - update a customer
///
/// The response's `full_name` keeps the loaded snapshot even when the
/// name fields change; see the note on [`Customer`].
async fn update_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<CustomerPayload>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let repo = CustomerRepo::new(&state.pool);
    let mut customer = repo.get(id).await?;

    customer.set_first_name(req.first_name);
    customer.set_last_name(req.last_name);
    customer.set_phone(req.phone);
    customer.set_notes(req.notes);

    repo.save(&mut customer).await?;
    Ok(Json(customer.into()))
}

/// GET /customers/{id}/reservations - that customer's reservations
async fn customer_reservations(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let repo = CustomerRepo::new(&state.pool);
    // 404 before listing, so a missing customer is not an empty list.
    repo.get(id).await?;

    let reservations = repo.reservations(id).await?;
    Ok(Json(
        reservations.into_iter().map(ReservationResponse::from).collect(),
    ))
}

/// POST /customers/{id}/reservations - book a table for a customer
async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), ApiError> {
    CustomerRepo::new(&state.pool).get(id).await?;

    let mut reservation = Reservation::new(Some(id), req.num_guests, &req.start_at, req.notes)?;
    ReservationRepo::new(&state.pool).save(&mut reservation).await?;

    Ok((StatusCode::CREATED, Json(reservation.into())))
}

/// Customer routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route("/customers/top-ten", get(top_ten))
        .route("/customers/{id}", get(get_customer).put(update_customer))
        .route(
            "/customers/{id}/reservations",
            get(customer_reservations).post(create_reservation),
        )
}
