//! HTTP request handlers.

use axum::{
    extract::{Query, State},
    http::Uri,
    Json,
};

use crate::api::types::*;
use crate::api::Endpoint;
use crate::engine::format_amount;
use crate::error::{ParkingError, ParkingResult};
use crate::AppState;

/// Dispatch a ticket request by path suffix.
///
/// GET …/entry?plate=&parkingLot= and GET …/exit?ticketId=
#[utoipa::path(
    get,
    path = "/{endpoint}",
    params(
        ("endpoint" = String, Path, description = "Path ending in `entry` or `exit`"),
        TicketQuery
    ),
    responses(
        (status = 200, description = "`ticket id: <id>` or `Amount to pay: <amount>$`", body = String),
        (status = 400, description = "No query string or a required parameter is missing", body = String),
        (status = 404, description = "Unknown endpoint or unknown ticket", body = String),
        (status = 500, description = "Internal error", body = String)
    ),
    tag = "tickets"
)]
pub async fn dispatch(State(state): State<AppState>, uri: Uri) -> ParkingResult<Json<String>> {
    if uri.query().map_or(true, str::is_empty) {
        return Err(ParkingError::BadRequest(
            "At least one parameter is needed for all api calls".to_string(),
        ));
    }

    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&uri)
        .map_err(|rejection| ParkingError::BadRequest(rejection.body_text()))?;
    let query = TicketQuery::from_pairs(pairs);

    match Endpoint::from_path(uri.path()) {
        Some(Endpoint::Entry) => handle_entry(&state, query).await,
        Some(Endpoint::Exit) => handle_exit(&state, query).await,
        None => {
            tracing::debug!(path = %uri.path(), "No endpoint for path");
            Err(ParkingError::NotFound("wrong endpoint".to_string()))
        }
    }
}

/// Issue a ticket for an entering vehicle.
async fn handle_entry(state: &AppState, query: TicketQuery) -> ParkingResult<Json<String>> {
    tracing::info!("entry endpoint was called");

    let (Some(plate), Some(parking_lot)) = (query.plate, query.parking_lot) else {
        return Err(ParkingError::BadRequest(
            "One of the following parameters are missing: plate, parkingLot".to_string(),
        ));
    };

    let ticket = state.desk.issue_ticket(&plate, &parking_lot).await?;

    tracing::info!(
        ticket_id = %ticket.ticket_id,
        plate = %ticket.plate,
        parking_lot = %ticket.parking_lot,
        "Ticket issued"
    );

    Ok(Json(format!("ticket id: {}", ticket.ticket_id)))
}

/// Price the stay of a leaving vehicle.
async fn handle_exit(state: &AppState, query: TicketQuery) -> ParkingResult<Json<String>> {
    tracing::info!("exit endpoint was called");

    let ticket_id = query
        .ticket_id
        .ok_or_else(|| ParkingError::BadRequest("ticketId parameter is missing".to_string()))?;

    let quote = state.desk.quote_exit(&ticket_id).await?;

    tracing::info!(
        ticket_id = %quote.ticket.ticket_id,
        plate = %quote.ticket.plate,
        parking_lot = %quote.ticket.parking_lot,
        parked_minutes = quote.parked_minutes,
        amount = quote.amount,
        "Exit priced"
    );

    Ok(Json(format!("Amount to pay: {}$", format_amount(quote.amount))))
}

/// Health check endpoint.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    // Check database connectivity
    let db_status = match state.desk.repository().ping().await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
