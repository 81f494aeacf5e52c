use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request;
use crate::types::response;

// Role gating happens in the router layer; by the time these run the caller
// holds a valid admin token.

#[instrument(skip(state))]
pub(crate) async fn list_drivers(
    State(state): State<AppState>,
) -> Result<Json<Vec<response::DriverProfile>>, Error> {
    let drivers = state.driver_controller.list().await?;

    Ok(Json(drivers.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state, params))]
pub(crate) async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(params): Json<request::UpdateDriver>,
) -> Result<StatusCode, Error> {
    state.driver_controller.update(id, &params).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub(crate) async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Error> {
    state.driver_controller.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub(crate) async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Error> {
    state.car_controller.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
