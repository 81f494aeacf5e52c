use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::car::Car;
use crate::types::request;
use crate::utils::auth::Claims;

#[instrument(skip(state))]
pub(crate) async fn get_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>, Error> {
    let cars = state.car_controller.list().await?;

    Ok(Json(cars))
}

#[instrument(skip(state))]
pub(crate) async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Car>, Error> {
    let car = state.car_controller.get(id).await?;

    Ok(Json(car))
}

#[instrument(skip(state, params))]
pub(crate) async fn post_car(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(params): Json<request::CarData>,
) -> Result<(StatusCode, Json<Car>), Error> {
    let car = state.car_controller.create(claims.id, &params).await?;

    Ok((StatusCode::CREATED, Json(car)))
}

#[instrument(skip(state, params))]
pub(crate) async fn put_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(params): Json<request::CarData>,
) -> Result<StatusCode, Error> {
    state.car_controller.update(id, &params).await?;

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
