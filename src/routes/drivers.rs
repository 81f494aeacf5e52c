use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request;
use crate::types::response;
use crate::utils::auth::Claims;

/// The caller's own profile, looked up by the id embedded in their token.
#[instrument(skip(state))]
pub(crate) async fn get_me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<response::DriverProfile>, Error> {
    let driver = state
        .driver_controller
        .get_by_id(claims.id)
        .await?
        .ok_or(Error::DriverNotFound)?;

    Ok(Json(driver.into()))
}

#[instrument(skip(state, params))]
pub(crate) async fn set_phone(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(params): Json<request::PhoneUpdate>,
) -> Result<StatusCode, Error> {
    state
        .driver_controller
        .set_phone(claims.id, params.phone_number)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
