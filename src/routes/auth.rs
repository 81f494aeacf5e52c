use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request;
use crate::types::response;

/// Login is form-encoded, OAuth2 password-flow style. Unknown usernames and
/// wrong passwords surface identically.
#[instrument(skip_all)]
pub(crate) async fn login(
    State(state): State<AppState>,
    Form(params): Form<request::LoginData>,
) -> Result<Json<response::Token>, Error> {
    let driver = state
        .driver_controller
        .verify_credentials(&params.username, &params.password)
        .await?;

    let token = state.signer.issue(&driver)?;

    Ok(Json(response::Token::bearer(token)))
}

#[instrument(skip_all)]
pub(crate) async fn register(
    State(state): State<AppState>,
    Json(params): Json<request::NewDriver>,
) -> Result<(StatusCode, Json<response::DriverProfile>), Error> {
    let driver = state.driver_controller.register(&params).await?;

    Ok((StatusCode::CREATED, Json(driver.into())))
}
