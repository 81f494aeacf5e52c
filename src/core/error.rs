use axum::BoxError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Database migration error: {0}")]
    DatabaseMigration(#[from] sqlx::migrate::MigrateError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("JWT encoding error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("No credentials provided")]
    NoCredentials,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Expired token")]
    ExpiredToken,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Driver not found")]
    DriverNotFound,
    #[error("Car not found")]
    CarNotFound,
    #[error("Username already taken")]
    UsernameTaken,
    #[error("Invalid username")]
    InvalidUsername,
    #[error("Invalid password: {0}")]
    InvalidPassword(String),
    #[error("Invalid model year")]
    InvalidYear,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("{:?}", self);

        let (status, message) = match self {
            Error::Sql(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SQL error"),
            Error::Bcrypt(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Bcrypt error"),
            Error::Jwt(_) => (StatusCode::INTERNAL_SERVER_ERROR, "JWT error"),
            Error::NoCredentials => (StatusCode::UNAUTHORIZED, "No credentials provided"),
            Error::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
            Error::ExpiredToken => (StatusCode::UNAUTHORIZED, "Expired token"),
            Error::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            Error::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            Error::DriverNotFound => (StatusCode::NOT_FOUND, "Driver not found"),
            Error::CarNotFound => (StatusCode::NOT_FOUND, "Car not found"),
            Error::UsernameTaken => (StatusCode::CONFLICT, "Username already taken"),
            Error::InvalidUsername => (StatusCode::BAD_REQUEST, "Invalid username"),
            Error::InvalidPassword(_) => (StatusCode::BAD_REQUEST, "Invalid password"),
            Error::InvalidYear => (StatusCode::BAD_REQUEST, "Invalid model year"),
        };

        (status, message).into_response()
    }
}

pub(crate) async fn handle_middleware_errors(err: BoxError) -> (StatusCode, &'static str) {
    tracing::error!("Unhandled error: {:?}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_invalid_credentials_map_to_401() {
        assert_eq!(
            Error::NoCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            Error::InvalidToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            Error::ExpiredToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            Error::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn insufficient_role_maps_to_403_not_401() {
        assert_eq!(
            Error::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn duplicate_username_maps_to_conflict() {
        assert_eq!(
            Error::UsernameTaken.into_response().status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn missing_records_map_to_404() {
        assert_eq!(
            Error::DriverNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::CarNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
