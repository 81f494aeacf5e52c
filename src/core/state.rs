use sqlx::postgres::PgPool;

use crate::controllers::car::CarController;
use crate::controllers::driver::DriverController;
use crate::core::error::ConfigError;
use crate::utils::auth::TokenSigner;

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub(crate) signer: TokenSigner,
    pub(crate) driver_controller: DriverController,
    pub(crate) car_controller: CarController,
}

impl AppState {
    pub(crate) fn new(pool: PgPool, secret: &str) -> Result<Self, ConfigError> {
        Ok(AppState {
            signer: TokenSigner::new(secret),
            driver_controller: DriverController::new(pool.clone())?,
            car_controller: CarController::new(pool),
        })
    }
}
