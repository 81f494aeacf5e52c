use serde::Serialize;

use crate::types::driver::Driver;

#[derive(Serialize)]
pub(crate) struct Token {
    pub(crate) access_token: String,
    pub(crate) token_type: String,
}

impl Token {
    pub(crate) fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct DriverProfile {
    pub(crate) id: i32,
    pub(crate) username: String,
    pub(crate) role: String,
    pub(crate) fav_brand: Option<String>,
    pub(crate) phone_number: Option<i64>,
}

impl From<Driver> for DriverProfile {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            username: driver.username,
            role: driver.role,
            fav_brand: driver.fav_brand,
            phone_number: driver.phone_number,
        }
    }
}
