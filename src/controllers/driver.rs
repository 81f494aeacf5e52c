use regex::Regex;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

use crate::core::error::{self, Error};
use crate::types::driver::Driver;
use crate::types::request;

const BCRYPT_COST: u32 = 12;

#[derive(Clone)]
pub(crate) struct DriverController {
    pool: PgPool,
    username_pattern: Regex,
}

impl std::fmt::Debug for DriverController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverController")
            .field("username_pattern", &self.username_pattern.as_str())
            .finish()
    }
}

impl DriverController {
    pub(crate) fn new(pool: PgPool) -> Result<Self, error::ConfigError> {
        Ok(Self {
            pool,
            username_pattern: Regex::new(r"^[a-zA-Z0-9_-]{3,30}$")?,
        })
    }

    pub(crate) async fn get_by_username(&self, username: &str) -> Result<Option<Driver>, Error> {
        match sqlx::query(
            "SELECT id, username, password_hash, role, fav_brand, phone_number
            FROM drivers
            WHERE username = $1;",
        )
        .bind(username)
        .map(map_driver)
        .fetch_one(&self.pool)
        .await
        {
            Ok(driver) => Ok(Some(driver)),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(e) => Err(Error::Sql(e)),
        }
    }

    pub(crate) async fn get_by_id(&self, id: i32) -> Result<Option<Driver>, Error> {
        match sqlx::query(
            "SELECT id, username, password_hash, role, fav_brand, phone_number
            FROM drivers
            WHERE id = $1;",
        )
        .bind(id)
        .map(map_driver)
        .fetch_one(&self.pool)
        .await
        {
            Ok(driver) => Ok(Some(driver)),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(e) => Err(Error::Sql(e)),
        }
    }

    pub(crate) async fn list(&self) -> Result<Vec<Driver>, Error> {
        let drivers = sqlx::query(
            "SELECT id, username, password_hash, role, fav_brand, phone_number
            FROM drivers
            ORDER BY id;",
        )
        .map(map_driver)
        .fetch_all(&self.pool)
        .await?;

        Ok(drivers)
    }

    pub(crate) async fn register(&self, params: &request::NewDriver) -> Result<Driver, Error> {
        if !self.username_pattern.is_match(&params.username) {
            return Err(Error::InvalidUsername);
        }

        if params.password.len() < 8 {
            return Err(Error::InvalidPassword(
                "Password must be at least 8 characters".to_owned(),
            ));
        }

        let password_hash = hash_password(&params.password)?;

        let id: i32 = match sqlx::query(
            "INSERT INTO drivers (username, password_hash, role, fav_brand)
            VALUES ($1, $2, $3, $4)
            RETURNING id;",
        )
        .bind(&params.username)
        .bind(&password_hash)
        .bind(&params.role)
        .bind(&params.fav_brand)
        .map(|row: PgRow| row.get("id"))
        .fetch_one(&self.pool)
        .await
        {
            Ok(id) => id,
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(Error::UsernameTaken);
            }
            Err(e) => return Err(Error::Sql(e)),
        };

        Ok(Driver {
            id,
            username: params.username.clone(),
            password_hash,
            role: params.role.clone(),
            fav_brand: Some(params.fav_brand.clone()),
            phone_number: None,
        })
    }

    /// The single credential check used at login. An unknown username and a
    /// wrong password are indistinguishable to the caller.
    pub(crate) async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Driver, Error> {
        let driver = self
            .get_by_username(username)
            .await?
            .ok_or(Error::Unauthorized)?;

        if !verify_password(password, &driver.password_hash)? {
            return Err(Error::Unauthorized);
        }

        Ok(driver)
    }

    pub(crate) async fn update(&self, id: i32, params: &request::UpdateDriver) -> Result<(), Error> {
        if !self.username_pattern.is_match(&params.username) {
            return Err(Error::InvalidUsername);
        }

        let result = match sqlx::query(
            "UPDATE drivers SET username = $2, role = $3, fav_brand = $4 WHERE id = $1;",
        )
        .bind(id)
        .bind(&params.username)
        .bind(&params.role)
        .bind(&params.fav_brand)
        .execute(&self.pool)
        .await
        {
            Ok(result) => result,
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(Error::UsernameTaken);
            }
            Err(e) => return Err(Error::Sql(e)),
        };

        if result.rows_affected() == 0 {
            return Err(Error::DriverNotFound);
        }

        Ok(())
    }

    pub(crate) async fn set_phone(&self, id: i32, phone_number: i64) -> Result<(), Error> {
        let result = sqlx::query("UPDATE drivers SET phone_number = $2 WHERE id = $1;")
            .bind(id)
            .bind(phone_number)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::DriverNotFound);
        }

        Ok(())
    }

    pub(crate) async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = $1;")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::DriverNotFound);
        }

        Ok(())
    }
}

fn hash_password(password: &str) -> Result<String, Error> {
    bcrypt::hash(password, BCRYPT_COST).map_err(Error::Bcrypt)
}

fn verify_password(candidate: &str, hash: &str) -> Result<bool, Error> {
    bcrypt::verify(candidate, hash).map_err(Error::Bcrypt)
}

fn map_driver(row: PgRow) -> Driver {
    Driver {
        id: row.get("id"),
        username: row.get("username"),
        password_hash: row.get("password_hash"),
        role: row.get("role"),
        fav_brand: row.get("fav_brand"),
        phone_number: row.get("phone_number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_and_verifiable() {
        let first = hash_password("pw123456").unwrap();
        let second = hash_password("pw123456").unwrap();

        assert_ne!(first, "pw123456");
        assert_ne!(first, second);

        assert!(verify_password("pw123456", &first).unwrap());
        assert!(verify_password("pw123456", &second).unwrap());
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("pw123456").unwrap();

        assert!(!verify_password("pw12345", &hash).unwrap());
        assert!(!verify_password("", &hash).unwrap());
    }
}
