use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

use crate::core::error::Error;
use crate::types::car::Car;
use crate::types::request;

const MIN_MODEL_YEAR: i32 = 1800;

#[derive(Clone, Debug)]
pub(crate) struct CarController {
    pool: PgPool,
}

impl CarController {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn list(&self) -> Result<Vec<Car>, Error> {
        let cars = sqlx::query(
            "SELECT id, manufacturer, model, year, owner_id FROM cars ORDER BY id;",
        )
        .map(map_car)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub(crate) async fn get(&self, id: i32) -> Result<Car, Error> {
        match sqlx::query("SELECT id, manufacturer, model, year, owner_id FROM cars WHERE id = $1;")
            .bind(id)
            .map(map_car)
            .fetch_one(&self.pool)
            .await
        {
            Ok(car) => Ok(car),
            Err(sqlx::Error::RowNotFound) => Err(Error::CarNotFound),
            Err(e) => Err(Error::Sql(e)),
        }
    }

    /// Ownership always comes from the caller's decoded identity, never from
    /// the request body.
    pub(crate) async fn create(
        &self,
        owner_id: i32,
        params: &request::CarData,
    ) -> Result<Car, Error> {
        validate_year(params.year)?;

        let id: i32 = sqlx::query(
            "INSERT INTO cars (manufacturer, model, year, owner_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id;",
        )
        .bind(&params.manufacturer)
        .bind(&params.model)
        .bind(params.year)
        .bind(owner_id)
        .map(|row: PgRow| row.get("id"))
        .fetch_one(&self.pool)
        .await?;

        Ok(Car {
            id,
            manufacturer: params.manufacturer.clone(),
            model: params.model.clone(),
            year: Some(params.year),
            owner_id: Some(owner_id),
        })
    }

    pub(crate) async fn update(&self, id: i32, params: &request::CarData) -> Result<(), Error> {
        validate_year(params.year)?;

        let result = sqlx::query(
            "UPDATE cars SET manufacturer = $2, model = $3, year = $4 WHERE id = $1;",
        )
        .bind(id)
        .bind(&params.manufacturer)
        .bind(&params.model)
        .bind(params.year)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::CarNotFound);
        }

        Ok(())
    }

    pub(crate) async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1;")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::CarNotFound);
        }

        Ok(())
    }
}

fn validate_year(year: i32) -> Result<(), Error> {
    if year <= MIN_MODEL_YEAR {
        return Err(Error::InvalidYear);
    }

    Ok(())
}

fn map_car(row: PgRow) -> Car {
    Car {
        id: row.get("id"),
        manufacturer: row.get("manufacturer"),
        model: row.get("model"),
        year: row.get("year"),
        owner_id: row.get("owner_id"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_1800_years_are_rejected() {
        assert!(matches!(validate_year(1800), Err(Error::InvalidYear)));
        assert!(matches!(validate_year(0), Err(Error::InvalidYear)));
        assert!(validate_year(1801).is_ok());
        assert!(validate_year(2024).is_ok());
    }
}
