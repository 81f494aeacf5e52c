use serde::Serialize;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub(crate) struct Car {
    pub(crate) id: i32,
    pub(crate) manufacturer: String,
    pub(crate) model: String,
    pub(crate) year: Option<i32>,
    pub(crate) owner_id: Option<i32>,
}
