pub(crate) type Username = String;

pub(crate) const ADMIN_ROLE: &str = "admin";

/// A driver row as stored. The password hash never leaves this type; responses
/// go through [`crate::types::response::DriverProfile`].
#[derive(Clone, Debug, sqlx::FromRow)]
pub(crate) struct Driver {
    pub(crate) id: i32,
    pub(crate) username: Username,
    pub(crate) password_hash: String,
    pub(crate) role: String,
    pub(crate) fav_brand: Option<String>,
    pub(crate) phone_number: Option<i64>,
}
