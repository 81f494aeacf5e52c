use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct LoginData {
    pub(crate) username: String,
    pub(crate) password: String,
}

#[derive(Deserialize)]
pub(crate) struct NewDriver {
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) role: String,
    pub(crate) fav_brand: String,
}

#[derive(Deserialize)]
pub(crate) struct UpdateDriver {
    pub(crate) username: String,
    pub(crate) role: String,
    pub(crate) fav_brand: String,
}

#[derive(Deserialize)]
pub(crate) struct PhoneUpdate {
    pub(crate) phone_number: i64,
}

#[derive(Clone, Deserialize)]
pub(crate) struct CarData {
    pub(crate) manufacturer: String,
    pub(crate) model: String,
    pub(crate) year: i32,
}
