pub(crate) mod admin;
pub(crate) mod auth;
pub(crate) mod cars;
pub(crate) mod drivers;
pub(crate) mod router;
