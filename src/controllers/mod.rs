pub(crate) mod car;
pub(crate) mod driver;
