pub(crate) mod car;
pub(crate) mod driver;
pub(crate) mod request;
pub(crate) mod response;
