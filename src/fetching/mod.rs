/// Fetching core: artifact model and the services that drive a fetch
pub mod domain;
pub mod services;
