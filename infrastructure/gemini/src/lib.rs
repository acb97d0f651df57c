pub mod client;
pub mod client_factory;
pub mod completion_client;
