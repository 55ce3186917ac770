pub mod error;
pub mod http_client;
pub mod structs;
pub mod timeframes;
