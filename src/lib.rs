pub mod config;
pub mod error;
pub mod gcp;
pub mod http;
pub mod probe;
