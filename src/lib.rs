pub mod config;
pub mod error;
pub mod output;
pub mod run;
pub mod scoring;
pub mod server;
pub mod table;

pub use error::TopsisError;
