pub mod cli_args;
pub mod config;
pub mod credential;
pub mod error;
pub mod extractor;
pub mod inspect;
pub mod state;
pub mod traits;
pub mod types;
mod utils;
