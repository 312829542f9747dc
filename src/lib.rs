pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod context;
pub mod enrollment;
pub mod error;
pub mod filter;
pub mod models;
pub mod roster;
pub mod session;
pub mod storage;
pub mod tracker;
pub mod types;

pub use context::AppContext;
pub use error::{ArmsError, ArmsResult};

#[cfg(test)]
pub mod testing;
