//! Biblius Library Circulation System
//!
//! A small console-driven circulation tool: registers users, catalogs
//! books, and tracks loans and returns, persisting all state as flat
//! comma-delimited text files. Every mutation follows the same cycle:
//! read the whole store, change rows in memory, rewrite the whole store.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
