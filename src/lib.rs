//! Reporting queries over an in-memory collection of financial transactions.
//!
//! Transactions are loaded once through a [`storage::TransactionSource`] and handed to a
//! [`engine::QueryEngine`], which answers every query without mutating them.

pub mod config;
pub mod engine;
pub mod models;
pub mod report;
pub mod storage;
pub mod types;
