//! # TaskDeck Shared Library
//!
//! Common building blocks shared by the TaskDeck API server:
//!
//! - `models`: User and Task models with their database operations
//! - `auth`: Password hashing (Argon2id) and JWT issuance/validation
//! - `db`: Connection pool management and migrations

pub mod auth;
pub mod db;
pub mod models;
