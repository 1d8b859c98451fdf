/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Credential service endpoints (register, login)
/// - `tasks`: Ownership-scoped task CRUD endpoints

pub mod auth;
pub mod health;
pub mod tasks;
