/// Data models and database operations
///
/// - `user`: registered accounts
/// - `task`: tasks owned by accounts

pub mod task;
pub mod user;
