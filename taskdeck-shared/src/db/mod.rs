/// Database utilities
///
/// - `pool`: PostgreSQL connection pool management
/// - `migrations`: schema migration runner

pub mod migrations;
pub mod pool;
