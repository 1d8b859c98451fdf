/// Authentication primitives
///
/// - `password`: Argon2id hashing and verification
/// - `jwt`: token creation and validation
/// - `middleware`: bearer-token extraction and request auth context

pub mod jwt;
pub mod middleware;
pub mod password;
