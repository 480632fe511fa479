pub mod error;
pub mod revocation;
