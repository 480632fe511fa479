pub mod error;
pub mod in_memory;
pub mod revocation_registry;
