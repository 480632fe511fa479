//! Credential revocation and status checking.
//!
//! Combines an authoritative local revocation registry, a pluggable chain of
//! external revocation providers, a TTL-bounded status cache and a W3C Status
//! List 2021 bitstring decoder behind a single service facade.
//!
//! Status resolution order: cache, local registry (always authoritative),
//! provider chain in registration order, default not-revoked. DID resolution,
//! credential issuance and cryptographic proof verification are collaborator
//! concerns and stay outside this crate.

pub mod model;
pub mod provider;
pub mod repository;
pub mod service;
pub mod util;

pub use repository::in_memory::InMemoryRevocationRegistry;
pub use service::revocation::{Params, RevocationService};
