//! `struct`s and `enum`s for the revocation provider layer.

use strum_macros::Display;

use crate::model::revocation_list::RevocationMetadata;

/// Outcome of consulting a single provider.
///
/// `Unavailable` covers an unavailable provider, a failed call and a timed
/// out call, so callers can distinguish "confirmed clean" from "no answer".
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ProviderOutcome {
    Revoked,
    NotRevoked,
    Unavailable,
}

/// Positive answer produced by the provider chain.
#[derive(Clone, Debug)]
pub struct ProviderResolution {
    /// Name of the provider that reported the revocation.
    pub provider: String,
    pub metadata: Option<RevocationMetadata>,
}
