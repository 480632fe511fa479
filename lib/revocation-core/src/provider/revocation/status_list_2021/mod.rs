//! W3C Status List 2021 provider.
//! https://www.w3.org/TR/vc-status-list/

use std::sync::Arc;

use async_trait::async_trait;

use self::model::StatusListCredential;
use super::RevocationProvider;
use super::error::RevocationError;
use crate::model::credential::Credential;
use crate::model::revocation_list::RevocationMetadata;
use crate::provider::http_client::HttpClient;
use crate::util::bitstring::extract_bitstring_index;

pub mod model;


pub const PROVIDER_NAME: &str = "statuslist2021";

/// Answers a single-index query against a remotely hosted Status List 2021
/// credential. Requires the full credential as input, since the status
/// reference carries the list url and the index.
pub struct StatusListProvider {
    client: Arc<dyn HttpClient>,
}

impl StatusListProvider {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RevocationProvider for StatusListProvider {
    fn name(&self) -> String {
        PROVIDER_NAME.to_string()
    }

    fn description(&self) -> String {
        "W3C Status List 2021 bitstring lookup".to_string()
    }

    /// Reachability of the list host is not probed proactively.
    async fn is_available(&self) -> bool {
        true
    }

    async fn check_revocation(&self, credential: &Credential) -> Result<bool, RevocationError> {
        let status = credential
            .status
            .as_ref()
            .ok_or(RevocationError::MissingStatusReference)?;
        let (list_url, list_index) = status
            .first_resolvable()
            .ok_or(RevocationError::MissingStatusReference)?;

        let index: usize = list_index
            .parse()
            .map_err(|_| RevocationError::InvalidStatusListIndex(list_index.to_string()))?;

        let response = self.client.get(list_url).send().await?;
        if !response.status.is_success() {
            return Err(RevocationError::StatusListFetchFailed(response.status.0));
        }

        let list: StatusListCredential = response
            .json()
            .map_err(|error| RevocationError::MalformedStatusList(error.to_string()))?;
        let encoded_list = list.credential_subject.encoded_list.ok_or_else(|| {
            RevocationError::MalformedStatusList(
                "missing credentialSubject.encodedList".to_string(),
            )
        })?;

        Ok(extract_bitstring_index(&encoded_list, index)?)
    }

    /// Extension point: the baseline status list carries no issuer-supplied
    /// revocation metadata.
    async fn get_metadata(
        &self,
        _credential: &Credential,
    ) -> Result<Option<RevocationMetadata>, RevocationError> {
        Ok(None)
    }
}
