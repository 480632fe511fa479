use serde::Deserialize;

/// Fetched status list credential, reduced to the fields this provider reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusListCredential {
    pub credential_subject: CredentialSubject,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSubject {
    #[serde(default)]
    pub encoded_list: Option<String>,
}
