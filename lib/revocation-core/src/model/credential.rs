use serde::{Deserialize, Serialize};

/// Minimal credential shape consumed by the status-checking engine.
///
/// Only the identifier and the optional status reference matter here; proof
/// verification and schema validation happen elsewhere.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Credential {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusRef>,
}

impl Credential {
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: None,
        }
    }
}

/// Credential status reference, a single entry or a list of entries.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StatusRef {
    Single(StatusListEntry),
    Many(Vec<StatusListEntry>),
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusListEntry {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_list_credential: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_list_index: Option<String>,
}

impl StatusRef {
    /// First entry carrying both a status list url and an index.
    pub fn first_resolvable(&self) -> Option<(&str, &str)> {
        let entries: &[StatusListEntry] = match self {
            StatusRef::Single(entry) => std::slice::from_ref(entry),
            StatusRef::Many(entries) => entries,
        };

        entries.iter().find_map(|entry| {
            match (&entry.status_list_credential, &entry.status_list_index) {
                (Some(url), Some(index)) => Some((url.as_str(), index.as_str())),
                _ => None,
            }
        })
    }
}
