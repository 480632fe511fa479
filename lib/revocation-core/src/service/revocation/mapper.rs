use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::model::revocation_list::{
    REVOCATION_LIST_VERSION, RevocationList, RevocationListInfo, RevokedCredential,
};
use crate::service::error::ServiceError;

pub(super) const CSV_HEADER: &str = "credentialId,issuerDID,revokedDate,reason,source";

pub(super) fn list_to_json(entries: Vec<RevokedCredential>) -> Result<String, ServiceError> {
    let now = OffsetDateTime::now_utc();
    let list = RevocationList {
        version: REVOCATION_LIST_VERSION.to_string(),
        created: now,
        updated: now,
        issuer_did: None,
        revoked_credentials: entries,
        metadata: RevocationListInfo::default(),
    };

    Ok(serde_json::to_string_pretty(&list)?)
}

pub(super) fn list_to_csv(entries: &[RevokedCredential]) -> String {
    let mut output = String::from(CSV_HEADER);

    for entry in entries {
        let metadata = &entry.metadata;
        let revoked_date = metadata
            .revoked_date
            .format(&Rfc3339)
            .unwrap_or_default();
        let row = [
            csv_field(&entry.credential_id),
            csv_field(&metadata.issuer_did),
            csv_field(&revoked_date),
            csv_field(metadata.reason.as_deref().unwrap_or_default()),
            csv_field(&metadata.source),
        ];

        output.push('\n');
        output.push_str(&row.join(","));
    }

    output
}

// RFC 4180: quote fields containing separators, quotes or line breaks
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
