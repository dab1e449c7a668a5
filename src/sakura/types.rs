use serde::{Deserialize, Serialize};

use crate::zone::strip_trailing_dot;

/// `ServiceClass` tag identifying DNS zone resources among all
/// CommonServiceItems of the account.
pub const DNS_SERVICE_CLASS: &str = "cloud/dns";

/// `Provider.Class` value submitted when creating a DNS zone resource.
pub const DNS_PROVIDER_CLASS: &str = "dns";

/// One flat resource record row. The remote store has no record-set
/// grouping; several rows may share `Name` and `Type`. A missing `TTL`
/// means the service-side default applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRow {
    #[serde(rename = "Name")]
    pub name: String, // "@" denotes the zone apex
    #[serde(rename = "Type")]
    pub rtype: String, // "A", "MX", ...
    #[serde(rename = "RData")]
    pub rdata: String,
    #[serde(rename = "TTL", default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSettings {
    #[serde(rename = "ResourceRecordSets", default)]
    pub resource_record_sets: Vec<RecordRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSettings {
    #[serde(rename = "DNS")]
    pub dns: DnsSettings,
}

impl ItemSettings {
    pub fn with_rows(rows: Vec<RecordRow>) -> Self {
        Self {
            dns: DnsSettings {
                resource_record_sets: rows,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStatus {
    #[serde(rename = "Zone")]
    pub zone: String, // zone name without trailing dot
    #[serde(rename = "NS", default, skip_serializing_if = "Vec::is_empty")]
    pub ns: Vec<String>, // delegated nameservers, response only
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderClass {
    #[serde(rename = "Class")]
    pub class: String,
}

/// A DNS zone resource as returned by the API. This is the remote zone
/// handle: the opaque `ID` plus the authoritative row list.
#[derive(Debug, Clone, Deserialize)]
pub struct CommonServiceItem {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Settings")]
    pub settings: ItemSettings,
    #[serde(rename = "Status")]
    pub status: ItemStatus,
    #[serde(rename = "ServiceClass", default)]
    pub service_class: String,
}

/// Request body for creating a zone resource with an empty record list.
#[derive(Debug, Serialize)]
pub struct ZoneCreateItem {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Status")]
    pub status: ItemStatus,
    #[serde(rename = "Settings")]
    pub settings: ItemSettings,
    #[serde(rename = "Provider")]
    pub provider: ProviderClass,
}

impl ZoneCreateItem {
    /// Builds the create payload. The wire `Name`/`Zone` fields use the
    /// root-relative form without the trailing dot.
    pub fn for_zone(zone_name: &str) -> Self {
        let name = strip_trailing_dot(zone_name).to_string();
        Self {
            status: ItemStatus {
                zone: name.clone(),
                ns: Vec::new(),
            },
            name,
            settings: ItemSettings::default(),
            provider: ProviderClass {
                class: DNS_PROVIDER_CLASS.to_string(),
            },
        }
    }
}

/// Update body: only the settings are replaced; every row not listed is
/// deleted remotely.
#[derive(Debug, Serialize)]
pub struct ZoneUpdateItem {
    #[serde(rename = "Settings")]
    pub settings: ItemSettings,
}

#[derive(Debug, Serialize)]
pub struct ItemEnvelope<T> {
    #[serde(rename = "CommonServiceItem")]
    pub common_service_item: T,
}

#[derive(Debug, Deserialize)]
pub struct ItemResponse {
    #[serde(rename = "CommonServiceItem")]
    pub common_service_item: CommonServiceItem,
}

#[derive(Debug, Deserialize)]
pub struct ItemListResponse {
    #[serde(rename = "CommonServiceItems")]
    pub common_service_items: Vec<CommonServiceItem>,
}

/// Error response body, e.g.
/// `{"is_fatal": true, "serial": "ff..", "status": "401 Unauthorized",
///   "error_code": "unauthorized", "error_msg": "error-unauthorized"}`.
/// `error_msg` arrives HTML-entity-encoded.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub is_fatal: bool,
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub error_msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_row_ttl_is_optional_both_ways() {
        let with_ttl: RecordRow =
            serde_json::from_str(r#"{"Name": "a", "Type": "A", "RData": "192.0.2.1", "TTL": 600}"#)
                .unwrap();
        assert_eq!(with_ttl.ttl, Some(600));

        let without_ttl: RecordRow =
            serde_json::from_str(r#"{"Name": "a", "Type": "A", "RData": "192.0.2.1"}"#).unwrap();
        assert_eq!(without_ttl.ttl, None);

        let json = serde_json::to_value(&without_ttl).unwrap();
        assert!(json.get("TTL").is_none());
    }

    #[test]
    fn create_payload_strips_trailing_dot() {
        let item = ZoneCreateItem::for_zone("unit.tests.");
        let json = serde_json::to_value(ItemEnvelope {
            common_service_item: item,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "CommonServiceItem": {
                    "Name": "unit.tests",
                    "Status": {"Zone": "unit.tests"},
                    "Settings": {"DNS": {"ResourceRecordSets": []}},
                    "Provider": {"Class": "dns"},
                }
            })
        );
    }

    #[test]
    fn item_deserializes_from_list_response() {
        let body = r#"{
            "From": 0, "Count": 1, "Total": 1,
            "CommonServiceItems": [{
                "ID": "999999999999",
                "Name": "unit.tests",
                "Settings": {"DNS": {"ResourceRecordSets": [
                    {"Name": "www", "Type": "A", "RData": "192.0.2.1"}
                ]}},
                "Status": {"Zone": "unit.tests", "NS": ["ns1.gslb9.sakura.ne.jp"]},
                "ServiceClass": "cloud/dns"
            }],
            "is_ok": true
        }"#;
        let resp: ItemListResponse = serde_json::from_str(body).unwrap();
        let item = &resp.common_service_items[0];
        assert_eq!(item.id, "999999999999");
        assert_eq!(item.status.zone, "unit.tests");
        assert_eq!(item.settings.dns.resource_record_sets.len(), 1);
        assert_eq!(item.status.ns, vec!["ns1.gslb9.sakura.ne.jp"]);
    }
}
