use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Prefix of every TXT value that encodes a forwarding rule.
pub const FORWARD_PREFIX: &str = "forward-email=";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Alias,
    Caa,
    Cname,
    Https,
    Mx,
    Ns,
    Srv,
    Txt,
    #[serde(other)]
    Other,
}

/// A DNS record as sent to the provider when creating it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mx_priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

impl DnsRecord {
    /// A TXT record on the zone apex carrying `value`.
    #[must_use]
    pub fn apex_txt(value: String) -> Self {
        DnsRecord {
            name: String::new(),
            record_type: RecordType::Txt,
            value,
            mx_priority: None,
            priority: None,
        }
    }
}

/// A DNS record as returned by the provider, with its bookkeeping fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(flatten)]
    pub record: DnsRecord,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// The records of one domain, in provider order. A missing or `null` record list is empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub records: Vec<Record>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Record>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RecordSet {
    /// The first record whose value is a forwarding rule for `address`, if any.
    #[must_use]
    pub fn claimant(&self, address: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| ForwardRule::claims(&r.record.value, address))
    }
}

/// A forward from `<address>@<domain>` to `target`, stored as a single TXT value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardRule {
    pub address: String,
    pub target: String,
}

impl ForwardRule {
    /// Whether the TXT `value` is a forwarding rule for the local `address`.
    ///
    /// The address must appear delimited as `=<address>:`, so `alic` and `alicex` are not
    /// claimed by a rule for `alice`.
    #[must_use]
    pub fn claims(value: &str, address: &str) -> bool {
        value.starts_with(FORWARD_PREFIX) && value.contains(&format!("={address}:"))
    }
}

impl fmt::Display for ForwardRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{FORWARD_PREFIX}{}:{}", self.address, self.target)
    }
}
