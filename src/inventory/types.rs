use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Health state reported for a server.
///
/// The service only ever hands out the three known values, but anything else
/// it sends is kept verbatim so it survives an edit round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    Online,
    Offline,
    Maintenance,
    Other(String),
}

impl Status {
    /// The values offered by the status picker, in display order.
    pub const CHOICES: [Status; 3] = [Status::Online, Status::Offline, Status::Maintenance];

    /// The value used when the service sends no status at all.
    pub fn blank() -> Self {
        Status::Other(String::new())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Online => "Online",
            Status::Offline => "Offline",
            Status::Maintenance => "Maintenance",
            Status::Other(s) => s,
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Online" => Status::Online,
            "Offline" => Status::Offline,
            "Maintenance" => Status::Maintenance,
            _ => Status::Other(s),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record of the remote inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "ip", default, deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    /// Null or missing decodes as an empty `Other`, shown as neutral.
    #[serde(default = "Status::blank", deserialize_with = "status_or_blank")]
    pub status: Status,
    /// Assigned by the server; never set locally.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub last_report: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn status_or_blank<'de, D>(deserializer: D) -> Result<Status, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
        .map(|s| s.map_or_else(Status::blank, Status::from))
}
