//! Device — a monitored WATTCHdog power meter as reported by the backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::time::{self, Timestamp};

/// Product label used when the backend does not name a device.
pub const DEFAULT_DEVICE_NAME: &str = "WATTCHdog";

/// Identifier used when the backend reports neither `serial` nor `id`.
pub const UNKNOWN_DEVICE_ID: &str = "unknown";

/// A device as the dashboard sees it, with every field normalised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub online: bool,
    pub last_seen: Option<Timestamp>,
}

impl Device {
    /// Create an online device with the default product name.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: DEFAULT_DEVICE_NAME.to_string(),
            online: true,
            last_seen: None,
        }
    }

    /// Card heading, e.g. `#111111`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Raw entry of the `GET /api/devices` response.
///
/// Every field is optional; the backend keys devices by `serial` but older
/// revisions used `id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceRecord {
    pub serial: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub online: Option<bool>,
    /// Fractional UNIX seconds.
    pub last_seen: Option<f64>,
}

impl DeviceRecord {
    /// Read one directory entry, field by field.
    ///
    /// A field of an unexpected type is coerced where it has an obvious reading
    /// (a numeric serial, a truthy `online`) and dropped otherwise, so one odd
    /// field never discards the entry. Returns `None` when `value` is not an object.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;
        let field = |key: &str| entry.get(key).filter(|v| !v.is_null());
        Some(Self {
            serial: field("serial").and_then(text),
            id: field("id").and_then(text),
            name: field("name").and_then(text),
            online: field("online").map(truthy),
            last_seen: field("last_seen").and_then(Value::as_f64),
        })
    }
}

/// String value of a JSON scalar; numbers are written out, zero and non-scalars are dropped.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if truthy(value) => Some(n.to_string()),
        _ => None,
    }
}

/// Truthiness of a JSON value as the device host's scripts read it.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Devices listed in a `GET /api/devices` body.
///
/// Anything but an array is an empty directory; entries that are not objects
/// are skipped.
#[must_use]
pub fn from_directory(body: &Value) -> Vec<Device> {
    body.as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(DeviceRecord::from_json)
                .map(Device::from)
                .collect()
        })
        .unwrap_or_default()
}

impl From<DeviceRecord> for Device {
    fn from(record: DeviceRecord) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            id: non_empty(record.serial)
                .or_else(|| non_empty(record.id))
                .unwrap_or_else(|| UNKNOWN_DEVICE_ID.to_string()),
            name: non_empty(record.name).unwrap_or_else(|| DEFAULT_DEVICE_NAME.to_string()),
            online: record.online.unwrap_or(false),
            last_seen: record.last_seen.and_then(time::from_unix_seconds),
        }
    }
}
