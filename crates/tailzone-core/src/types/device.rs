use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// A device from the tailnet inventory
///
/// Only `hostname` and `addresses` feed the zone file; the remaining fields
/// are kept so that verbose logs can say which node a record came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Short machine name (the left-most label in the zone)
    #[serde(default)]
    pub hostname: String,

    /// Tailnet addresses, IPv4 first as reported by the API
    #[serde(default)]
    pub addresses: Vec<String>,

    /// Stable device identifier
    #[serde(default)]
    pub id: Option<String>,

    /// Fully-qualified MagicDNS name
    #[serde(default)]
    pub name: Option<String>,

    /// Operating system
    #[serde(default)]
    pub os: Option<String>,

    /// Owning user login
    #[serde(default)]
    pub user: Option<String>,

    /// Whether the device has been approved by an admin
    #[serde(default)]
    pub authorized: Option<bool>,

    /// Last time the device was seen by the control plane
    #[serde(default)]
    pub last_seen: Option<String>,
}

impl Device {
    /// Create a device record with just a hostname and addresses
    #[must_use]
    pub fn new<I, S>(hostname: impl Into<String>, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hostname: hostname.into(),
            addresses: addresses.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// The address that ends up in the zone file
    #[must_use]
    pub fn primary_address(&self) -> Option<&str> {
        self.addresses.first().map(String::as_str)
    }

    /// Try to parse the primary address as an IP address
    #[must_use]
    pub fn primary_ip(&self) -> Option<IpAddr> {
        self.primary_address()?.parse().ok()
    }
}

/// Response envelope of the device listing endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceList {
    /// Devices in the order the API returned them
    pub devices: Vec<Device>,
}

impl IntoIterator for DeviceList {
    type Item = Device;
    type IntoIter = std::vec::IntoIter<Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_device() {
        let json = r#"{
            "addresses": ["100.64.0.1", "fd7a:115c:a1e0::1"],
            "id": "12345",
            "name": "laptop.example.ts.net",
            "hostname": "laptop",
            "os": "linux",
            "user": "alice@example.com",
            "authorized": true,
            "lastSeen": "2024-05-01T10:00:00Z",
            "clientVersion": "1.66.0"
        }"#;

        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.hostname, "laptop");
        assert_eq!(device.primary_address(), Some("100.64.0.1"));
        assert_eq!(device.last_seen.as_deref(), Some("2024-05-01T10:00:00Z"));
        assert_eq!(device.authorized, Some(true));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let device: Device = serde_json::from_str(r#"{"id": "1"}"#).unwrap();
        assert!(device.hostname.is_empty());
        assert!(device.addresses.is_empty());
        assert_eq!(device.primary_ip(), None);
    }

    #[test]
    fn test_device_list_keeps_order() {
        let json = r#"{"devices": [
            {"hostname": "b", "addresses": ["100.64.0.2"]},
            {"hostname": "a", "addresses": ["100.64.0.1"]}
        ]}"#;

        let list: DeviceList = serde_json::from_str(json).unwrap();
        let names: Vec<String> = list.into_iter().map(|d| d.hostname).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn test_device_list_requires_devices_key() {
        assert!(serde_json::from_str::<DeviceList>("{}").is_err());
        assert!(serde_json::from_str::<DeviceList>(r#"{"message": "not found"}"#).is_err());

        let empty: DeviceList = serde_json::from_str(r#"{"devices": []}"#).unwrap();
        assert!(empty.devices.is_empty());
    }
}
