//! Device inventory sources.

use async_trait::async_trait;

use crate::{Device, Result};

/// Anything that can produce the current device inventory.
///
/// Implementations report transport and decoding problems as fetch errors
/// (see [`crate::TailzoneError::is_fetch_error`]); record-level problems are
/// left for the renderer to report.
#[async_trait]
pub trait DeviceSource: Send + Sync {
    /// Fetch all devices, in the order the inventory lists them
    async fn fetch_devices(&self) -> Result<Vec<Device>>;
}

/// A fixed in-memory inventory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    devices: Vec<Device>,
}

impl StaticSource {
    /// Create a source that always returns `devices`
    #[must_use]
    pub const fn new(devices: Vec<Device>) -> Self {
        Self { devices }
    }
}

#[async_trait]
impl DeviceSource for StaticSource {
    async fn fetch_devices(&self) -> Result<Vec<Device>> {
        Ok(self.devices.clone())
    }
}
