//! Device inventory endpoints.

use crate::TailscaleClient;
use tailzone_core::{Device, DeviceList, Result};
use tracing::debug;

/// Device API endpoints
pub struct DevicesApi<'a> {
    client: &'a TailscaleClient,
}

impl<'a> DevicesApi<'a> {
    pub(crate) const fn new(client: &'a TailscaleClient) -> Self {
        Self { client }
    }

    /// List all devices in the tailnet, in the order the API returns them
    pub async fn list(&self) -> Result<Vec<Device>> {
        let list: DeviceList = self.client.get_tailnet("devices", &[]).await?;
        debug!(
            tailnet = self.client.tailnet(),
            count = list.devices.len(),
            "fetched device inventory"
        );
        Ok(list.devices)
    }
}
