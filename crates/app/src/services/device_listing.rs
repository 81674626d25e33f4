//! Device listing — the device directory with its degrade-to-empty policy.

use watchdog_domain::device::Device;

use crate::ports::DeviceDirectory;

/// Lists devices, treating any failure as "no devices".
pub struct DeviceListing<D> {
    directory: D,
}

impl<D: DeviceDirectory> DeviceListing<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Current devices, or an empty list when the backend is unreachable or refuses.
    #[tracing::instrument(skip(self))]
    pub async fn list_or_empty(&self) -> Vec<Device> {
        match self.directory.list().await {
            Ok(devices) => {
                tracing::debug!(count = devices.len(), "devices listed");
                devices
            }
            Err(err) => {
                tracing::warn!(error = %err, "device list unavailable");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    use watchdog_domain::device;
    use watchdog_domain::error::NetworkError;

    struct StaticDirectory(Result<Vec<Device>, NetworkError>);

    impl DeviceDirectory for StaticDirectory {
        fn list(&self) -> impl Future<Output = Result<Vec<Device>, NetworkError>> {
            let result = self.0.clone();
            async { result }
        }
    }

    #[tokio::test]
    async fn should_return_devices_on_success() {
        let body = serde_json::json!([{ "serial": "111111", "online": true }]);
        let listing = DeviceListing::new(StaticDirectory(Ok(device::from_directory(&body))));

        let devices = listing.list_or_empty().await;

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].label(), "#111111");
        assert!(devices[0].online);
    }

    #[tokio::test]
    async fn should_return_empty_list_on_failure() {
        let listing = DeviceListing::new(StaticDirectory(Err(NetworkError::Status {
            status: 503,
            message: None,
        })));
        assert!(listing.list_or_empty().await.is_empty());
    }
}
