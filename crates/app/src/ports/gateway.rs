//! Gateway ports — the backend's HTTP endpoints.

use std::future::Future;

use watchdog_domain::config_form::ConfigPayload;
use watchdog_domain::device::Device;
use watchdog_domain::error::NetworkError;
use watchdog_domain::message::{MessageList, OutgoingMessage};

/// `GET /api/devices`.
pub trait DeviceDirectory {
    /// Fetch and normalise the current device list. Single attempt, no caching.
    fn list(&self) -> impl Future<Output = Result<Vec<Device>, NetworkError>>;
}

/// `POST /api/config`.
pub trait ConfigGateway {
    /// Submit a device configuration. Success is judged by HTTP status only.
    fn submit(&self, payload: &ConfigPayload) -> impl Future<Output = Result<(), NetworkError>>;
}

/// `GET /api/messages` and `POST /api/send`.
pub trait MessageGateway {
    fn fetch(&self) -> impl Future<Output = Result<MessageList, NetworkError>>;

    fn send(&self, message: &OutgoingMessage) -> impl Future<Output = Result<(), NetworkError>>;
}
