//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use std::future::Future;

use gloo_net::http::{Request, Response};
use watchdog_app::config::ApiConfig;
use watchdog_app::ports::{ConfigGateway, DeviceDirectory, MessageGateway};
use watchdog_domain::config_form::ConfigPayload;
use watchdog_domain::device::{self, Device};
use watchdog_domain::error::NetworkError;
use watchdog_domain::message::{MessageList, OutgoingMessage};

/// Map a transport failure (rejected fetch, bad request body) to a [`NetworkError`].
fn transport(err: gloo_net::Error) -> NetworkError {
    NetworkError::Request(err.to_string())
}

/// Map a body that failed to deserialize to a [`NetworkError`].
fn decode(err: gloo_net::Error) -> NetworkError {
    NetworkError::Decode(err.to_string())
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, NetworkError> {
    if resp.ok() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(NetworkError::from_status_body(resp.status(), &body))
}

/// Client for the device host's JSON API.
#[derive(Debug, Clone, Default)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    /// Client for the API described by `config`.
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl DeviceDirectory for HttpApi {
    fn list(&self) -> impl Future<Output = Result<Vec<Device>, NetworkError>> {
        let url = self.config.url("/api/devices");
        async move {
            let resp = Request::get(&url)
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(transport)?;
            let resp = check_response(resp).await?;
            let body: serde_json::Value = resp.json().await.map_err(decode)?;
            Ok(device::from_directory(&body))
        }
    }
}

impl ConfigGateway for HttpApi {
    fn submit(&self, payload: &ConfigPayload) -> impl Future<Output = Result<(), NetworkError>> {
        let url = self.config.url("/api/config");
        let request = Request::post(&url).json(payload).map_err(transport);
        async move {
            let resp = request?.send().await.map_err(transport)?;
            check_response(resp).await?;
            Ok(())
        }
    }
}

impl MessageGateway for HttpApi {
    fn fetch(&self) -> impl Future<Output = Result<MessageList, NetworkError>> {
        let url = self.config.url("/api/messages");
        async move {
            let resp = Request::get(&url).send().await.map_err(transport)?;
            let resp = check_response(resp).await?;
            resp.json::<MessageList>().await.map_err(decode)
        }
    }

    fn send(&self, message: &OutgoingMessage) -> impl Future<Output = Result<(), NetworkError>> {
        let url = self.config.url("/api/send");
        let request = Request::post(&url).json(message).map_err(transport);
        async move {
            let resp = request?.send().await.map_err(transport)?;
            check_response(resp).await?;
            Ok(())
        }
    }
}
