//! Configuration submission — turn a device form into a single `POST`.

use watchdog_domain::config_form::DeviceConfigForm;
use watchdog_domain::error::NetworkError;

use crate::ports::ConfigGateway;

/// Submits device configuration forms. One attempt, no retry.
pub struct ConfigSubmission<G> {
    gateway: G,
}

impl<G: ConfigGateway> ConfigSubmission<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Build the payload from `form` and submit it.
    ///
    /// # Errors
    ///
    /// Returns the [`NetworkError`] of a rejected request or non-2xx status.
    /// The failure is also logged with the server's message.
    #[tracing::instrument(skip(self, form), fields(serial = %form.serial()))]
    pub async fn submit(&self, form: &DeviceConfigForm) -> Result<(), NetworkError> {
        let payload = form.to_payload();
        tracing::debug!(
            serial = %payload.serial,
            recipients = payload.recipients.len(),
            events = payload.events.len(),
            "submitting configuration"
        );
        match self.gateway.submit(&payload).await {
            Ok(()) => {
                tracing::info!(serial = %payload.serial, "configuration sent");
                Ok(())
            }
            Err(err) => {
                tracing::error!(
                    serial = %payload.serial,
                    error = %err.user_message(),
                    "configuration submit failed"
                );
                Err(err)
            }
        }
    }
}
