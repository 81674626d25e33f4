//! Message feed — poll and send text messages through the device host.

use watchdog_domain::error::WatchdogError;
use watchdog_domain::message::OutgoingMessage;

use crate::ports::MessageGateway;

/// Reads and writes the host's message log.
pub struct MessageFeed<G> {
    gateway: G,
}

impl<G: MessageGateway> MessageFeed<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Latest messages, newest first; `None` when the poll failed and the
    /// caller should keep showing what it has.
    pub async fn refresh(&self) -> Option<Vec<String>> {
        match self.gateway.fetch().await {
            Ok(list) => Some(list.newest_first()),
            Err(err) => {
                tracing::warn!(error = %err, "message poll failed");
                None
            }
        }
    }

    /// Validate and send `text`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank text (nothing is sent) or the
    /// network error of a failed request.
    #[tracing::instrument(skip(self))]
    pub async fn send(&self, text: &str) -> Result<(), WatchdogError> {
        let message = OutgoingMessage::new(text)?;
        self.gateway.send(&message).await.map_err(|err| {
            tracing::warn!(error = %err, "message send failed");
            WatchdogError::from(err)
        })
    }
}
