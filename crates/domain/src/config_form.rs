//! Per-device notification configuration — form state and submitted payload.
//!
//! A form has a fixed shape: [`RECIPIENT_SLOTS`] recipient triples and
//! [`EVENT_SLOTS`] event rows. The recipient selector of every event row
//! offers exactly the non-empty recipient names of the *same* form; editing a
//! name drops selections that no longer match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of recipient triples per device.
pub const RECIPIENT_SLOTS: usize = 3;
/// Number of event rows per device.
pub const EVENT_SLOTS: usize = 9;

/// Condition under which a notification event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerMode {
    #[default]
    Manual,
    Threshold,
    TimeWindow,
    PowerSpike,
    Custom,
}

impl TriggerMode {
    pub const ALL: [Self; 5] = [
        Self::Manual,
        Self::Threshold,
        Self::TimeWindow,
        Self::PowerSpike,
        Self::Custom,
    ];

    /// Wire and option value, e.g. `time-window`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Threshold => "threshold",
            Self::TimeWindow => "time-window",
            Self::PowerSpike => "power-spike",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriggerMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownTriggerMode(s.to_string()))
    }
}

/// Which input of a recipient triple is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientField {
    Name,
    Email,
    Phone,
}

/// Raw text of one recipient triple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientInput {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl RecipientInput {
    /// Current text of `field`.
    #[must_use]
    pub fn field(&self, field: RecipientField) -> &str {
        match field {
            RecipientField::Name => &self.name,
            RecipientField::Email => &self.email,
            RecipientField::Phone => &self.phone,
        }
    }

    fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.email.trim().is_empty() && self.phone.trim().is_empty()
    }
}

/// Raw state of one event row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRowInput {
    /// Selected recipient name; empty means none.
    pub recipient: String,
    pub trigger: TriggerMode,
    pub sms: bool,
    pub email: bool,
}

impl EventRowInput {
    fn is_empty(&self) -> bool {
        self.recipient.is_empty() && !self.sms && !self.email
    }
}

/// Notification channel of an event row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Sms,
    Email,
}

/// Editable configuration for a single device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfigForm {
    serial: String,
    recipients: [RecipientInput; RECIPIENT_SLOTS],
    events: [EventRowInput; EVENT_SLOTS],
}

impl DeviceConfigForm {
    /// Blank form for the device with the given serial.
    #[must_use]
    pub fn new(serial: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
            recipients: Default::default(),
            events: Default::default(),
        }
    }

    #[must_use]
    pub fn serial(&self) -> &str {
        &self.serial
    }

    #[must_use]
    pub fn recipients(&self) -> &[RecipientInput] {
        &self.recipients
    }

    #[must_use]
    pub fn events(&self) -> &[EventRowInput] {
        &self.events
    }

    /// Options for every event row's recipient selector: the distinct
    /// non-empty (trimmed) recipient names, in slot order.
    #[must_use]
    pub fn recipient_options(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(RECIPIENT_SLOTS);
        for recipient in &self.recipients {
            let name = recipient.name.trim();
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// Update one input of a recipient triple.
    ///
    /// Editing a name re-derives the selector options and resets every event
    /// row whose selected recipient is no longer offered.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SlotOutOfRange`] when `index` is not a recipient slot.
    pub fn set_recipient_field(
        &mut self,
        index: usize,
        field: RecipientField,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let recipient = self
            .recipients
            .get_mut(index)
            .ok_or(ValidationError::SlotOutOfRange {
                kind: "recipient",
                index,
                max: RECIPIENT_SLOTS,
            })?;
        let value = value.into();
        match field {
            RecipientField::Name => recipient.name = value,
            RecipientField::Email => recipient.email = value,
            RecipientField::Phone => recipient.phone = value,
        }
        if field == RecipientField::Name {
            self.reconcile_selections();
        }
        Ok(())
    }

    /// Select a recipient for an event row. Names not currently offered select nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SlotOutOfRange`] when `row` is not an event slot.
    pub fn set_event_recipient(
        &mut self,
        row: usize,
        name: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let name = name.into();
        let offered = self.recipient_options().contains(&name);
        self.event_mut(row)?.recipient = if offered { name } else { String::new() };
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::SlotOutOfRange`] when `row` is not an event slot.
    pub fn set_event_trigger(
        &mut self,
        row: usize,
        trigger: TriggerMode,
    ) -> Result<(), ValidationError> {
        self.event_mut(row)?.trigger = trigger;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::SlotOutOfRange`] when `row` is not an event slot.
    pub fn set_event_channel(
        &mut self,
        row: usize,
        channel: Channel,
        enabled: bool,
    ) -> Result<(), ValidationError> {
        let event = self.event_mut(row)?;
        match channel {
            Channel::Sms => event.sms = enabled,
            Channel::Email => event.email = enabled,
        }
        Ok(())
    }

    /// Build the `POST /api/config` body, omitting blank recipients and rows.
    #[must_use]
    pub fn to_payload(&self) -> ConfigPayload {
        ConfigPayload {
            serial: self.serial.clone(),
            recipients: self
                .recipients
                .iter()
                .filter(|r| !r.is_empty())
                .map(|r| Recipient {
                    name: r.name.trim().to_string(),
                    email: r.email.trim().to_string(),
                    number: r.phone.trim().to_string(),
                })
                .collect(),
            events: self
                .events
                .iter()
                .filter(|e| !e.is_empty())
                .map(|e| EventRule {
                    recipient_name: e.recipient.clone(),
                    trigger_mode: e.trigger,
                    sms: e.sms,
                    email: e.email,
                })
                .collect(),
        }
    }

    fn event_mut(&mut self, row: usize) -> Result<&mut EventRowInput, ValidationError> {
        self.events
            .get_mut(row)
            .ok_or(ValidationError::SlotOutOfRange {
                kind: "event",
                index: row,
                max: EVENT_SLOTS,
            })
    }

    fn reconcile_selections(&mut self) {
        let options = self.recipient_options();
        for event in &mut self.events {
            if !event.recipient.is_empty() && !options.contains(&event.recipient) {
                event.recipient.clear();
            }
        }
    }
}

/// A recipient as submitted to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub email: String,
    /// Phone number.
    pub number: String,
}

/// An event rule as submitted to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRule {
    pub recipient_name: String,
    pub trigger_mode: TriggerMode,
    pub sms: bool,
    pub email: bool,
}

/// Body of `POST /api/config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigPayload {
    pub serial: String,
    pub recipients: Vec<Recipient>,
    pub events: Vec<EventRule>,
}
