//! Transient status of a submit control (config send, message send).

/// How long the "sent"/"error" label stays before reverting, in milliseconds.
pub const REVERT_MS: u32 = 1200;

/// Label shown on the config submit button when idle.
pub const SEND_CONFIGURATION: &str = "Send configuration";
/// Label shown on the message send button when idle.
pub const SEND_MESSAGE: &str = "Send";

/// Lifecycle of a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitStatus {
    /// Button label for this status; `idle` is the control's resting label.
    #[must_use]
    pub fn label(self, idle: &'static str) -> &'static str {
        match self {
            Self::Idle => idle,
            Self::Sending => "Sending\u{2026}",
            Self::Sent => "Sent",
            Self::Failed => "Error",
        }
    }

    /// Whether the control must stay disabled (a request is in flight).
    #[must_use]
    pub fn is_busy(self) -> bool {
        self == Self::Sending
    }

    /// Whether this status reverts to [`SubmitStatus::Idle`] after [`REVERT_MS`].
    #[must_use]
    pub fn is_transient(self) -> bool {
        matches!(self, Self::Sent | Self::Failed)
    }

    /// Status once the revert delay of a request that settled as `settled` ran out.
    ///
    /// Only that request's own label reverts: if another submission started in
    /// the meantime the current status is kept, so an in-flight request stays
    /// disabled.
    #[must_use]
    pub fn reverted(self, settled: Self) -> Self {
        if settled.is_transient() && self == settled {
            Self::Idle
        } else {
            self
        }
    }

    /// Status after a request settled.
    #[must_use]
    pub fn settled<T, E>(result: &Result<T, E>) -> Self {
        if result.is_ok() { Self::Sent } else { Self::Failed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_show_idle_label_at_rest() {
        assert_eq!(SubmitStatus::Idle.label(SEND_CONFIGURATION), "Send configuration");
    }

    #[test]
    fn should_show_error_label_after_failure() {
        let result: Result<(), &str> = Err("bad serial");
        let status = SubmitStatus::settled(&result);
        assert_eq!(status.label(SEND_CONFIGURATION), "Error");
        assert!(status.is_transient());
    }

    #[test]
    fn should_revert_settled_label_to_idle() {
        let settled = SubmitStatus::Sent;
        assert_eq!(settled.reverted(settled), SubmitStatus::Idle);
        assert_eq!(SubmitStatus::Failed.reverted(SubmitStatus::Failed), SubmitStatus::Idle);
    }

    #[test]
    fn should_ignore_stale_revert_while_resubmitting() {
        let first = SubmitStatus::settled::<(), ()>(&Ok(()));
        // A second submission started before the first label reverted.
        let current = SubmitStatus::Sending;
        let after = current.reverted(first);
        assert_eq!(after, SubmitStatus::Sending);
        assert!(after.is_busy());
    }

    #[test]
    fn should_keep_idle_when_nothing_settled() {
        assert_eq!(SubmitStatus::Idle.reverted(SubmitStatus::Sending), SubmitStatus::Idle);
        assert_eq!(SubmitStatus::Sending.reverted(SubmitStatus::Idle), SubmitStatus::Sending);
    }

    #[test]
    fn should_only_disable_while_sending() {
        assert!(SubmitStatus::Sending.is_busy());
        assert!(!SubmitStatus::Sent.is_busy());
        assert!(!SubmitStatus::Idle.is_busy());
    }
}
