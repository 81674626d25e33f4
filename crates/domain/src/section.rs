//! Top-level dashboard sections, addressed by the URL fragment.

use std::fmt;

/// A visible top-level section of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Start,
    Live,
    Config,
    Messages,
}

impl Section {
    /// Menu order.
    pub const ALL: [Self; 4] = [Self::Start, Self::Live, Self::Config, Self::Messages];

    /// Fragment name without the leading `#`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Live => "live",
            Self::Config => "config",
            Self::Messages => "messages",
        }
    }

    /// URL fragment, e.g. `#live`.
    #[must_use]
    pub fn fragment(self) -> String {
        format!("#{}", self.slug())
    }

    /// Menu label.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Live => "Live view",
            Self::Config => "Configuration",
            Self::Messages => "Messages",
        }
    }

    /// Section addressed by a URL fragment (`#live`, `live`, or empty).
    ///
    /// Empty and unknown fragments land on [`Section::Start`].
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        let slug = fragment.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|section| section.slug() == slug)
            .unwrap_or_default()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
