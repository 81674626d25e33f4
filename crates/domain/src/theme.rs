//! Light/dark color theme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Browser-local storage key holding the chosen theme.
pub const STORAGE_KEY: &str = "theme";

/// Document attribute the stylesheet keys its variables on (`data-theme`).
pub const ATTRIBUTE: &str = "data-theme";

/// Dashboard color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Label of the toggle control, naming the theme a click switches to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark theme",
            Self::Dark => "Light theme",
        }
    }

    /// Initial theme: the persisted choice if valid, otherwise the system preference.
    #[must_use]
    pub fn resolve(stored: Option<&str>, prefers_light: bool) -> Self {
        stored
            .and_then(|value| value.parse().ok())
            .unwrap_or(if prefers_light { Self::Light } else { Self::Dark })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ValidationError::UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_flip_between_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn should_prefer_stored_theme() {
        assert_eq!(Theme::resolve(Some("dark"), true), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), false), Theme::Light);
    }

    #[test]
    fn should_follow_system_preference_when_nothing_stored() {
        assert_eq!(Theme::resolve(None, true), Theme::Light);
        assert_eq!(Theme::resolve(None, false), Theme::Dark);
    }

    #[test]
    fn should_ignore_garbage_stored_value() {
        assert_eq!(Theme::resolve(Some("sepia"), false), Theme::Dark);
    }

    #[test]
    fn should_label_toggle_with_target_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Dark theme");
        assert_eq!(Theme::Dark.toggle_label(), "Light theme");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let json = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let parsed: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Theme::Dark);
    }
}
