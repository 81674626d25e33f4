//! Theme port — where the theme choice is stored and how it is shown.

use watchdog_domain::theme::Theme;

/// Browser-side theme state.
pub trait ThemeEnvironment {
    /// Raw persisted choice, if any.
    fn stored(&self) -> Option<String>;

    /// Persist the choice across reloads.
    fn persist(&self, theme: Theme);

    /// Whether the system color-scheme preference is light.
    fn prefers_light(&self) -> bool;

    /// Make the theme visible (e.g. set the document's theme attribute).
    fn apply(&self, theme: Theme);
}
