//! Theme controller — the single source of truth for the active theme.

use watchdog_domain::theme::Theme;

use crate::ports::ThemeEnvironment;

/// Applies and persists the color theme.
pub struct ThemeController<E> {
    env: E,
    current: Theme,
}

impl<E: ThemeEnvironment> ThemeController<E> {
    /// Resolve the initial theme (persisted choice, else system preference) and apply it.
    pub fn init(env: E) -> Self {
        let stored = env.stored();
        let current = Theme::resolve(stored.as_deref(), env.prefers_light());
        let mut controller = Self { env, current };
        controller.apply(current);
        controller
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Make `theme` active, visible and persisted.
    pub fn apply(&mut self, theme: Theme) {
        self.current = theme;
        self.env.apply(theme);
        self.env.persist(theme);
        tracing::debug!(%theme, "theme applied");
    }

    /// Switch to the other theme and return it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply(next);
        next
    }
}
