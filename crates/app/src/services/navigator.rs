//! Navigator — which section is visible.

use watchdog_domain::section::Section;

/// A move between sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Section,
    pub to: Section,
}

impl Transition {
    /// Whether the live view must be (re)built. Re-selecting it counts.
    #[must_use]
    pub fn enters(self, section: Section) -> bool {
        self.to == section
    }

    /// Whether `section` stops being visible.
    #[must_use]
    pub fn leaves(self, section: Section) -> bool {
        self.from == section && self.to != section
    }
}

/// Tracks the visible section.
#[derive(Debug, Default)]
pub struct Navigator {
    current: Section,
}

impl Navigator {
    #[must_use]
    pub fn current(&self) -> Section {
        self.current
    }

    /// Show `to` and report the transition.
    pub fn go(&mut self, to: Section) -> Transition {
        let transition = Transition {
            from: self.current,
            to,
        };
        self.current = to;
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_on_start_section() {
        assert_eq!(Navigator::default().current(), Section::Start);
    }

    #[test]
    fn should_report_leaving_live() {
        let mut nav = Navigator::default();
        nav.go(Section::Live);
        let t = nav.go(Section::Config);
        assert!(t.leaves(Section::Live));
        assert!(t.enters(Section::Config));
        assert_eq!(nav.current(), Section::Config);
    }

    #[test]
    fn should_treat_reselecting_as_entering() {
        let mut nav = Navigator::default();
        nav.go(Section::Live);
        let t = nav.go(Section::Live);
        assert!(t.enters(Section::Live));
        assert!(!t.leaves(Section::Live));
    }
}
