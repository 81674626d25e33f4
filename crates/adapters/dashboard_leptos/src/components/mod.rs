mod config_group;
mod footer;
mod live_card;
mod loading;
mod nav;
mod theme_toggle;

pub use config_group::ConfigGroup;
pub use footer::Footer;
pub use live_card::LiveCard;
pub use loading::Loading;
pub use nav::Nav;
pub use theme_toggle::ThemeToggle;
