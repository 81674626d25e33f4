//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod config_submission;
pub mod dashboard;
pub mod device_listing;
pub mod live_session;
pub mod message_feed;
pub mod navigator;
pub mod theme;

pub use config_submission::ConfigSubmission;
pub use dashboard::Dashboard;
pub use device_listing::DeviceListing;
pub use live_session::{ChartHandle, LiveSession, LiveSettings};
pub use message_feed::MessageFeed;
pub use navigator::{Navigator, Transition};
pub use theme::ThemeController;
