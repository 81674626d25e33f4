//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Everything runs on a single-threaded event loop, so no port requires `Send`.

pub mod chart;
pub mod gateway;
pub mod scheduler;
pub mod theme;

pub use chart::ChartSurface;
pub use gateway::{ConfigGateway, DeviceDirectory, MessageGateway};
pub use scheduler::Scheduler;
pub use theme::ThemeEnvironment;
