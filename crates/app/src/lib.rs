//! # watchdog-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Scheduler` — periodic timers whose handles cancel on drop
//!   - `ChartSurface` — a chart that can take samples and repaint
//!   - `DeviceDirectory` — fetch the device list
//!   - `ConfigGateway` — submit a device configuration
//!   - `MessageGateway` — poll and send text messages
//!   - `ThemeEnvironment` — persist and apply the color theme
//! - Define **driving/inbound ports** as use-case structs:
//!   - `LiveSession` — one update loop per live chart, start/stop lifecycle
//!   - `ThemeController`, `Navigator`, and the `Dashboard` session object tying them together
//!   - `DeviceListing`, `ConfigSubmission`, `MessageFeed` — network use-cases with their degrade policy
//! - Hold the dashboard's runtime **configuration**
//!
//! ## Dependency rule
//! Depends on `watchdog-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod ports;
pub mod services;
