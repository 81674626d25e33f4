//! # watchdog-domain
//!
//! Pure domain model for the WATTCHdog monitoring dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error taxonomy, timestamps
//! - Define **Devices** (monitored power meters, as reported by the backend)
//! - Define **Samples** and the bounded **rolling buffer** that backs a chart
//! - Compute **chart layout** (grid, labels, polyline) independently of any drawing surface
//! - Generate simulated power readings (**power simulator**)
//! - Hold per-device **configuration form** state and turn it into the submitted payload
//! - Define **themes**, navigable **sections**, outgoing **messages** and submit **status** labels
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser APIs.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod chart;
pub mod config_form;
pub mod device;
pub mod message;
pub mod sample;
pub mod section;
pub mod simulator;
pub mod submit;
pub mod theme;
