//! Application state for CRM Fusion
//!
//! This crate holds state that outlives a single screen: the loaded
//! configuration and the call duration timer used by the dialer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod call_timer;
pub mod config;

pub use call_timer::{format_duration, CallTimer};
pub use config::{AppConfig, ConfigError, PanelConfig, TogglePolicy, ViewportConfig};
