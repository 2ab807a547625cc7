//! Screen state machines
//!
//! Each screen holds the state its host view renders and exposes the
//! handlers its controls call. Handlers that leave the screen take the
//! [`NavigationState`](crate::navigation::NavigationState) explicitly;
//! handlers that would pop up an alert return a
//! [`Notice`](crate::components::Notice) instead.

pub mod auth;
pub mod dashboard;
pub mod dialer;
pub mod leads;
pub mod settings;
pub mod voicemail;

pub use auth::{LoginScreen, SignupScreen};
pub use dashboard::{ActivityDetailScreen, DashboardScreen};
pub use dialer::DialerScreen;
pub use leads::{LeadDetailScreen, LeadListScreen};
pub use settings::{LogoutConfirmation, ProfileScreen, SettingsScreen};
pub use voicemail::{TabContent, VoicemailScreen, VoicemailTab};
