//! Core application logic for CRM Fusion
//!
//! This crate contains the domain layer shared by every screen: the
//! authentication service and its provider seam, the CRM datasets
//! (leads, contacts, voicemails, calls, activity cards) and the
//! analytics chart data.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analytics;
pub mod auth;
pub mod crm;

pub use auth::{AuthError, AuthProvider, AuthService, Credential, InMemoryAuthProvider};
