//! User interface state for CRM Fusion
//!
//! This crate models the screens of the app as plain data plus explicit
//! transition functions. A host renderer calls the handlers (taps, drags,
//! `tick(dt)` once per frame) and reads back frames, styles and notices.
//!
//! # Modules
//!
//! - [`theme`] - Light/dark palettes and the theme broadcast
//! - [`tokens`] - Design tokens and responsive sizing
//! - [`animation`] - Easing curves and timed values
//! - [`navigation`] - Route graph and navigation stack
//! - [`components`] - Progress bars, cards, drawer, charts, tab bar
//! - [`panel`] - The draggable contacts overlay
//! - [`screens`] - Screen state machines
//!
//! # Example
//!
//! ```rust
//! use app_ui::panel::{ContactsPanel, PanelLayout, PanelPhase, Point};
//! use app_state::PanelConfig;
//! use std::time::Duration;
//!
//! let mut panel = ContactsPanel::contacts(PanelLayout::new(1024.0, 768.0), PanelConfig::default());
//! panel.open();
//! panel.tick(Duration::from_millis(200));
//! assert_eq!(panel.phase(), PanelPhase::Visible);
//!
//! panel.begin_drag(Point::new(500.0, 300.0)).unwrap();
//! panel.drag_move(Point::new(520.0, 280.0)).unwrap();
//! panel.end_drag().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation;
pub mod components;
pub mod navigation;
pub mod panel;
pub mod screens;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use theme::{
    dark_theme, get_theme, light_theme, AppearanceSource, ColorScheme, SystemAppearance, Theme,
    ThemeColors, ThemeName, ThemeProvider, ThemeState,
};

pub use tokens::{breakpoints, duration, hit_target, layout, spacing, Breakpoint, Viewport};

pub use animation::{AnimatedValue, Easing, Timing};

pub use navigation::{MainTab, NavigationError, NavigationState, Route, RouteParams, StackEntry};

pub use components::{completion_ratio, Notice, ProgressBar};

pub use panel::{
    ContactsPanel, DraggablePanel, PanelError, PanelEvent, PanelFrame, PanelLayout, PanelPhase,
    Point,
};
