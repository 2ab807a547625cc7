//! Theme broadcast for CRM Fusion
//!
//! Two fixed palettes (light and dark) plus the shared spacing and breakpoint
//! scales. A [`ThemeProvider`] owns the active theme and broadcasts it over a
//! `watch` channel so every mounted screen re-reads it when it changes.
//!
//! The active theme changes in two ways:
//! - an explicit [`ThemeProvider::toggle_theme`] from the settings screen
//! - an OS appearance change delivered through an [`AppearanceSource`]
//!
//! How the two interact is set by [`TogglePolicy`]: with `FollowSystem` every
//! OS change re-syncs the theme, with `PinManual` a manual toggle holds until
//! [`ThemeProvider::follow_system`] is called.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! assert!(theme.is_dark());
//! assert_eq!(theme.colors.background, "#121212");
//! ```

use app_state::TogglePolicy;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;

use crate::tokens::{breakpoints, spacing};

/// A color as a hex string (e.g. "#f7fafa" or "#fff")
pub type Color = String;

// =============================================================================
// Theme Definition
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    /// Get the color scheme name
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Semantic colors read by the screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Screen background
    pub background: Color,
    /// Primary text
    pub text: Color,
    /// Bottom tab bar background
    pub tab_bar_background: Color,
    /// Focused tab icon
    pub tab_bar_icon_active: Color,
    /// Unfocused tab icon
    pub tab_bar_icon_inactive: Color,
    /// Focused tab icon backdrop
    pub tab_bar_icon_background_active: Color,
    /// Unfocused tab icon backdrop
    pub tab_bar_icon_background_inactive: Color,
    /// Card/section background
    pub section_background: Color,
    /// Logout button background
    pub logout_button_background: Color,
    /// Logout button label
    pub logout_button_text: Color,
}

/// Spacing scale carried by every theme
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeSpacing {
    /// Extra small
    pub xs: f32,
    /// Small
    pub sm: f32,
    /// Medium
    pub md: f32,
    /// Large
    pub lg: f32,
    /// Extra large
    pub xl: f32,
}

impl Default for ThemeSpacing {
    fn default() -> Self {
        Self {
            xs: spacing::XS,
            sm: spacing::SM,
            md: spacing::MD,
            lg: spacing::LG,
            xl: spacing::XL,
        }
    }
}

/// Breakpoint widths carried by every theme
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeBreakpoints {
    /// Extra small phones
    pub xs: f32,
    /// Phones
    pub sm: f32,
    /// Large phones
    pub md: f32,
    /// Tablets
    pub lg: f32,
    /// Televisions
    pub tv: f32,
}

impl Default for ThemeBreakpoints {
    fn default() -> Self {
        Self {
            xs: breakpoints::XS,
            sm: breakpoints::SM,
            md: breakpoints::MD,
            lg: breakpoints::LG,
            tv: breakpoints::TV,
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Semantic colors
    pub colors: ThemeColors,
    /// Spacing scale
    pub spacing: ThemeSpacing,
    /// Breakpoint widths
    pub breakpoints: ThemeBreakpoints,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.name == ThemeName::Dark
    }
}

// =============================================================================
// Palettes
// =============================================================================

fn colors(values: [&str; 10]) -> ThemeColors {
    let [background, text, tab_bar_background, icon_active, icon_inactive, icon_bg_active, icon_bg_inactive, section_background, logout_bg, logout_text] =
        values.map(str::to_string);
    ThemeColors {
        background,
        text,
        tab_bar_background,
        tab_bar_icon_active: icon_active,
        tab_bar_icon_inactive: icon_inactive,
        tab_bar_icon_background_active: icon_bg_active,
        tab_bar_icon_background_inactive: icon_bg_inactive,
        section_background,
        logout_button_background: logout_bg,
        logout_button_text: logout_text,
    }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        colors: colors([
            "#f7fafa", "#2c3e50", "#fff", "#4CAF50", "#9E9E9E", "#E8F5E9", "#FAFAFA", "#fff",
            "#e74c3c", "#fff",
        ]),
        spacing: ThemeSpacing::default(),
        breakpoints: ThemeBreakpoints::default(),
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        colors: colors([
            "#121212", "#ffffff", "#222222", "#81C784", "#B0B0B0", "#2E7D32", "#333333",
            "#1E1E1E", "#c0392b", "#fff",
        ]),
        spacing: ThemeSpacing::default(),
        breakpoints: ThemeBreakpoints::default(),
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

// =============================================================================
// System appearance
// =============================================================================

/// OS-reported appearance preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    /// Light appearance
    Light,
    /// Dark appearance
    Dark,
    /// No preference reported
    #[default]
    NoPreference,
}

impl ColorScheme {
    /// Theme used for this appearance (no preference means light)
    pub fn theme_name(self) -> ThemeName {
        match self {
            ColorScheme::Dark => ThemeName::Dark,
            ColorScheme::Light | ColorScheme::NoPreference => ThemeName::Light,
        }
    }
}

/// Platform signal reporting the OS appearance
///
/// The receiver's current value is the appearance at subscription time.
pub trait AppearanceSource {
    /// Subscribe to appearance changes
    fn subscribe(&self) -> watch::Receiver<ColorScheme>;
}

/// Appearance source driven by the host platform
///
/// The host calls [`SystemAppearance::set`] whenever the OS reports a change.
#[derive(Debug)]
pub struct SystemAppearance {
    tx: watch::Sender<ColorScheme>,
}

impl SystemAppearance {
    /// Create a source with the appearance reported at startup
    pub fn new(initial: ColorScheme) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    /// Report a new OS appearance
    pub fn set(&self, scheme: ColorScheme) {
        self.tx.send_replace(scheme);
    }

    /// Current OS appearance
    pub fn current(&self) -> ColorScheme {
        *self.tx.borrow()
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for SystemAppearance {
    fn default() -> Self {
        Self::new(ColorScheme::NoPreference)
    }
}

impl AppearanceSource for SystemAppearance {
    fn subscribe(&self) -> watch::Receiver<ColorScheme> {
        self.tx.subscribe()
    }
}

// =============================================================================
// Theme State
// =============================================================================

/// Active theme selection and its toggle policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    theme_name: ThemeName,
    policy: TogglePolicy,
    pinned: bool,
    system: ColorScheme,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeName::Light, TogglePolicy::default())
    }
}

impl ThemeState {
    /// Create a new theme state with the given theme
    pub fn new(theme_name: ThemeName, policy: TogglePolicy) -> Self {
        Self {
            theme_name,
            policy,
            pinned: false,
            system: ColorScheme::NoPreference,
        }
    }

    /// Current theme name
    pub fn theme_name(&self) -> ThemeName {
        self.theme_name
    }

    /// Whether a manual toggle is holding the theme
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Flip the theme; pins it under [`TogglePolicy::PinManual`]
    pub fn toggle(&mut self) -> ThemeName {
        self.theme_name = self.theme_name.toggled();
        if self.policy == TogglePolicy::PinManual {
            self.pinned = true;
        }
        self.theme_name
    }

    /// Record an OS appearance change, returns whether the theme changed
    pub fn apply_system(&mut self, scheme: ColorScheme) -> bool {
        self.system = scheme;
        if self.pinned {
            return false;
        }
        let next = scheme.theme_name();
        let changed = next != self.theme_name;
        self.theme_name = next;
        changed
    }

    /// Drop a manual pin and re-sync with the last OS appearance
    pub fn follow_system(&mut self) -> bool {
        self.pinned = false;
        self.apply_system(self.system)
    }
}

// =============================================================================
// Theme Provider
// =============================================================================

struct Shared {
    state: Mutex<ThemeState>,
    tx: watch::Sender<Theme>,
}

impl Shared {
    fn update(&self, f: impl FnOnce(&mut ThemeState)) -> ThemeName {
        let mut state = self.state.lock();
        f(&mut state);
        let name = state.theme_name();
        self.tx.send_if_modified(|theme| {
            if theme.name == name {
                false
            } else {
                *theme = get_theme(name);
                true
            }
        });
        name
    }
}

/// Owns the active theme and broadcasts it to subscribers
pub struct ThemeProvider {
    shared: Arc<Shared>,
    subscription: Option<AppearanceSubscription>,
}

impl ThemeProvider {
    /// Create an unmounted provider showing the light theme
    pub fn new(policy: TogglePolicy) -> Self {
        let (tx, _) = watch::channel(light_theme());
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(ThemeState::new(ThemeName::Light, policy)),
                tx,
            }),
            subscription: None,
        }
    }

    /// Current theme snapshot
    pub fn get_theme(&self) -> Theme {
        self.shared.tx.borrow().clone()
    }

    /// Current theme name
    pub fn theme_name(&self) -> ThemeName {
        self.shared.state.lock().theme_name()
    }

    /// Flip between light and dark
    pub fn toggle_theme(&self) -> ThemeName {
        let name = self.shared.update(|state| {
            state.toggle();
        });
        tracing::info!(theme = %name, "Theme toggled");
        name
    }

    /// Apply an OS appearance change directly
    pub fn on_appearance_change(&self, scheme: ColorScheme) {
        apply_scheme(&self.shared, scheme);
    }

    /// Release a manual pin and re-sync with the OS appearance
    pub fn follow_system(&self) -> ThemeName {
        self.shared.update(|state| {
            state.follow_system();
        })
    }

    /// Whether a manual toggle is holding the theme
    pub fn is_pinned(&self) -> bool {
        self.shared.state.lock().is_pinned()
    }

    /// Subscribe to theme changes
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.shared.tx.subscribe()
    }

    /// Start following an appearance source
    ///
    /// Seeds the theme from the source's current value, then applies every
    /// later change until [`ThemeProvider::unmount`]. Mounting again replaces
    /// the previous subscription. Must be called from within a Tokio runtime.
    pub fn mount(&mut self, source: &impl AppearanceSource) {
        self.unmount();

        let mut rx = source.subscribe();
        let initial = *rx.borrow_and_update();
        apply_scheme(&self.shared, initial);

        let (stop_tx, mut stop_rx) = oneshot::channel();
        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    changed = rx.changed() => {
                        if changed.is_err() {
                            tracing::debug!("Appearance source closed");
                            break;
                        }
                        let scheme = *rx.borrow_and_update();
                        apply_scheme(&shared, scheme);
                    }
                }
            }
        });

        tracing::debug!(initial = ?initial, "Theme provider mounted");
        self.subscription = Some(AppearanceSubscription {
            stop_tx: Some(stop_tx),
            _handle: handle,
        });
    }

    /// Stop following the appearance source
    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("Theme provider unmounted");
        }
    }

    /// Whether an appearance subscription is live
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(TogglePolicy::default())
    }
}

fn apply_scheme(shared: &Shared, scheme: ColorScheme) {
    let before = shared.state.lock().theme_name();
    let after = shared.update(|state| {
        state.apply_system(scheme);
    });
    if before != after {
        tracing::info!(scheme = ?scheme, theme = %after, "Theme synced to system appearance");
    }
}

/// Handle to the appearance listener task
///
/// When dropped, the listener stops and releases its receiver.
struct AppearanceSubscription {
    stop_tx: Option<oneshot::Sender<()>>,
    _handle: JoinHandle<()>,
}

impl Drop for AppearanceSubscription {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}
