//! CRM Fusion
//!
//! Composition root tying the workspace crates together: configuration,
//! logging, the theme broadcast, the navigation stack and the
//! authentication service. A host creates one [`App`], mounts it against
//! the platform's appearance source and builds screens from it.

#![warn(missing_docs)]
#![warn(clippy::all)]

use anyhow::Context;
use app_core::auth::{AuthProvider, AuthService, InMemoryAuthProvider};
use app_state::config::LoggingConfig;
use app_state::AppConfig;
use app_ui::components::Notice;
use app_ui::navigation::{NavigationState, Route};
use app_ui::panel::PanelLayout;
use app_ui::screens::{LoginScreen, LogoutConfirmation, SignupScreen, VoicemailScreen};
use app_ui::theme::{AppearanceSource, ThemeProvider};
use app_ui::tokens::Viewport;
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use app_core;
pub use app_state;
pub use app_ui;

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` takes precedence over the configured filter. Fails if a
/// subscriber is already installed or the filter does not parse.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)
            .with_context(|| format!("invalid log filter {:?}", config.filter))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(config.with_target))
        .try_init()
        .context("logging already initialised")?;

    tracing::info!("Logging initialised");
    Ok(())
}

/// Application state shared by every screen
pub struct App<P: AuthProvider = InMemoryAuthProvider> {
    config: AppConfig,
    viewport: Viewport,
    theme: ThemeProvider,
    navigation: NavigationState,
    auth: AuthService<P>,
}

impl<P: AuthProvider> App<P> {
    /// Create an app on the login screen
    pub fn new(config: AppConfig, provider: P) -> Self {
        let viewport = Viewport::from(config.viewport);
        let theme = ThemeProvider::new(config.theme.toggle_policy);
        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            is_tv = viewport.is_tv,
            "App created"
        );
        Self {
            config,
            viewport,
            theme,
            navigation: NavigationState::new(Route::Login),
            auth: AuthService::new(provider),
        }
    }

    /// Create an app from a JSON configuration file
    pub async fn from_config_file(path: impl AsRef<Path>, provider: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config = AppConfig::load(path)
            .await
            .with_context(|| format!("failed to load config from {}", path.display()))?;
        Ok(Self::new(config, provider))
    }

    /// Start following the OS appearance
    ///
    /// Must be called from within a Tokio runtime.
    pub fn mount(&mut self, appearance: &impl AppearanceSource) {
        self.theme.mount(appearance);
    }

    /// Stop all background listeners
    pub fn unmount(&mut self) {
        self.theme.unmount();
    }

    /// Active configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current viewport
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Screen size or device class changed
    pub fn resize(&mut self, viewport: Viewport) {
        tracing::debug!(width = viewport.width, height = viewport.height, "Viewport resized");
        self.viewport = viewport;
    }

    /// Theme broadcast
    pub fn theme(&self) -> &ThemeProvider {
        &self.theme
    }

    /// Navigation stack
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Mutable navigation stack
    pub fn navigation_mut(&mut self) -> &mut NavigationState {
        &mut self.navigation
    }

    /// Authentication service
    pub fn auth(&self) -> &AuthService<P> {
        &self.auth
    }

    /// Voicemail screen sized for the current viewport
    pub fn voicemail_screen(&self) -> VoicemailScreen {
        VoicemailScreen::new(PanelLayout::from(&self.viewport), self.config.panel.clone())
    }

    /// Submit the login form
    pub async fn submit_login(&mut self, screen: &mut LoginScreen) -> anyhow::Result<Notice> {
        Ok(screen.submit(&self.auth, &mut self.navigation).await?)
    }

    /// Submit the signup form
    pub async fn submit_signup(&mut self, screen: &mut SignupScreen) -> anyhow::Result<Notice> {
        Ok(screen.submit(&self.auth, &mut self.navigation).await?)
    }

    /// Confirm a pending logout prompt
    pub async fn confirm_logout(&mut self, logout: &mut LogoutConfirmation) -> Option<Notice> {
        logout.confirm(&self.auth, &mut self.navigation).await
    }
}

impl App<InMemoryAuthProvider> {
    /// App with default configuration over the in-memory provider
    pub fn in_memory() -> Self {
        Self::new(AppConfig::default(), InMemoryAuthProvider::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_ui::theme::ThemeName;

    #[test]
    fn test_new_app_starts_on_login() {
        let app = App::in_memory();
        assert_eq!(app.navigation().current_route(), &Route::Login);
        assert_eq!(app.theme().theme_name(), ThemeName::Light);
        assert_eq!(app.viewport().width, 1024.0);
    }

    #[test]
    fn test_voicemail_screen_uses_viewport() {
        let mut app = App::in_memory();
        app.resize(Viewport::new(800.0, 600.0));
        let mut screen = app.voicemail_screen();
        screen.open_contacts();
        let panel = screen.panel().unwrap();
        assert_eq!(panel.layout().screen_width, 800.0);
        assert_eq!(panel.position(), PanelLayout::new(800.0, 600.0).default_center());
    }

    #[test]
    fn test_bad_log_filter_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            filter: "info,crm_fusion=loud".to_string(),
            with_target: true,
        };
        assert!(init_logging(&config).is_err());
    }
}
