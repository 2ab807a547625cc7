//! Settings and profile screens
//!
//! Both end with a logout button guarded by a confirmation prompt.

use app_core::auth::{AuthProvider, AuthService};

use crate::components::Notice;
use crate::navigation::{NavigationState, Route};
use crate::theme::{ThemeName, ThemeProvider};

/// Two-step logout: prompt, then confirm or cancel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogoutConfirmation {
    pending: bool,
}

impl LogoutConfirmation {
    /// Logout button; returns the confirmation prompt
    pub fn request(&mut self) -> Notice {
        self.pending = true;
        Notice::new("Logout", "Are you sure you want to logout?")
    }

    /// "Cancel" in the prompt
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Whether the prompt is showing
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// "Logout" in the prompt
    ///
    /// Signs out and resets navigation to the login screen. Does nothing
    /// unless the prompt is showing.
    pub async fn confirm<P: AuthProvider>(
        &mut self,
        auth: &AuthService<P>,
        nav: &mut NavigationState,
    ) -> Option<Notice> {
        if !std::mem::take(&mut self.pending) {
            return None;
        }
        auth.logout().await;
        nav.reset(Route::Login);
        Some(Notice::new("Logged out", "You have been logged out."))
    }
}

/// Settings tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsScreen {
    notifications_enabled: bool,
    /// Logout prompt
    pub logout: LogoutConfirmation,
}

impl SettingsScreen {
    /// Settings with notifications on
    pub fn new() -> Self {
        Self {
            notifications_enabled: true,
            logout: LogoutConfirmation::default(),
        }
    }

    /// Notifications row; returns the new setting
    pub fn toggle_notifications(&mut self) -> bool {
        self.notifications_enabled = !self.notifications_enabled;
        tracing::debug!(enabled = self.notifications_enabled, "Notifications toggled");
        self.notifications_enabled
    }

    /// Whether notifications are on
    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    /// Value text of the notifications row
    pub fn notifications_label(&self) -> &'static str {
        if self.notifications_enabled {
            "Enabled"
        } else {
            "Disabled"
        }
    }

    /// Value text of the theme row
    pub fn theme_label(&self, theme: &ThemeProvider) -> String {
        theme.theme_name().to_string()
    }

    /// Theme row; returns the new theme
    pub fn toggle_theme(&self, theme: &ThemeProvider) -> ThemeName {
        theme.toggle_theme()
    }
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Profile tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileScreen {
    /// Display name
    pub name: String,
    /// Email
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Logout prompt
    pub logout: LogoutConfirmation,
}

impl ProfileScreen {
    /// Profile card for a user
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            logout: LogoutConfirmation::default(),
        }
    }

    /// Label/value rows in display order
    pub fn rows(&self) -> [(&'static str, &str); 3] {
        [
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Phone", self.phone.as_str()),
        ]
    }
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new("Gagan Shukla", "gagan.shukla@example.com", "+91 9876543210")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::auth::InMemoryAuthProvider;
    use app_state::TogglePolicy;

    async fn signed_in() -> (AuthService<InMemoryAuthProvider>, NavigationState) {
        let auth = AuthService::new(InMemoryAuthProvider::with_account("a@b.com", "secret1"));
        auth.login("a@b.com", "secret1").await.unwrap();
        let mut nav = NavigationState::default();
        nav.navigate(Route::MainApp).unwrap();
        nav.navigate(Route::Settings).unwrap();
        (auth, nav)
    }

    #[tokio::test]
    async fn test_logout_requires_confirmation() {
        let (auth, mut nav) = signed_in().await;
        let mut screen = SettingsScreen::new();

        assert_eq!(screen.logout.confirm(&auth, &mut nav).await, None);
        assert!(auth.is_authenticated().await);

        let prompt = screen.logout.request();
        assert_eq!(prompt.message, "Are you sure you want to logout?");
        screen.logout.cancel();
        assert_eq!(screen.logout.confirm(&auth, &mut nav).await, None);
        assert_eq!(nav.active_tab(), Some(crate::navigation::MainTab::Settings));

        screen.logout.request();
        let notice = screen.logout.confirm(&auth, &mut nav).await.unwrap();
        assert_eq!(notice, Notice::new("Logged out", "You have been logged out."));
        assert!(!auth.is_authenticated().await);
        assert_eq!(nav.current_route(), &Route::Login);
        assert_eq!(nav.depth(), 1);
        assert!(!screen.logout.is_pending());
    }

    #[tokio::test]
    async fn test_profile_logout() {
        let (auth, mut nav) = signed_in().await;
        let mut screen = ProfileScreen::default();
        assert_eq!(screen.rows()[0], ("Name", "Gagan Shukla"));

        screen.logout.request();
        assert!(screen.logout.confirm(&auth, &mut nav).await.is_some());
        assert_eq!(nav.current_route(), &Route::Login);
    }

    #[test]
    fn test_rows_toggle() {
        let mut screen = SettingsScreen::new();
        assert_eq!(screen.notifications_label(), "Enabled");
        assert!(!screen.toggle_notifications());
        assert_eq!(screen.notifications_label(), "Disabled");

        let theme = ThemeProvider::new(TogglePolicy::default());
        assert_eq!(screen.theme_label(&theme), "Light");
        assert_eq!(screen.toggle_theme(&theme), ThemeName::Dark);
        assert_eq!(screen.theme_label(&theme), "Dark");
    }
}
