//! Navigation system for CRM Fusion
//!
//! An outer stack of screens (login, signup, the main tabbed app and the
//! detail screens pushed on top of it) plus the four bottom tabs living
//! inside the `MainApp` entry. Parameters travel by value inside [`Route`];
//! there are no guards, so reaching `MainApp` is decided only by whoever
//! calls [`NavigationState::navigate`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// Navigation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No route has this name
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// A required parameter was not supplied
    #[error("Route {route} requires parameter '{param}'")]
    MissingParam {
        /// Route name
        route: &'static str,
        /// Missing parameter name
        param: &'static str,
    },

    /// No navigator in the stack can handle this route
    #[error("No navigator handles route {0}")]
    Unhandled(&'static str),
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;

// =============================================================================
// Route Definitions
// =============================================================================

/// Parameters for a route addressed by name
pub type RouteParams = HashMap<String, String>;

/// All possible routes in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    // Outer stack
    /// Sign-in form
    #[default]
    Login,
    /// Account creation form
    Signup,
    /// Tabbed main application
    MainApp,
    /// Full lead list
    LeadList,
    /// One lead
    LeadDetail {
        /// Lead id
        id: String,
    },
    /// One campaign activity
    ActivityDetail {
        /// Activity card id
        #[serde(rename = "activityId")]
        activity_id: String,
        /// Activity card title
        #[serde(rename = "activityTitle")]
        activity_title: String,
    },
    /// Voicemail activity with the contacts panel
    VoiceMailActivity,
    /// Notification list
    Notifications,

    // Tabs inside MainApp
    /// Dashboard tab
    Dashboard,
    /// Dialer tab
    SmartDialer,
    /// Settings tab
    Settings,
    /// Profile tab
    Profile,
}

impl Route {
    /// Route name as used by [`NavigationState::navigate_named`]
    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Signup => "Signup",
            Route::MainApp => "MainApp",
            Route::LeadList => "LeadList",
            Route::LeadDetail { .. } => "LeadDetail",
            Route::ActivityDetail { .. } => "ActivityDetail",
            Route::VoiceMailActivity => "VoiceMailActivity",
            Route::Notifications => "Notifications",
            Route::Dashboard => "Dashboard",
            Route::SmartDialer => "SmartDialer",
            Route::Settings => "Settings",
            Route::Profile => "Profile",
        }
    }

    /// Build a route from its name and string parameters
    ///
    /// # Errors
    ///
    /// - `NavigationError::UnknownRoute` - no route has this name
    /// - `NavigationError::MissingParam` - a required parameter is absent
    pub fn from_name(name: &str, params: &RouteParams) -> Result<Self> {
        let param = |route: &'static str, key: &'static str| {
            params
                .get(key)
                .cloned()
                .ok_or(NavigationError::MissingParam { route, param: key })
        };

        let route = match name {
            "Login" => Route::Login,
            "Signup" => Route::Signup,
            "MainApp" => Route::MainApp,
            "LeadList" => Route::LeadList,
            "LeadDetail" => Route::LeadDetail {
                id: param("LeadDetail", "id")?,
            },
            "ActivityDetail" => Route::ActivityDetail {
                activity_id: param("ActivityDetail", "activityId")?,
                activity_title: param("ActivityDetail", "activityTitle")?,
            },
            "VoiceMailActivity" => Route::VoiceMailActivity,
            "Notifications" => Route::Notifications,
            "Dashboard" => Route::Dashboard,
            "SmartDialer" => Route::SmartDialer,
            "Settings" => Route::Settings,
            "Profile" => Route::Profile,
            _ => return Err(NavigationError::UnknownRoute(name.to_string())),
        };
        Ok(route)
    }

    /// The tab this route focuses, if it is a tab route
    pub fn tab(&self) -> Option<MainTab> {
        match self {
            Route::Dashboard => Some(MainTab::Dashboard),
            Route::SmartDialer => Some(MainTab::SmartDialer),
            Route::Settings => Some(MainTab::Settings),
            Route::Profile => Some(MainTab::Profile),
            _ => None,
        }
    }

    /// Screen title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Signup => "Sign Up",
            Route::MainApp | Route::Dashboard => "Dashboard",
            Route::LeadList => "Leads",
            Route::LeadDetail { .. } => "Lead Details",
            Route::ActivityDetail { .. } => "Activity",
            Route::VoiceMailActivity => "Voice Mail",
            Route::Notifications => "Notifications",
            Route::SmartDialer => "Dialer",
            Route::Settings => "Settings",
            Route::Profile => "Profile",
        }
    }
}

// =============================================================================
// Tabs
// =============================================================================

/// Bottom tabs of the main application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MainTab {
    /// Dashboard (initial tab)
    #[default]
    Dashboard,
    /// Dialer
    SmartDialer,
    /// Settings
    Settings,
    /// Profile
    Profile,
}

impl MainTab {
    /// Route focusing this tab
    pub fn route(&self) -> Route {
        match self {
            MainTab::Dashboard => Route::Dashboard,
            MainTab::SmartDialer => Route::SmartDialer,
            MainTab::Settings => Route::Settings,
            MainTab::Profile => Route::Profile,
        }
    }

    /// Get icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            MainTab::Dashboard => "home",
            MainTab::SmartDialer => "call",
            MainTab::Settings => "settings",
            MainTab::Profile => "person-circle",
        }
    }

    /// Get label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            MainTab::Dashboard => "Dashboard",
            MainTab::SmartDialer => "SmartDialer",
            MainTab::Settings => "Settings",
            MainTab::Profile => "Profile",
        }
    }

    /// Get all tabs in order
    pub fn all() -> [MainTab; 4] {
        [
            MainTab::Dashboard,
            MainTab::SmartDialer,
            MainTab::Settings,
            MainTab::Profile,
        ]
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
    /// Focused tab, for `MainApp` entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab: Option<MainTab>,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        let tab = (route == Route::MainApp).then(MainTab::default);
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
            tab,
        }
    }
}

/// Complete navigation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Stack entries (bottom to top), never empty
    entries: Vec<StackEntry>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

impl NavigationState {
    /// Create a navigation state with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root)],
        }
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> Option<&StackEntry> {
        self.entries.last()
    }

    /// Get the current (top) route
    pub fn current_route(&self) -> &Route {
        static ROOT: Route = Route::Login;
        self.entries.last().map(|e| &e.route).unwrap_or(&ROOT)
    }

    /// The route a host should render: the focused tab inside `MainApp`,
    /// otherwise the top route
    pub fn visible_route(&self) -> Route {
        match self.active_tab() {
            Some(tab) => tab.route(),
            None => self.current_route().clone(),
        }
    }

    /// Focused tab when `MainApp` is on top
    pub fn active_tab(&self) -> Option<MainTab> {
        self.entries
            .last()
            .filter(|e| e.route == Route::MainApp)
            .and_then(|e| e.tab)
    }

    /// Navigate to a route
    ///
    /// Stack routes already present with identical parameters are returned
    /// to; others are pushed. Tab routes pop back to the nearest `MainApp`
    /// entry and focus the tab there.
    ///
    /// # Errors
    ///
    /// - `NavigationError::Unhandled` - a tab route with no `MainApp` entry
    pub fn navigate(&mut self, route: Route) -> Result<()> {
        if let Some(tab) = route.tab() {
            let index = self
                .entries
                .iter()
                .rposition(|e| e.route == Route::MainApp)
                .ok_or_else(|| {
                    tracing::error!(route = route.name(), "No navigator handles route");
                    NavigationError::Unhandled(route.name())
                })?;
            self.entries.truncate(index + 1);
            if let Some(entry) = self.entries.last_mut() {
                entry.tab = Some(tab);
            }
            tracing::debug!(tab = tab.label(), "Focused tab");
            return Ok(());
        }

        if let Some(index) = self.entries.iter().rposition(|e| e.route == route) {
            self.entries.truncate(index + 1);
        } else {
            self.entries.push(StackEntry::new(route));
        }
        tracing::debug!(route = self.current_route().name(), depth = self.depth(), "Navigated");
        Ok(())
    }

    /// Navigate by route name with string parameters
    ///
    /// # Errors
    ///
    /// - `NavigationError::UnknownRoute` - no route has this name
    /// - `NavigationError::MissingParam` - a required parameter is absent
    /// - `NavigationError::Unhandled` - see [`NavigationState::navigate`]
    pub fn navigate_named(&mut self, name: &str, params: &RouteParams) -> Result<()> {
        let route = Route::from_name(name, params).map_err(|e| {
            tracing::error!(name, error = %e, "Rejected navigation");
            e
        })?;
        self.navigate(route)
    }

    /// Go back (returns true if popped, false if at root)
    pub fn go_back(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Replace the whole stack with a single route
    pub fn reset(&mut self, route: Route) {
        tracing::debug!(route = route.name(), "Navigation reset");
        self.entries = vec![StackEntry::new(route)];
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> RouteParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_starts_at_login() {
        let nav = NavigationState::default();
        assert_eq!(nav.current_route(), &Route::Login);
        assert!(!nav.can_go_back());
        assert_eq!(nav.active_tab(), None);
    }

    #[test]
    fn test_login_to_main_app_focuses_dashboard() {
        let mut nav = NavigationState::default();
        nav.navigate(Route::MainApp).unwrap();
        assert_eq!(nav.active_tab(), Some(MainTab::Dashboard));
        assert_eq!(nav.visible_route(), Route::Dashboard);
    }

    #[test]
    fn test_push_and_go_back() {
        let mut nav = NavigationState::default();
        nav.navigate(Route::MainApp).unwrap();
        nav.navigate(Route::LeadDetail { id: "2".into() }).unwrap();
        assert_eq!(nav.depth(), 3);
        assert_eq!(nav.active_tab(), None);

        assert!(nav.go_back());
        assert_eq!(nav.current_route(), &Route::MainApp);
        assert!(nav.go_back());
        assert!(!nav.go_back());
    }

    #[test]
    fn test_entry_keys_unique() {
        let mut nav = NavigationState::default();
        nav.navigate(Route::LeadDetail { id: "1".into() }).unwrap();
        nav.navigate(Route::LeadDetail { id: "2".into() }).unwrap();
        let keys: std::collections::HashSet<_> = nav.entries().iter().map(|e| &e.key).collect();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_navigate_to_existing_route_pops_back() {
        let mut nav = NavigationState::default();
        nav.navigate(Route::MainApp).unwrap();
        nav.navigate(Route::LeadList).unwrap();
        nav.navigate(Route::LeadDetail { id: "1".into() }).unwrap();
        nav.navigate(Route::LeadList).unwrap();
        assert_eq!(nav.depth(), 3);
        assert_eq!(nav.current_route(), &Route::LeadList);
    }

    #[test]
    fn test_tab_route_returns_to_main_app() {
        let mut nav = NavigationState::default();
        nav.navigate(Route::MainApp).unwrap();
        nav.navigate(Route::VoiceMailActivity).unwrap();
        nav.navigate(Route::Settings).unwrap();
        assert_eq!(nav.current_route(), &Route::MainApp);
        assert_eq!(nav.active_tab(), Some(MainTab::Settings));
    }

    #[test]
    fn test_tab_route_without_main_app_is_unhandled() {
        let mut nav = NavigationState::default();
        assert_eq!(
            nav.navigate(Route::Profile),
            Err(NavigationError::Unhandled("Profile"))
        );
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_navigate_named() {
        let mut nav = NavigationState::default();
        nav.navigate_named("MainApp", &RouteParams::new()).unwrap();
        nav.navigate_named(
            "ActivityDetail",
            &params(&[("activityId", "1"), ("activityTitle", "SMS Broadcast – Activity")]),
        )
        .unwrap();
        assert_eq!(
            nav.current_route(),
            &Route::ActivityDetail {
                activity_id: "1".into(),
                activity_title: "SMS Broadcast – Activity".into(),
            }
        );
    }

    #[test]
    fn test_navigate_named_fails_fast() {
        let mut nav = NavigationState::default();
        assert_eq!(
            nav.navigate_named("QuickCompose", &RouteParams::new()),
            Err(NavigationError::UnknownRoute("QuickCompose".into()))
        );
        assert_eq!(
            nav.navigate_named("LeadDetail", &RouteParams::new()),
            Err(NavigationError::MissingParam {
                route: "LeadDetail",
                param: "id"
            })
        );
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_reset() {
        let mut nav = NavigationState::default();
        nav.navigate(Route::MainApp).unwrap();
        nav.navigate(Route::LeadList).unwrap();
        nav.reset(Route::Login);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current_route(), &Route::Login);
    }

    #[test]
    fn test_route_serialization() {
        let route = Route::ActivityDetail {
            activity_id: "1".into(),
            activity_title: "x".into(),
        };
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["route"], "ActivityDetail");
        assert_eq!(json["params"]["activityId"], "1");

        let back: Route = serde_json::from_value(json).unwrap();
        assert_eq!(back, route);
    }

    #[test]
    fn test_tab_metadata() {
        let icons: Vec<_> = MainTab::all().iter().map(|t| t.icon()).collect();
        assert_eq!(icons, vec!["home", "call", "settings", "person-circle"]);
        assert_eq!(MainTab::default(), MainTab::Dashboard);
    }
}
