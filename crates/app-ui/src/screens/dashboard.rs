//! Dashboard and activity report screens

use app_core::analytics::{expense_statistics, pie_shares, AnalyticsRange, PieSlice};
use app_core::crm::{activity_cards, call_reasons, recent_calls, search_calls, RecentCall};
use std::time::Duration;

use crate::components::{
    sidebar_menu, AnalyticsChart, AnimatedChart, RecentCallRow, ReasonBar, SidebarDrawer,
    SidebarMenuItem, StatCard,
};
use crate::navigation::{NavigationState, Result, Route};

/// Main dashboard
#[derive(Debug, Clone)]
pub struct DashboardScreen {
    cards: Vec<StatCard>,
    reasons: Vec<ReasonBar>,
    calls: Vec<RecentCall>,
    expenses: Vec<PieSlice>,
    search: String,
    drawer: SidebarDrawer,
    chart: AnimatedChart,
}

impl DashboardScreen {
    /// Dashboard with every widget starting its entry animation
    pub fn new() -> Self {
        Self {
            cards: activity_cards().into_iter().map(StatCard::new).collect(),
            reasons: call_reasons().into_iter().map(ReasonBar::new).collect(),
            calls: recent_calls(),
            expenses: expense_statistics(),
            search: String::new(),
            drawer: SidebarDrawer::new(),
            chart: AnimatedChart::dashboard(),
        }
    }

    /// Activity cards
    pub fn cards(&self) -> &[StatCard] {
        &self.cards
    }

    /// "Reason for call" bars
    pub fn reasons(&self) -> &[ReasonBar] {
        &self.reasons
    }

    /// Activity line chart
    pub fn chart(&self) -> &AnimatedChart {
        &self.chart
    }

    /// Expense pie slices with their shares of the total
    pub fn expenses(&self) -> Vec<(&PieSlice, f64)> {
        self.expenses
            .iter()
            .zip(pie_shares(&self.expenses))
            .collect()
    }

    /// Press an activity card
    ///
    /// Returns false if no card has this id.
    pub fn press_card(&self, id: &str, nav: &mut NavigationState) -> Result<bool> {
        match self.cards.iter().find(|c| c.card.id == id) {
            Some(card) => {
                nav.navigate(card.target_route())?;
                Ok(true)
            }
            None => {
                tracing::warn!(id, "Pressed unknown activity card");
                Ok(false)
            }
        }
    }

    // =========================================================================
    // Recent calls
    // =========================================================================

    /// Set the recent-call search text
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Search text
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Recent calls matching the search text
    pub fn visible_calls(&self) -> Vec<RecentCallRow> {
        search_calls(&self.calls, &self.search)
            .into_iter()
            .cloned()
            .map(RecentCallRow::new)
            .collect()
    }

    /// Press a recent call row
    pub fn press_call(&self, id: &str, nav: &mut NavigationState) -> Result<bool> {
        match self.calls.iter().find(|c| c.id == id) {
            Some(call) => {
                nav.navigate(RecentCallRow::new(call.clone()).target_route())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // =========================================================================
    // Sidebar
    // =========================================================================

    /// Hamburger button, or tap outside the open drawer
    pub fn toggle_sidebar(&mut self) {
        self.drawer.toggle();
    }

    /// The drawer
    pub fn drawer(&self) -> &SidebarDrawer {
        &self.drawer
    }

    /// Drawer menu entries
    pub fn menu(&self) -> Vec<SidebarMenuItem> {
        sidebar_menu()
    }

    /// Press a drawer entry: close the drawer and go there
    pub fn press_menu_item(&mut self, item: &SidebarMenuItem, nav: &mut NavigationState) -> Result<()> {
        self.drawer.set_open(false);
        nav.navigate(item.route.clone())
    }

    /// Advance every animation on the screen
    pub fn tick(&mut self, dt: Duration) {
        for card in &mut self.cards {
            card.tick(dt);
        }
        for reason in &mut self.reasons {
            reason.tick(dt);
        }
        self.drawer.tick(dt);
        self.chart.tick(dt);
    }
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Activity report opened from the first dashboard card
#[derive(Debug, Clone)]
pub struct ActivityDetailScreen {
    activity_id: String,
    title: String,
    sidebar_open: bool,
    chart: AnalyticsChart,
}

impl ActivityDetailScreen {
    /// Report for an activity
    pub fn new(activity_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            activity_id: activity_id.into(),
            title: title.into(),
            sidebar_open: false,
            chart: AnalyticsChart::new(),
        }
    }

    /// Build from an `ActivityDetail` route
    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::ActivityDetail {
                activity_id,
                activity_title,
            } => Some(Self::new(activity_id.clone(), activity_title.clone())),
            _ => None,
        }
    }

    /// Activity id
    pub fn activity_id(&self) -> &str {
        &self.activity_id
    }

    /// Header title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Hamburger button
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Whether the report sidebar is shown
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Pick a chart range
    pub fn select_range(&mut self, range: AnalyticsRange) {
        self.chart.select(range);
    }

    /// The analytics chart
    pub fn chart(&self) -> &AnalyticsChart {
        &self.chart
    }

    /// Advance the chart fade
    pub fn tick(&mut self, dt: Duration) {
        self.chart.tick(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MainTab;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn main_nav() -> NavigationState {
        let mut nav = NavigationState::new(Route::MainApp);
        nav.navigate(Route::Dashboard).unwrap();
        nav
    }

    #[test]
    fn test_card_routing() {
        let dashboard = DashboardScreen::new();
        let mut nav = main_nav();

        assert!(dashboard.press_card("1", &mut nav).unwrap());
        assert_eq!(
            nav.current_route(),
            &Route::ActivityDetail {
                activity_id: "1".into(),
                activity_title: "SMS Broadcast – Activity".into(),
            }
        );
        nav.go_back();

        dashboard.press_card("2", &mut nav).unwrap();
        assert_eq!(nav.current_route(), &Route::VoiceMailActivity);
        nav.go_back();

        dashboard.press_card("4", &mut nav).unwrap();
        assert_eq!(nav.current_route(), &Route::LeadDetail { id: "4".into() });
        nav.go_back();

        assert!(!dashboard.press_card("9", &mut nav).unwrap());
        assert_eq!(nav.current_route(), &Route::MainApp);
    }

    #[test]
    fn test_call_search_and_press() {
        let mut dashboard = DashboardScreen::new();
        assert_eq!(dashboard.visible_calls().len(), 3);

        dashboard.set_search("987");
        let rows = dashboard.visible_calls();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].badge_label(), "Inbound");

        let mut nav = main_nav();
        assert!(dashboard.press_call("2", &mut nav).unwrap());
        assert_eq!(nav.current_route(), &Route::LeadDetail { id: "2".into() });
        assert!(!dashboard.press_call("nope", &mut nav).unwrap());
    }

    #[test]
    fn test_sidebar_menu_navigation() {
        let mut dashboard = DashboardScreen::new();
        let mut nav = main_nav();

        dashboard.toggle_sidebar();
        dashboard.tick(ms(300));
        assert!(dashboard.drawer().is_open());
        assert_eq!(dashboard.drawer().translate_x(), 0.0);

        let settings = dashboard
            .menu()
            .into_iter()
            .find(|i| i.label == "Settings")
            .unwrap();
        dashboard.press_menu_item(&settings, &mut nav).unwrap();
        assert!(!dashboard.drawer().is_open());
        assert_eq!(nav.active_tab(), Some(MainTab::Settings));
    }

    #[test]
    fn test_tick_drives_widgets() {
        let mut dashboard = DashboardScreen::new();
        assert_eq!(dashboard.chart().progress(), 0.0);
        assert_eq!(dashboard.cards()[0].bar.fill_percent(), 0.0);

        dashboard.tick(ms(1500));
        assert_eq!(dashboard.chart().progress(), 1.0);
        assert!(!dashboard.cards()[0].bar.is_animating());
        assert!(!dashboard.reasons()[0].bar.is_animating());
    }

    #[test]
    fn test_expense_shares_sum_to_one() {
        let dashboard = DashboardScreen::new();
        let total: f64 = dashboard.expenses().iter().map(|(_, share)| share).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_activity_detail() {
        let route = Route::ActivityDetail {
            activity_id: "1".into(),
            activity_title: "SMS Broadcast – Activity".into(),
        };
        let mut screen = ActivityDetailScreen::from_route(&route).unwrap();
        assert_eq!(screen.title(), "SMS Broadcast – Activity");
        assert!(ActivityDetailScreen::from_route(&Route::Dashboard).is_none());

        screen.toggle_sidebar();
        assert!(screen.sidebar_open());

        screen.tick(ms(500));
        screen.select_range(AnalyticsRange::Weekly);
        assert_eq!(screen.chart().opacity(), 0.0);
        screen.tick(ms(500));
        assert_eq!(screen.chart().opacity(), 1.0);
        assert_eq!(screen.chart().range(), AnalyticsRange::Weekly);
    }
}
