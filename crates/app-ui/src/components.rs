//! UI component library for CRM Fusion
//!
//! Components are plain structs holding their props plus whatever animation
//! state they own. A host renders them by reading the computed values
//! (fill percentages, colors, translations); animated components advance
//! when the host calls `tick(dt)`.
//!
//! # Available Components
//!
//! - [`ProgressBar`] - animated fill bar used by the cards below
//! - [`StatCard`] - dashboard activity card
//! - [`ReasonBar`] - "reason for call" percentage row
//! - [`RecentCallRow`] - recent call with a direction badge
//! - [`LeadCard`] - lead summary
//! - [`TabBar`] - themed bottom tabs
//! - [`SidebarDrawer`] - sliding dashboard menu
//! - [`AnimatedChart`] - line chart that grows in on mount
//! - [`AnalyticsChart`] - range-selectable chart with a fade
//! - [`Notice`] - blocking title/message alert

use app_core::analytics::{dashboard_activity, AnalyticsRange, ChartData};
use app_core::crm::{ActivityCard, CallDirection, CallReason, Lead, RecentCall};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::animation::{AnimatedValue, Easing, Timing};
use crate::navigation::{MainTab, Route};
use crate::theme::{Color, Theme};
use crate::tokens::{duration, layout};

// =============================================================================
// Progress
// =============================================================================

/// Fraction of `total` that `completed` represents, clamped to [0, 1]
///
/// A zero, negative or non-finite denominator yields 0.
pub fn completion_ratio(completed: f64, total: f64) -> f32 {
    if !(total.is_finite() && total > 0.0) || !completed.is_finite() {
        return 0.0;
    }
    (completed / total).clamp(0.0, 1.0) as f32
}

/// Horizontal bar whose fill animates to a completion ratio
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    ratio: f32,
    fill: AnimatedValue,
    /// Fill color
    pub color: Color,
}

impl ProgressBar {
    /// Create a bar; the fill starts at zero and animates to the ratio
    pub fn new(completed: f64, total: f64, color: impl Into<Color>) -> Self {
        let mut bar = Self {
            ratio: 0.0,
            fill: AnimatedValue::new(0.0),
            color: color.into(),
        };
        bar.start(completion_ratio(completed, total));
        bar
    }

    fn start(&mut self, ratio: f32) {
        self.ratio = ratio;
        self.fill.set(0.0);
        self.fill
            .animate_to(ratio, Timing::millis(duration::PROGRESS_FILL));
    }

    /// Update the props; a changed ratio restarts the fill from zero
    pub fn set_progress(&mut self, completed: f64, total: f64) {
        let ratio = completion_ratio(completed, total);
        if ratio != self.ratio {
            self.start(ratio);
        }
    }

    /// Advance the fill animation
    pub fn tick(&mut self, dt: Duration) {
        self.fill.tick(dt);
    }

    /// Target ratio in [0, 1]
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Current fill width as a percentage of the track
    pub fn fill_percent(&self) -> f32 {
        self.fill.value() * 100.0
    }

    /// Whether the fill is still moving
    pub fn is_animating(&self) -> bool {
        self.fill.is_animating()
    }
}

// =============================================================================
// Cards and rows
// =============================================================================

/// Dashboard activity card
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    /// Card data
    pub card: ActivityCard,
    /// Completion bar
    pub bar: ProgressBar,
}

impl StatCard {
    /// Create a card
    pub fn new(card: ActivityCard) -> Self {
        let bar = ProgressBar::new(card.completed.into(), card.total.into(), card.color.clone());
        Self { card, bar }
    }

    /// "342 Completed of 457"
    pub fn subtitle(&self) -> String {
        format!("{} Completed of {}", self.card.completed, self.card.total)
    }

    /// Where pressing the card leads
    pub fn target_route(&self) -> Route {
        match self.card.id.as_str() {
            "1" => Route::ActivityDetail {
                activity_id: self.card.id.clone(),
                activity_title: self.card.title.clone(),
            },
            "2" => Route::VoiceMailActivity,
            id => Route::LeadDetail { id: id.to_string() },
        }
    }

    /// Advance the bar animation
    pub fn tick(&mut self, dt: Duration) {
        self.bar.tick(dt);
    }
}

/// "Reason for call" row
#[derive(Debug, Clone, PartialEq)]
pub struct ReasonBar {
    /// Reason data
    pub reason: CallReason,
    /// Percentage bar
    pub bar: ProgressBar,
}

impl ReasonBar {
    /// Create a row
    pub fn new(reason: CallReason) -> Self {
        let bar = ProgressBar::new(reason.percentage.into(), 100.0, reason.color.clone());
        Self { reason, bar }
    }

    /// "87%"
    pub fn label(&self) -> String {
        format!("{}%", self.reason.percentage)
    }

    /// Advance the bar animation
    pub fn tick(&mut self, dt: Duration) {
        self.bar.tick(dt);
    }
}

/// Recent call with a direction badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentCallRow {
    /// Call data
    pub call: RecentCall,
}

impl RecentCallRow {
    /// Create a row
    pub fn new(call: RecentCall) -> Self {
        Self { call }
    }

    /// Badge background color
    pub fn badge_color(&self) -> &'static str {
        match self.call.direction {
            CallDirection::Inbound => "#4CAF50",
            CallDirection::Outbound => "#F44336",
        }
    }

    /// Badge text
    pub fn badge_label(&self) -> &'static str {
        match self.call.direction {
            CallDirection::Inbound => "Inbound",
            CallDirection::Outbound => "Outbound",
        }
    }

    /// Where pressing the row leads
    pub fn target_route(&self) -> Route {
        Route::LeadDetail {
            id: self.call.id.clone(),
        }
    }
}

/// Lead summary card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadCard {
    /// Lead data
    pub lead: Lead,
}

impl LeadCard {
    /// Create a card
    pub fn new(lead: Lead) -> Self {
        Self { lead }
    }

    /// "Status: Interested"
    pub fn status_line(&self) -> String {
        format!("Status: {}", self.lead.status)
    }

    /// "Next: Follow-up Call"
    pub fn next_line(&self) -> String {
        format!("Next: {}", self.lead.next_action)
    }

    /// Where pressing the card leads
    pub fn target_route(&self) -> Route {
        Route::LeadDetail {
            id: self.lead.id.clone(),
        }
    }
}

// =============================================================================
// Tab Bar Component
// =============================================================================

/// One rendered tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabBarItem {
    /// Tab
    pub tab: MainTab,
    /// Icon name
    pub icon: &'static str,
    /// Accessibility label (labels are not shown)
    pub accessibility_label: &'static str,
    /// Icon color
    pub icon_color: Color,
    /// Icon backdrop color
    pub background: Color,
    /// Whether this tab is focused
    pub is_active: bool,
}

/// Themed bottom tab bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabBar {
    /// Tab items
    pub items: Vec<TabBarItem>,
    /// Bar background
    pub background: Color,
}

impl TabBar {
    /// Build the tab bar for a focused tab under a theme
    pub fn new(theme: &Theme, focused: MainTab) -> Self {
        let colors = &theme.colors;
        let items = MainTab::all()
            .into_iter()
            .map(|tab| {
                let is_active = tab == focused;
                let (icon_color, background) = if is_active {
                    (&colors.tab_bar_icon_active, &colors.tab_bar_icon_background_active)
                } else {
                    (&colors.tab_bar_icon_inactive, &colors.tab_bar_icon_background_inactive)
                };
                TabBarItem {
                    tab,
                    icon: tab.icon(),
                    accessibility_label: tab.label(),
                    icon_color: icon_color.clone(),
                    background: background.clone(),
                    is_active,
                }
            })
            .collect();
        Self {
            items,
            background: colors.tab_bar_background.clone(),
        }
    }

    /// The focused item
    pub fn active(&self) -> Option<&TabBarItem> {
        self.items.iter().find(|i| i.is_active)
    }
}

// =============================================================================
// Sidebar
// =============================================================================

/// Entry in the dashboard sidebar menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarMenuItem {
    /// Label
    pub label: &'static str,
    /// Icon name
    pub icon: &'static str,
    /// Destination
    pub route: Route,
}

/// Dashboard sidebar menu entries
pub fn sidebar_menu() -> Vec<SidebarMenuItem> {
    let item = |label, icon, route| SidebarMenuItem { label, icon, route };
    vec![
        item("Voicemails", "headphones", Route::VoiceMailActivity),
        item("Manage Leads", "account-group", Route::LeadList),
        item("Notifications", "bell-outline", Route::Notifications),
        item("Settings", "cog-outline", Route::Settings),
        item("Profile", "account-circle-outline", Route::Profile),
    ]
}

/// Dashboard drawer sliding in from the left edge
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarDrawer {
    open: bool,
    translate_x: AnimatedValue,
}

impl SidebarDrawer {
    /// Create a closed drawer, parked off screen
    pub fn new() -> Self {
        Self {
            open: false,
            translate_x: AnimatedValue::new(-layout::DRAWER_WIDTH),
        }
    }

    /// Whether the drawer is (or is becoming) open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the drawer
    pub fn set_open(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        let target = if open { 0.0 } else { -layout::DRAWER_WIDTH };
        self.translate_x.animate_to(
            target,
            Timing::millis(duration::SIDEBAR_SLIDE).with_easing(Easing::Ease),
        );
    }

    /// Flip open/closed
    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    /// Horizontal offset (0 fully open, -250 fully closed)
    pub fn translate_x(&self) -> f32 {
        self.translate_x.value()
    }

    /// Whether the drawer should be drawn at all
    pub fn is_visible(&self) -> bool {
        self.open || self.translate_x.is_animating()
    }

    /// Advance the slide
    pub fn tick(&mut self, dt: Duration) {
        self.translate_x.tick(dt);
    }
}

impl Default for SidebarDrawer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Charts
// =============================================================================

/// Line chart that grows from zero to its data
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedChart {
    data: ChartData,
    progress: AnimatedValue,
}

impl AnimatedChart {
    /// Create a chart and start its growth animation
    pub fn new(data: ChartData) -> Self {
        let mut chart = Self {
            data,
            progress: AnimatedValue::new(0.0),
        };
        chart.restart();
        chart
    }

    /// The dashboard activity chart
    pub fn dashboard() -> Self {
        Self::new(dashboard_activity())
    }

    /// Replace the data and grow again from zero
    pub fn set_data(&mut self, data: ChartData) {
        self.data = data;
        self.restart();
    }

    fn restart(&mut self) {
        self.progress.set(0.0);
        self.progress.animate_to(
            1.0,
            Timing::millis(duration::CHART_GROW).with_easing(Easing::EaseOut),
        );
    }

    /// Advance the growth
    pub fn tick(&mut self, dt: Duration) {
        self.progress.tick(dt);
    }

    /// Eased growth progress in [0, 1]
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    /// Data to render this frame
    pub fn display_data(&self) -> ChartData {
        self.data.scaled(f64::from(self.progress.value()))
    }

    /// Full, unscaled data
    pub fn data(&self) -> &ChartData {
        &self.data
    }
}

/// Chart with a Daily/Weekly/Monthly/Yearly selector
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsChart {
    range: AnalyticsRange,
    opacity: AnimatedValue,
}

impl AnalyticsChart {
    /// Create a chart on the daily range, fading in
    pub fn new() -> Self {
        let mut chart = Self {
            range: AnalyticsRange::default(),
            opacity: AnimatedValue::new(0.0),
        };
        chart.fade_in();
        chart
    }

    fn fade_in(&mut self) {
        self.opacity.set(0.0);
        self.opacity.animate_to(
            1.0,
            Timing::millis(duration::CHART_FADE).with_easing(Easing::EaseInOut),
        );
    }

    /// Select a range; a new range fades in from transparent
    pub fn select(&mut self, range: AnalyticsRange) {
        if range != self.range {
            self.range = range;
            self.fade_in();
        }
    }

    /// Selected range
    pub fn range(&self) -> AnalyticsRange {
        self.range
    }

    /// Current opacity
    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    /// Data for the selected range
    pub fn data(&self) -> ChartData {
        self.range.chart_data()
    }

    /// Advance the fade
    pub fn tick(&mut self, dt: Duration) {
        self.opacity.tick(dt);
    }
}

impl Default for AnalyticsChart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Notice
// =============================================================================

/// A blocking alert with a title and message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Title line
    pub title: String,
    /// Body text
    pub message: String,
}

impl Notice {
    /// Create a notice
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
