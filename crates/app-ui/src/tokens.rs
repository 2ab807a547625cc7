//! Design tokens for CRM Fusion
//!
//! Spacing, breakpoints, animation durations, layout constants and the
//! responsive sizing helpers that scale icons, fonts and touch targets to
//! the device viewport.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in points
pub mod spacing {
    /// 4pt - Extra small
    pub const XS: f32 = 4.0;
    /// 8pt - Small
    pub const SM: f32 = 8.0;
    /// 16pt - Medium
    pub const MD: f32 = 16.0;
    /// 24pt - Large
    pub const LG: f32 = 24.0;
    /// 32pt - Extra large
    pub const XL: f32 = 32.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(XS),
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            _ => None,
        }
    }
}

// =============================================================================
// Breakpoint Tokens
// =============================================================================

/// Width class of the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Breakpoint {
    /// Below 360pt
    Xs,
    /// 360pt and up
    Sm,
    /// 600pt and up
    Md,
    /// 900pt and up
    Lg,
    /// 1200pt and up (television)
    Tv,
}

/// Breakpoint widths
pub mod breakpoints {
    /// Extra small phones
    pub const XS: f32 = 0.0;
    /// Regular phones
    pub const SM: f32 = 360.0;
    /// Large phones and small tablets
    pub const MD: f32 = 600.0;
    /// Tablets
    pub const LG: f32 = 900.0;
    /// Televisions
    pub const TV: f32 = 1200.0;

    /// Breakpoint for a window width
    pub fn current(width: f32) -> super::Breakpoint {
        if width >= TV {
            super::Breakpoint::Tv
        } else if width >= LG {
            super::Breakpoint::Lg
        } else if width >= MD {
            super::Breakpoint::Md
        } else if width >= SM {
            super::Breakpoint::Sm
        } else {
            super::Breakpoint::Xs
        }
    }
}

// =============================================================================
// Animation Tokens
// =============================================================================

/// Animation durations (in milliseconds)
pub mod duration {
    /// Contacts panel fade in/out
    pub const PANEL_FADE: u64 = 200;
    /// Sidebar drawer slide
    pub const SIDEBAR_SLIDE: u64 = 300;
    /// Analytics chart fade between ranges
    pub const CHART_FADE: u64 = 500;
    /// Progress bar fill
    pub const PROGRESS_FILL: u64 = 1000;
    /// Dashboard chart growth
    pub const CHART_GROW: u64 = 1500;
}

// =============================================================================
// Layout Tokens
// =============================================================================

/// Fixed layout dimensions
pub mod layout {
    /// Width of the voicemail screen's contact sidebar
    pub const CONTACT_SIDEBAR_WIDTH: f32 = 200.0;
    /// Width of the floating contacts panel
    pub const PANEL_WIDTH: f32 = 260.0;
    /// Width of the dashboard drawer
    pub const DRAWER_WIDTH: f32 = 250.0;
    /// Vertical distance the panel slides while fading in
    pub const PANEL_SLIDE_DISTANCE: f32 = 20.0;
    /// Height of a progress bar track
    pub const PROGRESS_HEIGHT: f32 = 6.0;
}

/// Minimum touch target sizes
pub mod hit_target {
    /// Phones and tablets (48pt)
    pub const DEFAULT: f32 = 48.0;
    /// Televisions (64pt)
    pub const TV: f32 = 64.0;
}

// =============================================================================
// Responsive sizing
// =============================================================================

/// Device window metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Window width in points
    pub width: f32,
    /// Window height in points
    pub height: f32,
    /// Running on a television
    pub is_tv: bool,
}

impl Viewport {
    /// Width of the reference phone icons are designed for
    pub const BASE_WIDTH: f32 = 375.0;
    /// Height of the reference screen fonts are designed for
    pub const BASE_HEIGHT: f32 = 680.0;

    /// Create a phone/tablet viewport
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            is_tv: false,
        }
    }

    /// Mark the viewport as a television
    pub fn with_tv(mut self, is_tv: bool) -> Self {
        self.is_tv = is_tv;
        self
    }

    /// Current width breakpoint
    pub fn breakpoint(&self) -> Breakpoint {
        if self.is_tv {
            return Breakpoint::Tv;
        }
        breakpoints::current(self.width)
    }

    /// Icon size scaled by window width, kept within 0.8x..1.5x of the base
    pub fn icon_size(&self, base: f32) -> f32 {
        let scaled = base * self.width / Self::BASE_WIDTH;
        scaled.clamp(base * 0.8, base * 1.5)
    }

    /// Font size scaled by window height
    pub fn font_size(&self, base: f32) -> f32 {
        (base * self.height / Self::BASE_HEIGHT).round()
    }

    /// Minimum touch target for this device
    pub fn touch_target(&self) -> f32 {
        if self.is_tv {
            hit_target::TV
        } else {
            hit_target::DEFAULT
        }
    }
}

impl From<app_state::ViewportConfig> for Viewport {
    fn from(config: app_state::ViewportConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            is_tv: config.is_tv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_get() {
        assert_eq!(spacing::get("xs"), Some(4.0));
        assert_eq!(spacing::get("xl"), Some(32.0));
        assert_eq!(spacing::get("2xl"), None);
    }

    #[test]
    fn test_breakpoints() {
        assert_eq!(breakpoints::current(320.0), Breakpoint::Xs);
        assert_eq!(breakpoints::current(360.0), Breakpoint::Sm);
        assert_eq!(breakpoints::current(768.0), Breakpoint::Md);
        assert_eq!(breakpoints::current(1024.0), Breakpoint::Lg);
        assert_eq!(breakpoints::current(1920.0), Breakpoint::Tv);
        assert_eq!(Viewport::new(400.0, 800.0).with_tv(true).breakpoint(), Breakpoint::Tv);
    }

    #[test]
    fn test_icon_size_clamped() {
        assert_eq!(Viewport::new(375.0, 667.0).icon_size(24.0), 24.0);
        // 24 * 200/375 = 12.8, floor is 19.2
        assert_eq!(Viewport::new(200.0, 667.0).icon_size(24.0), 24.0 * 0.8);
        assert_eq!(Viewport::new(1920.0, 1080.0).icon_size(24.0), 36.0);
    }

    #[test]
    fn test_font_size() {
        assert_eq!(Viewport::new(375.0, 680.0).font_size(16.0), 16.0);
        assert_eq!(Viewport::new(375.0, 1360.0).font_size(16.0), 32.0);
    }

    #[test]
    fn test_touch_target() {
        assert_eq!(Viewport::new(375.0, 680.0).touch_target(), 48.0);
        assert_eq!(Viewport::new(1920.0, 1080.0).with_tv(true).touch_target(), 64.0);
    }
}
