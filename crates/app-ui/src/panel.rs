//! Draggable overlay panel
//!
//! A floating list (the contacts panel on the voicemail screen) that fades in
//! over a dimmed backdrop, can be dragged anywhere by the user and closes on
//! selection or on a tap outside it.
//!
//! The panel is a five-phase state machine:
//!
//! ```text
//! Hidden -> Appearing -> Visible <-> Dragging
//!              ^            |           |
//!              |            v           v
//!              +------ Disappearing <---+
//!                           |
//!                           v
//!                        Hidden
//! ```
//!
//! Gestures are only accepted while `Visible` (or `Dragging`, for the drag
//! itself). The fade is driven by [`DraggablePanel::tick`]; when it finishes
//! hiding, the position snaps back to the centered default so the next open
//! starts clean.

use app_core::crm::{contacts, Contact};
use app_state::PanelConfig;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::time::Duration;
use thiserror::Error;

use crate::animation::{AnimatedValue, Easing, Timing};
use crate::tokens::{layout, Viewport};

/// Backdrop dimming at full opacity
pub const BACKDROP_OPACITY: f32 = 0.4;

// =============================================================================
// Geometry
// =============================================================================

/// A screen point or offset
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point {
    /// Create a point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Screen and panel dimensions used to place the panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelLayout {
    /// Screen width
    pub screen_width: f32,
    /// Screen height
    pub screen_height: f32,
    /// Width of the fixed sidebar left of the content area
    pub sidebar_width: f32,
    /// Panel width
    pub panel_width: f32,
}

impl PanelLayout {
    /// Layout for a screen size with the standard sidebar and panel widths
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            sidebar_width: layout::CONTACT_SIDEBAR_WIDTH,
            panel_width: layout::PANEL_WIDTH,
        }
    }

    /// Panel height (half the screen)
    pub fn panel_height(&self) -> f32 {
        self.screen_height / 2.0
    }

    /// Top-left corner centering the panel in the content area
    pub fn default_center(&self) -> Point {
        Point::new(
            self.sidebar_width + (self.screen_width - self.sidebar_width - self.panel_width) / 2.0,
            (self.screen_height - self.panel_height()) / 2.0,
        )
    }

    /// Clamp a top-left corner so the panel stays fully on screen
    pub fn clamp(&self, p: Point) -> Point {
        let max_x = (self.screen_width - self.panel_width).max(0.0);
        let max_y = (self.screen_height - self.panel_height()).max(0.0);
        Point::new(p.x.clamp(0.0, max_x), p.y.clamp(0.0, max_y))
    }
}

impl From<&Viewport> for PanelLayout {
    fn from(viewport: &Viewport) -> Self {
        Self::new(viewport.width, viewport.height)
    }
}

// =============================================================================
// State
// =============================================================================

/// Lifecycle phase of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PanelPhase {
    /// Not mounted
    #[default]
    Hidden,
    /// Fading in; gestures are rejected
    Appearing,
    /// Fully shown, accepting gestures
    Visible,
    /// Following the pointer
    Dragging,
    /// Fading out
    Disappearing,
}

/// Phase completion reported by [`DraggablePanel::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// Fade-in finished, panel is now `Visible`
    Shown,
    /// Fade-out finished, panel is now `Hidden`
    Hidden,
}

/// Panel errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// The panel cannot take this gesture in its current phase
    #[error("Gesture rejected while panel is {phase:?}")]
    GestureRejected {
        /// Phase at the time of the gesture
        phase: PanelPhase,
    },

    /// A drag update or release arrived with no drag in progress
    #[error("No drag in progress")]
    NotDragging,

    /// The selected id is not in the list
    #[error("Unknown item: {0}")]
    UnknownItem(String),
}

/// Result type for panel operations
pub type Result<T> = std::result::Result<T, PanelError>;

/// What a host needs to draw the panel this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelFrame {
    /// Whether the overlay is mounted at all
    pub mounted: bool,
    /// Overlay opacity
    pub opacity: f32,
    /// Backdrop dimming
    pub backdrop_opacity: f32,
    /// Top-left corner of the panel, including the entry slide
    pub translate: Point,
}

/// An entry the panel can list and select
pub trait PanelItem {
    /// Stable id
    fn id(&self) -> &str;

    /// Whether the entry matches a search query
    fn matches(&self, query: &str) -> bool;
}

impl PanelItem for Contact {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, query: &str) -> bool {
        Contact::matches(self, query)
    }
}

/// Floating, draggable, selectable list
#[derive(Debug, Clone)]
pub struct DraggablePanel<T> {
    items: Vec<T>,
    layout: PanelLayout,
    config: PanelConfig,
    phase: PanelPhase,
    position: Point,
    drag_offset: Option<Point>,
    opacity: AnimatedValue,
    selected: Option<String>,
    query: String,
}

/// The contacts panel
pub type ContactsPanel = DraggablePanel<Contact>;

impl ContactsPanel {
    /// Panel over the address book
    pub fn contacts(layout: PanelLayout, config: PanelConfig) -> Self {
        Self::new(contacts(), layout, config)
    }
}

impl<T: PanelItem> DraggablePanel<T> {
    /// Create a hidden panel positioned at the default center
    pub fn new(items: Vec<T>, layout: PanelLayout, config: PanelConfig) -> Self {
        Self {
            items,
            position: layout.default_center(),
            layout,
            config,
            phase: PanelPhase::Hidden,
            drag_offset: None,
            opacity: AnimatedValue::new(0.0),
            selected: None,
            query: String::new(),
        }
    }

    /// Start with an entry highlighted
    pub fn with_selected(mut self, id: impl Into<String>) -> Self {
        self.selected = Some(id.into());
        self
    }

    fn fade(&self) -> Timing {
        Timing::millis(self.config.fade_ms).with_easing(Easing::Ease)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Show the panel
    ///
    /// Reopening while fading out abandons that session: the position goes
    /// back to the default center and the fade reverses from where it is.
    pub fn open(&mut self) {
        match self.phase {
            PanelPhase::Hidden => {}
            PanelPhase::Disappearing => {
                self.position = self.layout.default_center();
            }
            PanelPhase::Appearing | PanelPhase::Visible | PanelPhase::Dragging => return,
        }
        self.phase = PanelPhase::Appearing;
        let fade = self.fade();
        self.opacity.animate_to(1.0, fade);
        tracing::debug!("Panel opening");
    }

    /// Hide the panel, ending any drag in progress
    pub fn close(&mut self) {
        match self.phase {
            PanelPhase::Hidden | PanelPhase::Disappearing => return,
            PanelPhase::Dragging => {
                self.drag_offset = None;
            }
            PanelPhase::Appearing | PanelPhase::Visible => {}
        }
        self.phase = PanelPhase::Disappearing;
        let fade = self.fade();
        self.opacity.animate_to(0.0, fade);
        tracing::debug!("Panel closing");
    }

    /// Tap on the backdrop outside the panel
    ///
    /// Closes without selecting anything; the current selection is kept.
    pub fn dismiss(&mut self) -> Result<()> {
        self.require(PanelPhase::Visible)?;
        self.close();
        Ok(())
    }

    /// Advance the fade; reports when a phase completes
    pub fn tick(&mut self, dt: Duration) -> Option<PanelEvent> {
        if !self.opacity.tick(dt) {
            return None;
        }
        match self.phase {
            PanelPhase::Appearing => {
                self.phase = PanelPhase::Visible;
                Some(PanelEvent::Shown)
            }
            PanelPhase::Disappearing => {
                self.phase = PanelPhase::Hidden;
                self.position = self.layout.default_center();
                self.drag_offset = None;
                tracing::debug!("Panel hidden");
                Some(PanelEvent::Hidden)
            }
            _ => None,
        }
    }

    fn require(&self, phase: PanelPhase) -> Result<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(PanelError::GestureRejected { phase: self.phase })
        }
    }

    // =========================================================================
    // Drag gesture
    // =========================================================================

    /// Pointer pressed on the panel at `pointer`
    pub fn begin_drag(&mut self, pointer: Point) -> Result<()> {
        self.require(PanelPhase::Visible)?;
        self.drag_offset = Some(pointer - self.position);
        self.phase = PanelPhase::Dragging;
        Ok(())
    }

    /// Pointer moved to `pointer`; returns the new position
    pub fn drag_move(&mut self, pointer: Point) -> Result<Point> {
        let offset = match (self.phase, self.drag_offset) {
            (PanelPhase::Dragging, Some(offset)) => offset,
            _ => return Err(PanelError::NotDragging),
        };
        let next = pointer - offset;
        self.position = if self.config.clamp_to_screen {
            self.layout.clamp(next)
        } else {
            next
        };
        Ok(self.position)
    }

    /// Pointer released; returns the final position
    pub fn end_drag(&mut self) -> Result<Point> {
        if self.phase != PanelPhase::Dragging {
            return Err(PanelError::NotDragging);
        }
        self.drag_offset = None;
        self.phase = PanelPhase::Visible;
        tracing::trace!(x = self.position.x, y = self.position.y, "Panel dropped");
        Ok(self.position)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Tap on a list entry
    ///
    /// Highlights the entry, reports it to `on_select` exactly once, then
    /// closes the panel. An unknown id changes nothing.
    pub fn select_item<F>(&mut self, id: &str, on_select: F) -> Result<()>
    where
        F: FnOnce(&str),
    {
        self.require(PanelPhase::Visible)?;
        if !self.items.iter().any(|item| item.id() == id) {
            tracing::warn!(id, "Selected id is not in the panel");
            return Err(PanelError::UnknownItem(id.to_string()));
        }
        self.selected = Some(id.to_string());
        on_select(id);
        self.close();
        Ok(())
    }

    /// Set the search query filtering the list
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current search query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Entries matching the search query, in list order
    pub fn visible_items(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| item.matches(&self.query))
            .collect()
    }

    // =========================================================================
    // Layout and output
    // =========================================================================

    /// Replace the layout
    ///
    /// A shown panel keeps its position. A hidden one is re-seeded so the
    /// next open starts at the new default center.
    pub fn resize(&mut self, layout: PanelLayout) {
        self.layout = layout;
        if self.phase == PanelPhase::Hidden {
            self.position = layout.default_center();
        }
    }

    /// Frame output for the host renderer
    pub fn frame(&self) -> PanelFrame {
        let opacity = self.opacity.value();
        PanelFrame {
            mounted: self.phase != PanelPhase::Hidden,
            opacity,
            backdrop_opacity: BACKDROP_OPACITY * opacity,
            translate: self.position + Point::new(0.0, slide_offset(opacity)),
        }
    }

    /// Current phase
    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Whether the panel is mounted
    pub fn is_visible(&self) -> bool {
        self.phase != PanelPhase::Hidden
    }

    /// Current top-left position, excluding the entry slide
    pub fn position(&self) -> Point {
        self.position
    }

    /// Pointer-to-origin offset of the drag in progress
    pub fn drag_offset(&self) -> Option<Point> {
        self.drag_offset
    }

    /// Current opacity
    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    /// Highlighted entry
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Current layout
    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    /// All entries
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

/// Vertical entry slide for a fade progress in [0, 1]
pub fn slide_offset(progress: f32) -> f32 {
    (1.0 - progress.clamp(0.0, 1.0)) * layout::PANEL_SLIDE_DISTANCE
}
