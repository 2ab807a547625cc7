//! Voicemail activity screen
//!
//! A fixed contact sidebar on the left, a tab strip over the content area
//! and the floating contacts panel for switching the selected contact.

use app_core::crm::{contacts, voicemails, Contact, Voicemail};
use app_state::PanelConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::panel::{ContactsPanel, PanelError, PanelEvent, PanelLayout, PanelPhase};

/// Contact selected when the screen first opens
pub const DEFAULT_CONTACT_ID: &str = "1";

/// Content tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VoicemailTab {
    /// Voicemail list
    #[default]
    Voicemails,
    /// Task list
    Tasks,
    /// Notes
    Notes,
    /// Users
    Users,
    /// Settings
    Settings,
    /// Help
    Help,
}

impl VoicemailTab {
    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            VoicemailTab::Voicemails => "Voicemails",
            VoicemailTab::Tasks => "Tasks",
            VoicemailTab::Notes => "Notes",
            VoicemailTab::Users => "Users",
            VoicemailTab::Settings => "Settings",
            VoicemailTab::Help => "Help",
        }
    }

    /// Tabs in strip order
    pub fn all() -> [VoicemailTab; 6] {
        [
            VoicemailTab::Voicemails,
            VoicemailTab::Tasks,
            VoicemailTab::Notes,
            VoicemailTab::Users,
            VoicemailTab::Settings,
            VoicemailTab::Help,
        ]
    }
}

/// What the content area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabContent<'a> {
    /// Voicemail cards
    Voicemails(&'a [Voicemail]),
    /// Placeholder text
    Empty(String),
}

/// Voicemail screen state
#[derive(Debug)]
pub struct VoicemailScreen {
    active_tab: VoicemailTab,
    selected_contact_id: String,
    voicemails: Vec<Voicemail>,
    layout: PanelLayout,
    config: PanelConfig,
    // created on first open
    panel: Option<ContactsPanel>,
}

impl VoicemailScreen {
    /// Screen for a layout, panel not yet created
    pub fn new(layout: PanelLayout, config: PanelConfig) -> Self {
        Self {
            active_tab: VoicemailTab::default(),
            selected_contact_id: DEFAULT_CONTACT_ID.to_string(),
            voicemails: voicemails(),
            layout,
            config,
            panel: None,
        }
    }

    /// Switch content tab
    pub fn select_tab(&mut self, tab: VoicemailTab) {
        self.active_tab = tab;
    }

    /// Current content tab
    pub fn active_tab(&self) -> VoicemailTab {
        self.active_tab
    }

    /// Content for the active tab
    pub fn tab_content(&self) -> TabContent<'_> {
        match self.active_tab {
            VoicemailTab::Voicemails => TabContent::Voicemails(&self.voicemails),
            VoicemailTab::Tasks => TabContent::Empty("No tasks for this contact.".into()),
            VoicemailTab::Notes => TabContent::Empty("No notes for this contact.".into()),
            tab => TabContent::Empty(format!("{} content goes here.", tab.label())),
        }
    }

    /// Id of the contact the screen shows
    pub fn selected_contact_id(&self) -> &str {
        &self.selected_contact_id
    }

    /// The contact the screen shows
    pub fn selected_contact(&self) -> Option<Contact> {
        contacts()
            .into_iter()
            .find(|c| c.id == self.selected_contact_id)
    }

    // =========================================================================
    // Contacts panel
    // =========================================================================

    /// "Contacts" button: show the panel
    pub fn open_contacts(&mut self) {
        let (layout, config, selected) = (self.layout, &self.config, &self.selected_contact_id);
        self.panel
            .get_or_insert_with(|| {
                ContactsPanel::contacts(layout, config.clone()).with_selected(selected.clone())
            })
            .open();
    }

    /// Close the panel from code
    pub fn close_contacts(&mut self) {
        if let Some(panel) = &mut self.panel {
            panel.close();
        }
    }

    /// Tap a contact in the panel
    ///
    /// The chosen contact becomes the screen's selection and the panel
    /// closes.
    pub fn select_contact(&mut self, id: &str) -> Result<(), PanelError> {
        let panel = self.panel.as_mut().ok_or(PanelError::GestureRejected {
            phase: PanelPhase::Hidden,
        })?;
        let selected = &mut self.selected_contact_id;
        panel.select_item(id, |id| *selected = id.to_string())
    }

    /// Tap on the backdrop
    pub fn dismiss_contacts(&mut self) -> Result<(), PanelError> {
        match &mut self.panel {
            Some(panel) => panel.dismiss(),
            None => Err(PanelError::GestureRejected {
                phase: PanelPhase::Hidden,
            }),
        }
    }

    /// The panel, once created
    pub fn panel(&self) -> Option<&ContactsPanel> {
        self.panel.as_ref()
    }

    /// Mutable panel access for drag gestures and search
    pub fn panel_mut(&mut self) -> Option<&mut ContactsPanel> {
        self.panel.as_mut()
    }

    /// Whether the panel is mounted
    pub fn contacts_visible(&self) -> bool {
        self.panel.as_ref().is_some_and(|p| p.is_visible())
    }

    /// Screen size changed
    pub fn resize(&mut self, layout: PanelLayout) {
        self.layout = layout;
        if let Some(panel) = &mut self.panel {
            panel.resize(layout);
        }
    }

    /// Advance the panel fade
    pub fn tick(&mut self, dt: Duration) -> Option<PanelEvent> {
        self.panel.as_mut().and_then(|p| p.tick(dt))
    }
}
