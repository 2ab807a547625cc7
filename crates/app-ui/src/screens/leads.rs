//! Lead list and lead detail screens

use app_core::crm::{find_lead, leads, Lead, LeadStatus};

use crate::components::LeadCard;
use crate::navigation::{NavigationState, Result, Route};

/// Lead list with an optional status filter
#[derive(Debug, Clone)]
pub struct LeadListScreen {
    leads: Vec<Lead>,
    filter: Option<LeadStatus>,
}

impl LeadListScreen {
    /// All leads, unfiltered
    pub fn new() -> Self {
        Self {
            leads: leads(),
            filter: None,
        }
    }

    /// Show only leads with this status (`None` shows all)
    pub fn set_filter(&mut self, status: Option<LeadStatus>) {
        self.filter = status;
    }

    /// Active filter
    pub fn filter(&self) -> Option<LeadStatus> {
        self.filter
    }

    /// Cards to render
    pub fn cards(&self) -> Vec<LeadCard> {
        self.leads
            .iter()
            .filter(|l| self.filter.map_or(true, |s| l.status == s))
            .cloned()
            .map(LeadCard::new)
            .collect()
    }

    /// Press a lead card
    ///
    /// Returns false if no lead has this id.
    pub fn open_lead(&self, id: &str, nav: &mut NavigationState) -> Result<bool> {
        match find_lead(&self.leads, id) {
            Some(lead) => {
                nav.navigate(LeadCard::new(lead.clone()).target_route())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Default for LeadListScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Single lead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadDetailScreen {
    id: String,
    lead: Option<Lead>,
}

impl LeadDetailScreen {
    /// Detail for a lead id; the lead may not exist in the list
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let lead = find_lead(&leads(), &id).cloned();
        Self { id, lead }
    }

    /// Build from a `LeadDetail` route
    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::LeadDetail { id } => Some(Self::new(id.clone())),
            _ => None,
        }
    }

    /// Requested id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The lead, if known
    pub fn lead(&self) -> Option<&Lead> {
        self.lead.as_ref()
    }

    /// Header title
    pub fn title(&self) -> String {
        match &self.lead {
            Some(lead) => lead.name.clone(),
            None => format!("Lead {}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter() {
        let mut screen = LeadListScreen::new();
        assert_eq!(screen.cards().len(), 3);

        screen.set_filter(Some(LeadStatus::Contacted));
        let cards = screen.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].lead.name, "Jessica Williams");
        assert_eq!(cards[0].status_line(), "Status: Contacted");

        screen.set_filter(None);
        assert_eq!(screen.cards().len(), 3);
    }

    #[test]
    fn test_open_lead() {
        let screen = LeadListScreen::new();
        let mut nav = NavigationState::new(Route::MainApp);
        nav.navigate(Route::LeadList).unwrap();

        assert!(screen.open_lead("2", &mut nav).unwrap());
        let detail = LeadDetailScreen::from_route(nav.current_route()).unwrap();
        assert_eq!(detail.title(), "Michael Brown");

        assert!(!screen.open_lead("42", &mut nav).unwrap());
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_detail_for_unknown_lead() {
        let detail = LeadDetailScreen::new("7");
        assert!(detail.lead().is_none());
        assert_eq!(detail.title(), "Lead 7");
    }
}
