//! CRM datasets
//!
//! Leads, contacts, voicemails, recent calls and dashboard activity cards.
//! There is no backend: every dataset is a fixed in-memory list and every
//! query is a plain filter over it.

use serde::{Deserialize, Serialize};

// =============================================================================
// Leads
// =============================================================================

/// Pipeline status of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    /// Fresh lead, not yet contacted
    #[serde(rename = "New Lead")]
    New,
    /// First contact made
    Contacted,
    /// Showed interest
    Interested,
}

impl LeadStatus {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New Lead",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Interested => "Interested",
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A sales lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Lead id
    pub id: String,
    /// Full name
    pub name: String,
    /// Pipeline status
    pub status: LeadStatus,
    /// Next planned action
    pub next_action: String,
}

impl Lead {
    fn new(id: &str, name: &str, status: LeadStatus, next_action: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            status,
            next_action: next_action.to_string(),
        }
    }
}

/// The lead list shown on the lead screen
pub fn leads() -> Vec<Lead> {
    vec![
        Lead::new("1", "Emma Johnson", LeadStatus::Interested, "Follow-up Call"),
        Lead::new("2", "Michael Brown", LeadStatus::New, "Send Email"),
        Lead::new("3", "Jessica Williams", LeadStatus::Contacted, "Schedule Meeting"),
    ]
}

/// Leads with the given status, in list order
pub fn leads_with_status(leads: &[Lead], status: LeadStatus) -> Vec<&Lead> {
    leads.iter().filter(|l| l.status == status).collect()
}

/// Look up a lead by id
pub fn find_lead<'a>(leads: &'a [Lead], id: &str) -> Option<&'a Lead> {
    leads.iter().find(|l| l.id == id)
}

// =============================================================================
// Contacts
// =============================================================================

/// An address-book contact shown in the contacts panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact id
    pub id: String,
    /// Display name
    pub name: String,
    /// Initials shown when there is no photo
    pub initials: String,
    /// Photo asset name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Contact {
    fn new(id: &str, name: &str, initials: &str, image: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            initials: initials.to_string(),
            image: image.map(str::to_string),
        }
    }

    /// Whether the name matches a search query (case-insensitive substring)
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// The address book
pub fn contacts() -> Vec<Contact> {
    vec![
        Contact::new("1", "Barbara Gordon", "BG", Some("barbara.jpg")),
        Contact::new("2", "Pepper Potts", "PP", Some("pepper.jpg")),
        Contact::new("3", "Carol Danvers", "CD", Some("carol.jpg")),
        Contact::new("4", "Scott Lang", "SL", None),
        Contact::new("5", "Natasha Romanoff", "NR", Some("natasha.jpg")),
        Contact::new("6", "Peter Parker", "PP", Some("peter.jpg")),
        Contact::new("7", "Barbara Gordon", "BG", None),
        Contact::new("8", "Paula Irving", "PI", None),
        Contact::new("9", "Harleen Quinzel", "HQ", None),
        Contact::new("10", "Lois Lane", "LL", None),
        Contact::new("11", "Tony Stark", "TS", Some("tony.jpg")),
        Contact::new("12", "Diana Prince", "DP", None),
        Contact::new("13", "Karen Starr", "KS", None),
    ]
}

// =============================================================================
// Voicemails
// =============================================================================

/// Follow-up status of a voicemail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoicemailStatus {
    /// Still being handled
    Ongoing,
    /// Handled
    Completed,
}

impl VoicemailStatus {
    /// Tag background and text colors
    pub fn tag_colors(&self) -> (&'static str, &'static str) {
        match self {
            VoicemailStatus::Completed => ("#28a745", "#fff"),
            VoicemailStatus::Ongoing => ("#ffc107", "#333"),
        }
    }
}

/// A voicemail left by a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voicemail {
    /// Voicemail id
    pub id: String,
    /// Transcribed message
    pub message: String,
    /// When it was received
    pub date: String,
    /// Detected mood
    pub mood: String,
    /// Mood emoji
    pub emoji: String,
    /// Follow-up status
    pub status: VoicemailStatus,
}

/// Voicemails for the contact shown on the voicemail screen
pub fn voicemails() -> Vec<Voicemail> {
    let entry = |id: &str, message: &str, status, emoji: &str, mood: &str| Voicemail {
        id: id.to_string(),
        message: message.to_string(),
        date: "12:34 Today".to_string(),
        mood: mood.to_string(),
        emoji: emoji.to_string(),
        status,
    };
    vec![
        entry(
            "1",
            "Barbara wishes you a happy birthday and would like to meet for lunch.",
            VoicemailStatus::Ongoing,
            "😊",
            "Cheerful",
        ),
        entry(
            "2",
            "Barbara would like you to call her back at your earliest convenience.",
            VoicemailStatus::Completed,
            "😐",
            "Neutral",
        ),
        entry(
            "3",
            "Barbara wishes you to call her back for lunch.",
            VoicemailStatus::Completed,
            "😊",
            "Cheerful",
        ),
        entry(
            "4",
            "Barbara would like you to call her back at your earliest convenience.",
            VoicemailStatus::Completed,
            "😔",
            "Upset",
        ),
    ]
}

// =============================================================================
// Calls
// =============================================================================

/// Call direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallDirection {
    /// Received call
    Inbound,
    /// Placed call
    Outbound,
}

/// An entry in the recent calls list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentCall {
    /// Call id
    pub id: String,
    /// Agent who handled the call
    pub agent: String,
    /// Remote number
    pub number: String,
    /// Direction
    pub direction: CallDirection,
    /// Date (ISO)
    pub date: String,
}

/// Recent calls on the dashboard
pub fn recent_calls() -> Vec<RecentCall> {
    let call = |id: &str, number: &str, direction, date: &str| RecentCall {
        id: id.to_string(),
        agent: "Agent Name".to_string(),
        number: number.to_string(),
        direction,
        date: date.to_string(),
    };
    vec![
        call("1", "+1 234 567 890", CallDirection::Outbound, "2023-06-01"),
        call("2", "+1 987 654 321", CallDirection::Inbound, "2023-06-02"),
        call("3", "+1 555 666 777", CallDirection::Outbound, "2023-06-03"),
    ]
}

/// Calls whose number or agent contains the query
///
/// Digits are compared with spacing removed so "234567" finds "+1 234 567 890".
pub fn search_calls<'a>(calls: &'a [RecentCall], query: &str) -> Vec<&'a RecentCall> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return calls.iter().collect();
    }
    let compact: String = query.chars().filter(|c| !c.is_whitespace()).collect();
    calls
        .iter()
        .filter(|c| {
            let number: String = c.number.chars().filter(|ch| !ch.is_whitespace()).collect();
            number.contains(&compact) || c.agent.to_lowercase().contains(&query)
        })
        .collect()
}

// =============================================================================
// Dashboard activity
// =============================================================================

/// A campaign activity card (completed of total)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCard {
    /// Card id
    pub id: String,
    /// Title
    pub title: String,
    /// Completed items
    pub completed: u32,
    /// Total items
    pub total: u32,
    /// Accent color
    pub color: String,
    /// Icon name
    pub icon: String,
}

/// Activity cards on the dashboard
pub fn activity_cards() -> Vec<ActivityCard> {
    let card = |id: &str, title: &str, color: &str, icon: &str| ActivityCard {
        id: id.to_string(),
        title: title.to_string(),
        completed: 342,
        total: 457,
        color: color.to_string(),
        icon: icon.to_string(),
    };
    vec![
        card("1", "SMS Broadcast – Activity", "#FF69B4", "chart-bar"),
        card("2", "Voice Mail – Activity", "#1E90FF", "voicemail"),
        card("3", "Inbound SMS – Activity", "#FFA500", "message-text-outline"),
        card("4", "Call Center – Activity", "#800080", "phone-dial"),
    ]
}

/// Share of calls per reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallReason {
    /// Reason id
    pub id: String,
    /// Reason label
    pub reason: String,
    /// Percentage of calls (0-100)
    pub percentage: u32,
    /// Bar color
    pub color: String,
}

/// "Reason for call" breakdown
pub fn call_reasons() -> Vec<CallReason> {
    let reason = |id: &str, label: &str, percentage, color: &str| CallReason {
        id: id.to_string(),
        reason: label.to_string(),
        percentage,
        color: color.to_string(),
    };
    vec![
        reason("1", "Product/Service Problems", 87, "#FF69B4"),
        reason("2", "Technical Issues", 67, "#FFA500"),
        reason("3", "Payment Issues", 45, "#1E90FF"),
        reason("4", "New Customer", 30, "#800080"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leads_filter_by_status() {
        let all = leads();
        let interested = leads_with_status(&all, LeadStatus::Interested);
        assert_eq!(interested.len(), 1);
        assert_eq!(interested[0].name, "Emma Johnson");
        assert_eq!(find_lead(&all, "2").map(|l| l.status), Some(LeadStatus::New));
        assert!(find_lead(&all, "99").is_none());
    }

    #[test]
    fn test_contact_ids_unique() {
        let all = contacts();
        let mut ids: Vec<_> = all.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_contact_matches() {
        let tony = &contacts()[10];
        assert!(tony.matches("stark"));
        assert!(tony.matches(""));
        assert!(!tony.matches("parker"));
    }

    #[test]
    fn test_search_calls() {
        let calls = recent_calls();
        assert_eq!(search_calls(&calls, "").len(), 3);
        let found = search_calls(&calls, "987654");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].direction, CallDirection::Inbound);
        assert!(search_calls(&calls, "000000").is_empty());
    }

    #[test]
    fn test_lead_status_serialization() {
        let json = serde_json::to_string(&LeadStatus::New).unwrap();
        assert_eq!(json, "\"New Lead\"");
        assert_eq!(LeadStatus::Contacted.to_string(), "Contacted");
    }
}
