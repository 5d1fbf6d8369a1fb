use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked work item. The `id` and `created_at` fields are assigned
/// once at creation and never change afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Allocate a new ticket from caller-supplied content, stamping a
    /// fresh v4 UUID and the current time.
    pub fn create(draft: TicketDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            status: draft.status,
            created_at: Utc::now(),
        }
    }

    /// Overwrite the mutable fields in place. `id` and `created_at`
    /// are untouched.
    pub fn apply(&mut self, draft: TicketDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.status = draft.status;
    }
}

/// Short projection returned by list views. Omits the description.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

impl From<&Ticket> for TicketSummary {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            created_at: ticket.created_at,
            status: ticket.status.clone(),
        }
    }
}

/// Caller-supplied ticket content, used both to create a ticket and to
/// overwrite the mutable fields of an existing one.
#[derive(Clone, Debug)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub status: String,
}

impl TicketDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_unique_ids() {
        let a = Ticket::create(TicketDraft::new("A", "first", "open"));
        let b = Ticket::create(TicketDraft::new("B", "second", "open"));

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn apply_preserves_identity() {
        let mut ticket = Ticket::create(TicketDraft::new("Before", "old", "open"));
        let id = ticket.id.clone();
        let created_at = ticket.created_at;

        ticket.apply(TicketDraft::new("After", "new", "resolved"));

        assert_eq!(ticket.id, id);
        assert_eq!(ticket.created_at, created_at);
        assert_eq!(ticket.title, "After");
        assert_eq!(ticket.description, "new");
        assert_eq!(ticket.status, "resolved");
    }

    #[test]
    fn summary_omits_description() {
        let ticket = Ticket::create(TicketDraft::new("A", "hidden", "open"));
        let json = serde_json::to_value(TicketSummary::from(&ticket)).unwrap();

        assert!(json.get("description").is_none());
        assert_eq!(json["id"], ticket.id.as_str());
        assert_eq!(json["title"], "A");
        assert_eq!(json["status"], "open");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn ticket_serializes_created_at_as_camel_case_string() {
        let ticket = Ticket::create(TicketDraft::new("A", "B", "open"));
        let json = serde_json::to_value(&ticket).unwrap();

        assert!(json["createdAt"].is_string());
        assert!(json.get("created_at").is_none());
    }
}
