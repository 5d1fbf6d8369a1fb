use crate::domain::{Ticket, TicketDraft};

/// Demo tickets loaded at startup when seeding is enabled. Each gets a
/// fresh id and a startup timestamp; none of this is durable contract.
pub fn demo_tickets() -> Vec<Ticket> {
    [
        (
            "Fix Login Bug",
            "Users cannot log in with special characters in their password.",
            "open",
        ),
        (
            "Add Dark Mode",
            "Implement dark mode across the entire application UI.",
            "in progress",
        ),
        (
            "Improve Performance",
            "Optimize database queries to reduce load times.",
            "resolved",
        ),
        (
            "Update Documentation",
            "Update API documentation to include new endpoints.",
            "open",
        ),
        (
            "Redesign Homepage",
            "Create a new, modern design for the homepage.",
            "open",
        ),
        (
            "Add Multi-Language Support",
            "Support multiple languages for international users.",
            "in progress",
        ),
        (
            "Fix Notification Bugs",
            "Notifications are not being delivered to some users.",
            "open",
        ),
    ]
    .into_iter()
    .map(|(title, description, status)| Ticket::create(TicketDraft::new(title, description, status)))
    .collect()
}
