use crate::domain::{Ticket, TicketDraft};
use async_trait::async_trait;
use shared::Result;

// Ports are the pluggable extension points for ticket storage backends

/// Port for the ordered ticket collection
#[async_trait]
pub trait TicketStore: Send + Sync + 'static {
    /// Snapshot of every ticket, in insertion order
    async fn list(&self) -> Result<Vec<Ticket>>;
    /// Full record for `id`, or `Error::TicketNotFound`
    async fn find(&self, id: &str) -> Result<Ticket>;
    /// Append a freshly created ticket to the end of the collection
    async fn append(&self, ticket: Ticket) -> Result<()>;
    /// Overwrite title, description, and status of `id` in place
    async fn overwrite(&self, id: &str, draft: TicketDraft) -> Result<Ticket>;
    /// Overwrite only the status of `id`
    async fn set_status(&self, id: &str, status: String) -> Result<Ticket>;
    /// Remove exactly one ticket matching `id`
    async fn remove(&self, id: &str) -> Result<()>;
}
