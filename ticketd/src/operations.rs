use crate::domain::{Ticket, TicketDraft, TicketSummary};
use crate::ports::TicketStore;
use shared::Result;
use std::sync::Arc;
use tracing::debug;

/// Application service that orchestrates ticket operations.
/// This is the main entry point for every ticket operation in the core.
#[derive(Clone)]
pub struct TicketService {
    store: Arc<dyn TicketStore>,
}

impl TicketService {
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self { store }
    }

    /// Short projections for every ticket, in insertion order
    pub async fn list_tickets(&self) -> Result<Vec<TicketSummary>> {
        let tickets = self.store.list().await?;
        Ok(tickets.iter().map(TicketSummary::from).collect())
    }

    pub async fn ticket_by_id(&self, id: &str) -> Result<Ticket> {
        self.store.find(id).await
    }

    /// Allocate a fresh id and creation timestamp, then append to the
    /// end of the collection
    pub async fn create_ticket(&self, draft: TicketDraft) -> Result<Ticket> {
        let ticket = Ticket::create(draft);
        self.store.append(ticket.clone()).await?;
        debug!("created ticket {}", ticket.id);
        Ok(ticket)
    }

    pub async fn edit_ticket(&self, id: &str, draft: TicketDraft) -> Result<Ticket> {
        let ticket = self.store.overwrite(id, draft).await?;
        debug!("edited ticket {}", ticket.id);
        Ok(ticket)
    }

    pub async fn edit_ticket_status(&self, id: &str, status: String) -> Result<Ticket> {
        let ticket = self.store.set_status(id, status).await?;
        debug!("updated status of ticket {}", ticket.id);
        Ok(ticket)
    }

    pub async fn delete_ticket(&self, id: &str) -> Result<()> {
        self.store.remove(id).await?;
        debug!("deleted ticket {}", id);
        Ok(())
    }

    /// Load fixture tickets at startup
    pub async fn seed(&self, tickets: Vec<Ticket>) -> Result<()> {
        for ticket in tickets {
            self.store.append(ticket).await?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for TicketService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketService").finish_non_exhaustive()
    }
}
