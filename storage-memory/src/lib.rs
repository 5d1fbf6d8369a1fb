use async_trait::async_trait;
use shared::{Error, Result};
use ticketd::domain::{Ticket, TicketDraft};
use ticketd::ports::TicketStore;
use tokio::sync::RwLock;

/// In-memory ticket store. The collection is an ordered sequence and
/// insertion order is preserved except for removals. Every
/// find-then-mutate sequence runs under a single write guard, so
/// read-modify-write is atomic across concurrent requests.
#[derive(Debug, Default)]
pub struct MemoryTicketStore {
    tickets: RwLock<Vec<Ticket>>,
}

impl MemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TicketStore for MemoryTicketStore {
    async fn list(&self) -> Result<Vec<Ticket>> {
        Ok(self.tickets.read().await.clone())
    }

    async fn find(&self, id: &str) -> Result<Ticket> {
        self.tickets
            .read()
            .await
            .iter()
            .find(|ticket| ticket.id == id)
            .cloned()
            .ok_or(Error::TicketNotFound)
    }

    async fn append(&self, ticket: Ticket) -> Result<()> {
        self.tickets.write().await.push(ticket);
        Ok(())
    }

    async fn overwrite(&self, id: &str, draft: TicketDraft) -> Result<Ticket> {
        let mut tickets = self.tickets.write().await;
        let ticket = tickets
            .iter_mut()
            .find(|ticket| ticket.id == id)
            .ok_or(Error::TicketNotFound)?;
        ticket.apply(draft);
        Ok(ticket.clone())
    }

    async fn set_status(&self, id: &str, status: String) -> Result<Ticket> {
        let mut tickets = self.tickets.write().await;
        let ticket = tickets
            .iter_mut()
            .find(|ticket| ticket.id == id)
            .ok_or(Error::TicketNotFound)?;
        ticket.status = status;
        Ok(ticket.clone())
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let mut tickets = self.tickets.write().await;
        let index = tickets
            .iter()
            .position(|ticket| ticket.id == id)
            .ok_or(Error::TicketNotFound)?;
        tickets.remove(index);
        Ok(())
    }
}
