use std::sync::Arc;
use ticketd::operations::TicketService;

/// Server state shared across handlers. The ticket service is
/// constructed once at startup and injected here.
#[derive(Clone)]
pub struct AppState {
    pub tickets: Arc<TicketService>,
}

impl AppState {
    pub fn new(tickets: Arc<TicketService>) -> Self {
        Self { tickets }
    }
}
